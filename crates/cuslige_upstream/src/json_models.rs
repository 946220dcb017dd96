//! Wire shapes of the game platform API responses.

use serde::{Deserialize, Serialize};

/// Body of `POST /v1/usernames/users`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct UsernameLookupRequest<'a> {
    pub usernames: [&'a str; 1],
}

/// Response of `POST /v1/usernames/users`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UsernameLookupResponse {
    #[serde(default)]
    pub data: Vec<UsernameLookupEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UsernameLookupEntry {
    pub id: u64,
}

/// Response of `GET /v1/users/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IdentityResponse {
    pub name: String,
    pub display_name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created: Option<String>,
}

/// Response of `GET /v1/users/{id}/friends/count`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct FriendCountResponse {
    #[serde(default)]
    pub count: u64,
}

/// Response of `GET /v1/users/avatar-headshot`.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ThumbnailResponse {
    #[serde(default)]
    pub data: Vec<ThumbnailEntry>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ThumbnailEntry {
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Response of `GET /v1/users/{id}/validate-membership`.
///
/// The live service answers with a bare boolean; the object form is
/// accepted as well.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum PremiumResponse {
    Bare(bool),
    Object {
        #[serde(default, rename = "isPremium")]
        is_premium: bool,
    },
}

impl PremiumResponse {
    pub fn is_premium(&self) -> bool {
        match self {
            PremiumResponse::Bare(flag) => *flag,
            PremiumResponse::Object { is_premium } => *is_premium,
        }
    }
}
