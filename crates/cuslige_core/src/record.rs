//! Aggregated profile record.

use crate::UserId;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Normalized profile assembled from the identity, friends, and avatar endpoints.
///
/// Records are immutable once built; a fresh fetch replaces them wholesale.
/// The serialized shape matches the documents already stored in the shared
/// blob cache, so `created` is the key on the wire and `createdAt` is
/// accepted as an alias.
///
/// # Examples
///
/// ```
/// use cuslige_core::{UserId, UserRecord};
///
/// let record = UserRecord::builder()
///     .name("builderman")
///     .display_name("builderman")
///     .user_id(UserId::new(156))
///     .created_at(Some("2006-02-27T21:06:40.3Z".to_string()))
///     .friend_count(3u64)
///     .avatar_url("https://tr.rbxcdn.com/abc/420/420/AvatarHeadshot/Png")
///     .build()
///     .unwrap();
///
/// assert_eq!(record.join_date(), Some("2006-02-27"));
/// assert_eq!(*record.friend_count(), 3);
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[serde(rename_all = "camelCase")]
#[builder(setter(into))]
pub struct UserRecord {
    /// Account username
    name: String,
    /// Display name shown on the profile
    display_name: String,
    /// Account id
    user_id: UserId,
    /// Profile description, if set
    #[builder(default)]
    #[serde(default)]
    description: Option<String>,
    /// ISO-8601 account creation timestamp
    #[builder(default)]
    #[serde(default, rename = "created", alias = "createdAt")]
    created_at: Option<String>,
    /// Number of friends
    #[serde(default)]
    friend_count: u64,
    /// Avatar headshot image URL
    avatar_url: String,
}

impl UserRecord {
    /// Start building a record.
    pub fn builder() -> UserRecordBuilder {
        UserRecordBuilder::default()
    }

    /// Date portion of the creation timestamp (`YYYY-MM-DD`).
    pub fn join_date(&self) -> Option<&str> {
        self.created_at
            .as_deref()
            .and_then(|created| created.split('T').next())
            .filter(|date| !date.is_empty())
    }

    /// Public profile page on the platform website.
    pub fn profile_url(&self) -> String {
        format!("https://www.roblox.com/users/{}/profile", self.user_id)
    }
}

/// A resolved record plus the per-request premium check.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct ProfileLookup {
    record: UserRecord,
    premium: bool,
}

impl ProfileLookup {
    /// Pair a record with its premium status.
    pub fn new(record: UserRecord, premium: bool) -> Self {
        Self { record, premium }
    }
}
