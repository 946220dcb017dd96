//! Game platform API client.
//!
//! Resolves usernames, assembles profiles from the identity, friends, and
//! thumbnail services, and checks premium membership.

use crate::UpstreamConfig;
use crate::json_models::{
    FriendCountResponse, IdentityResponse, PremiumResponse, ThumbnailResponse,
    UsernameLookupRequest, UsernameLookupResponse,
};
use async_trait::async_trait;
use cuslige_core::{UserId, UserRecord};
use cuslige_error::{HttpError, ProfileError, ProfileResult};
use cuslige_interface::ProfileSource;
use cuslige_rate_limit::RetryPolicy;
use reqwest::{Client, StatusCode, header};
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;
use tracing::{debug, error, instrument, warn};

const IDENTITY: &str = "identity";
const FRIENDS: &str = "friends";
const AVATAR: &str = "avatar";

/// HTTP client for the game platform's public API.
#[derive(Debug, Clone)]
pub struct RobloxClient {
    client: Client,
    config: UpstreamConfig,
    retry: RetryPolicy,
}

impl RobloxClient {
    /// Build a client with the configured timeout and User-Agent.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed
    /// (e.g. the TLS backend fails to initialize).
    pub fn new(config: UpstreamConfig, retry: RetryPolicy) -> Result<Self, HttpError> {
        let mut headers = header::HeaderMap::new();
        let agent = header::HeaderValue::from_str(config.user_agent())
            .map_err(|e| HttpError::new(config.users_host(), format!("Invalid User-Agent: {}", e)))?;
        headers.insert(header::USER_AGENT, agent);

        let client = Client::builder()
            .timeout(config.timeout())
            .default_headers(headers)
            .build()
            .map_err(|e| HttpError::new(config.users_host(), format!("Failed to build client: {}", e)))?;

        debug!(users_host = %config.users_host(), "Creating game platform client");
        Ok(Self {
            client,
            config,
            retry,
        })
    }

    /// Endpoint configuration.
    pub fn config(&self) -> &UpstreamConfig {
        &self.config
    }

    /// One GET returning any JSON body, failing on transport errors and non-200.
    async fn get_once(&self, url: &str) -> Result<JsonValue, HttpError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| HttpError::new(url, e.to_string()))?;

        if response.status() != StatusCode::OK {
            return Err(HttpError::unexpected_status(url, response.status().as_u16()));
        }

        response
            .json::<JsonValue>()
            .await
            .map_err(|e| HttpError::new(url, format!("Invalid JSON body: {}", e)))
    }

    /// GET with the retry policy, then decode into the expected shape.
    ///
    /// Exhausted retries are `UpstreamUnavailable`; a body that is valid JSON
    /// but the wrong shape is `MalformedResponse`.
    async fn get_json<T: DeserializeOwned>(&self, endpoint: &str, url: &str) -> ProfileResult<T> {
        let body = self
            .retry
            .run(endpoint, || self.get_once(url))
            .await
            .map_err(|e| {
                error!(endpoint, url, error = %e, "Upstream call exhausted retries");
                ProfileError::upstream(endpoint, e.message)
            })?;

        serde_json::from_value(body).map_err(|e| {
            error!(endpoint, url, error = %e, "Unexpected upstream response shape");
            ProfileError::malformed(endpoint, e.to_string())
        })
    }

    fn identity_url(&self, id: UserId) -> String {
        format!("{}/v1/users/{}", self.config.users_host(), id)
    }

    fn friends_url(&self, id: UserId) -> String {
        format!("{}/v1/users/{}/friends/count", self.config.friends_host(), id)
    }

    fn avatar_url(&self, id: UserId) -> String {
        format!(
            "{}/v1/users/avatar-headshot?userIds={}&size=420x420&format=Png",
            self.config.thumbnails_host(),
            id
        )
    }

    fn premium_url(&self, id: UserId) -> String {
        format!(
            "{}/v1/users/{}/validate-membership",
            self.config.premium_host(),
            id
        )
    }

    async fn fetch_avatar(&self, id: UserId) -> ProfileResult<String> {
        let thumbnails: ThumbnailResponse = self.get_json(AVATAR, &self.avatar_url(id)).await?;
        thumbnails
            .data
            .into_iter()
            .next()
            .and_then(|entry| entry.image_url)
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                warn!(user_id = %id, "Thumbnail response has no image URL");
                ProfileError::malformed(AVATAR, "thumbnail data array is empty")
            })
    }
}

#[async_trait]
impl ProfileSource for RobloxClient {
    #[instrument(skip(self))]
    async fn resolve_username(&self, username: &str) -> ProfileResult<UserId> {
        let url = format!("{}/v1/usernames/users", self.config.users_host());
        let request = UsernameLookupRequest {
            usernames: [username],
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "Username lookup request failed");
                ProfileError::upstream("username", e.to_string())
            })?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "Username lookup rejected");
            return Err(ProfileError::not_found(username));
        }

        let body: UsernameLookupResponse = response.json().await.map_err(|e| {
            debug!(error = %e, "Username lookup returned an unexpected body");
            ProfileError::not_found(username)
        })?;

        let id = body
            .data
            .first()
            .map(|entry| entry.id)
            .filter(|id| *id != 0)
            .ok_or_else(|| ProfileError::not_found(username))?;

        debug!(user_id = id, "Resolved username");
        Ok(UserId::new(id))
    }

    #[instrument(skip(self), fields(user_id = %id))]
    async fn fetch_profile(&self, id: UserId) -> ProfileResult<UserRecord> {
        let identity_url = self.identity_url(id);
        let friends_url = self.friends_url(id);

        let (identity, friends, avatar) = tokio::join!(
            self.get_json::<IdentityResponse>(IDENTITY, &identity_url),
            self.get_json::<FriendCountResponse>(FRIENDS, &friends_url),
            self.fetch_avatar(id),
        );
        let (identity, friends, avatar_url) = (identity?, friends?, avatar?);

        UserRecord::builder()
            .name(identity.name)
            .display_name(identity.display_name)
            .user_id(id)
            .description(identity.description)
            .created_at(identity.created)
            .friend_count(friends.count)
            .avatar_url(avatar_url)
            .build()
            .map_err(|e| ProfileError::malformed(IDENTITY, e.to_string()))
    }

    #[instrument(skip(self), fields(user_id = %id))]
    async fn fetch_premium(&self, id: UserId) -> bool {
        let url = self.premium_url(id);
        let body = match self.get_once(&url).await {
            Ok(body) => body,
            Err(e) => {
                debug!(error = %e, "Premium check failed, assuming standard user");
                return false;
            }
        };

        match serde_json::from_value::<PremiumResponse>(body) {
            Ok(premium) => premium.is_premium(),
            Err(e) => {
                debug!(error = %e, "Premium check returned an unexpected body");
                false
            }
        }
    }
}
