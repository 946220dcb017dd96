//! Endpoint configuration for the upstream clients.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Hosts and request settings for the game platform API.
///
/// Defaults point at the public `roproxy.com` mirrors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct UpstreamConfig {
    /// Base URL of the users service (identity, username lookup)
    #[serde(default = "default_users_host")]
    users_host: String,
    /// Base URL of the friends service
    #[serde(default = "default_friends_host")]
    friends_host: String,
    /// Base URL of the thumbnails service
    #[serde(default = "default_thumbnails_host")]
    thumbnails_host: String,
    /// Base URL of the premium features service
    #[serde(default = "default_premium_host")]
    premium_host: String,
    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    user_agent: String,
    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

fn default_users_host() -> String {
    "https://users.roproxy.com".to_string()
}

fn default_friends_host() -> String {
    "https://friends.roproxy.com".to_string()
}

fn default_thumbnails_host() -> String {
    "https://thumbnails.roproxy.com".to_string()
}

fn default_premium_host() -> String {
    "https://premiumfeatures.roproxy.com".to_string()
}

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            users_host: default_users_host(),
            friends_host: default_friends_host(),
            thumbnails_host: default_thumbnails_host(),
            premium_host: default_premium_host(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl UpstreamConfig {
    /// Point every service at the same base URL (used with mock servers).
    pub fn single_host(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            users_host: base.clone(),
            friends_host: base.clone(),
            thumbnails_host: base.clone(),
            premium_host: base,
            ..Self::default()
        }
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Location of the shared JSON blob document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SharedCacheConfig {
    /// Whether the shared tier is consulted at all
    #[serde(default = "default_enabled")]
    enabled: bool,
    /// Base URL of the blob host
    #[serde(default = "default_blob_host")]
    host: String,
    /// Document name under `/api/json/`
    #[serde(default = "default_bucket")]
    bucket: String,
    /// Per-request timeout (seconds)
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

fn default_enabled() -> bool {
    true
}

fn default_blob_host() -> String {
    "https://jsonhost.com".to_string()
}

fn default_bucket() -> String {
    "mason".to_string()
}

impl Default for SharedCacheConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            host: default_blob_host(),
            bucket: default_bucket(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl SharedCacheConfig {
    /// Config for an explicit host and bucket.
    pub fn new(host: impl Into<String>, bucket: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            bucket: bucket.into(),
            ..Self::default()
        }
    }

    /// Full document URL.
    pub fn document_url(&self) -> String {
        format!("{}/api/json/{}", self.host.trim_end_matches('/'), self.bucket)
    }

    /// Per-request timeout.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
