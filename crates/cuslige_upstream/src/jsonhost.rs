//! Shared JSON blob cache client.
//!
//! The whole cache lives in one remote document that is downloaded and
//! uploaded wholesale. Calls are never retried; every failure is reported as
//! `CacheUnavailable` and left to the caller to ignore.

use crate::SharedCacheConfig;
use async_trait::async_trait;
use cuslige_core::SharedBlob;
use cuslige_error::{HttpError, JsonError, ProfileError, ProfileResult};
use cuslige_interface::SharedProfileStore;
use reqwest::{Client, StatusCode, header};
use serde_json::Value as JsonValue;
use tracing::{debug, instrument, warn};

/// Client for a whole-document JSON store authorized by a bearer token.
#[derive(Clone)]
pub struct JsonHostClient {
    client: Client,
    url: String,
    token: String,
}

impl std::fmt::Debug for JsonHostClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonHostClient")
            .field("url", &self.url)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl JsonHostClient {
    /// Build a client for the configured document.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &SharedCacheConfig, token: impl Into<String>) -> Result<Self, HttpError> {
        let url = config.document_url();
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| HttpError::new(&url, format!("Failed to build client: {}", e)))?;

        debug!(url = %url, "Creating shared cache client");
        Ok(Self {
            client,
            url,
            token: token.into(),
        })
    }

    /// Document URL.
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SharedProfileStore for JsonHostClient {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_all(&self) -> ProfileResult<SharedBlob> {
        let response = self
            .client
            .get(&self.url)
            .header(header::AUTHORIZATION, &self.token)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Shared cache GET failed");
                ProfileError::cache_unavailable(e.to_string())
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = %status, "Shared cache GET rejected");
            return Err(ProfileError::cache_unavailable(format!(
                "GET returned {}",
                status
            )));
        }

        let body: JsonValue = response.json().await.map_err(|e| {
            let err = JsonError::new(&self.url, format!("not JSON: {}", e));
            warn!(error = %err, "Shared cache GET returned an undecodable body");
            ProfileError::cache_unavailable(err.to_string())
        })?;

        let blob = SharedBlob::from_value(body).ok_or_else(|| {
            let err = JsonError::not_an_object(&self.url);
            warn!(error = %err, "Shared cache document has the wrong shape");
            ProfileError::cache_unavailable(err.to_string())
        })?;

        debug!(entries = blob.len(), "Fetched shared cache document");
        Ok(blob)
    }

    #[instrument(skip(self, blob), fields(url = %self.url, entries = blob.len()))]
    async fn replace_all(&self, blob: &SharedBlob) -> ProfileResult<()> {
        let response = self
            .client
            .put(&self.url)
            .header(header::AUTHORIZATION, &self.token)
            .json(&blob.as_value())
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Shared cache PUT failed");
                ProfileError::cache_unavailable(e.to_string())
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            warn!(status = %status, "Shared cache PUT rejected");
            return Err(ProfileError::cache_unavailable(format!(
                "PUT returned {}",
                status
            )));
        }

        debug!("Replaced shared cache document");
        Ok(())
    }
}
