//! Profile aggregation pipeline.
//!
//! request -> resolve id -> local cache -> shared cache -> upstream fan-out
//! -> populate both tiers -> caller.

use cuslige_cache::ProfileCache;
use cuslige_core::{ProfileLookup, SharedBlob, UserId, UserRecord};
use cuslige_error::{ProfileError, ProfileResult};
use cuslige_interface::{ProfileSource, SharedProfileStore};
use cuslige_rate_limit::{ConcurrencyGate, GatePermit};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Resolves usernames to profiles through both cache tiers and the upstream API.
///
/// [`resolve_profile`](Self::resolve_profile) and [`lookup`](Self::lookup)
/// each hold one [`ConcurrencyGate`] permit for their whole duration; the
/// lower-level steps they are built from are ungated.
///
/// There is no per-key coordination: two concurrent misses for the same id
/// both fetch upstream and both write, last write wins.
pub struct Aggregator {
    source: Arc<dyn ProfileSource>,
    shared: Option<Arc<dyn SharedProfileStore>>,
    cache: Arc<ProfileCache>,
    gate: ConcurrencyGate,
}

impl Aggregator {
    /// Create an aggregator without a shared cache tier.
    pub fn new(
        source: Arc<dyn ProfileSource>,
        cache: Arc<ProfileCache>,
        gate: ConcurrencyGate,
    ) -> Self {
        Self {
            source,
            shared: None,
            cache,
            gate,
        }
    }

    /// Add the remote shared cache tier.
    pub fn with_shared_store(mut self, store: Arc<dyn SharedProfileStore>) -> Self {
        self.shared = Some(store);
        self
    }

    /// Local cache service.
    pub fn cache(&self) -> &Arc<ProfileCache> {
        &self.cache
    }

    /// Admission gate.
    pub fn gate(&self) -> &ConcurrencyGate {
        &self.gate
    }

    /// Whether a shared cache tier is configured.
    pub fn has_shared_store(&self) -> bool {
        self.shared.is_some()
    }

    /// Resolve a username to its profile record.
    #[instrument(skip(self))]
    pub async fn resolve_profile(&self, username: &str) -> ProfileResult<UserRecord> {
        let _permit = self.admit().await?;
        let id = self.resolve_user_id(username).await?;
        self.profile_for_id(id).await
    }

    /// Resolve a username and check premium status under one gate permit.
    ///
    /// This is the entry point for presentation adapters.
    #[instrument(skip(self))]
    pub async fn lookup(&self, username: &str) -> ProfileResult<ProfileLookup> {
        let _permit = self.admit().await?;
        let id = self.resolve_user_id(username).await?;
        let record = self.profile_for_id(id).await?;
        let premium = self.source.fetch_premium(id).await;
        debug!(user_id = %id, premium, "Lookup complete");
        Ok(ProfileLookup::new(record, premium))
    }

    /// Translate a username into an id.
    ///
    /// Purely numeric input is taken as the id itself without any network
    /// call; a bogus id is caught later when the profile fetch fails. Zero
    /// and ids that overflow are `NotFound` outright.
    pub async fn resolve_user_id(&self, username: &str) -> ProfileResult<UserId> {
        // Surrounding whitespace is dropped, so " 156 " is id 156, not a username.
        let username = username.trim();
        if UserId::is_numeric(username) {
            return match UserId::from_numeric(username) {
                Some(id) => {
                    debug!(user_id = %id, "Numeric username used as id");
                    Ok(id)
                }
                None => {
                    debug!(%username, "Numeric username is not a valid id");
                    Err(ProfileError::not_found(username))
                }
            };
        }
        if username.is_empty() {
            return Err(ProfileError::not_found(username));
        }
        self.source.resolve_username(username).await
    }

    /// Cache lookups and upstream fetch for a known id (steps 2-5).
    #[instrument(skip(self), fields(user_id = %id))]
    pub async fn profile_for_id(&self, id: UserId) -> ProfileResult<UserRecord> {
        if let Some(record) = self.cache.get(id) {
            debug!(origin = "local", "Profile served from local cache");
            return Ok(record);
        }

        let blob = self.read_shared().await;
        if let Some(record) = blob.as_ref().and_then(|blob| blob.record(id)) {
            debug!(origin = "shared", "Profile served from shared cache");
            self.cache.put(id, record.clone());
            return Ok(record);
        }

        let record = self.source.fetch_profile(id).await.map_err(|e| {
            warn!(error = %e, "Upstream profile fetch failed");
            e
        })?;
        info!(origin = "upstream", name = %record.name(), "Fetched profile from upstream");

        self.cache.put(id, record.clone());
        self.write_shared(blob, &record).await;
        Ok(record)
    }

    async fn admit(&self) -> ProfileResult<GatePermit> {
        self.gate
            .acquire()
            .await
            .map_err(|e| ProfileError::upstream("gate", e.to_string()))
    }

    /// Read the shared document. `None` means "no shared tier" or "unavailable".
    async fn read_shared(&self) -> Option<SharedBlob> {
        let store = self.shared.as_ref()?;
        match store.fetch_all().await {
            Ok(blob) => Some(blob),
            Err(e) => {
                // Ignored: degrade to upstream-only for this resolution.
                warn!(error = %e, "Shared cache read failed, continuing without it");
                None
            }
        }
    }

    /// Merge `record` into the document read earlier (or an empty one) and upload it.
    async fn write_shared(&self, blob: Option<SharedBlob>, record: &UserRecord) {
        let Some(store) = self.shared.as_ref() else {
            return;
        };
        let mut blob = blob.unwrap_or_default();
        blob.insert_record(record);
        if let Err(e) = store.replace_all(&blob).await {
            // Ignored: the shared tier is best-effort.
            warn!(error = %e, "Shared cache write failed, entry not shared");
        }
    }
}
