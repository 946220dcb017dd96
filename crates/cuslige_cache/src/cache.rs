//! Local profile cache implementation.

use cuslige_core::{UserId, UserRecord};
use derive_getters::Getters;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;
use tokio::time::Instant;

/// Cached record with the instant it was stored.
#[derive(Debug, Clone, Getters)]
pub struct CacheEntry {
    record: UserRecord,
    stored_at: Instant,
}

impl CacheEntry {
    /// Age of this entry at `now`.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.stored_at)
    }

    /// An entry is stale once its age strictly exceeds the TTL.
    pub fn is_expired(&self, ttl: Duration, now: Instant) -> bool {
        self.age(now) > ttl
    }
}

/// Configuration for the local profile cache.
#[derive(
    Debug, Clone, Serialize, Deserialize, Getters, derive_setters::Setters, derive_builder::Builder,
)]
#[setters(prefix = "with_")]
pub struct ProfileCacheConfig {
    /// Time-to-live for cached records (seconds)
    #[serde(default = "default_ttl")]
    ttl_secs: u64,

    /// How often the background sweeper runs (seconds)
    #[serde(default = "default_sweep_interval")]
    sweep_interval_secs: u64,

    /// Whether caching is enabled
    #[serde(default = "default_enabled")]
    enabled: bool,
}

fn default_ttl() -> u64 {
    300
}

fn default_sweep_interval() -> u64 {
    300
}

fn default_enabled() -> bool {
    true
}

impl Default for ProfileCacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl(),
            sweep_interval_secs: default_sweep_interval(),
            enabled: default_enabled(),
        }
    }
}

impl ProfileCacheConfig {
    /// TTL as a duration.
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }

    /// Sweep interval as a duration.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs)
    }
}

/// In-process TTL cache of resolved profiles, keyed by user id.
///
/// Expiry is lazy on [`get`](Self::get) and eager on [`sweep`](Self::sweep);
/// the sweep bounds memory for entries that are written but never read
/// again. Nothing is persisted, so the cache is empty on process start.
///
/// # Example
///
/// ```
/// use cuslige_cache::ProfileCache;
/// use cuslige_core::{UserId, UserRecord};
///
/// let cache = ProfileCache::default();
/// let record = UserRecord::builder()
///     .name("builderman")
///     .display_name("builderman")
///     .user_id(UserId::new(156))
///     .friend_count(3u64)
///     .avatar_url("https://tr.rbxcdn.com/headshot.png")
///     .build()
///     .unwrap();
///
/// cache.put(UserId::new(156), record.clone());
/// assert_eq!(cache.get(UserId::new(156)), Some(record));
/// ```
#[derive(Debug)]
pub struct ProfileCache {
    config: ProfileCacheConfig,
    entries: Mutex<HashMap<UserId, CacheEntry>>,
}

impl ProfileCache {
    /// Create a new profile cache with configuration.
    pub fn new(config: ProfileCacheConfig) -> Self {
        tracing::debug!(
            ttl_secs = config.ttl_secs,
            sweep_interval_secs = config.sweep_interval_secs,
            enabled = config.enabled,
            "Creating new ProfileCache"
        );
        Self {
            config,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Configuration this cache was built with.
    pub fn config(&self) -> &ProfileCacheConfig {
        &self.config
    }

    /// Return the cached record if it is no older than the TTL.
    ///
    /// A stale entry is evicted on the way out.
    #[tracing::instrument(skip(self), fields(user_id = %id))]
    pub fn get(&self, id: UserId) -> Option<UserRecord> {
        if !self.config.enabled {
            tracing::debug!("Cache disabled, returning None");
            return None;
        }

        let now = Instant::now();
        let mut entries = self.entries.lock();
        let entry = entries.get(&id)?;

        if entry.is_expired(self.config.ttl(), now) {
            tracing::debug!(age = ?entry.age(now), "Cache entry expired, removing");
            entries.remove(&id);
            return None;
        }

        tracing::debug!(age = ?entry.age(now), "Cache hit");
        Some(entry.record.clone())
    }

    /// Store a record, replacing any existing entry and resetting its age.
    #[tracing::instrument(skip(self, record), fields(user_id = %id))]
    pub fn put(&self, id: UserId, record: UserRecord) {
        if !self.config.enabled {
            tracing::debug!("Cache disabled, skipping insert");
            return;
        }

        let entry = CacheEntry {
            record,
            stored_at: Instant::now(),
        };
        let mut entries = self.entries.lock();
        let replaced = entries.insert(id, entry).is_some();
        tracing::debug!(replaced, cache_size = entries.len(), "Inserted entry into cache");
    }

    /// Evict every entry older than the TTL. Returns how many were removed.
    pub fn sweep(&self) -> usize {
        let now = Instant::now();
        let ttl = self.config.ttl();
        let mut entries = self.entries.lock();
        let before = entries.len();

        entries.retain(|_, entry| !entry.is_expired(ttl, now));

        let removed = before - entries.len();
        if removed > 0 {
            tracing::info!(removed, remaining = entries.len(), "Swept expired cache entries");
        }
        removed
    }

    /// Clear all cache entries.
    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        let count = entries.len();
        entries.clear();
        tracing::info!(cleared = count, "Cleared cache");
    }

    /// Get number of cached entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl Default for ProfileCache {
    fn default() -> Self {
        Self::new(ProfileCacheConfig::default())
    }
}
