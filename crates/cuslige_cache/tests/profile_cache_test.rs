//! Tests for the local profile cache.

use cuslige_cache::{
    MIN_SWEEP_PERIOD, ProfileCache, ProfileCacheConfig, ProfileCacheConfigBuilder, spawn_sweeper,
};
use cuslige_core::{UserId, UserRecord};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::advance;

fn record(id: u64, name: &str, friends: u64) -> UserRecord {
    UserRecord::builder()
        .name(name)
        .display_name(name)
        .user_id(UserId::new(id))
        .friend_count(friends)
        .avatar_url(format!("https://tr.rbxcdn.com/{id}.png"))
        .build()
        .unwrap()
}

#[tokio::test(start_paused = true)]
async fn test_cache_put_and_get() {
    let cache = ProfileCache::default();
    cache.put(UserId::new(156), record(156, "builderman", 3));

    let hit = cache.get(UserId::new(156)).unwrap();
    assert_eq!(hit.name(), "builderman");
    assert_eq!(*hit.friend_count(), 3);
}

#[tokio::test(start_paused = true)]
async fn test_cache_miss() {
    let cache = ProfileCache::default();
    assert!(cache.get(UserId::new(1)).is_none());
}

#[tokio::test(start_paused = true)]
async fn test_entry_within_ttl_is_served() {
    let cache = ProfileCache::default();
    cache.put(UserId::new(156), record(156, "builderman", 3));

    advance(Duration::from_secs(250)).await;
    assert!(cache.get(UserId::new(156)).is_some());

    // Exactly at the TTL is still fresh.
    advance(Duration::from_secs(50)).await;
    assert!(cache.get(UserId::new(156)).is_some());
}

#[tokio::test(start_paused = true)]
async fn test_expired_entry_is_evicted_on_read() {
    let cache = ProfileCache::default();
    cache.put(UserId::new(156), record(156, "builderman", 3));

    advance(Duration::from_secs(310)).await;
    assert!(cache.get(UserId::new(156)).is_none());
    assert_eq!(cache.len(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_put_overwrites_and_refreshes_timestamp() {
    let cache = ProfileCache::default();
    cache.put(UserId::new(156), record(156, "builderman", 3));

    advance(Duration::from_secs(200)).await;
    cache.put(UserId::new(156), record(156, "builderman", 4));

    advance(Duration::from_secs(200)).await;
    let hit = cache.get(UserId::new(156)).unwrap();
    assert_eq!(*hit.friend_count(), 4);
    assert_eq!(cache.len(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_sweep_removes_only_stale_entries() {
    let cache = ProfileCache::default();
    cache.put(UserId::new(1), record(1, "old", 0));

    advance(Duration::from_secs(200)).await;
    cache.put(UserId::new(2), record(2, "young", 0));

    advance(Duration::from_secs(150)).await;
    let removed = cache.sweep();

    assert_eq!(removed, 1);
    assert_eq!(cache.len(), 1);
    assert!(cache.get(UserId::new(2)).is_some());
}

#[tokio::test(start_paused = true)]
async fn test_disabled_cache_stores_nothing() {
    let config = ProfileCacheConfigBuilder::default()
        .ttl_secs(300)
        .sweep_interval_secs(300)
        .enabled(false)
        .build()
        .unwrap();
    let cache = ProfileCache::new(config);

    cache.put(UserId::new(1), record(1, "roblox", 0));
    assert!(cache.is_empty());
    assert!(cache.get(UserId::new(1)).is_none());
}

#[tokio::test(start_paused = true)]
async fn test_clear_empties_cache() {
    let cache = ProfileCache::default();
    cache.put(UserId::new(1), record(1, "a", 0));
    cache.put(UserId::new(2), record(2, "b", 0));

    cache.clear();
    assert!(cache.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_sweeper_evicts_unread_entries() {
    let config = ProfileCacheConfig::default().with_ttl_secs(10);
    let cache = Arc::new(ProfileCache::new(config));
    cache.put(UserId::new(7), record(7, "written_once", 0));

    let handle = spawn_sweeper(Arc::clone(&cache), Duration::from_secs(30));

    advance(Duration::from_secs(31)).await;
    tokio::time::sleep(Duration::from_millis(1)).await;

    assert_eq!(cache.len(), 0);
    handle.abort();
}

#[tokio::test(start_paused = true)]
async fn test_zero_sweep_period_is_raised_to_minimum() {
    let config = ProfileCacheConfig::default().with_ttl_secs(0);
    let cache = Arc::new(ProfileCache::new(config));
    cache.put(UserId::new(8), record(8, "short_lived", 0));

    let handle = spawn_sweeper(Arc::clone(&cache), Duration::ZERO);

    advance(MIN_SWEEP_PERIOD + Duration::from_millis(1)).await;
    tokio::time::sleep(Duration::from_millis(1)).await;

    assert_eq!(cache.len(), 0);
    handle.abort();
}

#[test]
fn test_default_config_matches_five_minute_ttl() {
    let config = ProfileCacheConfig::default();
    assert_eq!(config.ttl(), Duration::from_secs(300));
    assert_eq!(config.sweep_interval(), Duration::from_secs(300));
    assert!(*config.enabled());
}
