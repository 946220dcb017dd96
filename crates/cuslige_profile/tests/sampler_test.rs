//! Tests for the background sampler.

use async_trait::async_trait;
use cuslige_cache::ProfileCache;
use cuslige_core::{UserId, UserRecord};
use cuslige_error::{ProfileError, ProfileResult};
use cuslige_interface::ProfileSource;
use cuslige_profile::{Aggregator, Sampler, SamplerConfig};
use cuslige_rate_limit::ConcurrencyGate;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

#[derive(Default)]
struct CountingSource {
    fetches: AtomicUsize,
}

#[async_trait]
impl ProfileSource for CountingSource {
    async fn resolve_username(&self, username: &str) -> ProfileResult<UserId> {
        match username {
            "builderman" => Ok(UserId::new(156)),
            other => Err(ProfileError::not_found(other)),
        }
    }

    async fn fetch_profile(&self, id: UserId) -> ProfileResult<UserRecord> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        Ok(UserRecord::builder()
            .name("builderman")
            .display_name("builderman")
            .user_id(id)
            .friend_count(0u64)
            .avatar_url("https://tr.rbxcdn.com/a/420/420/AvatarHeadshot/Png")
            .build()
            .unwrap())
    }

    async fn fetch_premium(&self, _id: UserId) -> bool {
        false
    }
}

fn aggregator(source: Arc<CountingSource>) -> Arc<Aggregator> {
    Arc::new(Aggregator::new(
        source,
        Arc::new(ProfileCache::default()),
        ConcurrencyGate::new(20),
    ))
}

#[test]
fn test_default_config() {
    let config = SamplerConfig::default();
    assert!(*config.enabled());
    assert_eq!(config.interval(), Duration::from_secs(100));
    assert_eq!(config.usernames().len(), 10);
    assert!(config.usernames().iter().any(|name| name == "builderman"));
}

#[test]
fn test_zero_interval_is_raised_to_one_second() {
    let config = SamplerConfig::new(Duration::ZERO, vec!["builderman".to_string()]);
    assert_eq!(config.interval(), Duration::from_secs(1));
}

#[tokio::test]
async fn test_sample_once_resolves_a_listed_username() {
    let source = Arc::new(CountingSource::default());
    let config = SamplerConfig::new(Duration::from_secs(100), vec!["builderman".to_string()]);
    let sampler = Sampler::new(aggregator(source.clone()), config);

    let (username, result) = sampler.sample_once().await.unwrap();

    assert_eq!(username, "builderman");
    assert_eq!(result.unwrap().user_id().get(), 156);
    assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_sample_once_with_empty_list() {
    let source = Arc::new(CountingSource::default());
    let config = SamplerConfig::new(Duration::from_secs(100), Vec::new());
    let sampler = Sampler::new(aggregator(source), config);

    assert!(sampler.sample_once().await.is_none());
}

#[tokio::test]
async fn test_sample_failure_does_not_stop_loop() {
    let source = Arc::new(CountingSource::default());
    let config = SamplerConfig::new(Duration::from_secs(100), vec!["ghost".to_string()]);
    let sampler = Sampler::new(aggregator(source), config);

    let (_, result) = sampler.sample_once().await.unwrap();
    assert!(result.unwrap_err().is_not_found());
}

#[tokio::test(start_paused = true)]
async fn test_spawned_sampler_runs_on_interval() {
    let source = Arc::new(CountingSource::default());
    let agg = aggregator(source.clone());
    let config = SamplerConfig::new(Duration::from_secs(100), vec!["builderman".to_string()]);
    let handle = Sampler::new(agg.clone(), config).spawn();

    // First sample runs immediately.
    tokio::time::sleep(Duration::from_millis(1)).await;
    assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    assert_eq!(agg.cache().len(), 1);

    // Local TTL (300s) outlives the interval, so the next samples hit the cache.
    tokio::time::sleep(Duration::from_secs(200)).await;
    assert_eq!(source.fetches.load(Ordering::SeqCst), 1);

    handle.abort();
}
