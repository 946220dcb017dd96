//! Background sampler keeping the shared cache warm.

use crate::Aggregator;
use cuslige_core::UserRecord;
use cuslige_error::ProfileResult;
use derive_getters::Getters;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// Configuration for the background sampler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct SamplerConfig {
    /// Whether the sampler runs at all
    #[serde(default = "default_enabled")]
    enabled: bool,
    /// Pause between samples (seconds)
    #[serde(default = "default_interval_secs")]
    interval_secs: u64,
    /// Usernames to pick from
    #[serde(default = "default_usernames")]
    usernames: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_interval_secs() -> u64 {
    100
}

fn default_usernames() -> Vec<String> {
    [
        "builderman",
        "roblox",
        "noobmaster",
        "user123",
        "gamer456",
        "playerOne",
        "devTest",
        "exampleUser",
        "funnyCat",
        "coolDude",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            interval_secs: default_interval_secs(),
            usernames: default_usernames(),
        }
    }
}

impl SamplerConfig {
    /// Build a config with an explicit interval and username list.
    pub fn new(interval: Duration, usernames: Vec<String>) -> Self {
        Self {
            enabled: true,
            interval_secs: interval.as_secs(),
            usernames,
        }
    }

    /// Pause between samples, never shorter than one second.
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs.max(1))
    }
}

/// Periodically resolves a random sample username through the aggregator.
pub struct Sampler {
    aggregator: Arc<Aggregator>,
    config: SamplerConfig,
}

impl Sampler {
    /// Creates a new sampler.
    pub fn new(aggregator: Arc<Aggregator>, config: SamplerConfig) -> Self {
        Self { aggregator, config }
    }

    fn pick(&self) -> Option<String> {
        let mut rng = rand::thread_rng();
        self.config.usernames.choose(&mut rng).cloned()
    }

    /// Resolve one random sample username. `None` when the list is empty.
    pub async fn sample_once(&self) -> Option<(String, ProfileResult<UserRecord>)> {
        let username = self.pick()?;
        let result = self.aggregator.resolve_profile(&username).await;
        match &result {
            Ok(record) => info!(%username, user_id = %record.user_id(), "Auto-fetched"),
            Err(e) => debug!(%username, error = %e, "Auto-fetch failed"),
        }
        Some((username, result))
    }

    /// Run forever: sample, then sleep for the interval.
    pub fn spawn(self) -> JoinHandle<()> {
        info!(
            interval_secs = self.config.interval_secs,
            usernames = self.config.usernames.len(),
            "Starting background sampler"
        );
        tokio::spawn(async move {
            loop {
                self.sample_once().await;
                tokio::time::sleep(self.config.interval()).await;
            }
        })
    }
}
