//! Wiring of clients, caches, and background tasks.

use crate::{CusligeConfig, Secrets};
use cuslige_cache::{ProfileCache, spawn_sweeper};
use cuslige_core::ProfileLookup;
use cuslige_error::{CusligeResult, ProfileResult};
use cuslige_interface::SharedProfileStore;
use cuslige_profile::{Aggregator, Sampler};
use cuslige_rate_limit::ConcurrencyGate;
use cuslige_upstream::{JsonHostClient, RobloxClient};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};

/// A fully wired bot: one aggregator shared by every adapter and task.
pub struct CusligeApp {
    config: CusligeConfig,
    aggregator: Arc<Aggregator>,
}

impl CusligeApp {
    /// Build the upstream clients, both cache tiers, and the gate.
    ///
    /// The shared cache tier is left out when disabled in config or when
    /// no `JSONHOST_TOKEN` is available.
    ///
    /// # Errors
    /// Returns an error if an HTTP client cannot be constructed.
    #[instrument(skip_all)]
    pub fn build(config: CusligeConfig, secrets: &Secrets) -> CusligeResult<Self> {
        let source = RobloxClient::new(config.upstream().clone(), config.retry().clone())?;
        let cache = Arc::new(ProfileCache::new(config.cache().clone()));
        let gate = ConcurrencyGate::new(*config.gate().max_concurrent());

        let mut aggregator = Aggregator::new(Arc::new(source), cache, gate);
        if let Some(store) = Self::shared_store(&config, secrets)? {
            aggregator = aggregator.with_shared_store(store);
        }

        info!(
            shared_cache = aggregator.has_shared_store(),
            max_concurrent = aggregator.gate().capacity(),
            ttl_secs = config.cache().ttl_secs(),
            "Profile pipeline ready"
        );

        Ok(Self::from_parts(config, Arc::new(aggregator)))
    }

    /// Assemble from an already built aggregator.
    pub fn from_parts(config: CusligeConfig, aggregator: Arc<Aggregator>) -> Self {
        Self { config, aggregator }
    }

    fn shared_store(
        config: &CusligeConfig,
        secrets: &Secrets,
    ) -> CusligeResult<Option<Arc<dyn SharedProfileStore>>> {
        let shared = config.shared_cache();
        if !shared.enabled() {
            info!("Shared cache disabled in configuration");
            return Ok(None);
        }
        let Some(token) = secrets.jsonhost_token() else {
            warn!(
                var = Secrets::JSONHOST_TOKEN_VAR,
                "No shared cache token set, shared cache disabled"
            );
            return Ok(None);
        };
        let client = JsonHostClient::new(shared, token)?;
        info!(url = %client.url(), "Shared cache enabled");
        Ok(Some(Arc::new(client)))
    }

    /// Loaded configuration.
    pub fn config(&self) -> &CusligeConfig {
        &self.config
    }

    /// The shared aggregation pipeline.
    pub fn aggregator(&self) -> &Arc<Aggregator> {
        &self.aggregator
    }

    /// One gated lookup, as a chat command would run it.
    pub async fn lookup(&self, username: &str) -> ProfileResult<ProfileLookup> {
        self.aggregator.lookup(username).await
    }

    /// Start the cache sweeper and the sampler, each when enabled.
    ///
    /// Abort the returned handles to stop them.
    pub fn spawn_background(&self) -> Vec<JoinHandle<()>> {
        let mut handles = Vec::new();

        let cache_config = self.config.cache();
        if *cache_config.enabled() {
            handles.push(spawn_sweeper(
                self.aggregator.cache().clone(),
                cache_config.sweep_interval(),
            ));
        }

        let sampler = self.config.sampler();
        if *sampler.enabled() && !sampler.usernames().is_empty() {
            handles.push(Sampler::new(self.aggregator.clone(), sampler.clone()).spawn());
        } else {
            info!("Background sampler disabled");
        }

        handles
    }
}
