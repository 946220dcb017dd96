//! Periodic eviction task.

use crate::ProfileCache;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, info};

/// Shortest period the sweeper will run at.
pub const MIN_SWEEP_PERIOD: Duration = Duration::from_secs(1);

/// Spawn a task that sweeps `cache` every `period`, independent of reads.
///
/// The first sweep happens one full period after spawning. Periods shorter
/// than [`MIN_SWEEP_PERIOD`] are raised to it. Abort the returned handle to
/// stop the task.
pub fn spawn_sweeper(cache: Arc<ProfileCache>, period: Duration) -> JoinHandle<()> {
    let period = period.max(MIN_SWEEP_PERIOD);
    info!(period_secs = period.as_secs(), "Starting cache sweeper");
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    tokio::spawn(async move {
        loop {
            ticker.tick().await;
            let removed = cache.sweep();
            debug!(removed, remaining = cache.len(), "Cache sweep complete");
        }
    })
}
