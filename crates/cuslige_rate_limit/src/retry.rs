//! Fixed-backoff retry policy for upstream calls.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::future::Future;
use std::time::Duration;
use tokio_retry2::strategy::FixedInterval;
use tokio_retry2::{Retry, RetryError};
use tracing::warn;

/// How many times an upstream call is attempted and how long to wait between.
///
/// # Example
///
/// ```
/// use cuslige_rate_limit::RetryPolicy;
///
/// let policy = RetryPolicy::default();
/// assert_eq!(*policy.max_attempts(), 3);
/// assert_eq!(policy.backoff().as_millis(), 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct RetryPolicy {
    /// Total attempts, the first one included
    #[serde(default = "default_max_attempts")]
    max_attempts: usize,
    /// Fixed delay between attempts (milliseconds)
    #[serde(default = "default_backoff_ms")]
    backoff_ms: u64,
}

fn default_max_attempts() -> usize {
    3
}

fn default_backoff_ms() -> u64 {
    1000
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff_ms: default_backoff_ms(),
        }
    }
}

impl RetryPolicy {
    /// Build a policy; `max_attempts` is clamped to at least one.
    pub fn new(max_attempts: usize, backoff: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff_ms: backoff.as_millis() as u64,
        }
    }

    /// A policy that never retries.
    pub fn once() -> Self {
        Self::new(1, Duration::ZERO)
    }

    /// Delay between attempts.
    pub fn backoff(&self) -> Duration {
        Duration::from_millis(self.backoff_ms)
    }

    /// Run `op` until it succeeds or the attempts are exhausted.
    ///
    /// Every error is treated as transient; the last one is returned.
    pub async fn run<T, E, F, Fut>(&self, endpoint: &str, mut op: F) -> Result<T, E>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let strategy =
            FixedInterval::from_millis(self.backoff_ms).take(self.max_attempts.saturating_sub(1));
        let mut attempt = 0usize;

        Retry::spawn(strategy, || {
            attempt += 1;
            let current = attempt;
            let fut = op();
            async move {
                fut.await.map_err(|err| {
                    warn!(endpoint, attempt = current, error = %err, "Upstream call failed");
                    RetryError::Transient {
                        err,
                        retry_after: None,
                    }
                })
            }
        })
        .await
    }
}
