//! Fixed-capacity admission control for profile resolutions.

use crate::{RateLimitError, RateLimitErrorKind};
use std::sync::Arc;
use tokio::sync::{OwnedSemaphorePermit, Semaphore};
use tracing::{debug, instrument};

/// Default number of resolutions allowed in flight at once.
pub const DEFAULT_MAX_CONCURRENT: usize = 20;

/// Counting gate bounding simultaneous resolution pipelines.
///
/// Acquiring beyond capacity suspends the caller until a permit is
/// dropped. Cloning shares the same underlying slots.
///
/// # Example
///
/// ```
/// use cuslige_rate_limit::ConcurrencyGate;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let gate = ConcurrencyGate::new(2);
/// let first = gate.acquire().await?;
/// assert_eq!(gate.available(), 1);
/// drop(first);
/// assert_eq!(gate.available(), 2);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConcurrencyGate {
    capacity: usize,
    semaphore: Arc<Semaphore>,
}

impl ConcurrencyGate {
    /// Create a gate admitting at most `capacity` holders (minimum one).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        debug!(capacity, "Creating concurrency gate");
        Self {
            capacity,
            semaphore: Arc::new(Semaphore::new(capacity)),
        }
    }

    /// Wait for a free slot.
    #[instrument(skip(self), fields(capacity = self.capacity, available = self.available()))]
    pub async fn acquire(&self) -> Result<GatePermit, RateLimitError> {
        let permit = Arc::clone(&self.semaphore)
            .acquire_owned()
            .await
            .map_err(|_| RateLimitError::new(RateLimitErrorKind::GateClosed))?;
        debug!("Admitted through concurrency gate");
        Ok(GatePermit { _permit: permit })
    }

    /// Take a slot only if one is free right now.
    pub fn try_acquire(&self) -> Option<GatePermit> {
        Arc::clone(&self.semaphore)
            .try_acquire_owned()
            .ok()
            .map(|permit| GatePermit { _permit: permit })
    }

    /// Slots currently free.
    pub fn available(&self) -> usize {
        self.semaphore.available_permits()
    }

    /// Total slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for ConcurrencyGate {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CONCURRENT)
    }
}

/// Slot held in a [`ConcurrencyGate`]; released on drop.
#[derive(Debug)]
pub struct GatePermit {
    _permit: OwnedSemaphorePermit,
}
