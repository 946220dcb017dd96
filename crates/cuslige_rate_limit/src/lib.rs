//! Admission control and retry policy.
//!
//! - [`ConcurrencyGate`] - counting semaphore bounding in-flight resolutions
//! - [`RetryPolicy`] - fixed-interval retries for upstream HTTP calls,
//!   built on `tokio-retry2`

mod error;
mod gate;
mod retry;

pub use error::{RateLimitError, RateLimitErrorKind};
pub use gate::{ConcurrencyGate, DEFAULT_MAX_CONCURRENT, GatePermit};
pub use retry::RetryPolicy;
