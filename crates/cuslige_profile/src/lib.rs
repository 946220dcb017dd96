//! Profile aggregation.
//!
//! The [`Aggregator`] is the single pipeline every presentation adapter
//! calls; the [`Sampler`] exercises it in the background.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod aggregator;
mod sampler;

pub use aggregator::Aggregator;
pub use sampler::{Sampler, SamplerConfig};
