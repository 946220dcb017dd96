//! Local profile caching with TTL support.
//!
//! This crate provides the first cache tier consulted by the aggregator:
//! an in-memory map from user id to record, with lazy expiry on read and a
//! periodic background sweep.

#![warn(missing_docs)]

mod cache;
mod sweeper;

pub use cache::{CacheEntry, ProfileCache, ProfileCacheConfig, ProfileCacheConfigBuilder};
pub use sweeper::{MIN_SWEEP_PERIOD, spawn_sweeper};
