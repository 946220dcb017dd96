//! Cuslige: look up Roblox user profiles from chat.
//!
//! This crate ties the workspace together:
//! - [`CusligeConfig`] / [`Secrets`] - layered configuration
//! - [`init_observability`] - tracing subscriber setup
//! - [`CusligeApp`] - clients, cache tiers, gate, and background tasks
//!
//! # Example
//!
//! ```no_run
//! use cuslige::{CusligeApp, CusligeConfig, Secrets};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let app = CusligeApp::build(CusligeConfig::load()?, &Secrets::from_env())?;
//! let lookup = app.lookup("builderman").await?;
//! println!("{} has {} friends", lookup.record().name(), lookup.record().friend_count());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod app;
mod config;
mod observability;

pub use app::CusligeApp;
pub use config::{CusligeConfig, GateConfig, LoggingConfig, Secrets};
pub use observability::{ObservabilityConfig, init_observability};

// Re-export workspace crates
pub use cuslige_cache::{ProfileCache, ProfileCacheConfig};
pub use cuslige_core::{ProfileLookup, SharedBlob, UserId, UserRecord};
pub use cuslige_error::{
    ConfigError, CusligeError, CusligeErrorKind, CusligeResult, ProfileError, ProfileErrorKind,
};
pub use cuslige_interface::{ProfilePresenter, ProfileSource, SharedProfileStore};
pub use cuslige_profile::{Aggregator, Sampler, SamplerConfig};
pub use cuslige_rate_limit::{ConcurrencyGate, RetryPolicy};
pub use cuslige_social::{ProfileReply, ReplyPresenter};
pub use cuslige_upstream::{JsonHostClient, RobloxClient, SharedCacheConfig, UpstreamConfig};

#[cfg(feature = "discord")]
pub use cuslige_social::CusligeBot;
