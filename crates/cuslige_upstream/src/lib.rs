//! HTTP clients for the profile pipeline's remote collaborators.
//!
//! - [`RobloxClient`] implements [`cuslige_interface::ProfileSource`] against
//!   the game platform's users, friends, thumbnails, and premium services.
//! - [`JsonHostClient`] implements [`cuslige_interface::SharedProfileStore`]
//!   against a whole-document JSON host.

#![warn(missing_docs)]

mod config;
mod json_models;
mod jsonhost;
mod roblox;

pub use config::{SharedCacheConfig, UpstreamConfig};
pub use jsonhost::JsonHostClient;
pub use roblox::RobloxClient;
