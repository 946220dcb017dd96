//! Core data types for the Cuslige profile lookup bot.
//!
//! This crate provides the types shared by the cache, the upstream clients,
//! the aggregator, and the presentation adapters.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod blob;
mod record;
mod user_id;

pub use blob::SharedBlob;
pub use record::{ProfileLookup, UserRecord, UserRecordBuilder, UserRecordBuilderError};
pub use user_id::UserId;
