//! Error types for the Cuslige profile lookup bot.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - Constructors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use cuslige_error::{CusligeResult, ProfileError};
//!
//! fn resolve() -> CusligeResult<u64> {
//!     Err(ProfileError::not_found("builderman_typo"))?
//! }
//!
//! assert!(resolve().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod error;
mod http;
mod json;
mod profile;

pub use config::ConfigError;
pub use error::{CusligeError, CusligeErrorKind, CusligeResult};
pub use http::HttpError;
pub use json::JsonError;
pub use profile::{ProfileError, ProfileErrorKind, ProfileResult};
