//! Top-level error wrapper types.

use crate::{ConfigError, HttpError, JsonError, ProfileError};

/// Every leaf error the workspace can produce.
///
/// # Examples
///
/// ```
/// use cuslige_error::{CusligeError, HttpError};
///
/// let http_err = HttpError::new("https://jsonhost.com/api/json/mason", "timed out");
/// let err: CusligeError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum CusligeErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Profile resolution error
    #[from(ProfileError)]
    Profile(ProfileError),
}

/// Cuslige error with kind discrimination.
///
/// # Examples
///
/// ```
/// use cuslige_error::{ConfigError, CusligeResult};
///
/// fn load() -> CusligeResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(load().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Cuslige Error: {}", _0)]
pub struct CusligeError(Box<CusligeErrorKind>);

impl CusligeError {
    /// Create a new error from a kind.
    pub fn new(kind: CusligeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &CusligeErrorKind {
        &self.0
    }
}

impl<T> From<T> for CusligeError
where
    T: Into<CusligeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Cuslige operations.
pub type CusligeResult<T> = std::result::Result<T, CusligeError>;
