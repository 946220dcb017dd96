//! Configuration error types.

use std::fmt;

/// Configuration could not be read, parsed, or holds an unusable value.
///
/// `key` is the dotted setting (`cache.sweep_interval_secs`) or environment
/// variable (`DISCORD_TOKEN`) at fault, when one can be named.
#[derive(Debug, Clone, derive_more::Error)]
pub struct ConfigError {
    /// Offending setting or variable, if known
    pub key: Option<String>,
    /// Error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl ConfigError {
    /// Create a new ConfigError at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuslige_error::ConfigError;
    ///
    /// let err = ConfigError::new("Failed to parse configuration");
    /// assert!(err.key.is_none());
    /// ```
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            key: None,
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// Error tied to one setting or environment variable.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuslige_error::ConfigError;
    ///
    /// let err = ConfigError::for_key("DISCORD_TOKEN", "is not set");
    /// assert_eq!(err.key.as_deref(), Some("DISCORD_TOKEN"));
    /// assert!(err.to_string().contains("DISCORD_TOKEN is not set"));
    /// ```
    #[track_caller]
    pub fn for_key(key: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            key: Some(key.into()),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration Error: ")?;
        if let Some(key) = &self.key {
            write!(f, "{} ", key)?;
        }
        write!(f, "{} at line {} in {}", self.message, self.line, self.file)
    }
}
