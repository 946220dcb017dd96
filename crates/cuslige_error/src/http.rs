//! HTTP error types.

/// Transport-level HTTP failure (connect, timeout, unexpected status).
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("HTTP Error: {} ({}) at line {} in {}", message, url, line, file)]
pub struct HttpError {
    /// The underlying error message
    pub message: String,
    /// Request URL that failed
    pub url: String,
    /// Response status, when the server answered at all
    pub status: Option<u16>,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl HttpError {
    /// Create a transport error for `url` at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuslige_error::HttpError;
    ///
    /// let err = HttpError::new("https://users.roproxy.com/v1/users/1", "Connection refused");
    /// assert!(err.message.contains("Connection refused"));
    /// assert_eq!(err.status, None);
    /// ```
    #[track_caller]
    pub fn new(url: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            url: url.into(),
            status: None,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Create an error for a non-success response status.
    #[track_caller]
    pub fn unexpected_status(url: impl Into<String>, status: u16) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: format!("unexpected status {status}"),
            url: url.into(),
            status: Some(status),
            line: location.line(),
            file: location.file(),
        }
    }
}
