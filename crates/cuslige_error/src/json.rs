//! Shared cache document decode errors.

/// A shared cache document that could not be decoded.
///
/// `document` names the remote document (its URL) so failures from several
/// buckets stay distinguishable in logs.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("JSON Error in {}: {} at line {} in {}", document, message, line, file)]
pub struct JsonError {
    /// Document that failed to decode
    pub document: String,
    /// What was wrong with it
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl JsonError {
    /// Record a decode failure for `document`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cuslige_error::JsonError;
    ///
    /// let err = JsonError::new("https://jsonhost.com/api/json/mason", "expected an object");
    /// assert_eq!(err.document, "https://jsonhost.com/api/json/mason");
    /// assert!(err.to_string().contains("api/json/mason: expected an object"));
    /// ```
    #[track_caller]
    pub fn new(document: impl Into<String>, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            document: document.into(),
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }

    /// The document root was valid JSON but not an object.
    #[track_caller]
    pub fn not_an_object(document: impl Into<String>) -> Self {
        Self::new(document, "expected an object at the document root")
    }
}
