//! Profile resolution error types.

/// Why a single profile resolution failed.
///
/// Every kind is scoped to one resolution; none is fatal to the process.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ProfileErrorKind {
    /// Username could not be translated to an account id.
    #[display("User not found: {}", _0)]
    NotFound(String),

    /// A mandatory upstream call exhausted its retries.
    #[display("Upstream {} unavailable: {}", endpoint, reason)]
    UpstreamUnavailable {
        /// Logical endpoint name (e.g. "identity", "friends", "avatar")
        endpoint: String,
        /// Last failure observed
        reason: String,
    },

    /// Upstream answered, but not in the expected shape.
    #[display("Malformed {} response: {}", endpoint, reason)]
    MalformedResponse {
        /// Logical endpoint name
        endpoint: String,
        /// What was wrong with the body
        reason: String,
    },

    /// Shared blob cache read or write failed.
    #[display("Shared cache unavailable: {}", _0)]
    CacheUnavailable(String),
}

impl ProfileErrorKind {
    /// Shared-cache failures degrade to upstream-only fetches and never surface.
    pub fn is_cache_failure(&self) -> bool {
        matches!(self, ProfileErrorKind::CacheUnavailable(_))
    }

    /// Malformed responses fail a resolution exactly like exhausted upstream retries.
    pub fn is_upstream_failure(&self) -> bool {
        matches!(
            self,
            ProfileErrorKind::UpstreamUnavailable { .. } | ProfileErrorKind::MalformedResponse { .. }
        )
    }
}

/// Profile error with source location tracking.
///
/// # Examples
///
/// ```
/// use cuslige_error::{ProfileError, ProfileErrorKind};
///
/// let err = ProfileError::new(ProfileErrorKind::NotFound("nobody".to_string()));
/// assert!(err.is_not_found());
/// assert!(format!("{}", err).contains("nobody"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Profile Error: {} at line {} in {}", kind, line, file)]
pub struct ProfileError {
    /// The kind of error that occurred
    pub kind: ProfileErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ProfileError {
    /// Create a new ProfileError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ProfileErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Shorthand for [`ProfileErrorKind::NotFound`].
    #[track_caller]
    pub fn not_found(username: impl Into<String>) -> Self {
        Self::new(ProfileErrorKind::NotFound(username.into()))
    }

    /// Shorthand for [`ProfileErrorKind::UpstreamUnavailable`].
    #[track_caller]
    pub fn upstream(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ProfileErrorKind::UpstreamUnavailable {
            endpoint: endpoint.into(),
            reason: reason.into(),
        })
    }

    /// Shorthand for [`ProfileErrorKind::MalformedResponse`].
    #[track_caller]
    pub fn malformed(endpoint: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ProfileErrorKind::MalformedResponse {
            endpoint: endpoint.into(),
            reason: reason.into(),
        })
    }

    /// Shorthand for [`ProfileErrorKind::CacheUnavailable`].
    #[track_caller]
    pub fn cache_unavailable(reason: impl Into<String>) -> Self {
        Self::new(ProfileErrorKind::CacheUnavailable(reason.into()))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &ProfileErrorKind {
        &self.kind
    }

    /// True when the username could not be resolved.
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ProfileErrorKind::NotFound(_))
    }
}

/// Result type for profile operations.
pub type ProfileResult<T> = Result<T, ProfileError>;
