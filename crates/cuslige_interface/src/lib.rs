//! Trait definitions at the seams of the profile pipeline.
//!
//! - [`ProfileSource`] - the game platform's HTTP API
//! - [`SharedProfileStore`] - the remote whole-document blob cache
//! - [`ProfilePresenter`] - anything that renders a [`ProfileLookup`]

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use async_trait::async_trait;
use cuslige_core::{ProfileLookup, SharedBlob, UserId, UserRecord};
use cuslige_error::{ProfileError, ProfileResult};

/// Upstream profile data provider.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// Translate a username into an account id.
    ///
    /// Called only for non-numeric input. Not retried; any non-success
    /// status or malformed body yields `NotFound`.
    async fn resolve_username(&self, username: &str) -> ProfileResult<UserId>;

    /// Fetch identity, friend count, and avatar and assemble a record.
    ///
    /// Fails as a whole if any sub-call fails; partial records are never
    /// returned.
    async fn fetch_profile(&self, id: UserId) -> ProfileResult<UserRecord>;

    /// Premium membership check. Not retried; failures read as `false`.
    async fn fetch_premium(&self, id: UserId) -> bool;
}

/// Remote secondary cache holding every record in one JSON document.
///
/// There is no concurrency control: a write replaces whatever another
/// instance wrote between this instance's read and write.
#[async_trait]
pub trait SharedProfileStore: Send + Sync {
    /// Download the whole document. Errors are `CacheUnavailable`.
    async fn fetch_all(&self) -> ProfileResult<SharedBlob>;

    /// Upload the whole document, overwriting the remote copy.
    async fn replace_all(&self, blob: &SharedBlob) -> ProfileResult<()>;
}

/// Renders lookups and failures into a platform-specific reply.
pub trait ProfilePresenter {
    /// Reply type produced by this presenter.
    type Reply;

    /// Render a successful lookup.
    fn present(&self, lookup: &ProfileLookup) -> Self::Reply;

    /// Render a user-visible failure.
    fn present_error(&self, error: &ProfileError) -> Self::Reply;
}
