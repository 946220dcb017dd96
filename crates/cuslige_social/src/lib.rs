//! Chat platform presentation for Cuslige.
//!
//! [`ReplyPresenter`] turns a [`ProfileLookup`](cuslige_core::ProfileLookup)
//! into a platform-neutral [`ProfileReply`]. Platform adapters render that
//! reply with their own SDK:
//! - `discord` - Serenity slash-command bot (requires `discord` feature)

#![warn(missing_docs)]

mod error;
mod reply;

#[cfg(feature = "discord")]
mod discord;

pub use error::{DiscordError, DiscordErrorKind, DiscordResult};
pub use reply::{
    NO_DESCRIPTION, NOT_FOUND_MESSAGE, ProfileCard, ProfileReply, ReplyButton, ReplyField,
    ReplyPresenter, UPSTREAM_ERROR_MESSAGE, shorten,
};

#[cfg(feature = "discord")]
pub use discord::{CusligeBot, CusligeHandler, USER_COMMAND, followup};
