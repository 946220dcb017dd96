//! Discord adapter.
//!
//! - **handler**: registers `/user` and answers it through the aggregator
//! - **render**: maps [`ProfileReply`](crate::ProfileReply) onto embeds and buttons
//! - **client**: Serenity client lifecycle

mod client;
mod handler;
mod render;

pub use client::CusligeBot;
pub use handler::{CusligeHandler, USER_COMMAND};
pub use render::followup;
