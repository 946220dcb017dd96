//! CLI module for the cuslige binary.

mod commands;
mod lookup;
mod run;

pub use commands::{Cli, Commands};
pub use lookup::lookup_user;
pub use run::run_bot;
