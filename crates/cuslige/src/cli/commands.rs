//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cuslige - look up Roblox user profiles from Discord
#[derive(Parser, Debug)]
#[command(name = "cuslige")]
#[command(about = "Discord bot that looks up Roblox user profiles", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file (replaces ./cuslige.toml)
    #[arg(short, long, global = true, env = "CUSLIGE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the Discord bot with the cache sweeper and background sampler
    Run,

    /// Resolve one username (or numeric id) and print the result
    Lookup {
        /// Username or numeric user id
        username: String,

        /// Print the record as JSON instead of a text reply
        #[arg(long)]
        json: bool,
    },
}
