//! Cuslige CLI binary.
//!
//! - `cuslige run` serves the `/user` slash command
//! - `cuslige lookup <username>` resolves one profile from the terminal

use clap::Parser;
use cuslige::{CusligeApp, CusligeConfig, ObservabilityConfig, Secrets, init_observability};

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, lookup_user, run_bot};

    let cli = Cli::parse();

    let secrets = Secrets::from_env();
    let config = CusligeConfig::load_with(cli.config.as_deref())?;

    let mut observability = ObservabilityConfig::from_logging(config.logging());
    if cli.verbose {
        observability = observability.with_log_level("debug");
    }
    init_observability(&observability)?;

    let app = CusligeApp::build(config, &secrets)?;

    match cli.command {
        Commands::Run => run_bot(app, &secrets).await?,
        Commands::Lookup { username, json } => lookup_user(&app, &username, json).await?,
    }

    Ok(())
}
