//! Long-running bot command.

use cuslige::{CusligeApp, Secrets};
use tracing::info;

/// Run the Discord bot until Ctrl+C or gateway shutdown.
#[cfg(feature = "discord")]
pub async fn run_bot(app: CusligeApp, secrets: &Secrets) -> Result<(), Box<dyn std::error::Error>> {
    use cuslige::CusligeBot;

    let token = secrets.require_discord_token()?;
    let background = app.spawn_background();

    let mut bot = CusligeBot::new(token, app.aggregator().clone()).await?;
    let shards = bot.shard_manager();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            shards.shutdown_all().await;
        }
    });

    let result = bot.start().await;

    for handle in background {
        handle.abort();
    }
    info!("Bot stopped");
    result.map_err(Into::into)
}

/// Without a chat adapter only the background tasks can run.
#[cfg(not(feature = "discord"))]
pub async fn run_bot(app: CusligeApp, _secrets: &Secrets) -> Result<(), Box<dyn std::error::Error>> {
    tracing::warn!("Built without the discord feature, running background tasks only");
    let background = app.spawn_background();
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received");
    for handle in background {
        handle.abort();
    }
    Ok(())
}
