//! Discord bot client setup and lifecycle management.

use super::CusligeHandler;
use crate::{DiscordError, DiscordErrorKind, DiscordResult, ReplyPresenter};
use cuslige_profile::Aggregator;
use serenity::Client;
use serenity::gateway::ShardManager;
use std::sync::Arc;
use tracing::{info, instrument};

/// Discord bot serving `/user` lookups.
///
/// # Example
/// ```no_run
/// # use cuslige_social::CusligeBot;
/// # use cuslige_profile::Aggregator;
/// # use std::sync::Arc;
/// # async fn run(aggregator: Arc<Aggregator>) -> Result<(), Box<dyn std::error::Error>> {
/// let token = std::env::var("DISCORD_TOKEN")?;
/// let mut bot = CusligeBot::new(&token, aggregator).await?;
/// bot.start().await?;
/// # Ok(())
/// # }
/// ```
pub struct CusligeBot {
    client: Client,
}

impl CusligeBot {
    /// Build the Serenity client with the default presenter.
    ///
    /// # Errors
    /// Returns an error if the token is empty or the client fails to initialize.
    #[instrument(skip(token, aggregator), fields(token_len = token.len()))]
    pub async fn new(token: &str, aggregator: Arc<Aggregator>) -> DiscordResult<Self> {
        Self::with_presenter(token, aggregator, ReplyPresenter::default()).await
    }

    /// Build the Serenity client with a custom presenter.
    pub async fn with_presenter(
        token: &str,
        aggregator: Arc<Aggregator>,
        presenter: ReplyPresenter,
    ) -> DiscordResult<Self> {
        let token = token.trim();
        if token.is_empty() {
            return Err(DiscordError::new(DiscordErrorKind::InvalidToken));
        }

        info!("Initializing Cuslige Discord bot");
        let handler = CusligeHandler::new(aggregator, presenter);
        let intents = CusligeHandler::intents();

        let client = Client::builder(token, intents)
            .event_handler(handler)
            .await
            .map_err(|e| {
                DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                    "Failed to build client: {}",
                    e
                )))
            })?;

        info!("Serenity client built successfully");
        Ok(Self { client })
    }

    /// Handle for shutting the gateway connection down from another task.
    pub fn shard_manager(&self) -> Arc<ShardManager> {
        self.client.shard_manager.clone()
    }

    /// Run until the gateway connection ends.
    #[instrument(skip(self))]
    pub async fn start(&mut self) -> DiscordResult<()> {
        info!("Starting Discord bot");
        self.client.start().await.map_err(|e| {
            DiscordError::new(DiscordErrorKind::ConnectionFailed(format!(
                "Client error: {}",
                e
            )))
        })
    }
}
