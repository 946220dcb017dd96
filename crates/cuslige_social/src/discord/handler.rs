//! Serenity event handler answering the `/user` slash command.

use super::render;
use crate::{DiscordError, DiscordErrorKind, DiscordResult, ReplyPresenter};
use cuslige_interface::ProfilePresenter;
use cuslige_profile::Aggregator;
use serenity::all::{
    Command, CommandInteraction, CommandOptionType, CreateCommand, CreateCommandOption,
    Interaction,
};
use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::gateway::{GatewayIntents, Ready};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Slash command name.
pub const USER_COMMAND: &str = "user";

const USERNAME_OPTION: &str = "username";

/// Event handler for the Cuslige Discord bot.
pub struct CusligeHandler {
    aggregator: Arc<Aggregator>,
    presenter: ReplyPresenter,
}

impl CusligeHandler {
    /// Create a handler answering lookups through `aggregator`.
    pub fn new(aggregator: Arc<Aggregator>, presenter: ReplyPresenter) -> Self {
        Self {
            aggregator,
            presenter,
        }
    }

    /// Slash commands need no privileged intents.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
    }

    /// Definition of the global `/user username:<string>` command.
    pub fn user_command() -> CreateCommand {
        CreateCommand::new(USER_COMMAND)
            .description("Search Roblox user")
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    USERNAME_OPTION,
                    "Username or numeric user ID",
                )
                .required(true),
            )
    }

    fn username(command: &CommandInteraction) -> String {
        command
            .data
            .options
            .iter()
            .find(|option| option.name == USERNAME_OPTION)
            .and_then(|option| option.value.as_str())
            .unwrap_or_default()
            .to_string()
    }

    #[instrument(skip(self, ctx, command), fields(user = %command.user.name))]
    async fn handle_user_command(
        &self,
        ctx: &Context,
        command: &CommandInteraction,
    ) -> DiscordResult<()> {
        // Acknowledge first; the lookup may queue behind the gate.
        command.defer(&ctx.http).await.map_err(|e| {
            DiscordError::new(DiscordErrorKind::InteractionFailed(format!(
                "defer: {e}"
            )))
        })?;

        let username = Self::username(command);
        let reply = match self.aggregator.lookup(&username).await {
            Ok(lookup) => {
                debug!(%username, user_id = %lookup.record().user_id(), "Lookup succeeded");
                self.presenter.present(&lookup)
            }
            Err(e) => {
                warn!(%username, error = %e, "Lookup failed");
                self.presenter.present_error(&e)
            }
        };

        command
            .create_followup(&ctx.http, render::followup(&reply))
            .await
            .map_err(|e| {
                DiscordError::new(DiscordErrorKind::InteractionFailed(format!(
                    "followup: {e}"
                )))
            })?;
        Ok(())
    }
}

#[async_trait]
impl EventHandler for CusligeHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!(
            bot_user = %ready.user.name,
            bot_id = %ready.user.id,
            guilds = ready.guilds.len(),
            "Discord bot connected and ready"
        );

        match Command::create_global_command(&ctx.http, Self::user_command()).await {
            Ok(command) => info!(command_id = %command.id, name = %command.name, "Registered slash command"),
            Err(e) => {
                let err = DiscordError::new(DiscordErrorKind::CommandRegistrationFailed(e.to_string()));
                error!(error = %err, "Failed to register slash command");
            }
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        let Interaction::Command(command) = interaction else {
            return;
        };
        if command.data.name != USER_COMMAND {
            debug!(name = %command.data.name, "Ignoring unknown command");
            return;
        }
        if let Err(e) = self.handle_user_command(&ctx, &command).await {
            error!(error = %e, "Failed to answer /user command");
        }
    }
}
