//! Discord webhook API client.
//!
//! Encapsulates the outbound HTTP calls: deleting interaction follow-up
//! messages and registering slash commands.

use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

use crate::core::config::AppConfig;
use crate::errors::DiscordError;

pub const DEFAULT_API_BASE: &str = "https://discord.com/api/v10";

static HTTP_CLIENT: std::sync::LazyLock<Client> = std::sync::LazyLock::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap_or_else(|_| Client::new())
});

pub struct DiscordClient {
    api_base: String,
    app_id: String,
    bot_token: String,
}

impl DiscordClient {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            api_base: config
                .api_base
                .clone()
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            app_id: config.app_id.clone(),
            bot_token: config.bot_token.clone(),
        }
    }

    /// Delete the original message behind an interaction, addressed by
    /// the interaction token and the message id.
    ///
    /// Used to remove a challenge message whose Accept button has gone
    /// stale. Not retried; the caller decides whether failure matters.
    ///
    /// # Errors
    ///
    /// Returns `DiscordError::HttpError` when the request cannot be
    /// sent and `DiscordError::ApiError` when Discord answers with a
    /// non-success status.
    pub async fn delete_original_message(
        &self,
        interaction_token: &str,
        message_id: &str,
    ) -> Result<(), DiscordError> {
        let url = format!(
            "{}/webhooks/{}/{}/messages/{}",
            self.api_base, self.app_id, interaction_token, message_id
        );

        let response = HTTP_CLIENT
            .delete(&url)
            .header("Authorization", format!("Bot {}", self.bot_token))
            .send()
            .await?;

        if response.status().is_success() {
            Ok(())
        } else {
            Err(DiscordError::ApiError(format!(
                "message delete returned {} for message {}",
                response.status(),
                message_id
            )))
        }
    }

    /// Register the application's slash commands, replacing the
    /// existing set. Guild-scoped when `guild_id` is given (commands
    /// appear instantly, which is what you want while developing),
    /// global otherwise.
    ///
    /// # Errors
    ///
    /// Returns `DiscordError::HttpError` on transport failure and
    /// `DiscordError::ApiError` (with the response text) when Discord
    /// rejects the command set.
    pub async fn put_commands(
        &self,
        guild_id: Option<&str>,
        commands: &Value,
    ) -> Result<(), DiscordError> {
        let url = match guild_id {
            Some(guild) => format!(
                "{}/applications/{}/guilds/{}/commands",
                self.api_base, self.app_id, guild
            ),
            None => format!("{}/applications/{}/commands", self.api_base, self.app_id),
        };

        let response = HTTP_CLIENT
            .put(&url)
            .header("Authorization", format!("Bot {}", self.bot_token))
            .json(commands)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            let detail = response.text().await.unwrap_or_default();
            Err(DiscordError::ApiError(format!(
                "command registration returned {}: {}",
                status, detail
            )))
        }
    }
}
