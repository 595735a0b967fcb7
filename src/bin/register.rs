//! One-shot slash-command registration.
//!
//! Registers the command set guild-scoped when `GUILD_ID` is set
//! (commands appear instantly, useful while developing), globally
//! otherwise.

use tracing::info;

use duelbot::core::config::AppConfig;
use duelbot::discord::DiscordClient;
use duelbot::discord::commands::command_definitions;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    duelbot::setup_logging();

    let config = AppConfig::from_env().map_err(anyhow::Error::msg)?;
    let guild_id = std::env::var("GUILD_ID").ok();

    match guild_id.as_deref() {
        Some(guild) => info!("Registering guild commands for {}", guild),
        None => info!("Registering global commands"),
    }

    let client = DiscordClient::new(&config);
    client
        .put_commands(guild_id.as_deref(), &command_definitions())
        .await?;

    info!("Commands registered successfully");
    Ok(())
}
