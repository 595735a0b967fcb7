use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_id: String,
    pub public_key: String,
    pub bot_token: String,
    /// Override for the Discord API base URL; `None` uses the public v10 API.
    pub api_base: Option<String>,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Ok(Self {
            app_id: env::var("DISCORD_APP_ID").map_err(|e| format!("DISCORD_APP_ID: {}", e))?,
            public_key: env::var("DISCORD_PUBLIC_KEY")
                .map_err(|e| format!("DISCORD_PUBLIC_KEY: {}", e))?,
            bot_token: env::var("DISCORD_BOT_TOKEN")
                .map_err(|e| format!("DISCORD_BOT_TOKEN: {}", e))?,
            api_base: env::var("DISCORD_API_BASE").ok(),
        })
    }
}
