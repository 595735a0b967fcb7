use thiserror::Error;

use crate::game::dice::DiceError;

#[derive(Debug, Error)]
pub enum DiscordError {
    #[error("Unrecognized interaction payload: {0}")]
    Protocol(String),

    #[error("Invalid user input: {0}")]
    Validation(String),

    #[error("Unknown or expired game session: {0}")]
    SessionNotFound(String),

    #[error("Failed to access Discord API: {0}")]
    ApiError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),
}

impl From<reqwest::Error> for DiscordError {
    fn from(error: reqwest::Error) -> Self {
        DiscordError::HttpError(error.to_string())
    }
}

impl From<anyhow::Error> for DiscordError {
    fn from(error: anyhow::Error) -> Self {
        DiscordError::ApiError(error.to_string())
    }
}

// Dice failures carry their own user-facing text and surface as
// validation replies, never as structured errors.
impl From<DiceError> for DiscordError {
    fn from(error: DiceError) -> Self {
        DiscordError::Validation(error.to_string())
    }
}
