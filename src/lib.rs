/// duelbot - A Discord interactions endpoint for dice rolls and rock-paper-scissors duels.
///
/// This crate implements a single-Lambda webhook architecture:
/// an API Lambda receives Discord interaction callbacks, verifies their
/// Ed25519 signature, and answers them synchronously. The `/challenge`
/// flow keeps a small in-memory session per pending duel and issues one
/// asynchronous webhook call to delete the stale challenge message once
/// the challenge is accepted.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - ed25519-dalek for Discord's interaction signature scheme
/// - reqwest for outbound webhook calls
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use duelbot::api::handler::dispatch_interaction;
/// use duelbot::core::config::AppConfig;
/// use duelbot::game::session::SessionStore;
/// use serde_json::json;
///
/// #[tokio::main]
/// async fn main() {
///     // Set up structured logging
///     duelbot::setup_logging();
///
///     // Create a dummy AppConfig for the example
///     let config = AppConfig {
///         app_id: "1234567890".to_string(),
///         public_key: "aa".repeat(32),
///         bot_token: "dummy_token".to_string(),
///         api_base: None,
///     };
///
///     // Answer a protocol ping through the dispatcher
///     let store = SessionStore::new();
///     let response = dispatch_interaction(&config, &store, &json!({ "type": 1 })).await;
///     println!("{response}");
/// }
/// ```
// Module declarations
pub mod api;
pub mod core;
pub mod discord;
pub mod errors;
pub mod game;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called at the start of each Lambda
/// handler.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// duelbot::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry().with(filter).with(fmt_layer).init();
}
