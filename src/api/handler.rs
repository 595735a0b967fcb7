//! API Lambda handler - thin router that delegates to specialized handlers.
//!
//! This module handles:
//! - Request validation (headers, body, signature)
//! - Protocol pings
//! - Slash commands (delegated to `command_handler` module)
//! - Component interactions (delegated to `component_handler` module)

use super::{command_handler, component_handler, helpers, parsing, signature};
use crate::core::config::AppConfig;
use crate::discord;
use crate::game::session::SessionStore;
use lambda_runtime::{Error, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

pub use self::function_handler as handler;

// Pending challenges live for the process lifetime, shared by every
// invocation this runtime serves.
static SESSIONS: std::sync::LazyLock<SessionStore> = std::sync::LazyLock::new(SessionStore::new);

/// Lambda handler for the API entrypoint.
///
/// Verifies the request and routes the interaction to specialized
/// handlers based on its numeric type.
///
/// # Errors
///
/// Returns an error response payload if the request is malformed or fails
/// Discord signature verification; otherwise returns a 200 with a JSON body.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<impl Serialize, Error> {
    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    // ========================================================================
    // Extract and validate headers
    // ========================================================================

    let Some(headers) = event.payload.get("headers") else {
        error!("Request missing headers");
        return Ok(helpers::err_response(400, "Missing headers"));
    };

    let body = match extract_body(&event.payload) {
        Ok(b) => b,
        Err(response) => return Ok(response),
    };

    // ========================================================================
    // Verify Discord signature
    // ========================================================================

    if let Err(response) = verify_signature(body, headers, &config) {
        return Ok(response);
    }

    info!("Discord signature verified successfully");

    // ========================================================================
    // Route to specialized handlers
    // ========================================================================

    let interaction: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(e) => {
            error!("Interaction payload parse error: {}", e);
            return Ok(helpers::err_response(400, &format!("Parse Error: {e}")));
        }
    };

    Ok(dispatch_interaction(&config, &SESSIONS, &interaction).await)
}

/// Route a verified, parsed interaction by its numeric type.
///
/// Takes the store explicitly so the full state machine is drivable
/// without a Lambda event envelope.
pub async fn dispatch_interaction(
    config: &AppConfig,
    store: &SessionStore,
    interaction: &Value,
) -> Value {
    match interaction.get("type").and_then(Value::as_u64) {
        Some(discord::INTERACTION_PING) => helpers::pong(),
        Some(discord::INTERACTION_APPLICATION_COMMAND) => {
            command_handler::handle_command(store, interaction)
        }
        Some(discord::INTERACTION_MESSAGE_COMPONENT) => {
            component_handler::handle_component(config, store, interaction).await
        }
        other => {
            error!("Unknown interaction type: {:?}", other);
            helpers::err_response(400, "Unknown interaction type")
        }
    }
}

// ============================================================================
// Request Validation Helpers
// ============================================================================

fn extract_body(payload: &Value) -> Result<&str, Value> {
    let Some(body) = payload.get("body") else {
        error!("Request missing body");
        return Err(helpers::err_response(400, "Missing body"));
    };

    let Some(body_str) = body.as_str() else {
        error!("Request body is not a string");
        return Err(helpers::err_response(400, "Invalid body format"));
    };

    Ok(body_str)
}

fn verify_signature(body: &str, headers: &Value, config: &AppConfig) -> Result<(), Value> {
    let Some(sig) = parsing::get_header_value(headers, "X-Signature-Ed25519") else {
        error!("Missing X-Signature-Ed25519 header");
        return Err(helpers::err_response(
            401,
            "Missing X-Signature-Ed25519 header",
        ));
    };

    let Some(timestamp) = parsing::get_header_value(headers, "X-Signature-Timestamp") else {
        error!("Missing X-Signature-Timestamp header");
        return Err(helpers::err_response(
            401,
            "Missing X-Signature-Timestamp header",
        ));
    };

    if !signature::verify_discord_signature(body, timestamp, sig, config) {
        error!("Discord signature verification failed");
        return Err(helpers::err_response(401, "Invalid request signature"));
    }

    Ok(())
}
