//! Common helper functions for API handlers.
//!
//! This module provides response builders, interaction component
//! builders, and the shared fire-and-forget cleanup operation.

use serde_json::{Value, json};
use std::time::Duration;
use tracing::error;
use uuid::Uuid;

use super::parsing::{ACCEPT_BUTTON_PREFIX, SELECT_CHOICE_PREFIX};
use crate::core::config::AppConfig;
use crate::discord::{
    self, BUTTON_STYLE_PRIMARY, COMPONENT_ACTION_ROW, COMPONENT_BUTTON, COMPONENT_STRING_SELECT,
    DiscordClient, FLAG_EPHEMERAL,
};
use crate::game::rps::ChoiceOption;

// ============================================================================
// Response Builders
// ============================================================================

/// Returns a 200 OK response acknowledging a protocol ping.
#[must_use]
pub fn pong() -> Value {
    json!({
        "statusCode": 200,
        "body": json!({ "type": discord::CALLBACK_PONG }).to_string()
    })
}

fn message_callback(data: Value) -> Value {
    json!({
        "statusCode": 200,
        "body": json!({
            "type": discord::CALLBACK_CHANNEL_MESSAGE_WITH_SOURCE,
            "data": data,
        })
        .to_string()
    })
}

/// Returns a 200 OK response with a channel message reply.
#[must_use]
pub fn channel_message(content: &str) -> Value {
    message_callback(json!({ "content": content }))
}

/// Returns a 200 OK response with a channel message carrying components.
#[must_use]
pub fn channel_message_with_components(content: &str, components: Value) -> Value {
    message_callback(json!({ "content": content, "components": components }))
}

/// Returns a 200 OK response with a reply visible only to the actor.
#[must_use]
pub fn ephemeral_message(content: &str) -> Value {
    message_callback(json!({ "content": content, "flags": FLAG_EPHEMERAL }))
}

/// Ephemeral variant of [`channel_message_with_components`].
#[must_use]
pub fn ephemeral_message_with_components(content: &str, components: Value) -> Value {
    message_callback(json!({
        "content": content,
        "flags": FLAG_EPHEMERAL,
        "components": components,
    }))
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}

// ============================================================================
// Component Builders
// ============================================================================

/// Action row with the primary Accept button for a challenge. The
/// session id rides in the `custom_id`, so the accept click routes
/// without any extra lookup key.
#[must_use]
pub fn accept_button_row(session_id: &str) -> Value {
    json!([
        {
            "type": COMPONENT_ACTION_ROW,
            "components": [
                {
                    "type": COMPONENT_BUTTON,
                    "custom_id": format!("{ACCEPT_BUTTON_PREFIX}{session_id}"),
                    "label": "Accept",
                    "style": BUTTON_STYLE_PRIMARY,
                }
            ],
        }
    ])
}

/// Action row with the object string-select for an accepted challenge.
#[must_use]
pub fn choice_select_row(session_id: &str, options: &[ChoiceOption]) -> Value {
    let options: Vec<Value> = options
        .iter()
        .map(|option| {
            json!({
                "label": option.label,
                "value": option.choice.as_str(),
            })
        })
        .collect();

    json!([
        {
            "type": COMPONENT_ACTION_ROW,
            "components": [
                {
                    "type": COMPONENT_STRING_SELECT,
                    "custom_id": format!("{SELECT_CHOICE_PREFIX}{session_id}"),
                    "options": options,
                }
            ],
        }
    ])
}

// ============================================================================
// Message Operations
// ============================================================================

/// Deletes an interaction's original message with a timeout.
///
/// This spawns an async task for the deletion and waits up to
/// `timeout_ms` for it to complete. If the timeout fires, the deletion
/// continues in the background. Failures are logged and swallowed;
/// they must never affect the reply already built for the actor.
pub async fn delete_message_with_timeout(
    config: &AppConfig,
    interaction_token: &str,
    message_id: &str,
    timeout_ms: u64,
) {
    let client = DiscordClient::new(config);
    let interaction_token = interaction_token.to_string();
    let message_id = message_id.to_string();
    let correlation_id = Uuid::new_v4().to_string();

    let delete_handle = tokio::spawn(async move {
        if let Err(e) = client
            .delete_original_message(&interaction_token, &message_id)
            .await
        {
            error!(
                "Failed to delete challenge message (correlation_id={}): {}",
                correlation_id, e
            );
        }
    });

    let _ = tokio::time::timeout(Duration::from_millis(timeout_ms), delete_handle).await;
}
