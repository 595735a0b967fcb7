//! Handler for message component interactions.
//!
//! This module processes the two component kinds the bot emits:
//! - `accept_button_<id>` - the challenge Accept button
//! - `select_choice_<id>` - the object string-select shown after accepting

use serde_json::Value;
use tracing::{error, info};

use super::helpers::{
    channel_message, choice_select_row, delete_message_with_timeout, ephemeral_message,
    ephemeral_message_with_components, err_response,
};
use super::parsing::{ComponentAction, actor_id, first_select_value, v_str};
use crate::core::config::AppConfig;
use crate::game::rps::{self, Choice, Outcome};
use crate::game::session::{GameSession, SessionStore};

const SESSION_GONE: &str = "This challenge has expired or was already played.";

/// Bound on how long the handler waits for the challenge-message
/// cleanup before letting it finish in the background.
const CLEANUP_TIMEOUT_MS: u64 = 2000;

// ============================================================================
// Main Entry Point
// ============================================================================

/// Handle a component interaction, routed by `custom_id` prefix.
///
/// # Arguments
/// - `config`: Application configuration
/// - `store`: Process-wide session store for pending challenges
/// - `payload`: The verified interaction payload
///
/// # Returns
/// A JSON response value to send back to Discord.
pub async fn handle_component(config: &AppConfig, store: &SessionStore, payload: &Value) -> Value {
    let Some(custom_id) = v_str(payload, &["data", "custom_id"]) else {
        error!("Component interaction missing data.custom_id");
        return err_response(400, "Missing component identifier");
    };

    match ComponentAction::parse(custom_id) {
        Some(ComponentAction::AcceptChallenge(session_id)) => {
            handle_accept(config, store, payload, &session_id).await
        }
        Some(ComponentAction::SelectChoice(session_id)) => {
            handle_choice(store, payload, &session_id)
        }
        None => {
            error!("Unknown component interaction: {}", custom_id);
            err_response(400, "Unknown component interaction")
        }
    }
}

// ============================================================================
// Component Handlers
// ============================================================================

/// Accept button click: show the acceptor an ephemeral object select,
/// then clear away the challenge message with its now-stale button.
async fn handle_accept(
    config: &AppConfig,
    store: &SessionStore,
    payload: &Value,
    session_id: &str,
) -> Value {
    if store.get(session_id).is_none() {
        info!("Accept clicked for unknown session {}", session_id);
        return ephemeral_message(SESSION_GONE);
    }

    let options = rps::shuffled_options(&mut rand::thread_rng());
    let reply = ephemeral_message_with_components(
        "What is your object of choice?",
        choice_select_row(session_id, &options),
    );

    match (v_str(payload, &["token"]), v_str(payload, &["message", "id"])) {
        (Some(token), Some(message_id)) => {
            delete_message_with_timeout(config, token, message_id, CLEANUP_TIMEOUT_MS).await;
        }
        _ => error!("Accept interaction missing token or message id, skipping cleanup"),
    }

    reply
}

/// Object selection: resolve against the stored challenger choice,
/// announce the outcome, and retire the session.
fn handle_choice(store: &SessionStore, payload: &Value, session_id: &str) -> Value {
    let Some(session) = store.get(session_id) else {
        info!("Choice made for unknown session {}", session_id);
        return ephemeral_message(SESSION_GONE);
    };

    let responder_id = match actor_id(payload) {
        Ok(id) => id.to_string(),
        Err(e) => {
            error!("{}", e);
            return err_response(400, "Unrecognized interaction context");
        }
    };

    let Some(value) = first_select_value(payload) else {
        error!("Select interaction without a selected value");
        return err_response(400, "Missing selection");
    };
    let Some(responder_choice) = Choice::parse(value) else {
        // Our own menu is closed over the domain, so this only happens
        // on a forged payload.
        error!("Selection outside the choice domain: {}", value);
        return err_response(400, "Unknown selection");
    };

    let content = describe_duel(&session, &responder_id, responder_choice);
    store.delete(session_id);
    info!("Challenge {} resolved", session_id);

    channel_message(&content)
}

fn describe_duel(session: &GameSession, responder_id: &str, responder_choice: Choice) -> String {
    let challenger_id = &session.challenger_id;
    let challenger_choice = session.challenger_choice;

    match rps::resolve(challenger_choice, responder_choice) {
        Outcome::Tie => format!(
            "It's a tie! Both <@{}> and <@{}> chose {}.",
            challenger_id,
            responder_id,
            challenger_choice.as_str()
        ),
        Outcome::FirstWins => format!(
            "<@{}>'s {} beats <@{}>'s {}!",
            challenger_id,
            challenger_choice.as_str(),
            responder_id,
            responder_choice.as_str()
        ),
        Outcome::SecondWins => format!(
            "<@{}>'s {} beats <@{}>'s {}!",
            responder_id,
            responder_choice.as_str(),
            challenger_id,
            challenger_choice.as_str()
        ),
    }
}
