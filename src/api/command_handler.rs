//! Handler for slash commands (`/test`, `/roll`, `/challenge`).

use rand::seq::SliceRandom;
use serde_json::Value;
use tracing::{error, info};

use super::helpers::{
    accept_button_row, channel_message, channel_message_with_components, err_response,
};
use super::parsing::{actor_id, first_option_value, v_str};
use crate::game::dice::DiceNotation;
use crate::game::rps::Choice;
use crate::game::session::SessionStore;

const GREETING_EMOJI: [&str; 10] = ["😄", "😌", "🤓", "😎", "🤖", "🌏", "📸", "👋", "🌊", "✨"];

// ============================================================================
// Main Entry Point
// ============================================================================

/// Handle a slash-command interaction, routed by command name.
///
/// # Arguments
/// - `store`: Process-wide session store for pending challenges
/// - `payload`: The verified interaction payload
///
/// # Returns
/// A JSON response value to send back to Discord.
pub fn handle_command(store: &SessionStore, payload: &Value) -> Value {
    let Some(name) = v_str(payload, &["data", "name"]) else {
        error!("Command interaction missing data.name");
        return err_response(400, "Missing command name");
    };

    match name {
        "test" => handle_test(),
        "roll" => handle_roll(payload),
        "challenge" => handle_challenge(store, payload),
        _ => {
            error!("Unknown command: {}", name);
            err_response(400, "Unknown command")
        }
    }
}

// ============================================================================
// Command Handlers
// ============================================================================

fn handle_test() -> Value {
    let emoji = GREETING_EMOJI
        .choose(&mut rand::thread_rng())
        .copied()
        .unwrap_or("👋");

    channel_message(&format!("hello world {}", emoji))
}

fn handle_roll(payload: &Value) -> Value {
    let Some(notation) = first_option_value(payload) else {
        return channel_message("❌ Missing dice notation. Use the format like 2d20 or 1d4.");
    };

    match DiceNotation::parse(notation) {
        Ok(notation) => {
            let result = notation.roll(&mut rand::thread_rng());
            channel_message(&result.describe())
        }
        Err(e) => channel_message(&format!("❌ {}", e)),
    }
}

fn handle_challenge(store: &SessionStore, payload: &Value) -> Value {
    let Some(interaction_id) = v_str(payload, &["id"]) else {
        error!("Challenge interaction missing id");
        return err_response(400, "Missing interaction id");
    };

    let challenger_id = match actor_id(payload) {
        Ok(id) => id,
        Err(e) => {
            error!("{}", e);
            return err_response(400, "Unrecognized interaction context");
        }
    };

    let Some(object) = first_option_value(payload) else {
        return channel_message("❌ Missing object choice. Pick rock, paper, or scissors.");
    };
    let Some(choice) = Choice::parse(object) else {
        return channel_message("❌ Unknown object. Pick rock, paper, or scissors.");
    };

    store.create(interaction_id, challenger_id, choice);
    info!("Challenge {} opened by {}", interaction_id, challenger_id);

    channel_message_with_components(
        &format!("Rock papers scissors challenge from <@{}>", challenger_id),
        accept_button_row(interaction_id),
    )
}
