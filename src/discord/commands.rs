//! Slash-command definitions submitted to Discord at registration time.

use serde_json::{Value, json};

use crate::game::rps::Choice;

// Application command option type for a string argument.
const OPTION_TYPE_STRING: u64 = 3;

/// The command set this endpoint answers: `test`, `roll`, `challenge`.
#[must_use]
pub fn command_definitions() -> Value {
    let choices: Vec<Value> = Choice::ALL
        .iter()
        .map(|c| json!({ "name": c.label(), "value": c.as_str() }))
        .collect();

    json!([
        {
            "name": "test",
            "description": "A test command",
        },
        {
            "name": "roll",
            "description": "Roll some dice! Format: XdY (e.g., 2d20)",
            "options": [
                {
                    "name": "notation",
                    "description": "Dice notation like 2d20 or 1d6",
                    "type": OPTION_TYPE_STRING,
                    "required": true,
                }
            ],
        },
        {
            "name": "challenge",
            "description": "Challenge someone to rock-paper-scissors!",
            "options": [
                {
                    "name": "object",
                    "description": "Choose your object (rock, paper, scissors)",
                    "type": OPTION_TYPE_STRING,
                    "required": true,
                    "choices": choices,
                }
            ],
        },
    ])
}
