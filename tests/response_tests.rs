use serde_json::Value;

use duelbot::api::helpers::{
    accept_button_row, channel_message, choice_select_row, ephemeral_message, err_response, pong,
};
use duelbot::game::rps::{Choice, ChoiceOption};

/// Tests for the response builder functionality
/// These verify that the interaction callback payloads are correctly
/// formatted for both message replies and structured errors.

fn body_of(response: &Value) -> Value {
    let body = response.get("body").and_then(Value::as_str).unwrap();
    serde_json::from_str(body).unwrap()
}

#[test]
fn test_pong_payload() {
    let response = pong();

    assert_eq!(
        response.get("statusCode").and_then(Value::as_u64),
        Some(200)
    );
    // Callback type 1 is the protocol-level acknowledgement
    assert_eq!(body_of(&response), serde_json::json!({ "type": 1 }));
}

#[test]
fn test_channel_message_payload() {
    let response = channel_message("Test message");
    let body = body_of(&response);

    // Callback type 4 replies with a visible channel message
    assert_eq!(body.get("type").and_then(Value::as_u64), Some(4));
    assert_eq!(
        body.pointer("/data/content").and_then(Value::as_str),
        Some("Test message")
    );
    // No visibility flag on a public reply
    assert!(body.pointer("/data/flags").is_none());
}

#[test]
fn test_ephemeral_payload() {
    let response = ephemeral_message("Only for you");
    let body = body_of(&response);

    assert_eq!(
        body.pointer("/data/content").and_then(Value::as_str),
        Some("Only for you")
    );
    // Flag 64 restricts visibility to the invoking user
    assert_eq!(body.pointer("/data/flags").and_then(Value::as_u64), Some(64));
}

#[test]
fn test_err_response_payload() {
    let response = err_response(400, "Unknown command");

    assert_eq!(
        response.get("statusCode").and_then(Value::as_u64),
        Some(400)
    );
    let body: Value =
        serde_json::from_str(response.get("body").and_then(Value::as_str).unwrap()).unwrap();
    assert_eq!(
        body.get("error").and_then(Value::as_str),
        Some("Unknown command")
    );
}

#[test]
fn test_accept_button_row_embeds_the_session_id() {
    let row = accept_button_row("game-42");
    let button = row.pointer("/0/components/0").unwrap();

    assert_eq!(button.get("type").and_then(Value::as_u64), Some(2));
    assert_eq!(
        button.get("custom_id").and_then(Value::as_str),
        Some("accept_button_game-42")
    );
    assert_eq!(button.get("label").and_then(Value::as_str), Some("Accept"));
}

#[test]
fn test_choice_select_row_carries_the_options_in_order() {
    let options = vec![
        ChoiceOption {
            choice: Choice::Scissors,
            label: "Scissors".to_string(),
        },
        ChoiceOption {
            choice: Choice::Rock,
            label: "Rock".to_string(),
        },
        ChoiceOption {
            choice: Choice::Paper,
            label: "Paper".to_string(),
        },
    ];

    let row = choice_select_row("game-42", &options);
    let select = row.pointer("/0/components/0").unwrap();

    assert_eq!(select.get("type").and_then(Value::as_u64), Some(3));
    assert_eq!(
        select.get("custom_id").and_then(Value::as_str),
        Some("select_choice_game-42")
    );

    // The presentation order given by the shuffler is preserved
    let values: Vec<&str> = select
        .get("options")
        .and_then(Value::as_array)
        .unwrap()
        .iter()
        .map(|o| o.get("value").and_then(Value::as_str).unwrap())
        .collect();
    assert_eq!(values, vec!["scissors", "rock", "paper"]);
}
