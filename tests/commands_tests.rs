use serde_json::Value;

use duelbot::discord::commands::command_definitions;

#[test]
fn test_command_set_names() {
    let commands = command_definitions();
    let names: Vec<&str> = commands
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c.get("name").and_then(Value::as_str).unwrap())
        .collect();

    assert_eq!(names, vec!["test", "roll", "challenge"]);
}

#[test]
fn test_roll_takes_a_required_notation_string() {
    let commands = command_definitions();
    let option = commands.pointer("/1/options/0").unwrap();

    assert_eq!(option.get("name").and_then(Value::as_str), Some("notation"));
    // Option type 3 is STRING
    assert_eq!(option.get("type").and_then(Value::as_u64), Some(3));
    assert_eq!(option.get("required").and_then(Value::as_bool), Some(true));
}

#[test]
fn test_challenge_choices_cover_the_domain_exactly() {
    let commands = command_definitions();
    let choices = commands
        .pointer("/2/options/0/choices")
        .and_then(Value::as_array)
        .unwrap();

    let values: Vec<&str> = choices
        .iter()
        .map(|c| c.get("value").and_then(Value::as_str).unwrap())
        .collect();

    // The closed three-element domain, nothing else
    assert_eq!(values, vec!["rock", "paper", "scissors"]);
}
