use serde_json::json;

use duelbot::api::parsing::{
    ComponentAction, actor_id, first_option_value, first_select_value, get_header_value, v_str,
};
use duelbot::errors::DiscordError;

#[test]
fn test_component_action_parse() {
    assert_eq!(
        ComponentAction::parse("accept_button_12345"),
        Some(ComponentAction::AcceptChallenge("12345".to_string()))
    );
    assert_eq!(
        ComponentAction::parse("select_choice_12345"),
        Some(ComponentAction::SelectChoice("12345".to_string()))
    );

    // No known prefix matches
    assert_eq!(ComponentAction::parse("decline_button_12345"), None);
    assert_eq!(ComponentAction::parse(""), None);
    assert_eq!(ComponentAction::parse("accept_butto"), None);
}

#[test]
fn test_v_str_walks_nested_objects() {
    let payload = json!({ "member": { "user": { "id": "U1" } } });

    assert_eq!(v_str(&payload, &["member", "user", "id"]), Some("U1"));
    assert_eq!(v_str(&payload, &["member", "user", "name"]), None);
    assert_eq!(v_str(&payload, &["user", "id"]), None);
}

#[test]
fn test_actor_id_guild_context() {
    // Context 0 is a guild invocation: identity lives in member.user.id
    let payload = json!({
        "context": 0,
        "member": { "user": { "id": "guild-user" } },
        "user": { "id": "should-not-win" },
    });

    assert_eq!(actor_id(&payload).unwrap(), "guild-user");
}

#[test]
fn test_actor_id_dm_contexts() {
    // Contexts 1 and 2 are DM-ish invocations: identity lives in user.id
    for context in [1, 2] {
        let payload = json!({
            "context": context,
            "user": { "id": "dm-user" },
        });
        assert_eq!(actor_id(&payload).unwrap(), "dm-user");
    }
}

#[test]
fn test_actor_id_unknown_context_fails_loudly() {
    let payload = json!({
        "context": 3,
        "member": { "user": { "id": "someone" } },
        "user": { "id": "someone" },
    });

    match actor_id(&payload) {
        Err(DiscordError::Protocol(msg)) => assert!(msg.contains("context")),
        other => panic!("expected a Protocol error, got {other:?}"),
    }
}

#[test]
fn test_actor_id_missing_context_falls_back() {
    // Payloads predating the discriminator omit it entirely
    let guild_shaped = json!({ "member": { "user": { "id": "legacy-guild" } } });
    assert_eq!(actor_id(&guild_shaped).unwrap(), "legacy-guild");

    let dm_shaped = json!({ "user": { "id": "legacy-dm" } });
    assert_eq!(actor_id(&dm_shaped).unwrap(), "legacy-dm");

    let nothing = json!({});
    assert!(matches!(
        actor_id(&nothing),
        Err(DiscordError::Protocol(_))
    ));
}

#[test]
fn test_actor_id_context_present_but_identity_missing() {
    // A guild-context payload without member.user.id is malformed
    let payload = json!({ "context": 0, "user": { "id": "wrong-slot" } });
    assert!(matches!(actor_id(&payload), Err(DiscordError::Protocol(_))));
}

#[test]
fn test_first_option_value() {
    let payload = json!({
        "data": { "options": [ { "name": "notation", "value": "2d20" } ] }
    });
    assert_eq!(first_option_value(&payload), Some("2d20"));

    assert_eq!(first_option_value(&json!({ "data": {} })), None);
    assert_eq!(
        first_option_value(&json!({ "data": { "options": [] } })),
        None
    );
}

#[test]
fn test_first_select_value() {
    let payload = json!({ "data": { "values": ["scissors"] } });
    assert_eq!(first_select_value(&payload), Some("scissors"));

    assert_eq!(first_select_value(&json!({ "data": {} })), None);
}

#[test]
fn test_get_header_value_is_case_insensitive() {
    let headers = json!({ "x-signature-ed25519": "abc" });

    assert_eq!(get_header_value(&headers, "X-Signature-Ed25519"), Some("abc"));
    assert_eq!(get_header_value(&headers, "x-signature-ed25519"), Some("abc"));
    assert_eq!(get_header_value(&headers, "X-Signature-Timestamp"), None);
}
