use serde_json::Value;

use crate::errors::DiscordError;

pub const ACCEPT_BUTTON_PREFIX: &str = "accept_button_";
pub const SELECT_CHOICE_PREFIX: &str = "select_choice_";

/// A component `custom_id` parsed into its routing kind and the
/// correlation id it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ComponentAction {
    AcceptChallenge(String),
    SelectChoice(String),
}

impl ComponentAction {
    pub fn parse(custom_id: &str) -> Option<ComponentAction> {
        if let Some(id) = custom_id.strip_prefix(ACCEPT_BUTTON_PREFIX) {
            return Some(ComponentAction::AcceptChallenge(id.to_string()));
        }
        if let Some(id) = custom_id.strip_prefix(SELECT_CHOICE_PREFIX) {
            return Some(ComponentAction::SelectChoice(id.to_string()));
        }
        None
    }
}

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// Identity of the acting user.
///
/// Guild-context interactions carry it under `member.user.id`, DM and
/// private-channel contexts under `user.id`; the numeric `context`
/// field discriminates. Payloads that predate the discriminator omit
/// it, in which case whichever identity object is present wins.
pub fn actor_id(payload: &Value) -> Result<&str, DiscordError> {
    let member_user = v_str(payload, &["member", "user", "id"]);
    let direct_user = v_str(payload, &["user", "id"]);

    match payload.get("context").and_then(Value::as_u64) {
        Some(0) => member_user.ok_or_else(|| {
            DiscordError::Protocol("guild interaction without member.user.id".to_string())
        }),
        Some(1 | 2) => direct_user
            .ok_or_else(|| DiscordError::Protocol("user interaction without user.id".to_string())),
        Some(other) => Err(DiscordError::Protocol(format!(
            "unknown interaction context {}",
            other
        ))),
        None => member_user.or(direct_user).ok_or_else(|| {
            DiscordError::Protocol("interaction without any user identity".to_string())
        }),
    }
}

/// Value of the first slash-command option, where both `roll` and
/// `challenge` carry their single argument.
pub fn first_option_value(payload: &Value) -> Option<&str> {
    payload
        .get("data")?
        .get("options")?
        .as_array()?
        .first()?
        .get("value")?
        .as_str()
}

/// First selected value of a string-select interaction.
pub fn first_select_value(payload: &Value) -> Option<&str> {
    payload
        .get("data")?
        .get("values")?
        .as_array()?
        .first()?
        .as_str()
}

pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}
