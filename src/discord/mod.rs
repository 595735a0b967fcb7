//! All Discord-specific functionality: wire constants, the outbound
//! webhook client, and slash-command definitions.

pub mod client;
pub mod commands;

// Re-export main types for convenience
pub use client::{DEFAULT_API_BASE, DiscordClient};

// Interaction types ("Interaction Object" in the Discord developer docs).
pub const INTERACTION_PING: u64 = 1;
pub const INTERACTION_APPLICATION_COMMAND: u64 = 2;
pub const INTERACTION_MESSAGE_COMPONENT: u64 = 3;

// Interaction callback types.
pub const CALLBACK_PONG: u64 = 1;
pub const CALLBACK_CHANNEL_MESSAGE_WITH_SOURCE: u64 = 4;

// Message component types.
pub const COMPONENT_ACTION_ROW: u64 = 1;
pub const COMPONENT_BUTTON: u64 = 2;
pub const COMPONENT_STRING_SELECT: u64 = 3;

pub const BUTTON_STYLE_PRIMARY: u64 = 1;

/// Message flag marking a reply visible only to the invoking user.
pub const FLAG_EPHEMERAL: u64 = 1 << 6;
