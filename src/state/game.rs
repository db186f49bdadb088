//! Caller-owned game session inputs.
//!
//! SYSTEM CONTEXT
//! ==============
//! These values are resolved by the authority and passed into the board as
//! props. The board reads them and never writes them.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use serde::{Deserialize, Serialize};

/// WebSocket connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionStatus {
    /// Not connected; socket is closed or not yet opened.
    #[default]
    Disconnected,
    /// WebSocket handshake is in progress.
    Connecting,
    /// WebSocket is open.
    Connected,
}

impl ConnectionStatus {
    /// Status dot modifier class.
    #[must_use]
    pub fn dot_class(self) -> &'static str {
        match self {
            Self::Connected => "player-clock__dot player-clock__dot--connected",
            Self::Connecting => "player-clock__dot player-clock__dot--connecting",
            Self::Disconnected => "player-clock__dot player-clock__dot--disconnected",
        }
    }
}

/// Identity payload for one seat. Only the name is rendered here; other
/// profile fields are ignored on deserialize.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerInfo {
    #[serde(default)]
    pub name: String,
}

impl PlayerInfo {
    /// Display name, or a placeholder for an empty seat.
    #[must_use]
    pub fn display_name(info: Option<&Self>) -> String {
        info.map(|p| p.name.trim())
            .filter(|name| !name.is_empty())
            .map_or_else(|| "Waiting for player".to_owned(), str::to_owned)
    }
}
