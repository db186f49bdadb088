//! Wire-protocol DTOs for the game socket.
//!
//! DESIGN
//! ======
//! Every message is a JSON `Frame` envelope naming an event (`syscall`) and
//! carrying a free-form `data` payload. Payloads this crate understands get
//! typed structs so serde does the shape checking.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::selection::MoveProposal;

/// Outbound move proposal event.
pub const MOVE_SYSCALL: &str = "move";
/// Inbound clock push event.
pub const TIME_UPDATE_SYSCALL: &str = "time_update";

/// Lifecycle status of a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameStatus {
    /// Client-originated request.
    Request,
    /// Server push or streamed item.
    Item,
    /// Successful terminal response.
    Done,
    /// Error terminal response.
    Error,
}

/// A single message on the game socket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Unique identifier for this frame (UUID string).
    pub id: String,
    /// ID of the request frame this is responding to, if any.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Milliseconds since the Unix epoch; 0 for client-built frames.
    #[serde(default)]
    pub ts: i64,
    /// Game this frame belongs to, if any.
    #[serde(default)]
    pub game_id: Option<String>,
    /// Event name, e.g. `"move"` or `"time_update"`.
    pub syscall: String,
    pub status: FrameStatus,
    /// Event payload.
    #[serde(default)]
    pub data: serde_json::Value,
}

impl Frame {
    /// New client request frame with a fresh id.
    #[must_use]
    pub fn request(syscall: &str, game_id: Option<String>, data: serde_json::Value) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            parent_id: None,
            ts: 0,
            game_id,
            syscall: syscall.to_owned(),
            status: FrameStatus::Request,
            data,
        }
    }
}

/// Payload of a `move` frame: `{ move: { from, to }, gameId }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovePayload {
    #[serde(rename = "move")]
    pub proposal: MoveProposal,
    #[serde(rename = "gameId")]
    pub game_id: String,
}

/// Payload of a `time_update` frame, in milliseconds remaining.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClockUpdate {
    pub white: f64,
    pub black: f64,
}

/// Build the outbound frame for a move proposal.
#[must_use]
pub fn move_frame(game_id: &str, proposal: MoveProposal) -> Frame {
    let payload = MovePayload {
        proposal,
        game_id: game_id.to_owned(),
    };
    let data = serde_json::to_value(&payload).unwrap_or_default();
    Frame::request(MOVE_SYSCALL, Some(game_id.to_owned()), data)
}

/// Encode a frame as JSON text.
///
/// # Errors
///
/// Returns the serializer error if the payload cannot be encoded.
pub fn encode_frame(frame: &Frame) -> Result<String, serde_json::Error> {
    serde_json::to_string(frame)
}

/// Decode a frame from JSON text.
///
/// # Errors
///
/// Returns the deserializer error for malformed or mis-shaped text.
pub fn decode_frame(text: &str) -> Result<Frame, serde_json::Error> {
    serde_json::from_str(text)
}
