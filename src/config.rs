//! Board configuration supplied through Leptos context.
//!
//! Defaults reproduce the stock behaviour: 768 px breakpoint, 20 s reset
//! baseline, `/xx.png` piece artwork, and `/api/ws` for the game socket.
//! Hosts override any field by providing their own `BoardConfig` (it also
//! deserializes from JSON, so it can come from an embedded settings blob).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::state::clock::DEFAULT_BASELINE_SECS;
use crate::state::viewport::DEFAULT_BREAKPOINT_PX;

/// Tunables for the board, its clocks, and its socket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Widest viewport (CSS px) rendered with the narrow layout.
    pub breakpoint_px: u32,
    /// Seconds shown on both clocks right after a reset.
    pub clock_baseline_secs: f64,
    /// URL prefix for piece artwork.
    pub asset_base: String,
    /// File extension for piece artwork.
    pub asset_extension: String,
    /// Websocket path on the current host.
    pub ws_path: String,
    /// First reconnect delay.
    pub reconnect_initial_ms: u32,
    /// Reconnect delay ceiling.
    pub reconnect_max_ms: u32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            breakpoint_px: DEFAULT_BREAKPOINT_PX,
            clock_baseline_secs: DEFAULT_BASELINE_SECS,
            asset_base: "/".to_owned(),
            asset_extension: "png".to_owned(),
            ws_path: "/api/ws".to_owned(),
            reconnect_initial_ms: 1000,
            reconnect_max_ms: 10_000,
        }
    }
}

impl BoardConfig {
    /// Configuration from context, or defaults when none was provided.
    #[must_use]
    pub fn from_context() -> Self {
        leptos::prelude::use_context::<Self>().unwrap_or_default()
    }
}
