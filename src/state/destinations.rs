//! Legal-destination preview.
//!
//! The preview is always derived from the current selection and game flags;
//! it is never stored on its own, so it cannot lag behind the origin it was
//! computed for.

#[cfg(test)]
#[path = "destinations_test.rs"]
mod destinations_test;

use std::collections::HashSet;

use crate::game::rules::RulesEngine;
use crate::game::square::Square;
use crate::state::selection::SelectionController;

/// Game flags that gate the preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PreviewGate {
    pub started: bool,
    pub game_over: bool,
}

impl PreviewGate {
    #[must_use]
    pub fn is_open(self) -> bool {
        self.started && !self.game_over
    }
}

/// Destinations reachable from `origin`, or the empty set.
///
/// Empty when there is no origin, the game has not started, or it is over.
/// Engine errors also yield the empty set; they are logged, never surfaced.
pub fn compute_destinations(engine: &dyn RulesEngine, origin: Option<Square>, gate: PreviewGate) -> HashSet<Square> {
    let Some(origin) = origin else {
        return HashSet::new();
    };
    if !gate.is_open() {
        return HashSet::new();
    }
    match engine.moves(origin, true) {
        Ok(moves) => moves.into_iter().map(|m| m.to).collect(),
        Err(e) => {
            leptos::logging::debug_warn!("move preview for {origin} unavailable: {e}");
            HashSet::new()
        }
    }
}

/// Preview for the controller's current origin (click first, then drag).
pub fn destinations_for(engine: &dyn RulesEngine, selection: &SelectionController, gate: PreviewGate) -> HashSet<Square> {
    compute_destinations(engine, selection.preview_origin(), gate)
}
