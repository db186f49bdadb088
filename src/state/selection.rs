//! Move-input state machine.
//!
//! DESIGN
//! ======
//! Click and drag are two separate gesture channels. The click channel is an
//! explicit `SelectionState`; the drag channel is an independent optional
//! origin that may coexist with it. Every transition is synchronous and at
//! most one `MoveProposal` leaves per completed click pair or drop.
//!
//! Nothing here checks legality or turn order; the authority rejects bad
//! proposals.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

use serde::{Deserialize, Serialize};

use crate::game::square::Square;

/// Click-channel selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionState {
    /// No origin chosen.
    #[default]
    Idle,
    /// Origin chosen by click, waiting for a destination click.
    ClickOrigin(Square),
}

/// A proposed move, sent to the authority as-is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveProposal {
    pub from: Square,
    pub to: Square,
}

/// Owns both gesture channels and interprets raw gestures.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionController {
    selection: SelectionState,
    drag_origin: Option<Square>,
}

impl SelectionController {
    #[must_use]
    pub fn state(&self) -> SelectionState {
        self.selection
    }

    /// Square chosen by click, if any.
    #[must_use]
    pub fn click_origin(&self) -> Option<Square> {
        match self.selection {
            SelectionState::Idle => None,
            SelectionState::ClickOrigin(square) => Some(square),
        }
    }

    /// Square a drag started from, while the drag is live.
    #[must_use]
    pub fn drag_origin(&self) -> Option<Square> {
        self.drag_origin
    }

    /// Origin used for the destination preview.
    ///
    /// A click origin wins; the drag origin is only a fallback.
    #[must_use]
    pub fn preview_origin(&self) -> Option<Square> {
        self.click_origin().or(self.drag_origin)
    }

    /// Handle a click on `square`.
    ///
    /// From `Idle`, an occupied square becomes the click origin and an empty
    /// one is ignored. With an origin, clicking it again deselects; clicking
    /// anywhere else proposes `origin -> square` and returns to `Idle`.
    pub fn on_square_click(&mut self, square: Square, occupied: bool) -> Option<MoveProposal> {
        match self.selection {
            SelectionState::Idle => {
                if occupied {
                    self.selection = SelectionState::ClickOrigin(square);
                }
                None
            }
            SelectionState::ClickOrigin(origin) if origin == square => {
                self.selection = SelectionState::Idle;
                None
            }
            SelectionState::ClickOrigin(origin) => {
                self.selection = SelectionState::Idle;
                Some(MoveProposal { from: origin, to: square })
            }
        }
    }

    /// Start a drag from `square`. Drops any click origin.
    pub fn on_drag_start(&mut self, square: Square) {
        self.drag_origin = Some(square);
        self.selection = SelectionState::Idle;
    }

    /// End of a drag, whether or not it landed on a square.
    pub fn on_drag_end(&mut self) {
        self.drag_origin = None;
    }

    /// Drop on `square`. Proposes `drag_origin -> square` when a drag is live.
    pub fn on_drop(&mut self, square: Square) -> Option<MoveProposal> {
        let from = self.drag_origin.take()?;
        self.selection = SelectionState::Idle;
        Some(MoveProposal { from, to: square })
    }
}
