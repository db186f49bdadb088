use std::cell::Cell;
use std::collections::HashMap;

use super::*;
use crate::game::rules::{MoveDescriptor, RulesError};
use crate::state::selection::MoveProposal;

// =============================================================
// Helpers
// =============================================================

fn sq(name: &str) -> Square {
    name.parse().expect("valid square")
}

/// Engine stub answering from a fixed table and counting queries.
#[derive(Default)]
struct TableEngine {
    moves: HashMap<Square, Vec<Square>>,
    calls: Cell<usize>,
}

impl TableEngine {
    fn with(mut self, from: &str, to: &[&str]) -> Self {
        self.moves.insert(sq(from), to.iter().map(|t| sq(t)).collect());
        self
    }
}

impl RulesEngine for TableEngine {
    fn moves(&self, square: Square, verbose: bool) -> Result<Vec<MoveDescriptor>, RulesError> {
        assert!(verbose, "preview always asks for verbose descriptors");
        self.calls.set(self.calls.get() + 1);
        Ok(self
            .moves
            .get(&square)
            .map(|to| to.iter().copied().map(MoveDescriptor::to).collect())
            .unwrap_or_default())
    }
}

struct FailingEngine(RulesError);

impl RulesEngine for FailingEngine {
    fn moves(&self, _square: Square, _verbose: bool) -> Result<Vec<MoveDescriptor>, RulesError> {
        Err(self.0.clone())
    }
}

const LIVE: PreviewGate = PreviewGate { started: true, game_over: false };

fn set(names: &[&str]) -> HashSet<Square> {
    names.iter().map(|n| sq(n)).collect()
}

// =============================================================
// Gating
// =============================================================

#[test]
fn no_origin_yields_empty_without_querying() {
    let engine = TableEngine::default().with("e2", &["e3", "e4"]);
    assert!(compute_destinations(&engine, None, LIVE).is_empty());
    assert_eq!(engine.calls.get(), 0);
}

#[test]
fn not_started_or_game_over_yields_empty() {
    let engine = TableEngine::default().with("e2", &["e3", "e4"]);
    let not_started = PreviewGate { started: false, game_over: false };
    let over = PreviewGate { started: true, game_over: true };
    assert!(compute_destinations(&engine, Some(sq("e2")), not_started).is_empty());
    assert!(compute_destinations(&engine, Some(sq("e2")), over).is_empty());
    assert_eq!(engine.calls.get(), 0);
}

#[test]
fn live_game_collects_destination_squares() {
    let engine = TableEngine::default().with("g1", &["f3", "h3"]);
    assert_eq!(compute_destinations(&engine, Some(sq("g1")), LIVE), set(&["f3", "h3"]));
}

#[test]
fn duplicate_destinations_collapse() {
    // Promotions report the same destination once per promotion piece.
    let engine = TableEngine::default().with("a7", &["a8", "a8", "a8", "a8"]);
    assert_eq!(compute_destinations(&engine, Some(sq("a7")), LIVE), set(&["a8"]));
}

#[test]
fn engine_errors_degrade_to_empty() {
    for err in [
        RulesError::NotReady,
        RulesError::InvalidSquare("z9".to_owned()),
        RulesError::Engine("boom".to_owned()),
    ] {
        let engine = FailingEngine(err);
        assert!(compute_destinations(&engine, Some(sq("e2")), LIVE).is_empty());
    }
}

// =============================================================
// Origin precedence
// =============================================================

#[test]
fn click_origin_takes_precedence_over_drag_origin() {
    let engine = TableEngine::default().with("b1", &["a3", "c3"]).with("g1", &["f3", "h3"]);
    let mut ctl = SelectionController::default();
    ctl.on_drag_start(sq("b1"));
    assert_eq!(destinations_for(&engine, &ctl, LIVE), set(&["a3", "c3"]));
    ctl.on_square_click(sq("g1"), true);
    assert_eq!(destinations_for(&engine, &ctl, LIVE), set(&["f3", "h3"]));
}

#[test]
fn stale_origin_is_ignored_once_game_is_over() {
    let engine = TableEngine::default().with("e2", &["e4"]);
    let mut ctl = SelectionController::default();
    ctl.on_square_click(sq("e2"), true);
    let over = PreviewGate { started: true, game_over: true };
    assert!(destinations_for(&engine, &ctl, over).is_empty());
}

// =============================================================
// End to end
// =============================================================

#[test]
fn click_select_preview_then_click_target_emits_and_clears_preview() {
    let engine = TableEngine::default().with("e2", &["e3", "e4"]);
    let mut ctl = SelectionController::default();

    assert!(ctl.on_square_click(sq("e2"), true).is_none());
    assert_eq!(destinations_for(&engine, &ctl, LIVE), set(&["e3", "e4"]));

    let emitted = ctl.on_square_click(sq("e4"), false);
    assert_eq!(emitted, Some(MoveProposal { from: sq("e2"), to: sq("e4") }));
    assert_eq!(ctl.state(), crate::state::selection::SelectionState::Idle);
    assert!(destinations_for(&engine, &ctl, LIVE).is_empty());
}
