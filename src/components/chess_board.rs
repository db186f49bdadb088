//! Interactive chess board: selection, destination preview, clocks, layout.
//!
//! SYSTEM CONTEXT
//! ==============
//! The caller owns every game fact (board snapshot, turn, started/over flags,
//! players, rules engine) and passes them as signals. This component owns
//! only input state, the derived destination set, the displayed clocks and
//! the layout flag, and emits move proposals on the shared `GameSocket`.
//!
//! DESIGN
//! ======
//! Gestures mutate a `SelectionController`; destinations are a `Memo` over
//! it, so the preview always follows the latest origin. The clock listener
//! and the media listener are scoped to this component and released on
//! cleanup (and, for the clock, whenever the socket identity changes).

#[cfg(test)]
#[path = "chess_board_test.rs"]
mod chess_board_test;

use leptos::prelude::*;

use crate::components::board_grid::BoardGrid;
use crate::components::player_clock::PlayerClock;
use crate::config::BoardConfig;
use crate::game::board::Board;
use crate::game::piece::PieceColor;
use crate::game::rules::RulesHandle;
use crate::game::square::Square;
use crate::net::socket::GameSocket;
use crate::net::types::move_frame;
use crate::state::clock::{ClockState, ClockSync};
use crate::state::destinations::{PreviewGate, destinations_for};
use crate::state::game::{ConnectionStatus, PlayerInfo};
use crate::state::selection::{MoveProposal, SelectionController};
use crate::state::viewport::LayoutState;
use crate::util::media_query::observe_layout;

/// The board with both player strips.
///
/// `reset_trigger` is a token: any change to it resets both clocks to the
/// configured baseline. Selection state is untouched.
#[component]
pub fn ChessBoard(
    #[prop(into)] board: Signal<Board>,
    #[prop(into)] color: Signal<PieceColor>,
    #[prop(into)] started: Signal<bool>,
    #[prop(into)] turn: Signal<PieceColor>,
    #[prop(into)] reset_trigger: Signal<u64>,
    #[prop(into)] connection: Signal<ConnectionStatus>,
    #[prop(into)] game_id: Signal<String>,
    #[prop(into)] player: Signal<Option<PlayerInfo>>,
    #[prop(into)] opponent: Signal<Option<PlayerInfo>>,
    #[prop(into)] game_over: Signal<bool>,
    #[prop(into)] rules: Signal<RulesHandle>,
) -> impl IntoView {
    let config = BoardConfig::from_context();
    let socket = use_context::<RwSignal<Option<GameSocket>>>();

    let selection = RwSignal::new(SelectionController::default());
    let clocks = RwSignal::new(ClockState::baseline(config.clock_baseline_secs));
    let layout = RwSignal::new(LayoutState::default());

    let destinations = Memo::new(move |_| {
        let gate = PreviewGate {
            started: started.get(),
            game_over: game_over.get(),
        };
        let controller = selection.get();
        rules.with(|handle| destinations_for(handle.engine(), &controller, gate))
    });

    // PHASE: CLOCK LISTENER
    // One listener per socket identity; a reconnect moves it to the new socket.
    let clock_sync = StoredValue::new(ClockSync::new());
    Effect::new(move || {
        let current = socket.and_then(|s| s.get());
        clock_sync.update_value(|sync| match current {
            Some(socket) => {
                if sync.attach(&socket, move |next| clocks.set(next)) {
                    leptos::logging::log!("clock listener attached to socket {}", socket.identity());
                }
            }
            None => sync.detach(),
        });
    });
    on_cleanup(move || {
        clock_sync.update_value(ClockSync::detach);
    });

    // PHASE: RESET
    // Optimistic local baseline; the next push replaces it.
    let baseline_secs = config.clock_baseline_secs;
    Effect::new(move |previous: Option<u64>| {
        let token = reset_trigger.get();
        if let Some(baseline) = apply_reset(previous, token, baseline_secs) {
            clocks.set(baseline);
        }
        token
    });

    // PHASE: VIEWPORT
    // The watch is owned by this component; dropping it removes the listener.
    let _media_watch = StoredValue::new_local(observe_layout(config.breakpoint_px, move |next| layout.set(next)));

    let send_proposal = move |proposal: MoveProposal| {
        let frame = move_frame(&game_id.get_untracked(), proposal);
        let sent = socket
            .and_then(|s| s.get_untracked())
            .is_some_and(|s| s.emit(&frame));
        if !sent {
            leptos::logging::warn!("move {} -> {} not sent: no open socket", proposal.from, proposal.to);
        }
    };

    let on_square_click = Callback::new(move |square: Square| {
        let occupied = board.with_untracked(|b| b.is_occupied(square));
        if let Some(proposal) = selection.try_update(|s| s.on_square_click(square, occupied)).flatten() {
            send_proposal(proposal);
        }
    });
    let on_drag_start = Callback::new(move |square: Square| {
        selection.update(|s| s.on_drag_start(square));
    });
    let on_drag_end = Callback::new(move |()| {
        selection.update(SelectionController::on_drag_end);
    });
    let on_drop = Callback::new(move |square: Square| {
        if let Some(proposal) = selection.try_update(|s| s.on_drop(square)).flatten() {
            send_proposal(proposal);
        }
    });

    let opponent_side = Signal::derive(move || color.get().opponent());
    let click_origin = Signal::derive(move || selection.with(SelectionController::click_origin));
    let root_class = move || board_class(layout.get());

    view! {
        <div class=root_class>
            <PlayerClock
                player=opponent
                side=opponent_side
                clocks=clocks
                turn=turn
                started=started
                game_over=game_over
                connection=connection
            />
            <BoardGrid
                board=board
                perspective=color
                destinations=destinations
                selected=click_origin
                on_square_click=on_square_click
                on_drag_start=on_drag_start
                on_drag_end=on_drag_end
                on_drop=on_drop
            />
            <PlayerClock
                player=player
                side=color
                clocks=clocks
                turn=turn
                started=started
                game_over=game_over
                connection=connection
            />
        </div>
    }
}

/// Whether the reset token moved since the last run. The first run only
/// records the token.
#[must_use]
pub fn reset_fired(previous: Option<u64>, current: u64) -> bool {
    previous.is_some_and(|previous| previous != current)
}

/// Clocks to show after the reset effect sees `token`, or `None` to keep
/// the current ones.
#[must_use]
pub fn apply_reset(previous: Option<u64>, token: u64, baseline_secs: f64) -> Option<ClockState> {
    reset_fired(previous, token).then(|| ClockState::baseline(baseline_secs))
}

/// Root class for the board at `layout`.
#[must_use]
pub fn board_class(layout: LayoutState) -> String {
    format!("chess-board {}", layout.class())
}
