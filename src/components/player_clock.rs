//! Player strip showing name, remaining time, turn marker and connection dot.
//!
//! SYSTEM CONTEXT
//! ==============
//! The board renders two strips: the opponent above the grid and the viewer
//! below it. Times come from `ClockSync`; everything else is a caller prop.

#[cfg(test)]
#[path = "player_clock_test.rs"]
mod player_clock_test;

use leptos::prelude::*;

use crate::game::piece::PieceColor;
use crate::state::clock::ClockState;
use crate::state::game::{ConnectionStatus, PlayerInfo};
use crate::util::clock_format::format_clock;

/// One side's name and clock.
#[component]
pub fn PlayerClock(
    #[prop(into)] player: Signal<Option<PlayerInfo>>,
    #[prop(into)] side: Signal<PieceColor>,
    #[prop(into)] clocks: Signal<ClockState>,
    #[prop(into)] turn: Signal<PieceColor>,
    #[prop(into)] started: Signal<bool>,
    #[prop(into)] game_over: Signal<bool>,
    #[prop(into)] connection: Signal<ConnectionStatus>,
) -> impl IntoView {
    let name = move || player.with(|p| PlayerInfo::display_name(p.as_ref()));
    let remaining = move || format_clock(clocks.get().for_side(side.get()));
    let active = move || is_clock_running(side.get(), turn.get(), started.get(), game_over.get());
    let dot_class = move || connection.get().dot_class();
    let dot_title = move || connection_label(connection.get());

    view! {
        <div class="player-clock" class:player-clock--active=active>
            <span class=dot_class title=dot_title></span>
            <span class="player-clock__name">{name}</span>
            <span class="player-clock__time">{remaining}</span>
        </div>
    }
}

/// Whether `side`'s clock is the one counting down.
#[must_use]
pub fn is_clock_running(side: PieceColor, turn: PieceColor, started: bool, game_over: bool) -> bool {
    started && !game_over && side == turn
}

fn connection_label(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => "Connected",
        ConnectionStatus::Connecting => "Connecting",
        ConnectionStatus::Disconnected => "Disconnected",
    }
}
