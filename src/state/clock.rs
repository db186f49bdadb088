//! Remaining-time state and its push-channel subscription.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server pushes `time_update` frames with both sides' remaining time in
//! milliseconds. `ClockSync` keeps exactly one listener on the current
//! socket: attaching to a new socket identity releases the old listener
//! first, and dropping the sync releases whatever it holds.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use crate::game::piece::PieceColor;
use crate::net::socket::{GameSocket, Subscription};
use crate::net::types::{ClockUpdate, TIME_UPDATE_SYSCALL};

/// Baseline shown for both sides right after a game reset.
pub const DEFAULT_BASELINE_SECS: f64 = 20.0;

/// Remaining seconds per side. Never negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClockState {
    pub white: f64,
    pub black: f64,
}

impl Default for ClockState {
    fn default() -> Self {
        Self::baseline(DEFAULT_BASELINE_SECS)
    }
}

impl ClockState {
    /// Both sides at `secs`. Local approximation used on reset.
    #[must_use]
    pub fn baseline(secs: f64) -> Self {
        Self {
            white: secs.max(0.0),
            black: secs.max(0.0),
        }
    }

    /// Convert a millisecond push into clamped seconds.
    #[must_use]
    pub fn from_update(update: ClockUpdate) -> Self {
        Self {
            white: (update.white / 1000.0).max(0.0),
            black: (update.black / 1000.0).max(0.0),
        }
    }

    #[must_use]
    pub fn for_side(self, side: PieceColor) -> f64 {
        match side {
            PieceColor::White => self.white,
            PieceColor::Black => self.black,
        }
    }
}

/// Holds the single clock listener for the current socket.
#[derive(Debug, Default)]
pub struct ClockSync {
    subscription: Option<Subscription>,
}

impl ClockSync {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity of the socket currently listened to.
    #[must_use]
    pub fn attached_to(&self) -> Option<u64> {
        self.subscription.as_ref().map(Subscription::socket_identity)
    }

    /// Listen for clock pushes on `socket`, calling `on_update` with clamped
    /// seconds.
    ///
    /// Re-attaching to the same socket keeps the existing listener and
    /// returns `false`. Any other socket replaces the old listener, which is
    /// removed before the new one is installed.
    pub fn attach(&mut self, socket: &GameSocket, on_update: impl Fn(ClockState) + Send + Sync + 'static) -> bool {
        if self.attached_to() == Some(socket.identity()) {
            return false;
        }
        self.detach();
        let subscription = socket.on(TIME_UPDATE_SYSCALL, move |data| {
            match serde_json::from_value::<ClockUpdate>(data.clone()) {
                Ok(update) => on_update(ClockState::from_update(update)),
                Err(e) => leptos::logging::warn!("ignoring malformed {TIME_UPDATE_SYSCALL} payload: {e}"),
            }
        });
        self.subscription = Some(subscription);
        true
    }

    /// Release the current listener, if any.
    pub fn detach(&mut self) {
        if let Some(subscription) = self.subscription.take() {
            subscription.cancel();
        }
    }
}
