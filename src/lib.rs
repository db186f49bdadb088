//! # chessboard-ui
//!
//! Leptos + WASM chess board client.
//!
//! The authority (server) owns the game: board contents, turn order,
//! legality and clocks. This crate turns clicks and drags into move
//! proposals, previews legal destinations through a caller-supplied rules
//! engine, shows both clocks from the push channel, and adapts its layout to
//! the viewport.
//!
//! `game` and `state` are plain Rust and test on the host; `components`,
//! `net::frame_client` and `util` touch the browser behind the `hydrate`
//! feature.

pub mod app;
pub mod components;
pub mod config;
pub mod game;
pub mod net;
pub mod state;
pub mod util;

/// Browser start-up: panic hook and console logging.
///
/// Call once from the host's hydrate entry point before mounting.
#[cfg(feature = "hydrate")]
pub fn init_client(level: log::Level) {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(level) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
}
