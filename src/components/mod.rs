//! Board UI components.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ChessBoard` is the entry point; it owns input and clock state and renders
//! `BoardGrid` between two `PlayerClock` strips.

pub mod board_grid;
pub mod chess_board;
pub mod player_clock;
