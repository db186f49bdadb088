//! Board-game domain model.
//!
//! DESIGN
//! ======
//! Pure data and projections with no browser dependencies: squares, pieces,
//! board snapshots with their display orientation, and the rules-engine
//! query contract. Everything here is unit-testable on the host.

pub mod board;
pub mod piece;
pub mod rules;
pub mod square;
