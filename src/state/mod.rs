//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`selection`, `clock`, `viewport`, etc.) so the
//! board component composes small focused models, each testable without a
//! browser or a reactive runtime.

pub mod clock;
pub mod destinations;
pub mod game;
pub mod selection;
pub mod viewport;
