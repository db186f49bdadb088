//! Utility helpers shared across board components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (media queries, drag previews)
//! and presentation formatting from component logic.

pub mod clock_format;
pub mod drag_image;
pub mod media_query;
