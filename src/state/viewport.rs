//! Narrow/wide layout breakpoint.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

/// Widest viewport, in CSS pixels, that still counts as narrow.
pub const DEFAULT_BREAKPOINT_PX: u32 = 768;

/// Media query matching narrow viewports for `breakpoint_px`.
#[must_use]
pub fn narrow_query(breakpoint_px: u32) -> String {
    format!("(max-width: {breakpoint_px}px)")
}

/// Layout mode derived from the live media condition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LayoutState {
    pub narrow: bool,
}

impl LayoutState {
    /// Layout for a known viewport width.
    #[must_use]
    pub fn for_width(width_px: f64, breakpoint_px: u32) -> Self {
        Self {
            narrow: width_px <= f64::from(breakpoint_px),
        }
    }

    /// CSS modifier class for the board root.
    #[must_use]
    pub fn class(self) -> &'static str {
        if self.narrow { "chess-board--narrow" } else { "chess-board--wide" }
    }
}
