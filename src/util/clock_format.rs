//! Remaining-time labels.

#[cfg(test)]
#[path = "clock_format_test.rs"]
mod clock_format_test;

/// Below this many seconds the label switches to tenths.
const TENTHS_BELOW_SECS: f64 = 10.0;

/// Format remaining seconds as `m:ss`, or `s.t` under ten seconds.
///
/// Negative and non-finite input renders as zero.
#[must_use]
pub fn format_clock(secs: f64) -> String {
    let secs = if secs.is_finite() { secs.max(0.0) } else { 0.0 };
    if secs < TENTHS_BELOW_SECS {
        // Truncate, so 9.99 s shows 9.9 and never rounds up to 10.0.
        let tenths = (secs * 10.0).floor() / 10.0;
        return format!("{tenths:.1}");
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let whole = secs.floor() as u64;
    format!("{}:{:02}", whole / 60, whole % 60)
}
