//! Circular progress ring driven by `stroke-dashoffset`.

use std::time::Duration;

/// 2π × r for the ring's radius of 70, as drawn by the stylesheet.
pub const CIRCUMFERENCE: f64 = 440.0;
/// Lets the browser paint the full-offset state before the transition.
pub const START_DELAY: Duration = Duration::from_millis(100);

/// Dash offset that leaves `percentage` of the ring visible.
pub fn dash_offset(percentage: f64) -> f64 {
    CIRCUMFERENCE - (percentage / 100.0) * CIRCUMFERENCE
}

pub fn transition(duration: Duration) -> String {
    format!("stroke-dashoffset {}ms ease-out", duration.as_millis())
}
