//! Click ripple geometry.

use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const RIPPLE_CLASS: &str = "ripple";
pub const RIPPLE_LIFETIME: Duration = Duration::from_millis(600);
pub const LOADING_CLASS: &str = "loading";
/// Button classes that get a ripple.
pub const RIPPLE_CLASSES: [&str; 3] = ["btn-primary", "comic-button", "btn-secondary"];

pub fn has_ripple(classes: &[String]) -> bool {
    let has = |name: &str| classes.iter().any(|c| c == name);
    RIPPLE_CLASSES.iter().any(|c| has(c)) && !has(LOADING_CLASS)
}

/// A `getBoundingClientRect()` result.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RippleGeometry {
    pub size: f64,
    pub left: f64,
    pub top: f64,
}

/// A square as large as the button's longer side, centred on the click.
pub fn ripple_geometry(rect: Rect, client_x: f64, client_y: f64) -> RippleGeometry {
    let size = rect.width.max(rect.height);
    RippleGeometry {
        size,
        left: client_x - rect.left - size / 2.0,
        top: client_y - rect.top - size / 2.0,
    }
}
