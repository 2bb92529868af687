//! Score counter: counts a displayed integer up from 0 with an ease-out
//! quartic curve, re-tiering the element on every frame.

use std::time::Duration;

use serde::{Serialize, Serializer};

pub const DEFAULT_DURATION: Duration = Duration::from_millis(1500);
/// One browser animation frame at 60 Hz, rounded down.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Serialized as its CSS class name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreClass {
    ScoreHigh,
    ScoreMedium,
    ScoreLow,
}

impl ScoreClass {
    /// ≥80 high, ≥60 medium, else low.
    pub fn for_value(value: i64) -> Self {
        if value >= 80 {
            ScoreClass::ScoreHigh
        } else if value >= 60 {
            ScoreClass::ScoreMedium
        } else {
            ScoreClass::ScoreLow
        }
    }

    pub fn css(self) -> &'static str {
        match self {
            ScoreClass::ScoreHigh => "score-high",
            ScoreClass::ScoreMedium => "score-medium",
            ScoreClass::ScoreLow => "score-low",
        }
    }
}

impl Serialize for ScoreClass {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.css())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CounterFrame {
    pub at_ms: u64,
    pub value: i64,
    pub class: ScoreClass,
}

pub fn ease_out_quart(progress: f64) -> f64 {
    1.0 - (1.0 - progress).powi(4)
}

#[derive(Debug, Clone, Copy)]
pub struct ScoreCounter {
    target: i64,
    duration: Duration,
}

impl ScoreCounter {
    pub fn new(target: i64, duration: Duration) -> Self {
        Self { target, duration }
    }

    /// The frame shown `elapsed` after the animation started.
    pub fn sample(&self, elapsed: Duration) -> CounterFrame {
        let progress = if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
        };
        let value = (self.target as f64 * ease_out_quart(progress)).floor() as i64;

        CounterFrame {
            at_ms: elapsed.as_millis() as u64,
            value,
            class: ScoreClass::for_value(value),
        }
    }

    /// Every frame from start to completion at `interval`. The last frame
    /// always lands on the full duration and therefore on the target value.
    pub fn frames(&self, interval: Duration) -> Vec<CounterFrame> {
        let step = interval.max(Duration::from_millis(1));
        let mut frames = Vec::new();
        let mut elapsed = Duration::ZERO;

        while elapsed < self.duration {
            frames.push(self.sample(elapsed));
            elapsed += step;
        }
        frames.push(self.sample(self.duration));
        frames
    }
}

/// Leading-integer parse of an element's text, as `parseInt` does it:
/// `"83"`, `" 83/100"` and `"83%"` all give 83.
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let trimmed = text.trim_start();
    let (sign, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (-1, rest),
        None => (1, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse::<i64>().ok().map(|n| sign * n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_ends_exactly_on_target_with_high_tier() {
        let frames = ScoreCounter::new(83, DEFAULT_DURATION).frames(FRAME_INTERVAL);
        let last = frames.last().unwrap();
        assert_eq!(last.value, 83);
        assert_eq!(last.class, ScoreClass::ScoreHigh);
        assert_eq!(last.at_ms, 1500);
    }

    #[test]
    fn test_counter_starts_at_zero_and_never_decreases() {
        let frames = ScoreCounter::new(83, DEFAULT_DURATION).frames(FRAME_INTERVAL);
        assert_eq!(frames[0].value, 0);
        assert_eq!(frames[0].class, ScoreClass::ScoreLow);
        assert!(frames.windows(2).all(|w| w[0].value <= w[1].value));
        assert!(frames.iter().all(|f| f.value <= 83));
    }

    #[test]
    fn test_tier_is_recomputed_per_frame() {
        let frames = ScoreCounter::new(95, DEFAULT_DURATION).frames(FRAME_INTERVAL);
        assert!(frames.iter().any(|f| f.class == ScoreClass::ScoreMedium));
        for frame in &frames {
            assert_eq!(frame.class, ScoreClass::for_value(frame.value));
        }
    }

    #[test]
    fn test_ease_out_front_loads_progress() {
        let counter = ScoreCounter::new(100, Duration::from_millis(1000));
        assert_eq!(counter.sample(Duration::from_millis(500)).value, 93);
        assert_eq!(counter.sample(Duration::from_millis(5000)).value, 100);
    }

    #[test]
    fn test_zero_duration_jumps_to_target() {
        let frames = ScoreCounter::new(42, Duration::ZERO).frames(FRAME_INTERVAL);
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].value, 42);
    }

    #[test]
    fn test_score_class_serializes_as_css() {
        assert_eq!(
            serde_json::to_value(ScoreClass::ScoreMedium).unwrap(),
            serde_json::json!("score-medium")
        );
        assert_eq!(
            serde_json::to_value(ScoreClass::ScoreHigh).unwrap(),
            serde_json::json!("score-high")
        );
    }

    #[test]
    fn test_parse_leading_int() {
        assert_eq!(parse_leading_int("83"), Some(83));
        assert_eq!(parse_leading_int("  72/100"), Some(72));
        assert_eq!(parse_leading_int("-5"), Some(-5));
        assert_eq!(parse_leading_int("--"), None);
        assert_eq!(parse_leading_int(""), None);
    }
}
