// Animation controller: scroll reveal, score counters, progress rings,
// button ripples, and anchor smooth scrolling. Purely cosmetic. Plans are
// computed here and played back by the client; nothing cancels a plan that is
// already running.

pub mod counter;
pub mod progress;
pub mod reveal;
pub mod ripple;
pub mod scroll;

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use counter::{parse_leading_int, CounterFrame, ScoreCounter, FRAME_INTERVAL};
use reveal::{Intersection, RevealObserver, REVEAL_CLASS, ROOT_MARGIN, THRESHOLD};
use ripple::{has_ripple, ripple_geometry, Rect, RIPPLE_CLASS, RIPPLE_LIFETIME};

/// What the client found on the page at load time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageScan {
    /// Keys of elements matching the reveal selector.
    #[serde(default)]
    pub reveal_targets: Vec<String>,
    #[serde(default)]
    pub score_numbers: Vec<ScoreElement>,
    #[serde(default)]
    pub circular_progress: Vec<ProgressElement>,
}

/// A `.score-number` element and its current text.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreElement {
    pub element: String,
    pub text: String,
}

/// A `.circular-progress` element.
#[derive(Debug, Clone, Deserialize)]
pub struct ProgressElement {
    pub element: String,
    /// Raw `data-percentage` attribute.
    #[serde(default)]
    pub percentage: Option<String>,
    /// Whether the element contains its `.progress-bar` circle.
    #[serde(default)]
    pub has_bar: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ButtonClick {
    pub button: String,
    #[serde(default)]
    pub classes: Vec<String>,
    pub rect: Rect,
    pub client_x: f64,
    pub client_y: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AnchorClick {
    pub href: String,
    /// Viewport top of the resolved target; `None` when nothing matched.
    #[serde(default)]
    pub target_top: Option<f64>,
    #[serde(default)]
    pub page_y_offset: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnimationPlan {
    ObserveReveal {
        targets: Vec<String>,
        threshold: f64,
        root_margin: String,
    },
    /// Add `class` and stop observing the element.
    Reveal { element: String, class: String },
    Counter {
        element: String,
        frames: Vec<CounterFrame>,
    },
    CircularProgress {
        element: String,
        initial_offset: f64,
        target_offset: f64,
        delay_ms: u64,
        transition: String,
    },
    Ripple {
        button: String,
        class: String,
        size: f64,
        left: f64,
        top: f64,
        remove_after_ms: u64,
    },
    /// Suppress the default jump and scroll smoothly to `top`.
    SmoothScroll { top: f64 },
}

/// Per-page animation state. Only the reveal observer remembers anything
/// between calls.
#[derive(Debug)]
pub struct AnimationController {
    duration: Duration,
    reveal: Mutex<RevealObserver>,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self::new(counter::DEFAULT_DURATION)
    }
}

impl AnimationController {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            reveal: Mutex::new(RevealObserver::new()),
        }
    }

    /// Reveal observation plus counter and ring plans for every element
    /// carrying a positive value.
    pub fn on_page_loaded(&self, scan: PageScan) -> Vec<AnimationPlan> {
        let mut plans = Vec::new();

        if !scan.reveal_targets.is_empty() {
            self.reveal
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .observe(scan.reveal_targets.iter().cloned());
            plans.push(AnimationPlan::ObserveReveal {
                targets: scan.reveal_targets,
                threshold: THRESHOLD,
                root_margin: ROOT_MARGIN.to_string(),
            });
        }

        for score in scan.score_numbers {
            let target = parse_leading_int(&score.text).unwrap_or(0);
            if target > 0 {
                plans.push(self.score_counter(score.element, target));
            }
        }

        for ring in scan.circular_progress {
            let percentage = ring
                .percentage
                .as_deref()
                .and_then(parse_leading_int)
                .unwrap_or(0);
            if ring.has_bar && percentage > 0 {
                plans.push(self.circular_progress(ring.element, percentage as f64));
            }
        }

        debug!("Page load produced {} animation plans", plans.len());
        plans
    }

    pub fn on_intersections(&self, entries: &[Intersection]) -> Vec<AnimationPlan> {
        self.reveal
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .on_intersections(entries)
            .into_iter()
            .map(|element| AnimationPlan::Reveal {
                element,
                class: REVEAL_CLASS.to_string(),
            })
            .collect()
    }

    pub fn score_counter(&self, element: String, target: i64) -> AnimationPlan {
        AnimationPlan::Counter {
            element,
            frames: ScoreCounter::new(target, self.duration).frames(FRAME_INTERVAL),
        }
    }

    pub fn circular_progress(&self, element: String, percentage: f64) -> AnimationPlan {
        AnimationPlan::CircularProgress {
            element,
            initial_offset: progress::CIRCUMFERENCE,
            target_offset: progress::dash_offset(percentage),
            delay_ms: progress::START_DELAY.as_millis() as u64,
            transition: progress::transition(self.duration),
        }
    }

    /// Ripple for primary, secondary and comic buttons, except while loading.
    pub fn on_button_click(&self, click: &ButtonClick) -> Option<AnimationPlan> {
        if !has_ripple(&click.classes) {
            return None;
        }
        let geometry = ripple_geometry(click.rect, click.client_x, click.client_y);
        Some(AnimationPlan::Ripple {
            button: click.button.clone(),
            class: RIPPLE_CLASS.to_string(),
            size: geometry.size,
            left: geometry.left,
            top: geometry.top,
            remove_after_ms: RIPPLE_LIFETIME.as_millis() as u64,
        })
    }

    pub fn on_anchor_click(&self, click: &AnchorClick) -> Option<AnimationPlan> {
        let target_top = click.target_top?;
        if !scroll::handles_anchor(&click.href, true) {
            return None;
        }
        Some(AnimationPlan::SmoothScroll {
            top: scroll::scroll_top(target_top, click.page_y_offset),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn scan() -> PageScan {
        serde_json::from_value(json!({
            "reveal_targets": ["panel-0", "card-1"],
            "score_numbers": [
                {"element": "score-0", "text": "83"},
                {"element": "score-1", "text": "0"},
                {"element": "score-2", "text": "--"}
            ],
            "circular_progress": [
                {"element": "ring-0", "percentage": "75", "has_bar": true},
                {"element": "ring-1", "percentage": "50", "has_bar": false},
                {"element": "ring-2", "has_bar": true}
            ]
        }))
        .unwrap()
    }

    fn click(classes: &[&str]) -> ButtonClick {
        ButtonClick {
            button: "btn-0".to_string(),
            classes: classes.iter().map(|c| c.to_string()).collect(),
            rect: Rect {
                left: 10.0,
                top: 20.0,
                width: 100.0,
                height: 40.0,
            },
            client_x: 60.0,
            client_y: 40.0,
        }
    }

    #[test]
    fn test_page_load_plans_only_positive_values() {
        let controller = AnimationController::default();
        let plans = controller.on_page_loaded(scan());

        assert_eq!(plans.len(), 3);
        assert!(matches!(&plans[0], AnimationPlan::ObserveReveal { targets, threshold, .. }
            if targets.len() == 2 && *threshold == 0.1));
        match &plans[1] {
            AnimationPlan::Counter { element, frames } => {
                assert_eq!(element, "score-0");
                assert_eq!(frames.last().unwrap().value, 83);
                assert_eq!(frames.last().unwrap().class.css(), "score-high");
            }
            other => panic!("expected counter, got {other:?}"),
        }
        assert_eq!(
            plans[2],
            AnimationPlan::CircularProgress {
                element: "ring-0".to_string(),
                initial_offset: 440.0,
                target_offset: 110.0,
                delay_ms: 100,
                transition: "stroke-dashoffset 1500ms ease-out".to_string(),
            }
        );
    }

    #[test]
    fn test_intersections_reveal_observed_elements_once() {
        let controller = AnimationController::default();
        controller.on_page_loaded(scan());
        let entries = vec![Intersection {
            element: "card-1".to_string(),
            is_intersecting: true,
        }];

        assert_eq!(
            controller.on_intersections(&entries),
            vec![AnimationPlan::Reveal {
                element: "card-1".to_string(),
                class: "animate-on-load".to_string(),
            }]
        );
        assert!(controller.on_intersections(&entries).is_empty());
    }

    #[test]
    fn test_ripple_skipped_while_loading() {
        let controller = AnimationController::default();
        assert!(controller
            .on_button_click(&click(&["btn", "btn-primary", "loading"]))
            .is_none());
        assert_eq!(
            controller.on_button_click(&click(&["btn", "btn-primary"])),
            Some(AnimationPlan::Ripple {
                button: "btn-0".to_string(),
                class: "ripple".to_string(),
                size: 100.0,
                left: 0.0,
                top: -30.0,
                remove_after_ms: 600,
            })
        );
    }

    #[test]
    fn test_ripple_limited_to_listed_buttons() {
        let controller = AnimationController::default();
        assert!(controller
            .on_button_click(&click(&["btn", "btn-outline-danger"]))
            .is_none());
        assert!(controller.on_button_click(&click(&["comic-button"])).is_some());
    }

    #[test]
    fn test_anchor_scroll() {
        let controller = AnimationController::default();
        let anchor = |href: &str, target_top: Option<f64>| AnchorClick {
            href: href.to_string(),
            target_top,
            page_y_offset: 500.0,
        };

        assert_eq!(
            controller.on_anchor_click(&anchor("#roadmapSection", Some(300.0))),
            Some(AnimationPlan::SmoothScroll { top: 720.0 })
        );
        assert!(controller.on_anchor_click(&anchor("#", Some(0.0))).is_none());
        assert!(controller.on_anchor_click(&anchor("#nowhere", None)).is_none());
    }

    #[test]
    fn test_plan_wire_format() {
        let plan = AnimationPlan::SmoothScroll { top: 720.0 };
        assert_eq!(
            serde_json::to_value(&plan).unwrap(),
            json!({"kind": "smooth_scroll", "top": 720.0})
        );
    }
}
