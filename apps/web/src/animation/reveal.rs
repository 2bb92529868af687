//! Fire-once scroll reveal.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

pub const REVEAL_SELECTOR: &str = ".panel, .card, .section-heading-container";
pub const REVEAL_CLASS: &str = "animate-on-load";
pub const THRESHOLD: f64 = 0.1;
pub const ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// One `IntersectionObserverEntry`, keyed by the element's client-side key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Intersection {
    pub element: String,
    pub is_intersecting: bool,
}

/// Tracks which elements are still being watched for their first
/// intersection.
#[derive(Debug, Default)]
pub struct RevealObserver {
    observed: HashSet<String>,
}

impl RevealObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe<I>(&mut self, elements: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.observed.extend(elements);
    }

    #[cfg(test)]
    pub fn is_observed(&self, element: &str) -> bool {
        self.observed.contains(element)
    }

    /// Elements to reveal now. Each is unobserved as it is returned, so it
    /// never reveals twice.
    pub fn on_intersections(&mut self, entries: &[Intersection]) -> Vec<String> {
        entries
            .iter()
            .filter(|entry| entry.is_intersecting)
            .filter(|entry| self.observed.remove(&entry.element))
            .map(|entry| entry.element.clone())
            .collect()
    }
}
