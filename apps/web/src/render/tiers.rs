//! Color-coding rules shared by every panel.

/// Bootstrap contextual color for a 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    Success,
    Warning,
    Danger,
}

impl ScoreTier {
    /// Role-fit tiers: ≥70 success, ≥40 warning, else danger.
    pub fn for_score(score: f64) -> Self {
        if score >= 70.0 {
            ScoreTier::Success
        } else if score >= 40.0 {
            ScoreTier::Warning
        } else {
            ScoreTier::Danger
        }
    }

    /// Resume section tiers: ≥80 success, ≥60 warning, else danger.
    pub fn for_section(percentage: f64) -> Self {
        if percentage >= 80.0 {
            ScoreTier::Success
        } else if percentage >= 60.0 {
            ScoreTier::Warning
        } else {
            ScoreTier::Danger
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ScoreTier::Success => "success",
            ScoreTier::Warning => "warning",
            ScoreTier::Danger => "danger",
        }
    }

    pub fn bg_class(self) -> &'static str {
        match self {
            ScoreTier::Success => "bg-success",
            ScoreTier::Warning => "bg-warning",
            ScoreTier::Danger => "bg-danger",
        }
    }
}

/// Badge classes for a comparison readiness status.
pub fn readiness_badge(status: &str) -> &'static str {
    match status {
        "Ready" => "bg-success",
        "Partially Ready" => "bg-warning text-dark",
        _ => "bg-danger",
    }
}

/// Color class for a confidence level; unknown levels get none.
pub fn confidence_color(level: &str) -> Option<&'static str> {
    match level {
        "High" => Some("bg-success"),
        "Medium" => Some("bg-warning"),
        "Low" => Some("bg-danger"),
        _ => None,
    }
}
