//! The page as seen by the controllers: named attachment points and the
//! mutations that can be applied to them.

use serde::Serialize;

use crate::animation::AnimationPlan;

/// DOM attachment points. Serialized as the element id the markup uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Target {
    RoleSelect,
    RoleEvalResults,
    ConfidenceSection,
    ConfidenceBadge,
    ConfidenceText,
    QuickStats,
    ResumeScoreDisplay,
    RoleFitScoreDisplay,
    MissingSkillsDisplay,
    ConfidenceLevelDisplay,
    RoadmapResults,
    ComparisonResults,
    BreakdownResults,
}

impl Target {
    #[cfg(test)]
    pub const ALL: [Target; 13] = [
        Target::RoleSelect,
        Target::RoleEvalResults,
        Target::ConfidenceSection,
        Target::ConfidenceBadge,
        Target::ConfidenceText,
        Target::QuickStats,
        Target::ResumeScoreDisplay,
        Target::RoleFitScoreDisplay,
        Target::MissingSkillsDisplay,
        Target::ConfidenceLevelDisplay,
        Target::RoadmapResults,
        Target::ComparisonResults,
        Target::BreakdownResults,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Target::RoleSelect => "roleSelect",
            Target::RoleEvalResults => "roleEvalResults",
            Target::ConfidenceSection => "confidenceSection",
            Target::ConfidenceBadge => "confidenceBadge",
            Target::ConfidenceText => "confidenceText",
            Target::QuickStats => "quickStats",
            Target::ResumeScoreDisplay => "resumeScoreDisplay",
            Target::RoleFitScoreDisplay => "roleFitScoreDisplay",
            Target::MissingSkillsDisplay => "missingSkillsDisplay",
            Target::ConfidenceLevelDisplay => "confidenceLevelDisplay",
            Target::RoadmapResults => "roadmapResults",
            Target::ComparisonResults => "comparisonResults",
            Target::BreakdownResults => "breakdownResults",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Display {
    Block,
    Flex,
}

/// One instruction for the client shim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum UiPatch {
    SetHtml { target: Target, html: String },
    SetText { target: Target, text: String },
    SetClass { target: Target, class: String },
    Show { target: Target, display: Display },
    AppendOption { target: Target, value: String, label: String },
    Alert { message: String },
    Animate { plan: AnimationPlan },
}

/// Where controllers write their output.
pub trait Surface: Send {
    fn apply(&mut self, patch: UiPatch);

    fn set_html(&mut self, target: Target, html: String) {
        self.apply(UiPatch::SetHtml { target, html });
    }

    fn set_text(&mut self, target: Target, text: String) {
        self.apply(UiPatch::SetText { target, text });
    }

    fn set_class(&mut self, target: Target, class: String) {
        self.apply(UiPatch::SetClass { target, class });
    }

    fn show(&mut self, target: Target, display: Display) {
        self.apply(UiPatch::Show { target, display });
    }

    fn append_option(&mut self, target: Target, value: String, label: String) {
        self.apply(UiPatch::AppendOption {
            target,
            value,
            label,
        });
    }

    /// Blocking alert dialog on the client.
    fn alert(&mut self, message: &str) {
        self.apply(UiPatch::Alert {
            message: message.to_string(),
        });
    }
}

/// Collects patches in order for one UI event reply.
#[derive(Debug, Default)]
pub struct PatchRecorder {
    patches: Vec<UiPatch>,
}

impl PatchRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_patches(self) -> Vec<UiPatch> {
        self.patches
    }
}

#[cfg(test)]
impl PatchRecorder {
    pub fn patches(&self) -> &[UiPatch] {
        &self.patches
    }

    pub fn alerts(&self) -> Vec<&str> {
        self.patches
            .iter()
            .filter_map(|p| match p {
                UiPatch::Alert { message } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn html_for(&self, target: Target) -> Option<&str> {
        self.patches.iter().rev().find_map(|p| match p {
            UiPatch::SetHtml { target: t, html } if *t == target => Some(html.as_str()),
            _ => None,
        })
    }

    pub fn text_for(&self, target: Target) -> Option<&str> {
        self.patches.iter().rev().find_map(|p| match p {
            UiPatch::SetText { target: t, text } if *t == target => Some(text.as_str()),
            _ => None,
        })
    }
}

impl Surface for PatchRecorder {
    fn apply(&mut self, patch: UiPatch) {
        self.patches.push(patch);
    }
}
