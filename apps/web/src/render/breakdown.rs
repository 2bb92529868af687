//! Per-section resume score breakdown with strengths and recommendations.

use askama::Template;

use super::tiers::ScoreTier;
use super::{display_number, RenderError};
use crate::backend::contract::BreakdownResult;

struct SectionView {
    name: String,
    score: String,
    max_score: String,
    percentage: String,
    tier: &'static str,
    details: String,
}

#[derive(Template)]
#[template(path = "fragments/breakdown.html")]
struct BreakdownView {
    total_score: String,
    sections: Vec<SectionView>,
    strengths: Vec<String>,
    recommendations: Vec<String>,
}

pub fn render_breakdown(result: &BreakdownResult) -> Result<String, RenderError> {
    let breakdown = &result.breakdown;
    let sections = breakdown
        .sections
        .iter()
        .map(|(name, section)| SectionView {
            name: name.clone(),
            score: display_number(section.score),
            max_score: display_number(section.max_score),
            percentage: display_number(section.percentage),
            tier: ScoreTier::for_section(section.percentage).name(),
            details: section.details.clone(),
        })
        .collect();

    BreakdownView {
        total_score: display_number(breakdown.total_score),
        sections,
        strengths: breakdown.strengths.clone(),
        recommendations: breakdown.recommendations.clone(),
    }
    .render()
}
