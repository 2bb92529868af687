//! Best-fit banner plus a card per compared role.

use askama::Template;

use super::tiers::{readiness_badge, ScoreTier};
use super::{display_number, RenderError};
use crate::backend::contract::ComparisonResult;

struct RoleCardView {
    name: String,
    score: String,
    score_class: &'static str,
    readiness: String,
    readiness_class: &'static str,
    missing_skills_count: u32,
}

#[derive(Template)]
#[template(path = "fragments/comparison.html")]
struct ComparisonView {
    best_fit_role: String,
    best_fit_score: String,
    recommendation: String,
    roles: Vec<RoleCardView>,
}

pub fn render_comparison(result: &ComparisonResult) -> Result<String, RenderError> {
    let comparison = &result.comparison;
    let roles = comparison
        .comparisons
        .iter()
        .map(|role| RoleCardView {
            name: role.role_name.clone(),
            score: display_number(role.role_fit_score),
            score_class: ScoreTier::for_score(role.role_fit_score).bg_class(),
            readiness: role.readiness.clone(),
            readiness_class: readiness_badge(&role.readiness),
            missing_skills_count: role.missing_skills_count,
        })
        .collect();

    ComparisonView {
        best_fit_role: comparison
            .best_fit_role
            .clone()
            .unwrap_or_else(|| "N/A".to_string()),
        best_fit_score: display_number(comparison.best_fit_score),
        recommendation: result.recommendation.clone(),
        roles,
    }
    .render()
}
