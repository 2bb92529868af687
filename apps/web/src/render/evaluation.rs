//! Role-fit evaluation panel, missing-skill tiers, and the confidence panel.

use askama::Template;

use super::tiers::{confidence_color, ScoreTier};
use super::{display_number, RenderError};
use crate::backend::contract::{Confidence, MissingSkills, RoleEvaluation};

#[derive(Template)]
#[template(path = "fragments/role_evaluation.html")]
struct RoleEvaluationView {
    score: String,
    score_class: &'static str,
    core: String,
    secondary: String,
    bonus: String,
    cgpa: String,
    projects: String,
    missing_skills_html: String,
}

struct MissingTierView {
    title: &'static str,
    heading_class: &'static str,
    icon: &'static str,
    chip_class: &'static str,
    skills: Vec<String>,
}

#[derive(Template)]
#[template(path = "fragments/missing_skills.html")]
struct MissingSkillsView {
    tiers: Vec<MissingTierView>,
}

#[derive(Template)]
#[template(path = "fragments/confidence_text.html")]
struct ConfidenceTextView {
    score: String,
    recommendations: Vec<String>,
}

/// Score headline, progress bar, per-component breakdown, and missing skills.
pub fn render_role_evaluation(evaluation: &RoleEvaluation) -> Result<String, RenderError> {
    let breakdown = &evaluation.breakdown;
    RoleEvaluationView {
        score: display_number(evaluation.role_fit_score),
        score_class: ScoreTier::for_score(evaluation.role_fit_score).bg_class(),
        core: display_number(breakdown.core_score),
        secondary: display_number(breakdown.secondary_score),
        bonus: display_number(breakdown.bonus_score),
        cgpa: display_number(breakdown.cgpa_score),
        projects: display_number(breakdown.projects_score),
        missing_skills_html: render_missing_skills(&evaluation.missing_skills)?,
    }
    .render()
}

/// Renders the critical / important / nice-to-have tiers in that order. A
/// tier appears only when present and non-empty; with none, the fragment is
/// the "no missing skills" message.
pub fn render_missing_skills(missing: &MissingSkills) -> Result<String, RenderError> {
    let candidates = [
        (
            &missing.critical,
            "Critical Skills",
            "text-danger",
            "bi-exclamation-triangle",
            "bg-danger text-white",
        ),
        (
            &missing.important,
            "Important Skills",
            "text-warning",
            "bi-exclamation-circle",
            "bg-warning text-dark",
        ),
        (
            &missing.nice_to_have,
            "Nice-to-Have Skills",
            "text-info",
            "bi-info-circle",
            "bg-info text-white",
        ),
    ];

    let tiers = candidates
        .into_iter()
        .filter_map(|(skills, title, heading_class, icon, chip_class)| {
            let skills = skills.as_ref().filter(|s| !s.is_empty())?;
            Some(MissingTierView {
                title,
                heading_class,
                icon,
                chip_class,
                skills: skills.clone(),
            })
        })
        .collect();

    MissingSkillsView { tiers }.render()
}

/// Full class attribute for the confidence badge.
pub fn confidence_badge_class(level: &str) -> String {
    match confidence_color(level) {
        Some(color) => format!("confidence-badge {color} text-white"),
        None => "confidence-badge text-white".to_string(),
    }
}

/// Confidence score line followed by the recommendations, one per line.
pub fn render_confidence_text(confidence: &Confidence) -> Result<String, RenderError> {
    ConfidenceTextView {
        score: display_number(confidence.confidence_score),
        recommendations: confidence.recommendations.clone(),
    }
    .render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::testing::evaluation_body;

    fn evaluation(score: f64) -> RoleEvaluation {
        let mut body = evaluation_body(score, "Medium");
        body.as_object_mut().unwrap().remove("success");
        serde_json::from_value(body).unwrap()
    }

    fn missing(
        critical: Option<Vec<&str>>,
        important: Option<Vec<&str>>,
        nice: Option<Vec<&str>>,
    ) -> MissingSkills {
        let owned = |v: Option<Vec<&str>>| -> Option<Vec<String>> {
            v.map(|s| s.into_iter().map(String::from).collect())
        };
        MissingSkills {
            critical: owned(critical),
            important: owned(important),
            nice_to_have: owned(nice),
        }
    }

    #[test]
    fn test_progress_bar_width_and_tier_follow_score() {
        let html = render_role_evaluation(&evaluation(75.0)).unwrap();
        assert!(html.contains("progress-bar bg-success"));
        assert!(html.contains("width: 75%"));
        assert!(html.contains("75/100"));

        let html = render_role_evaluation(&evaluation(50.0)).unwrap();
        assert!(html.contains("progress-bar bg-warning"));
        assert!(html.contains("width: 50%"));

        let html = render_role_evaluation(&evaluation(20.0)).unwrap();
        assert!(html.contains("progress-bar bg-danger"));
        assert!(html.contains("width: 20%"));
    }

    #[test]
    fn test_breakdown_shows_component_maxima() {
        let html = render_role_evaluation(&evaluation(68.0)).unwrap();
        assert!(html.contains("38/50"));
        assert!(html.contains("21/30"));
        assert!(html.contains("6/10"));
        assert!(html.contains("4/5"));
        assert!(html.contains("3/5"));
    }

    #[test]
    fn test_fractional_score_is_printed_as_is() {
        let html = render_role_evaluation(&evaluation(72.5)).unwrap();
        assert!(html.contains("width: 72.5%"));
    }

    #[test]
    fn test_all_tiers_empty_renders_success_message_without_chips() {
        let html = render_missing_skills(&missing(Some(vec![]), Some(vec![]), Some(vec![]))).unwrap();
        assert!(html.contains("No missing skills! You meet all requirements."));
        assert!(!html.contains("skill-chip"));
    }

    #[test]
    fn test_absent_tiers_render_success_message() {
        let html = render_missing_skills(&MissingSkills::default()).unwrap();
        assert!(html.contains("No missing skills!"));
    }

    #[test]
    fn test_only_non_empty_tiers_render_in_order() {
        let html = render_missing_skills(&missing(
            Some(vec!["Docker"]),
            Some(vec![]),
            Some(vec!["GraphQL", "Go"]),
        ))
        .unwrap();

        assert!(!html.contains("Important Skills"));
        assert!(!html.contains("No missing skills"));
        assert_eq!(html.matches("skill-chip").count(), 3);
        assert!(html.contains(r#"<span class="skill-chip bg-danger text-white">Docker</span>"#));
        assert!(html.contains(r#"<span class="skill-chip bg-info text-white">Go</span>"#));

        let critical = html.find("Critical Skills").unwrap();
        let nice = html.find("Nice-to-Have Skills").unwrap();
        assert!(critical < nice);
    }

    #[test]
    fn test_skill_names_are_escaped() {
        let html = render_missing_skills(&missing(Some(vec!["<script>"]), None, None)).unwrap();
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_low_confidence_badge_is_danger() {
        assert_eq!(
            confidence_badge_class("Low"),
            "confidence-badge bg-danger text-white"
        );
    }

    #[test]
    fn test_unknown_confidence_level_has_no_color() {
        assert_eq!(confidence_badge_class("Extreme"), "confidence-badge text-white");
    }

    #[test]
    fn test_confidence_text_joins_recommendations() {
        let confidence = evaluation(60.0).confidence;
        let html = render_confidence_text(&confidence).unwrap();
        assert!(html.contains("<strong>Score: 64/100</strong><br>"));
        assert!(html.contains("Add a deployment project<br>List your internships"));
        assert!(!html.trim_end().ends_with("<br>"));
    }
}
