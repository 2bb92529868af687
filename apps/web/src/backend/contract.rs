//! Typed records for the scoring backend's JSON contract.
//!
//! Every response is an envelope carrying `success` and an optional `error`
//! message. The payload fields are only required when `success` is true, so
//! parsing is two-stage: envelope first, payload second.

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const ROLES_LIST_PATH: &str = "/api/roles/list";
pub const ROLES_EVALUATE_PATH: &str = "/api/roles/evaluate";
pub const ROADMAP_GENERATE_PATH: &str = "/api/roadmap/generate";
pub const SIMULATOR_PATH: &str = "/api/simulator/simulate";
pub const ROLES_COMPARE_PATH: &str = "/api/roles/compare";
pub const RESUME_BREAKDOWN_PATH: &str = "/api/resume/breakdown";

// ────────────────────────────────────────────────────────────────────────────
// Envelope
// ────────────────────────────────────────────────────────────────────────────

/// Result of an application-level call: either the typed payload or the
/// server's failure report (`success: false`).
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome<T> {
    Success(T),
    Failure { error: Option<String> },
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    error: Option<String>,
}

impl<T: DeserializeOwned> Outcome<T> {
    /// Parses a response body. A missing `success` flag counts as failure.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        let envelope = Envelope::deserialize(&value)?;
        if envelope.success {
            serde_json::from_value(value).map(Outcome::Success)
        } else {
            Ok(Outcome::Failure {
                error: envelope.error,
            })
        }
    }
}

/// Treats an explicit JSON `null` the same as an absent field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// ────────────────────────────────────────────────────────────────────────────
// Requests
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleRequest {
    pub role_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulateRequest {
    pub role_name: String,
    pub simulated_skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompareRequest {
    pub role_names: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// GET /api/roles/list
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSummary {
    pub name: String,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoleList {
    #[serde(default, deserialize_with = "nullable")]
    pub roles: Vec<RoleSummary>,
}

// ────────────────────────────────────────────────────────────────────────────
// POST /api/roles/evaluate
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct RoleEvaluation {
    pub role_fit_score: f64,
    pub breakdown: ScoreBreakdown,
    #[serde(default, deserialize_with = "nullable")]
    pub missing_skills: MissingSkills,
    pub confidence: Confidence,
}

/// Points per scoring component. Maxima are fixed by the backend: core 50,
/// secondary 30, bonus 10, CGPA 5, projects 5.
#[derive(Debug, Clone, Deserialize)]
pub struct ScoreBreakdown {
    pub core_score: f64,
    pub secondary_score: f64,
    pub bonus_score: f64,
    pub cgpa_score: f64,
    pub projects_score: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MissingSkills {
    #[serde(default)]
    pub critical: Option<Vec<String>>,
    #[serde(default)]
    pub important: Option<Vec<String>>,
    #[serde(default)]
    pub nice_to_have: Option<Vec<String>>,
}

impl MissingSkills {
    /// Total number of missing skills across all three tiers.
    pub fn total(&self) -> usize {
        [&self.critical, &self.important, &self.nice_to_have]
            .into_iter()
            .map(|tier| tier.as_ref().map_or(0, Vec::len))
            .sum()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Confidence {
    pub confidence_level: String,
    pub confidence_score: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub recommendations: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub factors: ConfidenceFactors,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfidenceFactors {
    #[serde(default)]
    pub resume_factor: Option<f64>,
}

// ────────────────────────────────────────────────────────────────────────────
// POST /api/roadmap/generate
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct RoadmapResult {
    pub roadmap: Roadmap,
    pub summary: RoadmapSummary,
    #[serde(default)]
    pub next_skill: Option<RoadmapItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Roadmap {
    #[serde(default, deserialize_with = "nullable")]
    pub short_term: Vec<RoadmapItem>,
    #[serde(default, deserialize_with = "nullable")]
    pub mid_term: Vec<RoadmapItem>,
    #[serde(default, deserialize_with = "nullable")]
    pub long_term: Vec<RoadmapItem>,
    pub total_weeks: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RoadmapItem {
    pub skill: String,
    pub weeks: f64,
    pub priority: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoadmapSummary {
    pub total_skills: u32,
    pub estimated_months: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// POST /api/simulator/simulate
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationResult {
    pub simulation: Simulation,
    #[serde(default, deserialize_with = "nullable")]
    pub recommendation: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Simulation {
    pub current_state: ScoreState,
    pub simulated_state: ScoreState,
    pub improvements: Improvements,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoreState {
    pub role_fit_score: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Improvements {
    pub score_improvement: f64,
}

// ────────────────────────────────────────────────────────────────────────────
// POST /api/roles/compare
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct ComparisonResult {
    pub comparison: Comparison,
    #[serde(default, deserialize_with = "nullable")]
    pub recommendation: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Comparison {
    /// `null` when no roles were compared.
    #[serde(default)]
    pub best_fit_role: Option<String>,
    pub best_fit_score: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub comparisons: Vec<RoleComparison>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RoleComparison {
    pub role_name: String,
    pub role_fit_score: f64,
    pub readiness: String,
    pub missing_skills_count: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// GET /api/resume/breakdown
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
pub struct BreakdownResult {
    pub breakdown: ResumeBreakdown,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResumeBreakdown {
    pub total_score: f64,
    /// Sections in the order the backend sent them.
    #[serde(deserialize_with = "ordered_sections")]
    pub sections: Vec<(String, SectionScore)>,
    #[serde(default, deserialize_with = "nullable")]
    pub strengths: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionScore {
    pub score: f64,
    pub max_score: f64,
    pub percentage: f64,
    #[serde(default, deserialize_with = "nullable")]
    pub details: String,
}

fn ordered_sections<'de, D>(deserializer: D) -> Result<Vec<(String, SectionScore)>, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = serde_json::Map::<String, Value>::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(name, value)| {
            serde_json::from_value(value)
                .map(|section| (name, section))
                .map_err(D::Error::custom)
        })
        .collect()
}
