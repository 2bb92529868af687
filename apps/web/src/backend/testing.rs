//! Canned backend for unit tests. Responses go through the same envelope
//! parsing as the HTTP client; an endpoint with no canned body answers with a
//! non-JSON body, i.e. a transport-level failure.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

use super::contract::*;
use super::{ApiError, ApiResult, BackendApi};

#[derive(Debug, Clone, PartialEq)]
pub struct BackendCall {
    pub path: &'static str,
    pub body: Option<Value>,
}

#[derive(Default)]
pub struct FakeBackend {
    responses: HashMap<&'static str, Value>,
    calls: Mutex<Vec<BackendCall>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, path: &'static str, body: Value) -> Self {
        self.responses.insert(path, body);
        self
    }

    pub fn calls(&self) -> Vec<BackendCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn respond<T: DeserializeOwned>(&self, path: &'static str, body: Option<Value>) -> ApiResult<T> {
        self.calls.lock().unwrap().push(BackendCall { path, body });
        match self.responses.get(path) {
            Some(value) => Ok(Outcome::from_value(value.clone())?),
            None => Err(ApiError::Parse(
                serde_json::from_str::<Value>("<html>502 Bad Gateway</html>").unwrap_err(),
            )),
        }
    }
}

#[async_trait]
impl BackendApi for FakeBackend {
    async fn list_roles(&self) -> ApiResult<RoleList> {
        self.respond(ROLES_LIST_PATH, None)
    }

    async fn evaluate_role(&self, request: &RoleRequest) -> ApiResult<RoleEvaluation> {
        self.respond(ROLES_EVALUATE_PATH, Some(serde_json::to_value(request).unwrap()))
    }

    async fn generate_roadmap(&self, request: &RoleRequest) -> ApiResult<RoadmapResult> {
        self.respond(ROADMAP_GENERATE_PATH, Some(serde_json::to_value(request).unwrap()))
    }

    async fn simulate_skills(&self, request: &SimulateRequest) -> ApiResult<SimulationResult> {
        self.respond(SIMULATOR_PATH, Some(serde_json::to_value(request).unwrap()))
    }

    async fn compare_roles(&self, request: &CompareRequest) -> ApiResult<ComparisonResult> {
        self.respond(ROLES_COMPARE_PATH, Some(serde_json::to_value(request).unwrap()))
    }

    async fn resume_breakdown(&self) -> ApiResult<BreakdownResult> {
        self.respond(RESUME_BREAKDOWN_PATH, None)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Fixtures
// ────────────────────────────────────────────────────────────────────────────

pub fn roles_body() -> Value {
    json!({
        "success": true,
        "roles": [
            {"name": "Data Analyst", "description": "SQL, Excel and dashboards"},
            {"name": "Backend Developer", "description": "APIs and databases"}
        ]
    })
}

pub fn evaluation_body(score: f64, level: &str) -> Value {
    json!({
        "success": true,
        "role_fit_score": score,
        "breakdown": {
            "core_score": 38,
            "secondary_score": 21,
            "bonus_score": 6,
            "cgpa_score": 4,
            "projects_score": 3
        },
        "missing_skills": {
            "critical": ["Docker"],
            "important": ["Redis", "Kafka"],
            "nice_to_have": []
        },
        "confidence": {
            "confidence_level": level,
            "confidence_score": 64,
            "recommendations": ["Add a deployment project", "List your internships"],
            "factors": {"resume_factor": 72}
        }
    })
}

pub fn roadmap_body() -> Value {
    json!({
        "success": true,
        "roadmap": {
            "short_term": [{"skill": "Docker", "weeks": 2, "priority": "Critical"}],
            "mid_term": [{"skill": "Kafka", "weeks": 4, "priority": "Important"}],
            "long_term": [],
            "total_weeks": 6
        },
        "summary": {"total_skills": 2, "estimated_months": 1},
        "next_skill": {"skill": "Docker", "weeks": 2, "priority": "Critical"}
    })
}

pub fn simulation_body() -> Value {
    json!({
        "success": true,
        "simulation": {
            "current_state": {"role_fit_score": 62},
            "simulated_state": {"role_fit_score": 78.5},
            "improvements": {"score_improvement": 16.5}
        },
        "recommendation": "Learning Docker makes you eligible for this role."
    })
}

pub fn comparison_body() -> Value {
    json!({
        "success": true,
        "comparison": {
            "best_fit_role": "Data Analyst",
            "best_fit_score": 81,
            "comparisons": [
                {"role_name": "Data Analyst", "role_fit_score": 81, "readiness": "Ready", "missing_skills_count": 1},
                {"role_name": "Backend Developer", "role_fit_score": 55, "readiness": "Partially Ready", "missing_skills_count": 4}
            ]
        },
        "recommendation": "Data Analyst is your strongest match."
    })
}

pub fn breakdown_body() -> Value {
    json!({
        "success": true,
        "breakdown": {
            "total_score": 71,
            "sections": {
                "cgpa": {"score": 32, "max_score": 40, "percentage": 80, "details": "CGPA 8.0/10"},
                "skills": {"score": 15, "max_score": 30, "percentage": 50, "details": "3 of 6 expected skills"}
            },
            "strengths": ["Strong academics"],
            "recommendations": ["Add more projects"]
        }
    })
}
