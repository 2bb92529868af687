//! Backend client. The only place that talks to the scoring backend.
//!
//! One method per endpoint and one HTTP request per call. Overlapping calls
//! are neither retried nor de-duplicated, and no timeout is applied.

use async_trait::async_trait;
use reqwest::Client;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

pub mod contract;
#[cfg(test)]
pub mod testing;

use contract::{
    BreakdownResult, CompareRequest, ComparisonResult, Outcome, RoadmapResult, RoleEvaluation,
    RoleList, RoleRequest, SimulateRequest, SimulationResult, RESUME_BREAKDOWN_PATH,
    ROADMAP_GENERATE_PATH, ROLES_COMPARE_PATH, ROLES_EVALUATE_PATH, ROLES_LIST_PATH,
    SIMULATOR_PATH,
};

/// Transport or parse failure. Application-level failures (`success: false`)
/// are not errors; they arrive as `Outcome::Failure`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid backend URL '{url}': expected an http:// or https:// base")]
    InvalidBaseUrl { url: String },
}

pub type ApiResult<T> = Result<Outcome<T>, ApiError>;

/// The backend contract. Carried in `AppState` as `Arc<dyn BackendApi>` so
/// tests can swap in a canned implementation.
#[async_trait]
pub trait BackendApi: Send + Sync {
    async fn list_roles(&self) -> ApiResult<RoleList>;

    async fn evaluate_role(&self, request: &RoleRequest) -> ApiResult<RoleEvaluation>;

    async fn generate_roadmap(&self, request: &RoleRequest) -> ApiResult<RoadmapResult>;

    async fn simulate_skills(&self, request: &SimulateRequest) -> ApiResult<SimulationResult>;

    async fn compare_roles(&self, request: &CompareRequest) -> ApiResult<ComparisonResult>;

    async fn resume_breakdown(&self) -> ApiResult<BreakdownResult>;
}

/// reqwest implementation of [`BackendApi`] against a base URL.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ApiError::InvalidBaseUrl {
                url: base_url.to_string(),
            });
        }

        Ok(Self {
            client: Client::builder().build()?,
            base_url: trimmed.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        debug!("GET {path}");
        let response = self.client.get(self.url(path)).send().await?;
        parse_response(path, response).await
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        debug!("POST {path}");
        let response = self.client.post(self.url(path)).json(body).send().await?;
        parse_response(path, response).await
    }
}

/// The status code alone never fails a call: a JSON body is parsed whatever
/// the status, a non-JSON body is a parse error.
async fn parse_response<T: DeserializeOwned>(
    path: &str,
    response: reqwest::Response,
) -> ApiResult<T> {
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        warn!("Backend returned {status} for {path}");
    }

    let value: Value = serde_json::from_str(&body)?;
    Ok(Outcome::from_value(value)?)
}

#[async_trait]
impl BackendApi for HttpBackend {
    async fn list_roles(&self) -> ApiResult<RoleList> {
        self.get(ROLES_LIST_PATH).await
    }

    async fn evaluate_role(&self, request: &RoleRequest) -> ApiResult<RoleEvaluation> {
        self.post(ROLES_EVALUATE_PATH, request).await
    }

    async fn generate_roadmap(&self, request: &RoleRequest) -> ApiResult<RoadmapResult> {
        self.post(ROADMAP_GENERATE_PATH, request).await
    }

    async fn simulate_skills(&self, request: &SimulateRequest) -> ApiResult<SimulationResult> {
        self.post(SIMULATOR_PATH, request).await
    }

    async fn compare_roles(&self, request: &CompareRequest) -> ApiResult<ComparisonResult> {
        self.post(ROLES_COMPARE_PATH, request).await
    }

    async fn resume_breakdown(&self) -> ApiResult<BreakdownResult> {
        self.get(RESUME_BREAKDOWN_PATH).await
    }
}
