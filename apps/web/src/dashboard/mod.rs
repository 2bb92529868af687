//! Roles/Features controller.
//!
//! A `Dashboard` is the view-model of one open page: created when the shell
//! is served, updated by `load_roles` and `evaluate_role`, read by the
//! actions that depend on them. Each action issues at most one backend call
//! and writes its output to a `Surface`. The state lock is never held across
//! a backend call, so overlapping actions both run and the last write wins.

pub mod events;
pub mod surface;

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{error, info, warn};

use crate::backend::contract::{CompareRequest, Outcome, RoleRequest, RoleSummary, SimulateRequest};
use crate::backend::{ApiError, BackendApi};
use crate::render::{self, display_number, RenderError};

pub use events::{dispatch, UiEvent, UiReply};
pub use surface::{Display, PatchRecorder, Surface, Target, UiPatch};

const SELECT_ROLE_FIRST: &str = "Please select a role first";
const EVALUATE_ROLE_FIRST: &str = "Please evaluate a role first";
const RENDER_FAILED: &str = "Error displaying results. Please try again.";

#[derive(Debug, Default)]
struct ViewModel {
    /// Last successfully evaluated role.
    current_role: Option<String>,
    all_roles: Vec<RoleSummary>,
}

#[derive(Clone)]
pub struct Dashboard {
    backend: Arc<dyn BackendApi>,
    state: Arc<RwLock<ViewModel>>,
}

impl Dashboard {
    pub fn new(backend: Arc<dyn BackendApi>) -> Self {
        Self {
            backend,
            state: Arc::new(RwLock::new(ViewModel::default())),
        }
    }

    pub async fn current_role(&self) -> Option<String> {
        self.state.read().await.current_role.clone()
    }

    pub async fn roles(&self) -> Vec<RoleSummary> {
        self.state.read().await.all_roles.clone()
    }

    /// GET the role list and populate the selector. A `success: false` reply
    /// is only logged; a transport failure is alerted.
    pub async fn load_roles(&self, surface: &mut dyn Surface) {
        match self.backend.list_roles().await {
            Ok(Outcome::Success(list)) => {
                info!("Loaded {} roles", list.roles.len());
                for role in &list.roles {
                    surface.append_option(
                        Target::RoleSelect,
                        role.name.clone(),
                        format!("{} - {}", role.name, role.description),
                    );
                }
                self.state.write().await.all_roles = list.roles;
            }
            Ok(Outcome::Failure { error }) => {
                warn!(
                    "Role list unavailable: {}",
                    error.as_deref().unwrap_or("no message")
                );
            }
            Err(e) => {
                transport_failure(
                    surface,
                    "loading roles",
                    &e,
                    "Error loading roles. Please refresh the page.",
                );
            }
        }
    }

    /// Evaluate fit for the selected role. Renders the score panel, the
    /// confidence panel, and the quick stats strip.
    pub async fn evaluate_role(&self, selected_role: &str, surface: &mut dyn Surface) {
        let role_name = selected_role.trim();
        if role_name.is_empty() {
            surface.alert(SELECT_ROLE_FIRST);
            return;
        }

        let request = RoleRequest {
            role_name: role_name.to_string(),
        };
        let evaluation = match self.backend.evaluate_role(&request).await {
            Ok(Outcome::Success(evaluation)) => evaluation,
            Ok(Outcome::Failure { error }) => {
                surface.alert(&failure_message(error, "Evaluation failed"));
                return;
            }
            Err(e) => {
                transport_failure(
                    surface,
                    "evaluating role",
                    &e,
                    "Error evaluating role. Please try again.",
                );
                return;
            }
        };

        self.state.write().await.current_role = Some(request.role_name);

        let panel = match render::render_role_evaluation(&evaluation) {
            Ok(html) => html,
            Err(e) => return render_failure(surface, &e),
        };
        let confidence_text = match render::render_confidence_text(&evaluation.confidence) {
            Ok(html) => html,
            Err(e) => return render_failure(surface, &e),
        };

        surface.set_html(Target::RoleEvalResults, panel);
        surface.show(Target::RoleEvalResults, Display::Block);

        let confidence = &evaluation.confidence;
        surface.set_class(
            Target::ConfidenceBadge,
            render::confidence_badge_class(&confidence.confidence_level),
        );
        surface.set_text(Target::ConfidenceBadge, confidence.confidence_level.clone());
        surface.set_html(Target::ConfidenceText, confidence_text);
        surface.show(Target::ConfidenceSection, Display::Block);

        surface.show(Target::QuickStats, Display::Flex);
        let resume_score = match confidence.factors.resume_factor {
            Some(factor) if factor != 0.0 => display_number(factor),
            _ => "--".to_string(),
        };
        surface.set_text(Target::ResumeScoreDisplay, resume_score);
        surface.set_text(
            Target::RoleFitScoreDisplay,
            display_number(evaluation.role_fit_score),
        );
        surface.set_text(
            Target::MissingSkillsDisplay,
            evaluation.missing_skills.total().to_string(),
        );
        surface.set_text(
            Target::ConfidenceLevelDisplay,
            confidence.confidence_level.clone(),
        );
    }

    pub async fn generate_roadmap(&self, surface: &mut dyn Surface) {
        let Some(role_name) = self.current_role().await else {
            surface.alert(EVALUATE_ROLE_FIRST);
            return;
        };

        match self.backend.generate_roadmap(&RoleRequest { role_name }).await {
            Ok(Outcome::Success(result)) => match render::render_roadmap(&result) {
                Ok(html) => {
                    surface.set_html(Target::RoadmapResults, html);
                    surface.show(Target::RoadmapResults, Display::Block);
                }
                Err(e) => render_failure(surface, &e),
            },
            Ok(Outcome::Failure { error }) => {
                surface.alert(&failure_message(error, "Roadmap generation failed"));
            }
            Err(e) => {
                transport_failure(
                    surface,
                    "generating roadmap",
                    &e,
                    "Error generating roadmap. Please try again.",
                );
            }
        }
    }

    /// Simulate acquiring `skills` for the current role. The rendered result
    /// is returned, not placed on the page; the caller decides where it goes.
    pub async fn simulate_skills(
        &self,
        skills: Vec<String>,
        surface: &mut dyn Surface,
    ) -> Option<String> {
        let Some(role_name) = self.current_role().await else {
            surface.alert(EVALUATE_ROLE_FIRST);
            return None;
        };

        let request = SimulateRequest {
            role_name,
            simulated_skills: skills,
        };
        match self.backend.simulate_skills(&request).await {
            Ok(Outcome::Success(result)) => match render::render_simulation(&result) {
                Ok(html) => Some(html),
                Err(e) => {
                    render_failure(surface, &e);
                    None
                }
            },
            Ok(Outcome::Failure { error }) => {
                surface.alert(&failure_message(error, "Simulation failed"));
                None
            }
            Err(e) => {
                transport_failure(
                    surface,
                    "simulating skills",
                    &e,
                    "Error simulating skills. Please try again.",
                );
                None
            }
        }
    }

    /// Compare every cached role. Sends an empty list if roles never loaded.
    pub async fn compare_roles(&self, surface: &mut dyn Surface) {
        let role_names = self
            .roles()
            .await
            .into_iter()
            .map(|role| role.name)
            .collect();

        match self.backend.compare_roles(&CompareRequest { role_names }).await {
            Ok(Outcome::Success(result)) => match render::render_comparison(&result) {
                Ok(html) => {
                    surface.set_html(Target::ComparisonResults, html);
                    surface.show(Target::ComparisonResults, Display::Block);
                }
                Err(e) => render_failure(surface, &e),
            },
            Ok(Outcome::Failure { error }) => {
                surface.alert(&failure_message(error, "Comparison failed"));
            }
            Err(e) => {
                transport_failure(
                    surface,
                    "comparing roles",
                    &e,
                    "Error comparing roles. Please try again.",
                );
            }
        }
    }

    pub async fn get_resume_breakdown(&self, surface: &mut dyn Surface) {
        match self.backend.resume_breakdown().await {
            Ok(Outcome::Success(result)) => match render::render_breakdown(&result) {
                Ok(html) => {
                    surface.set_html(Target::BreakdownResults, html);
                    surface.show(Target::BreakdownResults, Display::Block);
                }
                Err(e) => render_failure(surface, &e),
            },
            Ok(Outcome::Failure { error }) => {
                surface.alert(&failure_message(error, "Please create a resume first"));
            }
            Err(e) => {
                transport_failure(
                    surface,
                    "getting resume breakdown",
                    &e,
                    "Error getting resume breakdown. Please try again.",
                );
            }
        }
    }
}

/// `Error: <server message>`, or the default when the server sent none.
fn failure_message(error: Option<String>, default: &str) -> String {
    let detail = error
        .filter(|e| !e.trim().is_empty())
        .unwrap_or_else(|| default.to_string());
    format!("Error: {detail}")
}

fn transport_failure(surface: &mut dyn Surface, action: &str, err: &ApiError, message: &str) {
    error!("Backend call failed while {action}: {err}");
    surface.alert(message);
}

fn render_failure(surface: &mut dyn Surface, err: &RenderError) {
    error!("Template render failed: {err}");
    surface.alert(RENDER_FAILED);
}
