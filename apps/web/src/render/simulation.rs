//! Before/after score display for a skill simulation.

use askama::Template;

use super::{display_number, RenderError};
use crate::backend::contract::SimulationResult;

#[derive(Template)]
#[template(path = "fragments/simulation.html")]
struct SimulationView {
    current_score: String,
    improvement: String,
    simulated_score: String,
    recommendation: String,
}

pub fn render_simulation(result: &SimulationResult) -> Result<String, RenderError> {
    let simulation = &result.simulation;
    SimulationView {
        current_score: display_number(simulation.current_state.role_fit_score),
        improvement: display_number(simulation.improvements.score_improvement),
        simulated_score: display_number(simulation.simulated_state.role_fit_score),
        recommendation: result.recommendation.clone(),
    }
    .render()
}
