// Fragment rendering: typed backend records in, HTML strings out.
// Pure functions; all markup lives in askama templates under `templates/`.

pub mod breakdown;
pub mod comparison;
pub mod evaluation;
pub mod page;
pub mod roadmap;
pub mod simulation;
pub mod tiers;

pub use breakdown::render_breakdown;
pub use comparison::render_comparison;
pub use evaluation::{confidence_badge_class, render_confidence_text, render_role_evaluation};
pub use page::render_dashboard_page;
pub use roadmap::render_roadmap;
pub use simulation::render_simulation;

pub type RenderError = askama::Error;

/// Formats a JSON number the way the browser prints it: integral values
/// without a fractional part (`75`), others in shortest form (`72.5`).
pub fn display_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
