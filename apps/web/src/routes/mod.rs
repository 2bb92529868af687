pub mod health;
pub mod ui;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/", get(ui::dashboard_page))
        .route("/ui/:session_id/events", post(ui::handle_event))
        .route("/static/dashboard.js", get(ui::dashboard_script))
        .with_state(state)
}
