use axum::{
    extract::{Path, State},
    http::header,
    response::{Html, IntoResponse},
    Json,
};
use uuid::Uuid;

use crate::dashboard::{dispatch, UiEvent, UiReply};
use crate::errors::AppError;
use crate::render::render_dashboard_page;
use crate::state::AppState;

const DASHBOARD_JS: &str = include_str!("../../static/dashboard.js");

/// GET /
/// Opens a page session and serves the dashboard shell bound to it.
pub async fn dashboard_page(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let session_id = state.sessions.create(state.backend.clone());
    Ok(Html(render_dashboard_page(session_id)?))
}

/// POST /ui/:session_id/events
pub async fn handle_event(
    State(state): State<AppState>,
    Path(session_id): Path<Uuid>,
    Json(event): Json<UiEvent>,
) -> Result<Json<UiReply>, AppError> {
    let session = state
        .sessions
        .get(session_id)
        .ok_or_else(|| AppError::NotFound(format!("Page session {session_id}")))?;

    Ok(Json(
        dispatch(&session.dashboard, &session.animations, event).await,
    ))
}

/// GET /static/dashboard.js
pub async fn dashboard_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        DASHBOARD_JS,
    )
}
