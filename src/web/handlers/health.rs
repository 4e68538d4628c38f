//! Health check HTTP handler

use axum::{extract::State, response::IntoResponse};

use crate::web::{
    AppState,
    responses::{HealthResponse, not_found, ok},
};

/// Liveness probe
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    ok(HealthResponse::healthy(state.start_time))
}

/// JSON 404 for every unmatched route
pub async fn fallback() -> impl IntoResponse {
    not_found()
}
