use axum::{extract::State, response::IntoResponse};

use crate::web::{AppState, responses::ok};

/// Serve the add-on manifest
pub async fn get_manifest(State(state): State<AppState>) -> impl IntoResponse {
    ok(state.catalog_service.manifest().clone())
}
