use axum::{extract::State, response::IntoResponse};

use crate::web::{AppState, extractors::ResourceRequest, responses::ok};

/// Resolve an identifier back into its playable URL
pub async fn get_streams(
    State(state): State<AppState>,
    request: ResourceRequest,
) -> impl IntoResponse {
    ok(state
        .catalog_service
        .streams(&request.content_type, &request.id))
}
