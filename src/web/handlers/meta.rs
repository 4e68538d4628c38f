use axum::{extract::State, response::IntoResponse};

use crate::errors::AppResult;
use crate::web::{AppState, extractors::ResourceRequest, responses::ok};

/// Meta detail for one identifier, looked up in the playlist when `url` is given
pub async fn get_meta(
    State(state): State<AppState>,
    request: ResourceRequest,
) -> AppResult<impl IntoResponse> {
    let meta = state
        .catalog_service
        .meta(&request.content_type, &request.id, &request.extra)
        .await?;

    Ok(ok(meta))
}
