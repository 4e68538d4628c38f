//! Catalog HTTP handler
//!
//! `GET /catalog/{type}/{id}.json?url=...` and the path form
//! `GET /catalog/{type}/{id}/url=....json`.

use axum::{extract::State, response::IntoResponse};

use crate::errors::AppResult;
use crate::web::{AppState, extractors::ResourceRequest, responses::ok};

/// List the playlist the request points at as metas
pub async fn get_catalog(
    State(state): State<AppState>,
    request: ResourceRequest,
) -> AppResult<impl IntoResponse> {
    let catalog = state
        .catalog_service
        .catalog(&request.content_type, &request.id, &request.extra)
        .await?;

    Ok(ok(catalog))
}
