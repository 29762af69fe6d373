use std::sync::Arc;

use axum::{Json, extract::State};
use common::explorer_state::{ExplorerRequest, ExplorerView};

use crate::api::explorer::explore;
use crate::error::ApiError;
use crate::server_routes::AppState;

pub async fn explorer(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExplorerRequest>,
) -> Result<Json<ExplorerView>, ApiError> {
    let loaded = state.catalog.ready_snapshot()?;
    let view = explore(&loaded.catalog, request.state, request.transition, state.stale_selection);
    Ok(Json(view))
}
