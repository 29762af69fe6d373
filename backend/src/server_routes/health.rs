use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Serialize;

use crate::server_routes::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub facility_count: usize,
    /// Where the current catalog was loaded from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_fingerprint: Option<String>,
}

/// 200 once a catalog is loaded, 503 while the service is still waiting for one.
pub async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.catalog.snapshot() {
        Some(loaded) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version: env!("CARGO_PKG_VERSION"),
                facility_count: loaded.catalog.len(),
                catalog_source: Some(loaded.source.clone()),
                catalog_fingerprint: Some(loaded.fingerprint.clone()),
            }),
        ),
        None => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(HealthResponse {
                status: "loading",
                version: env!("CARGO_PKG_VERSION"),
                facility_count: 0,
                catalog_source: None,
                catalog_fingerprint: None,
            }),
        ),
    }
}
