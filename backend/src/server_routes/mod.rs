//! HTTP routes for the facility explorer.

use std::sync::Arc;

use axum::{Router, routing::{get, post}};
use common::explorer_state::StaleSelectionPolicy;
use tower_http::trace::TraceLayer;

use crate::catalog_utils::catalog_store::CatalogStore;

pub mod explorer;
pub mod facilities;
pub mod health;

/// State shared by all handlers.
#[derive(Debug)]
pub struct AppState {
    pub catalog: Arc<CatalogStore>,
    pub stale_selection: StaleSelectionPolicy,
}

impl AppState {
    pub fn new(catalog: Arc<CatalogStore>, stale_selection: StaleSelectionPolicy) -> Self {
        Self { catalog, stale_selection }
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/facilities", get(facilities::list_facilities))
        .route("/facilities/filter", post(facilities::filter_facilities))
        .route("/facilities/options", get(facilities::get_filter_options))
        .route("/facilities/{facility_id}", get(facilities::get_facility))
        .route("/facilities/{facility_id}/detail", get(facilities::get_facility_detail))
        .route("/explorer", post(explorer::explorer))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
