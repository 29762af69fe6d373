//! Facility catalog endpoints.

use std::sync::Arc;

use axum::{Json, extract::{Path, State}};
use common::{
    facility::{Facility, FacilityId},
    facility_detail::FacilityDetail,
    facility_view::{FilterOptions, FilteredView},
    filter_criteria::FilterCriteria,
};
use tracing::debug;

use crate::api::facilities::{facility_detail, filter_facilities as filter_catalog, filter_options};
use crate::error::ApiError;
use crate::server_routes::AppState;

pub async fn list_facilities(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Facility>>, ApiError> {
    let loaded = state.catalog.ready_snapshot()?;
    Ok(Json(loaded.catalog.facilities().to_vec()))
}

pub async fn filter_facilities(
    State(state): State<Arc<AppState>>,
    Json(criteria): Json<FilterCriteria>,
) -> Result<Json<FilteredView>, ApiError> {
    let loaded = state.catalog.ready_snapshot()?;
    let view = filter_catalog(&loaded.catalog, &criteria);
    debug!(?criteria, matched = view.facilities.len(), "Filtered facilities");
    Ok(Json(view))
}

pub async fn get_filter_options(State(state): State<Arc<AppState>>) -> Result<Json<FilterOptions>, ApiError> {
    let loaded = state.catalog.ready_snapshot()?;
    Ok(Json(filter_options(&loaded.catalog)))
}

pub async fn get_facility(
    State(state): State<Arc<AppState>>,
    Path(facility_id): Path<FacilityId>,
) -> Result<Json<Facility>, ApiError> {
    let loaded = state.catalog.ready_snapshot()?;
    let facility = loaded.catalog.get(facility_id).ok_or(ApiError::FacilityNotFound(facility_id))?;
    Ok(Json(facility.clone()))
}

pub async fn get_facility_detail(
    State(state): State<Arc<AppState>>,
    Path(facility_id): Path<FacilityId>,
) -> Result<Json<FacilityDetail>, ApiError> {
    let loaded = state.catalog.ready_snapshot()?;
    let facility = loaded.catalog.get(facility_id).ok_or(ApiError::FacilityNotFound(facility_id))?;
    Ok(Json(facility_detail(facility)))
}
