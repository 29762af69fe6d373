//! Error types for catalog loading and the HTTP API.

use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use common::facility::FacilityId;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// The document parsed but does not have the expected structure.
    #[error("malformed catalog: {0}")]
    MalformedCatalog(String),

    #[error("failed to read catalog file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch catalog from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

impl CatalogError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        CatalogError::MalformedCatalog(reason.into())
    }

    /// Read and fetch failures may go away on their own, structural problems do not.
    pub fn is_transient(&self) -> bool {
        !matches!(self, CatalogError::MalformedCatalog(_))
    }
}

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("facility catalog is not loaded yet")]
    CatalogNotReady,

    #[error("facility {0} not found")]
    FacilityNotFound(FacilityId),
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    status: u16,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::CatalogNotReady => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::FacilityNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse { error: self.to_string(), status: status.as_u16() };
        (status, Json(body)).into_response()
    }
}
