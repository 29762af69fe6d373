//! Facility explorer backend: catalog loading, the filter and selection
//! pipeline, and the HTTP routes that expose them.

pub mod api;
pub mod catalog_utils;
pub mod config;
pub mod error;
pub mod server_routes;
pub mod telemetry;
