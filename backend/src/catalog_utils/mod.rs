//! Catalog loading, parsing and the shared snapshot store.

pub mod catalog_parser;
pub mod catalog_source;
pub mod catalog_store;
pub mod facility_catalog;
