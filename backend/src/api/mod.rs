//! Pure request handling over a loaded catalog.

pub mod explorer;
pub mod facilities;
