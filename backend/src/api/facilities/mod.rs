//! Facility filter, selection and projection pipeline.

pub mod facility_detail;
pub mod filter_facilities;
pub mod filter_options;
pub mod project_map;
pub mod project_table;
pub mod select_facility;

#[cfg(test)]
pub(crate) mod test_catalog;

pub use facility_detail::{detail_panel, facility_detail};
pub use filter_facilities::filter_facilities;
pub use filter_options::filter_options;
pub use project_map::project_map;
pub use project_table::project_table;
pub use select_facility::select_facility;
