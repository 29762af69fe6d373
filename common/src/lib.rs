//! Common library exports shared between the facility service and its clients.

extern crate serde;


pub mod facility;
pub mod filter_criteria;
pub mod facility_view;
pub mod facility_detail;
pub mod explorer_state;
