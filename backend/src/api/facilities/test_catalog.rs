//! Small hand-built catalogs for unit tests.

use common::facility::{Facility, FacilityId, Location, TagLayout};

use crate::catalog_utils::facility_catalog::FacilityCatalog;

pub fn facility(
    name: &str,
    country: Option<&str>,
    facility_type: Option<&str>,
    infrastructure: Option<&[&str]>,
    available_data: Option<&[&str]>,
) -> Facility {
    Facility {
        facility_id: FacilityId(0),
        name: name.to_string(),
        country: country.map(|s| s.to_string()),
        facility_type: facility_type.map(|s| s.to_string()),
        location: None,
        information: None,
        infrastructure: infrastructure.map(|tags| tags.iter().map(|t| t.to_string()).collect()),
        available_data: available_data.map(|tags| tags.iter().map(|t| t.to_string()).collect()),
        tag_layout: TagLayout::default(),
    }
}

pub fn located(mut facility: Facility, lat: f64, lon: f64) -> Facility {
    facility.location = Some(Location { lat, lon, elevation: None });
    facility
}

/// A: German lab with a wind tunnel, B: German test site without
/// infrastructure, C: Danish lab with a wind tunnel.
pub fn three_facility_catalog() -> FacilityCatalog {
    FacilityCatalog::new(vec![
        located(facility("A", Some("Germany"), Some("lab"), Some(&["wind tunnel"]), None), 52.0, 13.0),
        facility("B", Some("Germany"), Some("test site"), Some(&[]), None),
        located(facility("C", Some("Denmark"), Some("lab"), Some(&["wind tunnel"]), Some(&["SCADA"])), 55.7, 12.5),
    ])
}
