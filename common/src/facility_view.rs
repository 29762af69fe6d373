use serde::{Deserialize, Serialize};

use crate::{facility::{Facility, FacilityId}, filter_criteria::FilterCriteria};


#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilteredView {
    pub criteria: FilterCriteria,
    pub facilities: Vec<Facility>,
    pub is_empty: bool,
}

impl FilteredView {
    pub fn contains(&self, facility_id: FacilityId) -> bool {
        self.facilities.iter().any(|f| f.facility_id == facility_id)
    }

    pub fn facility_ids(&self) -> Vec<FacilityId> {
        self.facilities.iter().map(|f| f.facility_id).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityTableRow {
    pub id: FacilityId,
    pub name: String,
    pub country: Option<String>,
    #[serde(rename = "type")]
    pub facility_type: Option<String>,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapViewport {
    pub center_lat: f64,
    pub center_lon: f64,
    pub zoom: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub facility_id: FacilityId,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapView {
    pub viewport: MapViewport,
    pub markers: Vec<MapMarker>,
}

/// Values offered by the four filter dropdowns.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    pub countries: Vec<String>,
    pub types: Vec<String>,
    pub infrastructure: Vec<String>,
    pub data: Vec<String>,
}
