//! Shared models for the facility detail panel.

use serde::{Deserialize, Serialize};

use crate::facility::{FacilityId, TagNode};

pub const NO_SELECTION_MESSAGE: &str = "Click on a facility on the map or in the table to find out more";
pub const EMPTY_DESCRIPTION_MESSAGE: &str = "Description is empty";
pub const NO_INFORMATION_MESSAGE: &str = "No information found";
pub const NO_INFRASTRUCTURE_MESSAGE: &str = "no information about infrastructure available";
pub const NO_AVAILABLE_DATA_MESSAGE: &str = "no information about data available";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TagTab {
    pub enabled: bool,
    /// Tags, with nested groups rendered as sub-lists.
    pub entries: Vec<TagNode>,
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityDetail {
    pub facility_id: FacilityId,
    pub title: String,
    pub description: String,
    pub is_quote: bool,
    pub source_url: Option<String>,
    pub source_domain: Option<String>,
    pub note: Option<String>,
    pub homepage: Option<String>,
    pub google_maps_url: Option<String>,
    pub infrastructure: TagTab,
    pub available_data: TagTab,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DetailPanel {
    Placeholder { message: String },
    Facility(FacilityDetail),
}

impl DetailPanel {
    pub fn placeholder() -> Self {
        DetailPanel::Placeholder { message: NO_SELECTION_MESSAGE.to_string() }
    }

    pub fn facility_id(&self) -> Option<FacilityId> {
        match self {
            DetailPanel::Placeholder { .. } => None,
            DetailPanel::Facility(detail) => Some(detail.facility_id),
        }
    }
}
