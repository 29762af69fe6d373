//! Shared facility record models.

use std::collections::BTreeSet;
use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Position of a facility in the catalog it was loaded from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FacilityId(pub u64);

impl FacilityId {
    /// Catalog position, `None` when the id does not fit this platform's `usize`.
    pub fn index(&self) -> Option<usize> {
        usize::try_from(self.0).ok()
    }
}

impl From<usize> for FacilityId {
    fn from(value: usize) -> Self {
        FacilityId(value as u64)
    }
}

impl Display for FacilityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
    pub elevation: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FacilityInformation {
    pub description: Option<String>,
    pub homepage: Option<String>,
    /// The description is quoted from `source` rather than written in-house.
    #[serde(alias = "quote")]
    pub copied: bool,
    pub source: Option<String>,
    pub note: Option<String>,
}

/// A tag list entry as written in the catalog: a tag, or a nested group of entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagNode {
    Tag(String),
    Group(Vec<TagNode>),
}

impl From<&str> for TagNode {
    fn from(tag: &str) -> Self {
        TagNode::Tag(tag.to_string())
    }
}

/// Nested shape of the two tag lists, kept for display. Filtering uses the
/// flattened sets on [`Facility`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TagLayout {
    pub infrastructure: Vec<TagNode>,
    pub available_data: Vec<TagNode>,
}

impl TagLayout {
    pub fn is_empty(&self) -> bool {
        self.infrastructure.is_empty() && self.available_data.is_empty()
    }
}

/// One R&D facility or data source, flattened out of the catalog document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Facility {
    pub facility_id: FacilityId,
    pub name: String,
    pub country: Option<String>,
    #[serde(rename = "type")]
    pub facility_type: Option<String>,
    pub location: Option<Location>,
    pub information: Option<FacilityInformation>,
    /// `None` when the source record has no infrastructure list at all.
    pub infrastructure: Option<BTreeSet<String>>,
    pub available_data: Option<BTreeSet<String>>,
    #[serde(default, skip_serializing_if = "TagLayout::is_empty")]
    pub tag_layout: TagLayout,
}
