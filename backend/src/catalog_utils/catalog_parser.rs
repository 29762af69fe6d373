//! Flattens the nested facility document into facility records.
//!
//! Expected shape (YAML or JSON):
//!
//! ```yaml
//! features:
//!   - geometry:
//!       coordinates: [8.4, 53.5, 10.0]   # lon, lat, elevation; entries may be null
//!     properties:
//!       name: Test site
//!       country: Germany
//!       type: test site
//!     information:                      # optional
//!       description: ...
//!       homepage: https://...
//!       copied: true
//!       source: https://...
//!     infrastructure: [met mast, lidar]  # optional
//!     availabledata: [SCADA]             # optional
//! ```
//!
//! Only the shape is checked: `features`, `geometry.coordinates` and the three
//! `properties` keys must exist. Leaf values of any scalar type are read as
//! text and anything unusable is treated as absent.

use std::collections::BTreeSet;

use common::facility::{Facility, FacilityId, FacilityInformation, Location, TagLayout, TagNode};
use serde::Deserialize;
use serde_json::Value;

use crate::error::CatalogError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Yaml,
    Json,
}

impl CatalogFormat {
    /// `.json` and `.geojson` are JSON, everything else is treated as YAML.
    pub fn from_source_name(name: &str) -> Self {
        let name = name.split(['?', '#']).next().unwrap_or(name).to_ascii_lowercase();
        if name.ends_with(".json") || name.ends_with(".geojson") {
            CatalogFormat::Json
        } else {
            CatalogFormat::Yaml
        }
    }
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    coordinates: Vec<Value>,
}

// The keys have to be there. Their values are leaves and may be null or any scalar.
#[derive(Debug, Deserialize)]
struct RawProperties {
    name: Value,
    country: Value,
    #[serde(rename = "type")]
    facility_type: Value,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    geometry: RawGeometry,
    properties: RawProperties,
    #[serde(default)]
    information: Value,
    #[serde(default)]
    infrastructure: Value,
    #[serde(default)]
    availabledata: Value,
}

/// Text of a scalar leaf. Numbers and booleans are written out, null and
/// containers count as absent.
fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Reads the attribution flag, accepting YAML 1.1 spellings such as `yes` and `on`.
fn attribution_flag(value: Option<&Value>) -> bool {
    match value {
        Some(Value::Bool(flag)) => *flag,
        Some(Value::String(text)) => {
            matches!(text.trim().to_ascii_lowercase().as_str(), "true" | "yes" | "y" | "on")
        }
        Some(Value::Number(number)) => number.as_f64().is_some_and(|n| n != 0.0),
        _ => false,
    }
}

fn information_from_value(value: Value) -> Option<FacilityInformation> {
    let Value::Object(fields) = value else {
        return None;
    };
    let text = |key: &str| fields.get(key).and_then(scalar_text);
    Some(FacilityInformation {
        description: text("description"),
        homepage: text("homepage"),
        copied: attribution_flag(fields.get("copied").or_else(|| fields.get("quote"))),
        source: text("source"),
        note: text("note"),
    })
}

fn tag_node(value: Value) -> Option<TagNode> {
    match value {
        Value::Array(entries) => {
            let group = entries.into_iter().filter_map(tag_node).collect::<Vec<_>>();
            (!group.is_empty()).then_some(TagNode::Group(group))
        }
        leaf => scalar_text(&leaf).map(TagNode::Tag),
    }
}

/// `None` when the tag list is missing or null. Null entries are skipped and
/// a bare scalar counts as a one-tag list.
fn tag_nodes(value: Value) -> Option<Vec<TagNode>> {
    match value {
        Value::Null => None,
        Value::Array(entries) => Some(entries.into_iter().filter_map(tag_node).collect()),
        leaf => Some(tag_node(leaf).into_iter().collect()),
    }
}

fn flatten_tags(nodes: &[TagNode], into: &mut BTreeSet<String>) {
    for node in nodes {
        match node {
            TagNode::Tag(tag) => {
                into.insert(tag.clone());
            }
            TagNode::Group(group) => flatten_tags(group, into),
        }
    }
}

fn tag_set(nodes: Option<&Vec<TagNode>>) -> Option<BTreeSet<String>> {
    nodes.map(|nodes| {
        let mut set = BTreeSet::new();
        flatten_tags(nodes, &mut set);
        set
    })
}

fn has_groups(nodes: Option<&Vec<TagNode>>) -> bool {
    nodes.is_some_and(|nodes| nodes.iter().any(|node| matches!(node, TagNode::Group(_))))
}

fn location_from_coordinates(index: usize, coordinates: &[Value]) -> Result<Option<Location>, CatalogError> {
    let (lon, lat, elevation) = match coordinates {
        [lon, lat] => (lon.as_f64(), lat.as_f64(), None),
        [lon, lat, elevation] => (lon.as_f64(), lat.as_f64(), elevation.as_f64()),
        _ => {
            return Err(CatalogError::malformed(format!(
                "feature {index}: geometry.coordinates must hold [lon, lat] or [lon, lat, elevation], got {} entries",
                coordinates.len()
            )));
        }
    };
    let location = match (lat, lon) {
        (Some(lat), Some(lon)) => Some(Location { lat, lon, elevation }),
        _ => None,
    };
    Ok(location)
}

fn facility_from_value(index: usize, value: Value) -> Result<Facility, CatalogError> {
    let raw = serde_json::from_value::<RawFeature>(value)
        .map_err(|e| CatalogError::malformed(format!("feature {index}: {e}")))?;
    let location = location_from_coordinates(index, &raw.geometry.coordinates)?;

    let infrastructure = tag_nodes(raw.infrastructure);
    let available_data = tag_nodes(raw.availabledata);
    let mut tag_layout = TagLayout::default();
    if has_groups(infrastructure.as_ref()) || has_groups(available_data.as_ref()) {
        tag_layout.infrastructure = infrastructure.clone().unwrap_or_default();
        tag_layout.available_data = available_data.clone().unwrap_or_default();
    }

    Ok(Facility {
        facility_id: FacilityId::from(index),
        name: scalar_text(&raw.properties.name).unwrap_or_default(),
        country: scalar_text(&raw.properties.country),
        facility_type: scalar_text(&raw.properties.facility_type),
        location,
        information: information_from_value(raw.information),
        infrastructure: tag_set(infrastructure.as_ref()),
        available_data: tag_set(available_data.as_ref()),
        tag_layout,
    })
}

/// Parses a catalog document into facilities, numbered in document order.
pub fn parse_catalog(raw: &[u8], format: CatalogFormat) -> Result<Vec<Facility>, CatalogError> {
    let document: Value = match format {
        CatalogFormat::Json => serde_json::from_slice(raw)
            .map_err(|e| CatalogError::malformed(format!("invalid JSON: {e}")))?,
        CatalogFormat::Yaml => serde_yaml::from_slice(raw)
            .map_err(|e| CatalogError::malformed(format!("invalid YAML: {e}")))?,
    };

    let Value::Object(mut document) = document else {
        return Err(CatalogError::malformed("top level must be a mapping with a `features` list"));
    };
    let features = match document.remove("features") {
        Some(Value::Array(features)) => features,
        Some(_) => return Err(CatalogError::malformed("`features` must be a list")),
        None => return Err(CatalogError::malformed("missing top-level `features` list")),
    };

    features
        .into_iter()
        .enumerate()
        .map(|(index, feature)| facility_from_value(index, feature))
        .collect()
}
