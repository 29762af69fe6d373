//! State definitions for the facility explorer.
//!
//! The server keeps no per-client state: clients send the current
//! [`ExplorerState`] together with a [`ExplorerTransition`] and receive the
//! next state plus everything needed to draw the table, map and detail panel.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    facility::FacilityId,
    facility_detail::DetailPanel,
    facility_view::{FacilityTableRow, MapView},
    filter_criteria::FilterCriteria,
};

/// A selection-producing UI event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "event", content = "facility_id", rename_all = "snake_case")]
pub enum SelectionEvent {
    MapMarkerClicked(FacilityId),
    TableRowClicked(FacilityId),
    #[default]
    NoEvent,
}

/// Click state of the facility table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableCell {
    pub row_id: FacilityId,
    #[serde(default)]
    pub column_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExplorerState {
    pub criteria: FilterCriteria,
    pub selected: Option<FacilityId>,
    pub active_cell: Option<TableCell>,
    pub selected_cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "transition", rename_all = "snake_case")]
pub enum ExplorerTransition {
    FiltersChanged { criteria: FilterCriteria },
    MarkerClicked { facility_id: FacilityId },
    RowClicked { cell: TableCell },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExplorerRequest {
    pub state: ExplorerState,
    pub transition: Option<ExplorerTransition>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplorerView {
    pub state: ExplorerState,
    pub table: Vec<FacilityTableRow>,
    pub map: MapView,
    pub detail: DetailPanel,
    pub is_empty: bool,
}

/// What happens to a selection that the new filters hide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StaleSelectionPolicy {
    /// Drop the selection and fall back to the placeholder.
    #[default]
    Clear,
    /// Keep showing the facility as an out-of-filter detail.
    Keep,
}

impl Display for StaleSelectionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clear => write!(f, "clear"),
            Self::Keep => write!(f, "keep"),
        }
    }
}

impl FromStr for StaleSelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "clear" => Ok(Self::Clear),
            "keep" => Ok(Self::Keep),
            other => Err(format!("unknown stale selection policy '{}', expected 'clear' or 'keep'", other)),
        }
    }
}
