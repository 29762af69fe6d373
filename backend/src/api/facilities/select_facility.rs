//! Resolves map and table clicks to a facility.

use common::{explorer_state::SelectionEvent, facility::Facility};

use crate::catalog_utils::facility_catalog::FacilityCatalog;

/// Looks the clicked facility up in the full catalog, not in the filtered
/// view, so a selection can outlive the filters that showed it.
pub fn select_facility<'a>(catalog: &'a FacilityCatalog, event: &SelectionEvent) -> Option<&'a Facility> {
    match event {
        SelectionEvent::MapMarkerClicked(facility_id) | SelectionEvent::TableRowClicked(facility_id) => {
            catalog.get(*facility_id)
        }
        SelectionEvent::NoEvent => None,
    }
}
