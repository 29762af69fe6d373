//! Explorer state machine.
//!
//! One call per UI interaction: the client's current [`ExplorerState`] plus a
//! named [`ExplorerTransition`] give the next state, which is then rendered
//! into table rows, map markers and the detail panel.

use common::{
    explorer_state::{ExplorerState, ExplorerTransition, ExplorerView, SelectionEvent, StaleSelectionPolicy},
    facility::FacilityId,
};
use tracing::debug;

use crate::api::facilities::{detail_panel, filter_facilities, project_map, project_table, select_facility};
use crate::catalog_utils::facility_catalog::FacilityCatalog;

fn resolve_selection(catalog: &FacilityCatalog, event: SelectionEvent) -> Option<FacilityId> {
    select_facility(catalog, &event).map(|facility| facility.facility_id)
}

pub fn apply_transition(
    catalog: &FacilityCatalog,
    mut state: ExplorerState,
    transition: ExplorerTransition,
    policy: StaleSelectionPolicy,
) -> ExplorerState {
    match transition {
        ExplorerTransition::FiltersChanged { criteria } => {
            if let (Some(selected), StaleSelectionPolicy::Clear) = (state.selected, policy) {
                let view = filter_facilities(catalog, &criteria);
                if !view.contains(selected) {
                    debug!(facility_id = %selected, "Clearing selection hidden by new filters");
                    state.selected = None;
                }
            }
            state.criteria = criteria;
        }
        ExplorerTransition::MarkerClicked { facility_id } => {
            state.selected = resolve_selection(catalog, SelectionEvent::MapMarkerClicked(facility_id));
        }
        ExplorerTransition::RowClicked { cell } => {
            state.selected = resolve_selection(catalog, SelectionEvent::TableRowClicked(cell.row_id));
        }
    }

    // the table only reports a click when its cell state changes, so it is
    // emptied after every transition
    state.active_cell = None;
    state.selected_cells.clear();
    state
}

/// Renders `state`. A selection missing from `catalog`, such as an id from a
/// previous load, is dropped so the state matches the placeholder panel.
pub fn render_explorer(catalog: &FacilityCatalog, mut state: ExplorerState) -> ExplorerView {
    let view = filter_facilities(catalog, &state.criteria);
    let selected = state.selected.and_then(|facility_id| catalog.get(facility_id));
    if selected.is_none() && state.selected.is_some() {
        debug!(facility_id = ?state.selected, "Dropping selection unknown to the catalog");
    }
    state.selected = selected.map(|facility| facility.facility_id);

    ExplorerView {
        table: project_table(&view, state.selected),
        map: project_map(&view, state.selected),
        detail: detail_panel(selected),
        is_empty: view.is_empty,
        state,
    }
}

/// Applies an optional transition and renders the result.
pub fn explore(
    catalog: &FacilityCatalog,
    state: ExplorerState,
    transition: Option<ExplorerTransition>,
    policy: StaleSelectionPolicy,
) -> ExplorerView {
    let state = match transition {
        Some(transition) => apply_transition(catalog, state, transition, policy),
        None => state,
    };
    render_explorer(catalog, state)
}
