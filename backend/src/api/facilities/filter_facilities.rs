//! Multi-criteria facility filter.
//!
//! Dimensions combine with AND. Inside a tag dimension any shared tag is
//! enough. An empty criteria set lets every facility through its dimension.

use std::collections::BTreeSet;

use common::{facility::Facility, facility_view::FilteredView, filter_criteria::FilterCriteria};

use crate::catalog_utils::facility_catalog::FacilityCatalog;

fn matches_value(selected: &BTreeSet<String>, value: Option<&String>) -> bool {
    if selected.is_empty() {
        return true;
    }
    match value {
        Some(value) => selected.contains(value),
        None => false,
    }
}

fn matches_any_tag(selected: &BTreeSet<String>, tags: Option<&BTreeSet<String>>) -> bool {
    if selected.is_empty() {
        return true;
    }
    match tags {
        Some(tags) => !tags.is_disjoint(selected),
        None => false,
    }
}

pub fn facility_matches(facility: &Facility, criteria: &FilterCriteria) -> bool {
    matches_value(&criteria.countries, facility.country.as_ref())
        && matches_value(&criteria.types, facility.facility_type.as_ref())
        && matches_any_tag(&criteria.infrastructure, facility.infrastructure.as_ref())
        && matches_any_tag(&criteria.data, facility.available_data.as_ref())
}

/// Keeps the facilities matching `criteria`, in catalog order.
pub fn filter_facilities(catalog: &FacilityCatalog, criteria: &FilterCriteria) -> FilteredView {
    let facilities = catalog
        .iter()
        .filter(|facility| facility_matches(facility, criteria))
        .cloned()
        .collect::<Vec<_>>();

    FilteredView {
        criteria: criteria.clone(),
        is_empty: facilities.is_empty(),
        facilities,
    }
}
