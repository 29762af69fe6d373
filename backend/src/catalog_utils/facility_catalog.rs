//! In-memory facility table.

use common::facility::{Facility, FacilityId};

/// Read-only list of facilities whose ids equal their positions.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FacilityCatalog {
    facilities: Vec<Facility>,
}

impl FacilityCatalog {
    /// Builds a catalog, numbering facilities by position.
    pub fn new(mut facilities: Vec<Facility>) -> Self {
        for (index, facility) in facilities.iter_mut().enumerate() {
            facility.facility_id = FacilityId::from(index);
        }
        Self { facilities }
    }

    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Facility> {
        self.facilities.iter()
    }

    pub fn get(&self, facility_id: FacilityId) -> Option<&Facility> {
        self.facilities.get(facility_id.index()?)
    }

    pub fn len(&self) -> usize {
        self.facilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facilities.is_empty()
    }
}

/// A catalog together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedCatalog {
    pub catalog: FacilityCatalog,
    pub source: String,
    /// SHA-256 of the raw document.
    pub fingerprint: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::facilities::test_catalog::{facility, three_facility_catalog};

    #[test]
    fn ids_follow_positions() {
        let catalog = FacilityCatalog::new(vec![facility("x", None, None, None, None), facility("y", None, None, None, None)]);
        assert_eq!(catalog.get(FacilityId(1)).map(|f| f.name.as_str()), Some("y"));
    }

    #[test]
    fn out_of_range_ids_are_not_found() {
        let catalog = three_facility_catalog();
        assert!(catalog.get(FacilityId(3)).is_none());
        assert!(catalog.get(FacilityId(u64::MAX)).is_none());
        assert!(catalog.get(FacilityId(u64::from(u32::MAX) + 1)).is_none());
    }
}
