use std::collections::BTreeSet;

use common::facility_view::FilterOptions;

use crate::api::facilities::facility_detail::sort_tags_case_insensitive;
use crate::catalog_utils::facility_catalog::FacilityCatalog;

/// Distinct values for each filter dropdown. Missing values are not offered.
pub fn filter_options(catalog: &FacilityCatalog) -> FilterOptions {
    let mut countries = BTreeSet::new();
    let mut types = BTreeSet::new();
    let mut infrastructure = BTreeSet::new();
    let mut data = BTreeSet::new();

    for facility in catalog.iter() {
        countries.extend(facility.country.iter());
        types.extend(facility.facility_type.iter());
        infrastructure.extend(facility.infrastructure.iter().flatten());
        data.extend(facility.available_data.iter().flatten());
    }

    FilterOptions {
        countries: countries.into_iter().cloned().collect(),
        types: types.into_iter().cloned().collect(),
        infrastructure: sort_tags_case_insensitive(infrastructure),
        data: sort_tags_case_insensitive(data),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::facilities::test_catalog::{facility, three_facility_catalog};

    #[test]
    fn lists_distinct_sorted_values() {
        let options = filter_options(&three_facility_catalog());
        assert_eq!(options.countries, vec!["Denmark", "Germany"]);
        assert_eq!(options.types, vec!["lab", "test site"]);
        assert_eq!(options.infrastructure, vec!["wind tunnel"]);
        assert_eq!(options.data, vec!["SCADA"]);
    }

    #[test]
    fn tags_sort_case_insensitively_and_skip_missing_values() {
        let catalog = FacilityCatalog::new(vec![
            facility("a", None, Some("lab"), Some(&["lidar", "Met mast"]), None),
            facility("b", Some("Norway"), None, Some(&["Anemometer", "lidar"]), None),
        ]);
        let options = filter_options(&catalog);
        assert_eq!(options.countries, vec!["Norway"]);
        assert_eq!(options.types, vec!["lab"]);
        assert_eq!(options.infrastructure, vec!["Anemometer", "lidar", "Met mast"]);
        assert!(options.data.is_empty());
    }
}
