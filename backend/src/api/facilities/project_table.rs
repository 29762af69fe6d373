use common::{facility::FacilityId, facility_view::{FacilityTableRow, FilteredView}};


pub fn project_table(view: &FilteredView, selected: Option<FacilityId>) -> Vec<FacilityTableRow> {
    view.facilities
        .iter()
        .map(|facility| FacilityTableRow {
            id: facility.facility_id,
            name: facility.name.clone(),
            country: facility.country.clone(),
            facility_type: facility.facility_type.clone(),
            selected: selected == Some(facility.facility_id),
        })
        .collect()
}
