//! Map markers and viewport for a filtered view.
//!
//! The zoom is a rough fit: the larger of the latitude and longitude spans
//! (at least one degree) is turned into kilometres at 111 km per degree and
//! `floor(11.5 - ln(km))` gives the tile zoom. Tighter clusters zoom in
//! further.

use common::{
    facility::FacilityId,
    facility_view::{FilteredView, MapMarker, MapView, MapViewport},
};

pub const MIN_ZOOM: u8 = 1;
pub const MAX_ZOOM: u8 = 18;
pub const SINGLE_FACILITY_ZOOM: u8 = 10;

const KM_PER_DEGREE: f64 = 111.0;
const MIN_SPAN_DEGREES: f64 = 1.0;

fn zoom_for_span(span_degrees: f64) -> u8 {
    let span_km = span_degrees.max(MIN_SPAN_DEGREES) * KM_PER_DEGREE;
    let zoom = (11.5 - span_km.ln()).floor();
    zoom.clamp(MIN_ZOOM as f64, MAX_ZOOM as f64) as u8
}

/// Viewport showing every `(lat, lon)` point.
pub fn map_viewport(points: &[(f64, f64)]) -> MapViewport {
    match points {
        [] => MapViewport { center_lat: 0.0, center_lon: 0.0, zoom: MIN_ZOOM },
        [(lat, lon)] => MapViewport { center_lat: *lat, center_lon: *lon, zoom: SINGLE_FACILITY_ZOOM },
        _ => {
            let (mut min_lat, mut max_lat) = (f64::INFINITY, f64::NEG_INFINITY);
            let (mut min_lon, mut max_lon) = (f64::INFINITY, f64::NEG_INFINITY);
            for (lat, lon) in points {
                min_lat = min_lat.min(*lat);
                max_lat = max_lat.max(*lat);
                min_lon = min_lon.min(*lon);
                max_lon = max_lon.max(*lon);
            }
            let span = (max_lat - min_lat).max(max_lon - min_lon);
            MapViewport {
                center_lat: (min_lat + max_lat) / 2.0,
                center_lon: (min_lon + max_lon) / 2.0,
                zoom: zoom_for_span(span),
            }
        }
    }
}

/// Markers for the locatable facilities of `view`; the rest only appear in the table.
pub fn project_map(view: &FilteredView, selected: Option<FacilityId>) -> MapView {
    let markers = view
        .facilities
        .iter()
        .filter_map(|facility| {
            let location = facility.location?;
            Some(MapMarker {
                facility_id: facility.facility_id,
                name: facility.name.clone(),
                lat: location.lat,
                lon: location.lon,
                selected: selected == Some(facility.facility_id),
            })
        })
        .collect::<Vec<_>>();

    let points = markers.iter().map(|m| (m.lat, m.lon)).collect::<Vec<_>>();
    MapView { viewport: map_viewport(&points), markers }
}
