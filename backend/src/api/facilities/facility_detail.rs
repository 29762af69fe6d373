//! Detail panel content for a selected facility.

use std::collections::BTreeSet;

use common::{
    facility::{Facility, TagNode},
    facility_detail::{
        DetailPanel, EMPTY_DESCRIPTION_MESSAGE, FacilityDetail, NO_AVAILABLE_DATA_MESSAGE,
        NO_INFORMATION_MESSAGE, NO_INFRASTRUCTURE_MESSAGE, TagTab,
    },
};

fn non_blank(value: Option<&String>) -> Option<String> {
    value.map(|s| s.trim()).filter(|s| !s.is_empty()).map(|s| s.to_string())
}

fn url_domain(url: &str) -> Option<String> {
    reqwest::Url::parse(url).ok()?.host_str().map(|host| host.to_string())
}

/// Sorts tags case-insensitively, ties broken by the original spelling.
pub fn sort_tags_case_insensitive<'a>(tags: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    let mut tags = tags.into_iter().cloned().collect::<Vec<_>>();
    tags.sort_by_cached_key(|tag| (tag.to_lowercase(), tag.clone()));
    tags
}

/// Sorts the tags of each level case-insensitively. Groups follow the tags
/// of their level in document order.
fn sort_tag_nodes(nodes: &[TagNode]) -> Vec<TagNode> {
    let mut tags = Vec::new();
    let mut groups = Vec::new();
    for node in nodes {
        match node {
            TagNode::Tag(tag) => tags.push(tag),
            TagNode::Group(group) => groups.push(TagNode::Group(sort_tag_nodes(group))),
        }
    }
    let mut tags = sort_tags_case_insensitive(tags);
    tags.dedup();
    tags.into_iter().map(TagNode::Tag).chain(groups).collect()
}

fn tag_tab(tags: Option<&BTreeSet<String>>, layout: &[TagNode], missing_notice: &str) -> TagTab {
    let Some(tags) = tags else {
        return TagTab { enabled: false, entries: vec![], notice: Some(missing_notice.to_string()) };
    };
    let entries = if layout.is_empty() {
        sort_tags_case_insensitive(tags).into_iter().map(TagNode::Tag).collect()
    } else {
        sort_tag_nodes(layout)
    };
    TagTab { enabled: true, entries, notice: None }
}

fn google_maps_url(facility: &Facility) -> Option<String> {
    let location = facility.location?;
    Some(format!("https://www.google.com/maps/search/?api=1&query={}%2C{}", location.lat, location.lon))
}

pub fn facility_detail(facility: &Facility) -> FacilityDetail {
    let mut detail = FacilityDetail {
        facility_id: facility.facility_id,
        title: facility.name.clone(),
        description: NO_INFORMATION_MESSAGE.to_string(),
        is_quote: false,
        source_url: None,
        source_domain: None,
        note: None,
        homepage: None,
        google_maps_url: google_maps_url(facility),
        infrastructure: tag_tab(
            facility.infrastructure.as_ref(),
            &facility.tag_layout.infrastructure,
            NO_INFRASTRUCTURE_MESSAGE,
        ),
        available_data: tag_tab(
            facility.available_data.as_ref(),
            &facility.tag_layout.available_data,
            NO_AVAILABLE_DATA_MESSAGE,
        ),
    };

    if let Some(information) = &facility.information {
        detail.description = non_blank(information.description.as_ref())
            .unwrap_or_else(|| EMPTY_DESCRIPTION_MESSAGE.to_string());
        detail.homepage = non_blank(information.homepage.as_ref());
        detail.note = non_blank(information.note.as_ref());
        if information.copied {
            detail.is_quote = true;
            detail.source_url = non_blank(information.source.as_ref());
            detail.source_domain = detail.source_url.as_deref().and_then(url_domain);
        }
    }
    detail
}

pub fn detail_panel(facility: Option<&Facility>) -> DetailPanel {
    match facility {
        Some(facility) => DetailPanel::Facility(facility_detail(facility)),
        None => DetailPanel::placeholder(),
    }
}
