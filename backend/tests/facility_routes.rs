use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use backend::{
    catalog_utils::{
        catalog_source::{CatalogSource, load_catalog},
        catalog_store::CatalogStore,
    },
    server_routes::{AppState, build_router},
};
use common::explorer_state::StaleSelectionPolicy;
use http_body_util::BodyExt;
use serde_json::{Value as JsonValue, json};
use tempfile::TempDir;
use tower::ServiceExt;

const CATALOG: &str = r#"
features:
  - geometry:
      coordinates: [13.0, 52.0, 35.0]
    properties:
      name: A
      country: Germany
      type: lab
    information:
      description: Wind tunnel lab.
      homepage: https://a.example.org
    infrastructure: [wind tunnel]
  - geometry:
      coordinates: [null, null, null]
    properties:
      name: B
      country: Germany
      type: test site
    infrastructure: []
  - geometry:
      coordinates: [12.5, 55.7, 0.0]
    properties:
      name: C
      country: Denmark
      type: lab
    infrastructure: [wind tunnel]
    availabledata: [SCADA]
"#;

async fn loaded_app(policy: StaleSelectionPolicy) -> (TempDir, Router) {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("facilities.yaml");
    std::fs::write(&path, CATALOG).expect("write catalog");
    let loaded = load_catalog(&CatalogSource::File(path), 1).await.expect("load catalog");
    let store = Arc::new(CatalogStore::with_catalog(loaded));
    (dir, build_router(Arc::new(AppState::new(store, policy))))
}

fn empty_app() -> Router {
    build_router(Arc::new(AppState::new(Arc::new(CatalogStore::new()), StaleSelectionPolicy::Clear)))
}

async fn send(app: Router, method: &str, uri: &str, body: Option<JsonValue>) -> (StatusCode, JsonValue) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("collect body").to_bytes();
    let json = if bytes.is_empty() { JsonValue::Null } else { serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null) };
    (status, json)
}

fn names(facilities: &JsonValue) -> Vec<String> {
    facilities
        .as_array()
        .expect("array")
        .iter()
        .map(|f| f["name"].as_str().unwrap_or_default().to_string())
        .collect()
}

#[tokio::test]
async fn health_reports_loaded_catalog() {
    let (_dir, app) = loaded_app(StaleSelectionPolicy::Clear).await;
    let (status, json) = send(app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["facility_count"], 3);
    assert!(json["catalog_source"].as_str().is_some_and(|source| source.ends_with("facilities.yaml")));
    assert_eq!(json["catalog_fingerprint"].as_str().map(str::len), Some(64));
}

#[tokio::test]
async fn requests_before_load_are_unavailable() {
    let (status, json) = send(empty_app(), "GET", "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["status"], "loading");
    assert_eq!(json["catalog_source"], JsonValue::Null);

    let (status, json) = send(empty_app(), "GET", "/facilities", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["status"], 503);

    let (status, _) = send(empty_app(), "POST", "/facilities/filter", Some(json!({}))).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn lists_full_catalog_in_order() {
    let (_dir, app) = loaded_app(StaleSelectionPolicy::Clear).await;
    let (status, json) = send(app, "GET", "/facilities", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&json), vec!["A", "B", "C"]);
    assert_eq!(json[1]["facility_id"], 1);
    assert_eq!(json[1]["location"], JsonValue::Null);
    assert_eq!(json[2]["type"], "lab");
}

#[tokio::test]
async fn filter_combines_dimensions() {
    let (_dir, app) = loaded_app(StaleSelectionPolicy::Clear).await;
    let body = json!({"countries": ["Germany"], "infrastructure": ["wind tunnel"]});
    let (status, json) = send(app, "POST", "/facilities/filter", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(names(&json["facilities"]), vec!["A"]);
    assert_eq!(json["is_empty"], false);
}

#[tokio::test]
async fn empty_filter_returns_everything() {
    let (_dir, app) = loaded_app(StaleSelectionPolicy::Clear).await;
    let body = json!({"countries": [], "types": [], "infrastructure": [], "data": []});
    let (_, json) = send(app, "POST", "/facilities/filter", Some(body)).await;
    assert_eq!(names(&json["facilities"]), vec!["A", "B", "C"]);
}

#[tokio::test]
async fn unmatched_filter_is_empty_not_an_error() {
    let (_dir, app) = loaded_app(StaleSelectionPolicy::Clear).await;
    let body = json!({"data": ["satellite imagery"]});
    let (status, json) = send(app, "POST", "/facilities/filter", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["is_empty"], true);
    assert_eq!(json["facilities"], json!([]));
}

#[tokio::test]
async fn facility_lookup_and_not_found() {
    let (_dir, app) = loaded_app(StaleSelectionPolicy::Clear).await;
    let (status, json) = send(app.clone(), "GET", "/facilities/2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "C");

    let (status, json) = send(app, "GET", "/facilities/7", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["status"], 404);
}

#[tokio::test]
async fn facility_detail_and_options() {
    let (_dir, app) = loaded_app(StaleSelectionPolicy::Clear).await;
    let (status, json) = send(app.clone(), "GET", "/facilities/0/detail", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "A");
    assert_eq!(json["description"], "Wind tunnel lab.");
    assert_eq!(json["homepage"], "https://a.example.org");
    assert_eq!(json["available_data"]["enabled"], false);

    let (status, json) = send(app, "GET", "/facilities/options", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["countries"], json!(["Denmark", "Germany"]));
    assert_eq!(json["types"], json!(["lab", "test site"]));
    assert_eq!(json["infrastructure"], json!(["wind tunnel"]));
    assert_eq!(json["data"], json!(["SCADA"]));
}

#[tokio::test]
async fn explorer_row_click_then_filter_change() {
    let (_dir, app) = loaded_app(StaleSelectionPolicy::Clear).await;

    let body = json!({"transition": {"transition": "row_clicked", "cell": {"row_id": 1, "column_id": "name"}}});
    let (status, json) = send(app.clone(), "POST", "/explorer", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"]["selected"], 1);
    assert_eq!(json["state"]["active_cell"], JsonValue::Null);
    assert_eq!(json["detail"]["kind"], "facility");
    assert_eq!(json["detail"]["title"], "B");
    assert_eq!(json["table"].as_array().unwrap().len(), 3);
    assert_eq!(json["map"]["markers"].as_array().unwrap().len(), 2);

    // B has no wind tunnel, so the default policy drops the selection
    let body = json!({
        "state": json["state"],
        "transition": {"transition": "filters_changed", "criteria": {"infrastructure": ["wind tunnel"]}}
    });
    let (status, json) = send(app, "POST", "/explorer", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"]["selected"], JsonValue::Null);
    assert_eq!(json["detail"]["kind"], "placeholder");
    assert_eq!(names(&json["table"]), vec!["A", "C"]);
}

#[tokio::test]
async fn explorer_keep_policy_keeps_hidden_selection() {
    let (_dir, app) = loaded_app(StaleSelectionPolicy::Keep).await;
    let body = json!({
        "state": {"selected": 1},
        "transition": {"transition": "filters_changed", "criteria": {"infrastructure": ["wind tunnel"]}}
    });
    let (_, json) = send(app, "POST", "/explorer", Some(body)).await;
    assert_eq!(json["state"]["selected"], 1);
    assert_eq!(json["detail"]["title"], "B");
    assert_eq!(names(&json["table"]), vec!["A", "C"]);
}

#[tokio::test]
async fn explorer_drops_selection_from_previous_catalog() {
    let (_dir, app) = loaded_app(StaleSelectionPolicy::Clear).await;
    let (status, json) = send(app, "POST", "/explorer", Some(json!({"state": {"selected": 12}}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"]["selected"], JsonValue::Null);
    assert_eq!(json["detail"]["kind"], "placeholder");
}

#[tokio::test]
async fn explorer_initial_render() {
    let (_dir, app) = loaded_app(StaleSelectionPolicy::Clear).await;
    let (status, json) = send(app, "POST", "/explorer", Some(json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["detail"]["kind"], "placeholder");
    assert_eq!(json["is_empty"], false);
    assert_eq!(json["map"]["viewport"]["center_lat"], (52.0 + 55.7) / 2.0);
}
