//! Mapper → mock receiver round trips

#[path = "common/mod.rs"]
mod common;

use aimbridge::{build_document, MapperConfig, MappingMode, SpecStore};
use aimbridge_receiver::{router, API_PREFIX};
use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::*;
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;
use tower::ServiceExt;

fn mapped_document(run_id: &str) -> Value {
    let run = with_data_sheet(finished_run(run_id));
    let document = build_document(&run, &MapperConfig::default()).unwrap();
    serde_json::to_value(document).unwrap()
}

fn post_request(body: &Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(format!("{API_PREFIX}/aiModelSpecification"))
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[test]
fn store_round_trip_preserves_the_document() {
    let store = SpecStore::new();
    let document = mapped_document("run-1");
    let id = store.insert(document.clone()).unwrap();

    assert_eq!(store.get(&id).unwrap(), document);
}

#[tokio::test]
async fn http_round_trip_preserves_the_document() {
    let store = Arc::new(SpecStore::new());
    let app = router(Arc::clone(&store));
    let document = mapped_document("run-1");

    let response = app
        .clone()
        .oneshot(post_request(&document))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["id"].as_str().unwrap().to_string();

    let response = app
        .oneshot(get_request(&format!("{API_PREFIX}/aiModelSpecification/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, document);
}

#[tokio::test]
async fn fields_projection_returns_exactly_the_requested_keys() {
    let store = Arc::new(SpecStore::new());
    let app = router(Arc::clone(&store));
    let document = mapped_document("run-1");
    let id = store.insert(document).unwrap();

    let response = app
        .oneshot(get_request(&format!(
            "{API_PREFIX}/aiModelSpecification/{id}?fields=id,name"
        )))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    let object = body.as_object().unwrap();
    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["id", "name"]);
}

#[tokio::test]
async fn document_without_data_sheet_is_rejected_and_not_stored() {
    let store = Arc::new(SpecStore::new());
    let app = router(Arc::clone(&store));

    // Tag-driven mapping of a run without data-sheet tags omits the section
    let run = finished_run("run-1");
    let document = build_document(&run, &MapperConfig::default()).unwrap();
    let document = serde_json::to_value(document).unwrap();
    let id = document["id"].as_str().unwrap().to_string();

    let response = app.clone().oneshot(post_request(&document)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"], "Missing required field: modelDataSheet");

    let response = app
        .oneshot(get_request(&format!("{API_PREFIX}/aiModelSpecification/{id}")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn always_populated_documents_pass_receiver_validation() {
    let store = Arc::new(SpecStore::new());
    let app = router(store);

    let run = finished_run("run-1");
    let document = build_document(
        &run,
        &MapperConfig::with_mode(MappingMode::AlwaysPopulated),
    )
    .unwrap();
    let document = serde_json::to_value(document).unwrap();

    let response = app.oneshot(post_request(&document)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn duplicate_id_overwrites_by_content() {
    let store = Arc::new(SpecStore::new());
    let app = router(Arc::clone(&store));

    let mut document = mapped_document("run-1");
    let response = app.clone().oneshot(post_request(&document)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    document["version"] = serde_json::json!("9.9");
    let response = app.clone().oneshot(post_request(&document)).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let id = document["id"].as_str().unwrap();
    let response = app
        .oneshot(get_request(&format!("{API_PREFIX}/aiModelSpecification/{id}")))
        .await
        .unwrap();
    let stored = body_json(response).await;
    assert_eq!(stored["version"], "9.9");
    assert_eq!(store.len(), 1);
}

#[tokio::test]
async fn concurrent_posts_with_distinct_ids_all_land() {
    let store = Arc::new(SpecStore::new());
    let app = router(Arc::clone(&store));

    let mut handles = Vec::new();
    for i in 0..16 {
        let app = app.clone();
        let document = mapped_document(&format!("run-{i}"));
        handles.push(tokio::spawn(async move {
            let response = app.oneshot(post_request(&document)).await.unwrap();
            assert_eq!(response.status(), StatusCode::CREATED);
            body_json(response).await["id"].as_str().unwrap().to_string()
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }

    assert_eq!(store.len(), 16);
    for id in ids {
        assert!(store.get(&id).is_some());
    }
}

#[tokio::test]
async fn get_all_lists_every_stored_document() {
    let store = Arc::new(SpecStore::new());
    let app = router(Arc::clone(&store));

    store.insert(mapped_document("run-1")).unwrap();
    store.insert(mapped_document("run-2")).unwrap();

    let response = app
        .oneshot(get_request(&format!("{API_PREFIX}/aiModelSpecification")))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 2);
}
