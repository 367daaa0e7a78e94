//! Integration tests for the Galleria Web API.
//!
//! These tests require the `web` feature to be enabled:
//! ```bash
//! cargo test --features web web_api
//! ```

#![cfg(feature = "web")]

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use galleria::catalog::CatalogDb;
use galleria::web::{create_router, AppState};

/// Creates a router around the embedded catalog.
fn create_test_app() -> axum::Router {
    let catalog = CatalogDb::load().expect("Failed to load catalog");
    create_router(AppState::new(catalog))
}

/// Helper to make a GET request and get the response body as JSON.
async fn get_json(app: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .expect("Request failed");

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);
    (status, json)
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_list_categories() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/api/categories").await;

    assert_eq!(status, StatusCode::OK);
    let categories = json["categories"].as_array().unwrap();
    assert_eq!(categories.len(), 6);
    assert!(categories
        .iter()
        .any(|c| c["id"] == "electronics" && c["name"] == "Electronics"));
}

#[tokio::test]
async fn test_list_items_all() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/api/items").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 12);
}

#[tokio::test]
async fn test_list_items_by_category() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/api/items?category=electronics").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 2);

    let items = json["items"].as_array().unwrap();
    assert!(items.iter().all(|i| i["category"] == "electronics"));
}

#[tokio::test]
async fn test_list_items_category_case_insensitive() {
    let app = create_test_app();

    let (_, upper) = get_json(&app, "/api/items?category=Electronics").await;
    assert_eq!(upper["total"], 2);

    let (_, mixed) = get_json(&app, "/api/items?category=SoFtWaRe").await;
    assert_eq!(mixed["total"], 3);
}

#[tokio::test]
async fn test_list_items_preserves_source_order() {
    let app = create_test_app();
    let (_, json) = get_json(&app, "/api/items?category=software").await;

    let ids: Vec<u64> = json["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![4, 7, 12]);
}

#[tokio::test]
async fn test_list_items_unknown_category_is_empty() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/api/items?category=fashion").await;

    // An unmatched category is a normal empty result, not an error
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["total"], 0);
    assert!(json["items"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_get_item() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/api/items/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Product Alpha");
    assert_eq!(json["score"], 92);
    assert_eq!(json["link"], "https://example.com/product-alpha");
}

#[tokio::test]
async fn test_get_item_not_found() {
    let app = create_test_app();
    let (status, json) = get_json(&app, "/api/items/999").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_item_absent_fields_are_omitted() {
    let app = create_test_app();
    let (_, json) = get_json(&app, "/api/items/1").await;

    // The embedded items have no summary; the field must be absent, not null
    assert!(json.get("summary").is_none());
}
