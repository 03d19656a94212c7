//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use news_comments::{
    api::create_router,
    cache::{EvictionAlgorithm, SharedCache},
    comments::InMemoryCommentStore,
    AppState,
};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn create_test_state(capacity: usize, algorithm: EvictionAlgorithm) -> AppState {
    let cache = SharedCache::new(capacity, algorithm).unwrap();
    AppState::new(InMemoryCommentStore::new(), cache)
}

fn create_test_app() -> Router {
    create_router(create_test_state(100, EvictionAlgorithm::Lru))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

async fn create_comment(app: &Router, news_id: u64, username: &str, text: &str) -> Value {
    let (status, json) = send(
        app,
        "POST",
        "/api/comments",
        Some(serde_json::json!({ "news_id": news_id, "username": username, "text": text })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    json
}

// == CREATE Endpoint Tests ==

#[tokio::test]
async fn test_create_endpoint_success() {
    let app = create_test_app();

    let json = create_comment(&app, 7, "alice", "first!").await;

    assert_eq!(json["id"], 1);
    assert_eq!(json["news_id"], 7);
    assert_eq!(json["username"], "alice");
    assert_eq!(json["text"], "first!");
    assert!(json["time"].is_string());
}

#[tokio::test]
async fn test_create_endpoint_empty_username() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        "POST",
        "/api/comments",
        Some(serde_json::json!({ "news_id": 1, "username": "", "text": "hi" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Username"));
}

#[tokio::test]
async fn test_create_endpoint_malformed_json() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/comments")
                .header("content-type", "application/json")
                .body(Body::from(r#"{"news_id": "not a number"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

// == GET Endpoint Tests ==

#[tokio::test]
async fn test_get_endpoint_success() {
    let app = create_test_app();
    let created = create_comment(&app, 1, "bob", "nice").await;

    let (status, json) = send(&app, "GET", "/api/comments/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, created);
}

#[tokio::test]
async fn test_get_endpoint_not_found() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/comments/99")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("99"));
}

#[tokio::test]
async fn test_get_endpoint_served_from_cache() {
    let state = create_test_state(100, EvictionAlgorithm::Lfu);
    let app = create_router(state.clone());
    create_comment(&app, 1, "bob", "cached").await;

    for _ in 0..3 {
        let (status, _) = send(&app, "GET", "/api/comments/1", None).await;
        assert_eq!(status, StatusCode::OK);
    }

    let stats = state.cache().stats();
    assert_eq!(stats.hits, 3);
    assert_eq!(stats.misses, 0);
}

// == UPDATE Endpoint Tests ==

#[tokio::test]
async fn test_update_endpoint_success() {
    let app = create_test_app();
    create_comment(&app, 1, "carol", "draft").await;

    let (status, json) = send(
        &app,
        "PUT",
        "/api/comments",
        Some(serde_json::json!({ "id": 1, "text": "final" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["text"], "final");
    assert_eq!(json["username"], "carol");

    let (_, json) = send(&app, "GET", "/api/comments/1", None).await;
    assert_eq!(json["text"], "final");
}

#[tokio::test]
async fn test_update_endpoint_not_found() {
    let state = create_test_state(100, EvictionAlgorithm::Lru);
    let app = create_router(state.clone());

    let (status, _) = send(
        &app,
        "PUT",
        "/api/comments",
        Some(serde_json::json!({ "id": 5, "text": "ghost" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(state.cache().is_empty());
}

// == DELETE Endpoint Tests ==

#[tokio::test]
async fn test_delete_endpoint_success() {
    let app = create_test_app();
    create_comment(&app, 1, "dave", "temporary").await;

    let (status, json) = send(&app, "DELETE", "/api/comments/1", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(json, Value::Null);

    let (status, _) = send(&app, "GET", "/api/comments/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_endpoint_not_found() {
    let app = create_test_app();

    let (status, _) = send(&app, "DELETE", "/api/comments/1", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

// == Listing Endpoint Tests ==

#[tokio::test]
async fn test_list_endpoint_pagination() {
    let app = create_test_app();
    for i in 0..5 {
        create_comment(&app, 1, "erin", &format!("comment {}", i)).await;
    }

    let (status, json) = send(&app, "GET", "/api/comments?offset=1&limit=2", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["page_number"], 1);
    assert_eq!(json["page_size"], 2);
    assert_eq!(json["total_elements"], 5);
    assert_eq!(json["total_pages"], 3);
    let ids: Vec<u64> = json["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_u64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 4]);
}

#[tokio::test]
async fn test_list_endpoint_defaults() {
    let app = create_test_app();
    create_comment(&app, 1, "erin", "only").await;

    let (status, json) = send(&app, "GET", "/api/comments", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["page_number"], 0);
    assert_eq!(json["page_size"], 15);
    assert_eq!(json["content"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_list_endpoint_zero_limit() {
    let app = create_test_app();

    let (status, _) = send(&app, "GET", "/api/comments?limit=0", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_news_and_search_endpoints() {
    let app = create_test_app();
    create_comment(&app, 1, "frank", "great reporting").await;
    create_comment(&app, 2, "grace", "great photos").await;
    create_comment(&app, 2, "frankie", "meh").await;

    let (_, json) = send(&app, "GET", "/api/comments/news-id/2", None).await;
    assert_eq!(json["total_elements"], 2);

    let (_, json) = send(&app, "GET", "/api/comments/search/text/great", None).await;
    assert_eq!(json["total_elements"], 2);

    let (_, json) = send(&app, "GET", "/api/comments/search/username/frank", None).await;
    assert_eq!(json["total_elements"], 2);

    let (_, json) = send(&app, "GET", "/api/comments/search/username/zed", None).await;
    assert_eq!(json["total_elements"], 0);
    assert_eq!(json["total_pages"], 0);
}

// == Stats & Health Endpoint Tests ==

#[tokio::test]
async fn test_stats_endpoint_tracks_evictions() {
    let app = create_router(create_test_state(2, EvictionAlgorithm::Lru));
    for text in ["a", "b", "c"] {
        create_comment(&app, 1, "henry", text).await;
    }
    send(&app, "GET", "/api/comments/1", None).await; // evicted, read through again

    let (status, json) = send(&app, "GET", "/stats", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["algorithm"], "lru");
    assert_eq!(json["capacity"], 2);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["evictions"], 2);
    assert_eq!(json["total_entries"], 2);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_unknown_route() {
    let app = create_test_app();

    let (status, _) = send(&app, "GET", "/nonexistent", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}
