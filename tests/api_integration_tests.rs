//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint.

use std::time::Duration;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use mini_evict::{api::create_router, AppState, Config};
use serde_json::Value;
use tower::ServiceExt;

// == Helper Functions ==

fn test_config() -> Config {
    Config {
        lru_capacity: 3,
        rate_limit: 1000,
        ttl_sweep_interval_ms: 50,
        ..Config::default()
    }
}

fn create_test_app() -> (Router, AppState) {
    let state = AppState::from_config(&test_config()).unwrap();
    (create_router(state.clone()), state)
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn put_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// == TTL Endpoint Tests ==

#[tokio::test]
async fn test_ttl_set_and_get() {
    let (app, _state) = create_test_app();

    let response = app
        .clone()
        .oneshot(put_json("/ttl", r#"{"key":"test_key","value":"test_value","ttl_ms":60000}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert!(json["message"].as_str().unwrap().contains("test_key"));

    let response = app.oneshot(get("/ttl/test_key")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["value"], "test_value");
    assert!(json["ttl_remaining_ms"].as_u64().unwrap() <= 60_000);
}

#[tokio::test]
async fn test_ttl_without_ttl_never_expires() {
    let (app, _state) = create_test_app();

    app.clone()
        .oneshot(put_json("/ttl", r#"{"key":"forever","value":"v"}"#))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(150)).await;

    let response = app.oneshot(get("/ttl/forever")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert!(json["ttl_remaining_ms"].is_null());
}

#[tokio::test]
async fn test_ttl_expired_key_returns_404() {
    let (app, _state) = create_test_app();

    app.clone()
        .oneshot(put_json("/ttl", r#"{"key":"short","value":"v","ttl_ms":50}"#))
        .await
        .unwrap();

    tokio::time::sleep(Duration::from_millis(120)).await;

    let response = app.oneshot(get("/ttl/short")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("short"));
}

#[tokio::test]
async fn test_ttl_sweep_visible_in_health() {
    let (app, state) = create_test_app();

    app.clone()
        .oneshot(put_json("/ttl", r#"{"key":"a","value":"v","ttl_ms":20}"#))
        .await
        .unwrap();
    assert_eq!(state.ttl.len(), 1);

    tokio::time::sleep(Duration::from_millis(250)).await;

    let response = app.oneshot(get("/health")).await.unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["ttl_entries"], 0, "Sweep should purge without a read");
}

#[tokio::test]
async fn test_ttl_delete() {
    let (app, _state) = create_test_app();

    app.clone()
        .oneshot(put_json("/ttl", r#"{"key":"del","value":"v"}"#))
        .await
        .unwrap();

    let delete = || {
        Request::builder()
            .method("DELETE")
            .uri("/ttl/del")
            .body(Body::empty())
            .unwrap()
    };

    let response = app.clone().oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(delete()).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ttl_set_empty_key_rejected() {
    let (app, _state) = create_test_app();

    let response = app
        .oneshot(put_json("/ttl", r#"{"key":"","value":"v"}"#))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// == LRU Endpoint Tests ==

#[tokio::test]
async fn test_lru_promotion_scenario() {
    let (app, _state) = create_test_app();

    for (key, value) in [("A", "1"), ("B", "2"), ("C", "3")] {
        let body = format!(r#"{{"key":"{}","value":"{}"}}"#, key, value);
        let response = app.clone().oneshot(put_json("/lru", &body)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.clone().oneshot(get("/lru/A")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(put_json("/lru", r#"{"key":"D","value":"4"}"#))
        .await
        .unwrap();
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["evicted"], "B");

    let response = app.clone().oneshot(get("/lru/B")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    for key in ["A", "C", "D"] {
        let response = app.clone().oneshot(get(&format!("/lru/{}", key))).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{} should still be cached", key);
    }
}

#[tokio::test]
async fn test_lru_zero_capacity_stores_nothing() {
    let config = Config {
        lru_capacity: 0,
        ..test_config()
    };
    let app = create_router(AppState::from_config(&config).unwrap());

    let response = app
        .clone()
        .oneshot(put_json("/lru", r#"{"key":"k","value":"v"}"#))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app.oneshot(get("/lru/k")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// == Rate Limit Tests ==

#[tokio::test]
async fn test_rate_limit_per_client_and_recovery() {
    let config = Config {
        rate_limit: 3,
        rate_window_ms: 300,
        ..test_config()
    };
    let app = create_router(AppState::from_config(&config).unwrap());

    let request = |client: &str| {
        Request::builder()
            .uri("/health")
            .header("x-client-id", client)
            .body(Body::empty())
            .unwrap()
    };

    for _ in 0..3 {
        let response = app.clone().oneshot(request("ip")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    let response = app.clone().oneshot(request("ip")).await.unwrap();
    assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
    let json = body_to_json(response.into_body()).await;
    assert!(json["error"].as_str().unwrap().contains("ip"));

    let response = app.clone().oneshot(request("other")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    tokio::time::sleep(Duration::from_millis(400)).await;

    let response = app.oneshot(request("ip")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK, "Budget should recover after the window");
}

#[tokio::test]
async fn test_invalid_config_rejected() {
    let config = Config {
        rate_window_ms: 0,
        ..test_config()
    };
    assert!(AppState::from_config(&config).is_err());
}
