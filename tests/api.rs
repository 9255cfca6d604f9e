//! API endpoint integration tests

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use media_relay::{ApiServer, AppState, Channel};
use tower::ServiceExt;

mod common;
use common::{MockChannel, MockExtractor, engine, wait_for_sent};

const UPDATE: &str = r#"{"update_id":1,"message":{"message_id":7,"chat":{"id":42,"type":"private"},"text":"/help"}}"#;

/// Build a test API router
fn build_test_router(channel: Option<Arc<MockChannel>>, extractor: &Arc<MockExtractor>) -> axum::Router {
    let channel = channel.map(|c| c as Arc<dyn Channel>);
    let state = AppState::new(channel, engine(extractor));
    ApiServer::new(state, 0).router()
}

fn post(uri: &str, body: &'static str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_bytes(response: axum::response::Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = build_test_router(None, &Arc::new(MockExtractor::failing()));

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body_bytes(response).await).unwrap();
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
}

#[tokio::test]
async fn test_malformed_payloads_get_empty_ok() {
    for body in ["not json", "", "{}", r#"{"message":{"text":"no chat"}}"#, "[1,2]"] {
        let channel = Arc::new(MockChannel::new());
        let extractor = Arc::new(MockExtractor::failing());
        let app = build_test_router(Some(channel.clone()), &extractor);

        let response = app.oneshot(post("/api/webhooks/telegram", body)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK, "body {body:?}");
        assert!(body_bytes(response).await.is_empty());
        assert!(channel.sent().await.is_empty());
    }
}

#[tokio::test]
async fn test_missing_token_makes_no_calls() {
    let extractor = Arc::new(MockExtractor::failing());
    let app = build_test_router(None, &extractor);

    let response = app
        .oneshot(post(
            "/api/webhooks/telegram",
            r#"{"message":{"chat":{"id":42},"text":"https://youtu.be/abc12345678"}}"#,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.is_empty());

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    assert!(extractor.calls().await.is_empty());
}

#[tokio::test]
async fn test_update_is_processed_in_background() {
    let channel = Arc::new(MockChannel::new());
    let extractor = Arc::new(MockExtractor::failing());
    let app = build_test_router(Some(channel.clone()), &extractor);

    let response = app.oneshot(post("/api/webhooks/telegram", UPDATE)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_bytes(response).await.is_empty());
    assert!(wait_for_sent(&channel, 1).await);
    assert_eq!(
        channel.texts().await,
        vec![media_relay::api::webhooks::telegram::replies::HELP.to_string()]
    );
}

#[tokio::test]
async fn test_root_path_accepts_updates() {
    let channel = Arc::new(MockChannel::new());
    let extractor = Arc::new(MockExtractor::failing());
    let app = build_test_router(Some(channel.clone()), &extractor);

    let response = app.oneshot(post("/", UPDATE)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(wait_for_sent(&channel, 1).await);
}
