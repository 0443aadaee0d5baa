//! Health and Metrics Endpoint Tests

use axum::http::StatusCode;

use crate::common::{body_text, TestApp};

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new();

    let response = app.get("/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("\"healthy\""));
}

#[tokio::test]
async fn test_liveness() {
    let app = TestApp::new();

    let response = app.get("/health/live").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains("alive"));
}

#[tokio::test]
async fn test_metrics_exposes_request_counts() {
    let app = TestApp::new();
    app.get("/health").await;

    let response = app.get("/metrics").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("marketplace_http_requests_total"));
    assert!(body.contains("path=\"/health\""));
}
