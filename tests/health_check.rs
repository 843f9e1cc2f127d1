//! Health Check API Tests

use axum::body::to_bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use forum_server::presentation::http::handlers::health::{health_check, liveness};

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let response = health_check().await.into_response();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn liveness_endpoint_reports_alive() {
    let response = liveness().await.into_response();

    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "alive");
}
