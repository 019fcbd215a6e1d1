//! Integration tests for liveness endpoints.

use axum::http::StatusCode;

use crate::helpers::TestApp;

#[tokio::test]
async fn ping_answers_pong() {
    let app = TestApp::with_employees(vec![]);

    let response = app.request("GET", "/ping", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.text(), "pong");
}

#[tokio::test]
async fn health_reports_status_and_version() {
    let app = TestApp::with_employees(vec![]);

    let response = app.request("GET", "/api/health", None).await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
}
