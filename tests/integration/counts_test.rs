//! Integration tests for per-employee job counts.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

async fn seed(app: &TestApp) {
    // Employee 1 gets two jobs, employee 2 gets two jobs, employee 3 none.
    for (name, employee_id) in [("Job1", 1), ("Job2", 1), ("Job3", 2), ("Job4", 2)] {
        let response = app
            .request(
                "POST",
                "/api/jobs",
                Some(json!({"name": name, "employeeId": employee_id})),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }
}

#[tokio::test]
async fn counts_are_keyed_by_stringified_id() {
    let app = TestApp::with_employees(vec![1, 2]);
    seed(&app).await;

    let response = app
        .request(
            "POST",
            "/api/jobs/_counts",
            Some(json!({"employeeIds": [1, 2, 3]})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({"1": 2, "2": 2, "3": 0}));
}

#[tokio::test]
async fn counts_skip_the_existence_check() {
    // The directory knows nobody, yet counting still succeeds: a count of
    // zero is a valid answer for an unknown id.
    let app = TestApp::with_employees(vec![]);

    let response = app
        .request(
            "POST",
            "/api/jobs/_counts",
            Some(json!({"employeeIds": [7]})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({"7": 0}));
}

#[tokio::test]
async fn duplicate_ids_collapse_to_one_entry() {
    let app = TestApp::with_employees(vec![1, 2]);
    seed(&app).await;

    let response = app
        .request(
            "POST",
            "/api/jobs/_counts",
            Some(json!({"employeeIds": [1, 1, 2]})),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({"1": 2, "2": 2}));
}

#[tokio::test]
async fn empty_or_missing_id_list_is_rejected() {
    let app = TestApp::with_employees(vec![1]);

    let response = app
        .request("POST", "/api/jobs/_counts", Some(json!({"employeeIds": []})))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "INVALID_QUERY");

    let response = app
        .request("POST", "/api/jobs/_counts", Some(json!({})))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "INVALID_QUERY");
}
