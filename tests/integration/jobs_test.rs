//! Integration tests for job creation and listing.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn create_job_returns_201_and_the_assigned_id() {
    let app = TestApp::with_employees(vec![66]);

    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(json!({
                "name": "Sos",
                "employeeId": 66,
                "dateFrom": "2022-11-02T00:00:00.000Z",
                "dateTo": "2023-11-03T00:00:00.000Z",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let body = response.json();
    let id = body["id"].as_str().expect("id should be a string");
    assert!(!id.is_empty());

    let jobs = app.store.jobs.lock().unwrap();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0].id.to_string(), id);
    assert_eq!(jobs[0].name, "Sos");
    assert_eq!(jobs[0].employee_id, 66);
    assert_eq!(
        jobs[0].date_from,
        "2022-11-02T00:00:00Z"
            .parse::<chrono::DateTime<chrono::Utc>>()
            .unwrap()
    );
    assert_eq!(
        jobs[0].date_to,
        "2023-11-03T00:00:00Z"
            .parse::<chrono::DateTime<chrono::Utc>>()
            .unwrap()
    );
}

#[tokio::test]
async fn create_job_with_unknown_employee_is_rejected() {
    let app = TestApp::with_employees(vec![]);

    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(json!({
                "name": "Sos",
                "employeeId": 66,
                "dateFrom": "2022-11-02T00:00:00.000Z",
                "dateTo": "2023-11-03T00:00:00.000Z",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    let body = response.json();
    assert_eq!(body["error"], "EMPLOYEE_NOT_FOUND");
    assert_eq!(body["message"], "Employee with id 66 doesn't exist");
    assert!(app.store.jobs.lock().unwrap().is_empty());
}

#[tokio::test]
async fn create_job_with_short_name_is_rejected() {
    let app = TestApp::with_employees(vec![66]);

    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(json!({"name": "xx", "employeeId": 66})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "INVALID_NAME");
}

#[tokio::test]
async fn create_job_with_inverted_dates_is_rejected() {
    let app = TestApp::with_employees(vec![66]);

    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(json!({
                "name": "Sos",
                "employeeId": 66,
                "dateFrom": "2023-11-03T00:00:00.000Z",
                "dateTo": "2022-11-02T00:00:00.000Z",
            })),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "INVALID_DATE_RANGE");
}

#[tokio::test]
async fn create_job_when_directory_is_down_is_a_server_error() {
    let app = TestApp::with_failing_directory();

    let response = app
        .request(
            "POST",
            "/api/jobs",
            Some(json!({"name": "Sos", "employeeId": 66})),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_GATEWAY);
    assert_eq!(response.json()["error"], "LOOKUP_ERROR");
}

async fn seed_two_jobs(app: &TestApp, employee_id: i64) {
    for name in ["Job1", "Job2"] {
        let response = app
            .request(
                "POST",
                "/api/jobs",
                Some(json!({
                    "name": name,
                    "employeeId": employee_id,
                    "dateFrom": "2022-11-02T00:00:00.000Z",
                    "dateTo": "2023-11-03T00:00:00.000Z",
                })),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
    }
}

#[tokio::test]
async fn list_returns_both_jobs_most_recent_first() {
    let app = TestApp::with_employees(vec![66]);
    seed_two_jobs(&app, 66).await;

    let response = app.request("GET", "/api/jobs?employeeId=66", None).await;

    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    let jobs = body.as_array().expect("expected a JSON array");
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0]["name"], "Job2");
    assert_eq!(jobs[1]["name"], "Job1");
    assert_eq!(jobs[0]["employeeId"], 66);
}

#[tokio::test]
async fn list_applies_from_and_size() {
    let app = TestApp::with_employees(vec![66]);
    seed_two_jobs(&app, 66).await;

    let response = app
        .request("GET", "/api/jobs?employeeId=66&from=1&size=10", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let body = response.json();
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["name"], "Job1");

    // Offset beyond the result count: empty array, not an error.
    let response = app
        .request("GET", "/api/jobs?employeeId=66&from=10", None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.json().as_array().unwrap().is_empty());
}

#[tokio::test]
async fn list_requires_employee_id() {
    let app = TestApp::with_employees(vec![66]);

    let response = app.request("GET", "/api/jobs", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "INVALID_QUERY");

    let response = app.request("GET", "/api/jobs?employeeId=abc", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "INVALID_QUERY");
}

#[tokio::test]
async fn list_for_unknown_employee_is_rejected() {
    let app = TestApp::with_employees(vec![]);

    let response = app.request("GET", "/api/jobs?employeeId=66", None).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "EMPLOYEE_NOT_FOUND");
}
