//! Job handlers.

use std::collections::HashMap;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;

use crate::error::ApiError;

use crate::dto::request::{CountJobsBody, CreateJobBody, ListJobsParams};
use crate::dto::response::{CreatedResponse, JobResponse};
use crate::state::AppState;

/// POST /api/jobs
pub async fn create_job(
    State(state): State<AppState>,
    Json(body): Json<CreateJobBody>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = state.job_service.create_job(body.into()).await?;
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// GET /api/jobs?employeeId=..&from=..&size=..
pub async fn list_jobs_by_employee(
    State(state): State<AppState>,
    Query(params): Query<ListJobsParams>,
) -> Result<Json<Vec<JobResponse>>, ApiError> {
    let jobs = state.job_service.jobs_by_employee(params.into()).await?;
    Ok(Json(jobs.into_iter().map(JobResponse::from).collect()))
}

/// POST /api/jobs/_counts
pub async fn count_jobs_by_employees(
    State(state): State<AppState>,
    Json(body): Json<CountJobsBody>,
) -> Result<Json<HashMap<String, i64>>, ApiError> {
    let counts = state
        .job_service
        .job_counts_by_employees(body.into())
        .await?;
    Ok(Json(counts))
}
