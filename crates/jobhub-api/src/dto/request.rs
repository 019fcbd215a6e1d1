//! Request DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use jobhub_core::types::pagination::OffsetPage;
use jobhub_service::{CreateJobRequest, JobCountRequest, JobQuery};

/// Body for `POST /api/jobs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateJobBody {
    /// Job name.
    pub name: Option<String>,
    /// Owning employee.
    pub employee_id: Option<i64>,
    /// Start of the assignment.
    pub date_from: Option<DateTime<Utc>>,
    /// End of the assignment.
    pub date_to: Option<DateTime<Utc>>,
}

impl From<CreateJobBody> for CreateJobRequest {
    fn from(body: CreateJobBody) -> Self {
        Self {
            name: body.name,
            employee_id: body.employee_id,
            date_from: body.date_from,
            date_to: body.date_to,
        }
    }
}

/// Query parameters for `GET /api/jobs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListJobsParams {
    /// Employee id, required, in textual form.
    pub employee_id: Option<String>,
    /// Pagination offset (default 0).
    pub from: Option<u64>,
    /// Pagination limit (default 10).
    pub size: Option<u64>,
}

impl From<ListJobsParams> for JobQuery {
    fn from(params: ListJobsParams) -> Self {
        let defaults = OffsetPage::default();
        Self {
            employee_id: params.employee_id,
            page: OffsetPage::new(
                params.from.unwrap_or(defaults.from),
                params.size.unwrap_or(defaults.size),
            ),
        }
    }
}

/// Body for `POST /api/jobs/_counts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountJobsBody {
    /// Employee ids to count jobs for. A missing array is treated as
    /// empty and rejected by the service.
    #[serde(default)]
    pub employee_ids: Vec<i64>,
}

impl From<CountJobsBody> for JobCountRequest {
    fn from(body: CountJobsBody) -> Self {
        Self {
            employee_ids: body.employee_ids,
        }
    }
}
