//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jobhub_entity::job::Job;

/// Response for a created job.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    /// The repository-assigned job id.
    pub id: Uuid,
}

/// A job record as returned on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobResponse {
    /// Job id.
    pub id: Uuid,
    /// Job name.
    pub name: String,
    /// Owning employee.
    pub employee_id: i64,
    /// Start of the assignment.
    pub date_from: DateTime<Utc>,
    /// End of the assignment.
    pub date_to: DateTime<Utc>,
    /// When the job was created.
    pub created_at: DateTime<Utc>,
    /// When the job was last updated.
    pub updated_at: DateTime<Utc>,
}

impl From<Job> for JobResponse {
    fn from(job: Job) -> Self {
        Self {
            id: job.id,
            name: job.name,
            employee_id: job.employee_id,
            date_from: job.date_from,
            date_to: job.date_to,
            created_at: job.created_at,
            updated_at: job.updated_at,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
}
