//! Job service — creation, paginated listing, and count aggregation.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::future;
use tracing::info;
use uuid::Uuid;

use jobhub_core::error::AppError;
use jobhub_core::result::AppResult;
use jobhub_core::types::pagination::OffsetPage;
use jobhub_database::store::JobStore;
use jobhub_entity::job::{Job, NewJob};

use super::validator::JobValidator;

/// Data for creating a new job.
///
/// All fields are optional at this layer; the validator decides which
/// combinations are acceptable.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct CreateJobRequest {
    /// Job name.
    pub name: Option<String>,
    /// Owning employee.
    pub employee_id: Option<i64>,
    /// Start of the assignment; defaults to "now" when omitted.
    pub date_from: Option<DateTime<Utc>>,
    /// End of the assignment; defaults to "now" when omitted.
    pub date_to: Option<DateTime<Utc>>,
}

/// Query for listing one employee's jobs.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct JobQuery {
    /// Employee id in textual form, as received on the wire.
    pub employee_id: Option<String>,
    /// Pagination window (`from` = 0, `size` = 10 by default).
    #[serde(default)]
    pub page: OffsetPage,
}

/// Request for per-employee job counts.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct JobCountRequest {
    /// Employee ids to count jobs for. May contain duplicates; duplicates
    /// collapse to one key in the result mapping.
    pub employee_ids: Vec<i64>,
}

/// Orchestrates job creation, listing, and count aggregation.
///
/// The only component with business rules; every call is a single
/// request/response transaction with no state carried between calls.
#[derive(Clone)]
pub struct JobService {
    /// Job persistence.
    store: Arc<dyn JobStore>,
    /// Input validation, including the employee existence check.
    validator: JobValidator,
}

impl JobService {
    /// Create a new job service.
    pub fn new(store: Arc<dyn JobStore>, validator: JobValidator) -> Self {
        Self { store, validator }
    }

    /// Validate and persist a new job, returning the assigned id.
    ///
    /// Validation errors propagate unchanged. Omitted dates are resolved
    /// to the current time before the insert.
    pub async fn create_job(&self, input: CreateJobRequest) -> AppResult<Uuid> {
        self.validator.validate(&input).await?;

        let employee_id = input
            .employee_id
            .ok_or_else(|| AppError::invalid_query("Employee id is required"))?;
        // Validated above: present and at least three characters.
        let name = input.name.unwrap_or_default();

        let now = Utc::now();
        let job = self
            .store
            .create(&NewJob {
                name,
                employee_id,
                date_from: input.date_from.unwrap_or(now),
                date_to: input.date_to.unwrap_or(now),
            })
            .await?;

        info!(job_id = %job.id, employee_id, "Job created");
        Ok(job.id)
    }

    /// List one employee's jobs, most recently created first.
    ///
    /// The employee id must be present and numeric, and must resolve in
    /// the directory. An empty page is a valid result, not an error.
    pub async fn jobs_by_employee(&self, query: JobQuery) -> AppResult<Vec<Job>> {
        let raw = query
            .employee_id
            .as_deref()
            .filter(|s| !s.trim().is_empty())
            .ok_or_else(|| AppError::invalid_query("Employee id is required"))?;

        let employee_id: i64 = raw
            .trim()
            .parse()
            .map_err(|_| AppError::invalid_query("Employee id must be a number"))?;

        self.validator.ensure_employee_exists(employee_id).await?;

        self.store.find_by_employee(employee_id, query.page).await
    }

    /// Count jobs per employee, keyed by the id's decimal text form.
    ///
    /// Counts are issued concurrently and merged after all complete; a
    /// single failed count fails the whole call with no partial results.
    /// Existence is deliberately not validated here — a count of zero is
    /// a valid answer for an unknown id.
    pub async fn job_counts_by_employees(
        &self,
        request: JobCountRequest,
    ) -> AppResult<HashMap<String, i64>> {
        if request.employee_ids.is_empty() {
            return Err(AppError::invalid_query("Employee ids array is required"));
        }

        let lookups = request.employee_ids.iter().map(|&employee_id| {
            let store = Arc::clone(&self.store);
            async move {
                let count = store.count_by_employee(employee_id).await?;
                Ok::<(i64, i64), AppError>((employee_id, count))
            }
        });

        let counts = future::try_join_all(lookups).await?;

        Ok(counts
            .into_iter()
            .map(|(employee_id, count)| (employee_id.to_string(), count))
            .collect())
    }
}
