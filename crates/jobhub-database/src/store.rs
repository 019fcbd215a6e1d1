//! Job persistence seam trait.

use async_trait::async_trait;

use jobhub_core::result::AppResult;
use jobhub_core::types::pagination::OffsetPage;
use jobhub_entity::job::{Job, NewJob};

/// The persistence contract consumed by the job service.
///
/// Implemented by [`crate::repositories::job::JobRepository`] for
/// PostgreSQL and by in-memory stubs in tests. All failures carry the
/// `Storage` error kind.
#[async_trait]
pub trait JobStore: Send + Sync + 'static {
    /// Insert a new job and return the persisted row, with `id`,
    /// `created_at`, and `updated_at` assigned by the store. The insert
    /// is atomic per row.
    async fn create(&self, job: &NewJob) -> AppResult<Job>;

    /// Jobs for one employee, most recently created first, within the
    /// given offset/limit window. An exhausted window yields an empty
    /// vector, not an error.
    async fn find_by_employee(&self, employee_id: i64, page: OffsetPage) -> AppResult<Vec<Job>>;

    /// Number of jobs recorded for one employee.
    async fn count_by_employee(&self, employee_id: i64) -> AppResult<i64>;
}
