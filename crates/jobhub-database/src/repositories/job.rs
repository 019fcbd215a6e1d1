//! Job repository implementation.

use async_trait::async_trait;
use sqlx::PgPool;

use jobhub_core::error::{AppError, ErrorKind};
use jobhub_core::result::AppResult;
use jobhub_core::types::pagination::OffsetPage;
use jobhub_entity::job::{Job, NewJob};

use crate::store::JobStore;

/// PostgreSQL-backed store for job records.
#[derive(Debug, Clone)]
pub struct JobRepository {
    pool: PgPool,
}

impl JobRepository {
    /// Create a new job repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobStore for JobRepository {
    async fn create(&self, job: &NewJob) -> AppResult<Job> {
        sqlx::query_as::<_, Job>(
            "INSERT INTO jobs (name, employee_id, date_from, date_to) \
             VALUES ($1, $2, $3, $4) RETURNING *",
        )
        .bind(&job.name)
        .bind(job.employee_id)
        .bind(job.date_from)
        .bind(job.date_to)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to create job", e))
    }

    async fn find_by_employee(&self, employee_id: i64, page: OffsetPage) -> AppResult<Vec<Job>> {
        sqlx::query_as::<_, Job>(
            "SELECT * FROM jobs WHERE employee_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(employee_id)
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to list jobs", e))
    }

    async fn count_by_employee(&self, employee_id: i64) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM jobs WHERE employee_id = $1")
            .bind(employee_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Storage, "Failed to count jobs", e))
    }
}
