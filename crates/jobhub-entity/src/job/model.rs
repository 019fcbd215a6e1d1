//! Job entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A job — a named, time-bounded work assignment tied to one employee.
///
/// Invariants held by every persisted row: `name` has at least three
/// characters, `date_from` is strictly before `date_to`, and `employee_id`
/// referenced an existing employee at creation time. Existence is not
/// re-validated on read.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Job {
    /// Unique job identifier, assigned by the repository on creation.
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

/// Data required to insert a new job.
///
/// Built by the service after validation, with both dates resolved
/// (defaulted to "now" when the caller omitted them).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewJob {
    /// Job name.
    pub name: String,
    /// Owning employee.
    pub employee_id: i64,
    /// Start of the assignment.
    pub date_from: DateTime<Utc>,
    /// End of the assignment.
    pub date_to: DateTime<Utc>,
}
