//! Job input validation.

use std::sync::Arc;

use jobhub_core::error::AppError;
use jobhub_core::result::AppResult;
use jobhub_core::traits::EmployeeDirectory;

use super::service::CreateJobRequest;

/// Minimum job name length, counted after trimming.
const MIN_NAME_LEN: usize = 3;

/// Enforces field and cross-field rules on a job before it is persisted.
///
/// Rules run sequentially and the first violation wins; violations are
/// never accumulated. The only side effect is the employee existence
/// lookup against the injected directory.
#[derive(Clone)]
pub struct JobValidator {
    directory: Arc<dyn EmployeeDirectory>,
}

impl JobValidator {
    /// Create a new validator backed by the given directory.
    pub fn new(directory: Arc<dyn EmployeeDirectory>) -> Self {
        Self { directory }
    }

    /// Validate a job creation request.
    ///
    /// Rule order: employee existence (when an id is supplied), then name
    /// length, then date ordering.
    pub async fn validate(&self, input: &CreateJobRequest) -> AppResult<()> {
        if let Some(employee_id) = input.employee_id {
            self.ensure_employee_exists(employee_id).await?;
        }

        match input.name.as_deref() {
            Some(name) if name.trim().chars().count() >= MIN_NAME_LEN => {}
            _ => {
                return Err(AppError::invalid_name(
                    "Job name must have at least 3 characters",
                ));
            }
        }

        if let (Some(date_from), Some(date_to)) = (input.date_from, input.date_to) {
            if date_from >= date_to {
                return Err(AppError::invalid_date_range(
                    "Invalid date range: dateFrom must be before dateTo",
                ));
            }
        }

        Ok(())
    }

    /// Check that the employee exists in the directory.
    ///
    /// A definitive "not found" becomes `EmployeeNotFound`; directory
    /// failures propagate unchanged as `Lookup` errors.
    pub async fn ensure_employee_exists(&self, employee_id: i64) -> AppResult<()> {
        if self.directory.exists(employee_id).await? {
            Ok(())
        } else {
            Err(AppError::employee_not_found(employee_id))
        }
    }
}
