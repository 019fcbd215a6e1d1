//! Employee directory HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use jobhub_core::config::directory::EmployeeDirectoryConfig;
use jobhub_core::error::{AppError, ErrorKind};
use jobhub_core::result::AppResult;
use jobhub_core::traits::EmployeeDirectory;

/// Employee directory client backed by the directory's REST API.
///
/// A definitive 404 from the directory means "employee does not exist"
/// and maps to `Ok(false)`. Every other failure — network error, timeout,
/// unexpected status — maps to a `Lookup` error so that callers can tell
/// business-rule rejections apart from infrastructure failures.
#[derive(Debug, Clone)]
pub struct HttpEmployeeDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpEmployeeDirectory {
    /// Create a new directory client from configuration.
    pub fn new(config: &EmployeeDirectoryConfig) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Configuration,
                    format!("Failed to build directory HTTP client: {e}"),
                    e,
                )
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl EmployeeDirectory for HttpEmployeeDirectory {
    async fn exists(&self, employee_id: i64) -> AppResult<bool> {
        let url = format!("{}/api/employee/{employee_id}", self.base_url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Lookup,
                format!("Error checking existence of employee with ID {employee_id}: {e}"),
                e,
            )
        })?;

        let status = response.status();
        debug!(employee_id, status = status.as_u16(), "Employee directory lookup");

        if status == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if status.is_success() {
            return Ok(true);
        }

        Err(AppError::lookup(format!(
            "Error checking existence of employee with ID {employee_id}: unexpected status {status}"
        )))
    }
}
