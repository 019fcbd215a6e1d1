//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use jobhub_core::config::AppConfig;
use jobhub_service::JobService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Job business logic.
    pub job_service: Arc<JobService>,
}
