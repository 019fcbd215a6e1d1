//! Employee directory configuration.

use serde::{Deserialize, Serialize};

/// Employee directory lookup configuration.
///
/// The directory is the external service that answers whether an employee
/// id is currently valid. Lookups must be bounded: an unbounded call would
/// stall job creation and listing indefinitely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDirectoryConfig {
    /// Base URL of the employee directory service.
    pub base_url: String,
    /// Request timeout in seconds. Expiry is surfaced as a lookup error.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

fn default_timeout() -> u64 {
    5
}
