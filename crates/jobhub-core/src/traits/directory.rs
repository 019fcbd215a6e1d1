//! Employee directory seam trait.

use async_trait::async_trait;

use crate::result::AppResult;

/// Answers whether an employee id is currently valid.
///
/// Implemented by the HTTP directory client and swapped for a stub in
/// tests. The contract separates two outcomes that callers must never
/// conflate:
///
/// - `Ok(false)` — the directory definitively answered "not found";
/// - `Err(_)` with kind `Lookup` — the directory could not answer
///   (network failure, timeout, unexpected status).
#[async_trait]
pub trait EmployeeDirectory: Send + Sync + 'static {
    /// Check whether the employee exists.
    async fn exists(&self, employee_id: i64) -> AppResult<bool>;
}
