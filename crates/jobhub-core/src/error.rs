//! Unified application error types for JobHub.
//!
//! All crates map their internal errors into [`AppError`] for consistent
//! propagation through the ? operator.

use std::fmt;
use thiserror::Error;

/// Top-level error kind categorization used across the entire application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorKind {
    /// A required request field is missing or malformed.
    InvalidQuery,
    /// The job name is missing or shorter than three characters.
    InvalidName,
    /// `dateFrom` is not strictly before `dateTo`.
    InvalidDateRange,
    /// The referenced employee does not exist in the directory.
    EmployeeNotFound,
    /// The employee directory failed or timed out. Distinct from
    /// [`ErrorKind::EmployeeNotFound`]: this does not assert non-existence.
    Lookup,
    /// The persistence layer failed.
    Storage,
    /// A configuration error occurred.
    Configuration,
    /// An internal server error occurred.
    Internal,
}

impl ErrorKind {
    /// Whether this kind represents a caller-correctable error.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidQuery | Self::InvalidName | Self::InvalidDateRange | Self::EmployeeNotFound
        )
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidQuery => write!(f, "INVALID_QUERY"),
            Self::InvalidName => write!(f, "INVALID_NAME"),
            Self::InvalidDateRange => write!(f, "INVALID_DATE_RANGE"),
            Self::EmployeeNotFound => write!(f, "EMPLOYEE_NOT_FOUND"),
            Self::Lookup => write!(f, "LOOKUP_ERROR"),
            Self::Storage => write!(f, "STORAGE_ERROR"),
            Self::Configuration => write!(f, "CONFIGURATION"),
            Self::Internal => write!(f, "INTERNAL"),
        }
    }
}

/// The unified application error used throughout JobHub.
///
/// All crate-specific errors are mapped into `AppError` using `From` impls
/// or explicit `.map_err()` calls. This provides a single error type for
/// the entire application boundary.
#[derive(Debug, Error)]
#[error("{kind}: {message}")]
pub struct AppError {
    /// The category of error.
    pub kind: ErrorKind,
    /// A human-readable error message, suitable for direct display.
    pub message: String,
    /// Optional underlying cause.
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new application error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    /// Create a new application error with an underlying cause.
    pub fn with_source(
        kind: ErrorKind,
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an invalid-query error.
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidQuery, message)
    }

    /// Create an invalid-name error.
    pub fn invalid_name(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidName, message)
    }

    /// Create an invalid-date-range error.
    pub fn invalid_date_range(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDateRange, message)
    }

    /// Create an employee-not-found error.
    pub fn employee_not_found(employee_id: i64) -> Self {
        Self::new(
            ErrorKind::EmployeeNotFound,
            format!("Employee with id {employee_id} doesn't exist"),
        )
    }

    /// Create a lookup error.
    pub fn lookup(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Lookup, message)
    }

    /// Create a storage error.
    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Storage, message)
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }
}

impl Clone for AppError {
    fn clone(&self) -> Self {
        Self {
            kind: self.kind,
            message: self.message.clone(),
            source: None,
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::with_source(
            ErrorKind::Internal,
            format!("JSON serialization error: {err}"),
            err,
        )
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::with_source(
            ErrorKind::Configuration,
            format!("Configuration error: {err}"),
            err,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_error_kinds() {
        assert!(ErrorKind::InvalidName.is_client_error());
        assert!(ErrorKind::EmployeeNotFound.is_client_error());
        assert!(!ErrorKind::Lookup.is_client_error());
        assert!(!ErrorKind::Storage.is_client_error());
    }

    #[test]
    fn employee_not_found_message() {
        let err = AppError::employee_not_found(66);
        assert_eq!(err.kind, ErrorKind::EmployeeNotFound);
        assert_eq!(err.message, "Employee with id 66 doesn't exist");
    }
}
