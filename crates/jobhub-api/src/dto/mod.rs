//! Request and response DTOs.
//!
//! Wire field names are camelCase (`employeeId`, `dateFrom`, ...); these
//! shapes are the external contract of the service.

pub mod request;
pub mod response;
