//! Job management — validation, creation, listing, and count aggregation.

pub mod service;
pub mod validator;

pub use service::{CreateJobRequest, JobCountRequest, JobQuery, JobService};
pub use validator::JobValidator;
