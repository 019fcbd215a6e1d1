//! # jobhub-service
//!
//! Business logic service layer for JobHub. The job service orchestrates
//! the validator, the job store, and the employee directory to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod job;

pub use job::{CreateJobRequest, JobCountRequest, JobQuery, JobService, JobValidator};
