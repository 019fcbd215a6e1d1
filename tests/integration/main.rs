//! End-to-end router tests.
//!
//! The full Axum router is exercised through `tower::ServiceExt::oneshot`
//! with an in-memory job store and a stub employee directory, so no
//! database or network is required.

mod helpers;

mod counts_test;
mod health_test;
mod jobs_test;
