//! # jobhub-directory
//!
//! HTTP client for the external employee directory. Implements the
//! [`jobhub_core::traits::EmployeeDirectory`] seam consumed by the
//! validation layer.

pub mod client;

pub use client::HttpEmployeeDirectory;
