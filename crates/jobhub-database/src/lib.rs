//! # jobhub-database
//!
//! PostgreSQL connection management, the [`store::JobStore`] seam trait,
//! and its concrete repository implementation.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod store;

pub use connection::DatabasePool;
pub use store::JobStore;
