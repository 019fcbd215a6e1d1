//! Job entity.

pub mod model;

pub use model::{Job, NewJob};
