//! Seam traits implemented by infrastructure crates.

pub mod directory;

pub use directory::EmployeeDirectory;
