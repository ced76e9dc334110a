/// Core Module
///
/// Shared infrastructure for the Project Updates backend: the database
/// wrapper (connection management and query execution) and the error type
/// used throughout the crate.

pub mod db;
pub mod error;

// Re-export commonly used types for convenience
pub use error::{Result, UpdatesError};
