/// Domain module containing core business logic and data types
///
/// This module defines the Habit entity, the streak-calculation engine and the
/// calendar helpers they are built on. Everything here is pure: functions that
/// depend on "today" take it as an explicit parameter.

pub mod dates;
pub mod habit;
pub mod streak;
pub mod types;

// Re-export public types for easy access
pub use dates::*;
pub use habit::*;
pub use streak::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid habit title: {0}")]
    InvalidTitle(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),
}
