/// Storage layer for persisting the habit record
///
/// This module defines the single-record store interface and its errors.
/// The store holds at most one habit under a fixed key (one file); a future
/// multi-habit extension would widen the key space, not the interface.

pub mod json;

// Re-export the main storage types
pub use json::*;

use thiserror::Error;

use crate::domain::Habit;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The record exists but cannot be parsed. Distinct from "no record" so
    /// the caller can offer a reset instead of silently losing the habit.
    #[error("Corrupt habit record at {path}: {reason}")]
    Corrupt { path: String, reason: String },
}

/// Trait defining the single-record habit store
///
/// Implementations persist exactly one `Habit`. `load` distinguishes an
/// absent record (`Ok(None)`) from a corrupt one (`Err(Corrupt)`).
pub trait HabitStore {
    /// Load the stored habit, if any
    fn load(&self) -> Result<Option<Habit>, StorageError>;

    /// Durably store the habit, replacing any previous record
    fn save(&self, habit: &Habit) -> Result<(), StorageError>;

    /// Delete the stored record entirely; succeeds if none exists
    fn erase(&self) -> Result<(), StorageError>;
}
