/// Core types used throughout the domain layer
///
/// This module defines the HabitId wrapper, the outcome types returned by
/// completion mutations, and the derived view structs the presentation layer
/// renders from.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for the habit record
///
/// This is a wrapper around UUID to provide type safety. The id is assigned
/// once at creation and never reassigned afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitId(pub Uuid);

impl HabitId {
    /// Generate a new random habit ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a habit ID from a string (useful when loading stored records)
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for HabitId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for HabitId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Result of a completion mutation
///
/// Mutations are idempotent: re-marking an already completed day (or
/// un-marking a day that was never completed) is a no-op, not an error.
/// The distinct variants let the caller decide whether to emit feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CompletionOutcome {
    /// The mutation changed state
    Applied,
    /// No-op: the day was already marked complete
    AlreadyCompleted,
    /// No-op: the day was not marked complete
    NotCompleted,
}

/// Result of toggling today's completion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToggleResult {
    /// Whether today is completed after the toggle
    pub now_completed: bool,
    pub outcome: CompletionOutcome,
}

/// Derived statistics for display; never stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HabitStats {
    pub current_streak: u32,
    pub best_streak: u32,
    pub total_completions: u32,
    /// Completions divided by calendar days since the start date, inclusive,
    /// as a percentage rounded to the nearest integer
    pub completion_rate: u32,
}

/// Display classification of a single day in the calendar strip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayStatus {
    pub date: NaiveDate,
    pub is_completed: bool,
    pub is_today: bool,
    pub is_past: bool,
    pub is_future: bool,
}
