/// Habit entity and its lifecycle mutations
///
/// Exactly one habit exists per installation. The struct owns the completed
/// day set and the two streak counters; `current_streak` is derived and is
/// recomputed after every mutation (and again on load, since "today" may have
/// advanced since the last save), while `best_streak` is a high-water mark
/// that only a full reset can lower.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::domain::{
    calculate_streak, dates, CompletionOutcome, DayStatus, DomainError, HabitId, HabitStats,
};

/// Longest accepted title, matching what the edit form allows
const MAX_TITLE_LEN: usize = 100;

/// The single tracked habit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Habit {
    /// Stable identifier, assigned once at creation
    pub id: HabitId,
    /// Display name, trimmed and non-empty
    pub title: String,
    /// Display icon token, stored verbatim
    pub emoji: String,
    /// Calendar day the habit was created; never mutated
    pub start_date: NaiveDate,
    /// Days marked complete. A BTreeSet keeps them unique and sorted.
    pub completed_dates: BTreeSet<NaiveDate>,
    /// Derived: length of the current run. Stored for display but always
    /// recomputed from `completed_dates` before being trusted.
    pub current_streak: u32,
    /// Highest streak ever observed
    pub best_streak: u32,
    /// Audit timestamps, not used in streak math
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Habit {
    /// Create a new habit starting today
    ///
    /// Rejects an empty (after trimming) title before any state exists.
    pub fn new(title: &str, emoji: &str, today: NaiveDate) -> Result<Self, DomainError> {
        let title = Self::validate_title(title)?;
        let now = Utc::now();
        Ok(Self {
            id: HabitId::new(),
            title,
            emoji: emoji.to_string(),
            start_date: today,
            completed_dates: BTreeSet::new(),
            current_streak: 0,
            best_streak: 0,
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace title and/or emoji; dates and streaks are untouched
    pub fn edit(
        &mut self,
        title: Option<&str>,
        emoji: Option<&str>,
    ) -> Result<(), DomainError> {
        // Validate before applying anything
        let new_title = title.map(Self::validate_title).transpose()?;

        if let Some(t) = new_title {
            self.title = t;
        }
        if let Some(e) = emoji {
            self.emoji = e.to_string();
        }
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Whether the given day is marked complete
    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completed_dates.contains(&date)
    }

    /// Mark today complete
    ///
    /// Idempotent: a second call for the same day changes nothing and
    /// reports `AlreadyCompleted`. On success the streak is recomputed and
    /// the best streak raised if the new run exceeds it.
    pub fn mark_complete(&mut self, today: NaiveDate) -> CompletionOutcome {
        if !self.completed_dates.insert(today) {
            return CompletionOutcome::AlreadyCompleted;
        }
        self.current_streak = calculate_streak(&self.completed_dates, today);
        self.best_streak = self.best_streak.max(self.current_streak);
        self.updated_at = Utc::now();
        CompletionOutcome::Applied
    }

    /// Remove today's completion
    ///
    /// The best streak is a historical high-water mark and is not lowered
    /// by a retraction.
    pub fn unmark_complete(&mut self, today: NaiveDate) -> CompletionOutcome {
        if !self.completed_dates.remove(&today) {
            return CompletionOutcome::NotCompleted;
        }
        self.current_streak = calculate_streak(&self.completed_dates, today);
        self.updated_at = Utc::now();
        CompletionOutcome::Applied
    }

    /// Recompute `current_streak` against the given day
    ///
    /// Called after load: the stored value may be stale because the clock
    /// advanced since the last save. Also repairs `best_streak` if a
    /// hand-edited record violates the high-water-mark invariant.
    pub fn recompute_streak(&mut self, today: NaiveDate) {
        self.current_streak = calculate_streak(&self.completed_dates, today);
        self.best_streak = self.best_streak.max(self.current_streak);
    }

    /// Derived display statistics
    pub fn stats(&self, today: NaiveDate) -> HabitStats {
        let days_tracked = ((today - self.start_date).num_days() + 1).max(1);
        let completions = self.completed_dates.len() as u32;
        let rate = (completions as f64 / days_tracked as f64) * 100.0;
        HabitStats {
            current_streak: calculate_streak(&self.completed_dates, today),
            best_streak: self.best_streak,
            total_completions: completions,
            completion_rate: rate.round() as u32,
        }
    }

    /// Classify the 7-day window around today for the calendar strip
    pub fn week_overview(&self, today: NaiveDate) -> Vec<DayStatus> {
        dates::week_window(today)
            .into_iter()
            .map(|date| DayStatus {
                date,
                is_completed: self.is_completed_on(date),
                is_today: dates::is_today(date, today),
                is_past: dates::is_past_date(date, today),
                is_future: dates::is_future_date(date, today),
            })
            .collect()
    }

    fn validate_title(title: &str) -> Result<String, DomainError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidTitle(
                "Habit title cannot be empty".to_string(),
            ));
        }
        if trimmed.len() > MAX_TITLE_LEN {
            return Err(DomainError::InvalidTitle(format!(
                "Habit title cannot be longer than {} characters",
                MAX_TITLE_LEN
            )));
        }
        Ok(trimmed.to_string())
    }
}
