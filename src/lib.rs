/// Public library interface for the quick-habit tracker
///
/// This module exports the `HabitTracker` service that the presentation
/// layer drives, plus the domain and storage types it exchanges.

use thiserror::Error;

// Internal modules
mod domain;
mod storage;

// Re-export public modules and types
pub use domain::*;
pub use storage::{HabitStore, JsonFileStore, StorageError};

use chrono::NaiveDate;

/// Errors that can occur while driving the tracker
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Validation error: {0}")]
    Domain(#[from] DomainError),

    #[error("No habit has been created yet")]
    NoHabit,
}

/// The presentation-facing habit service
///
/// Holds the single in-memory habit and the store behind it. Each user
/// intent reads the freshest in-memory value, computes the new one, and
/// performs one save before the next intent can be issued. A failed save
/// propagates its error but leaves the in-memory value advanced; the
/// previous record stays intact on disk and a later `refresh` reconciles.
///
/// Every clock-reading method has a `*_on(today)` twin that takes the
/// reference day explicitly, which is what the tests use.
pub struct HabitTracker<S: HabitStore> {
    store: S,
    habit: Option<Habit>,
}

impl<S: HabitStore> HabitTracker<S> {
    /// Open the tracker, loading any stored habit
    pub fn open(store: S) -> Result<Self, TrackerError> {
        Self::open_on(store, local_today())
    }

    /// Open against an explicit "today"
    ///
    /// The stored `current_streak` may be stale because the clock advanced
    /// since the last save, so it is always recomputed here.
    pub fn open_on(store: S, today: NaiveDate) -> Result<Self, TrackerError> {
        let mut habit = store.load()?;
        if let Some(h) = habit.as_mut() {
            h.recompute_streak(today);
            tracing::info!(
                "Loaded habit '{}' (streak {}, best {})",
                h.title,
                h.current_streak,
                h.best_streak
            );
        } else {
            tracing::info!("No stored habit found");
        }
        Ok(Self { store, habit })
    }

    /// The current habit, if one has been created
    pub fn habit(&self) -> Option<&Habit> {
        self.habit.as_ref()
    }

    /// Create a new habit starting today, replacing any existing one
    pub fn create_habit(&mut self, title: &str, emoji: &str) -> Result<&Habit, TrackerError> {
        self.create_habit_on(title, emoji, local_today())
    }

    pub fn create_habit_on(
        &mut self,
        title: &str,
        emoji: &str,
        today: NaiveDate,
    ) -> Result<&Habit, TrackerError> {
        let habit = Habit::new(title, emoji, today)?;
        self.store.save(&habit)?;
        tracing::info!("Created habit '{}'", habit.title);
        Ok(&*self.habit.insert(habit))
    }

    /// Update title and/or emoji of the existing habit
    pub fn update_habit(
        &mut self,
        title: Option<&str>,
        emoji: Option<&str>,
    ) -> Result<(), TrackerError> {
        let habit = self.habit.as_mut().ok_or(TrackerError::NoHabit)?;
        habit.edit(title, emoji)?;
        self.persist()
    }

    /// Mark today complete
    pub fn mark_today_complete(&mut self) -> Result<CompletionOutcome, TrackerError> {
        self.mark_complete_on(local_today())
    }

    pub fn mark_complete_on(&mut self, today: NaiveDate) -> Result<CompletionOutcome, TrackerError> {
        let habit = self.habit.as_mut().ok_or(TrackerError::NoHabit)?;
        let outcome = habit.mark_complete(today);
        if outcome == CompletionOutcome::Applied {
            self.persist()?;
        }
        Ok(outcome)
    }

    /// Remove today's completion
    pub fn unmark_today_complete(&mut self) -> Result<CompletionOutcome, TrackerError> {
        self.unmark_complete_on(local_today())
    }

    pub fn unmark_complete_on(
        &mut self,
        today: NaiveDate,
    ) -> Result<CompletionOutcome, TrackerError> {
        let habit = self.habit.as_mut().ok_or(TrackerError::NoHabit)?;
        let outcome = habit.unmark_complete(today);
        if outcome == CompletionOutcome::Applied {
            self.persist()?;
        }
        Ok(outcome)
    }

    /// Toggle today's completion
    ///
    /// By construction this always applies: it unmarks a completed day and
    /// marks an incomplete one. The result carries the new completion state
    /// so the caller can pick the right user feedback.
    pub fn toggle_today_completion(&mut self) -> Result<ToggleResult, TrackerError> {
        self.toggle_completion_on(local_today())
    }

    pub fn toggle_completion_on(&mut self, today: NaiveDate) -> Result<ToggleResult, TrackerError> {
        let completed = self
            .habit
            .as_ref()
            .ok_or(TrackerError::NoHabit)?
            .is_completed_on(today);
        if completed {
            let outcome = self.unmark_complete_on(today)?;
            Ok(ToggleResult {
                now_completed: false,
                outcome,
            })
        } else {
            let outcome = self.mark_complete_on(today)?;
            Ok(ToggleResult {
                now_completed: true,
                outcome,
            })
        }
    }

    /// Whether today is marked complete
    pub fn is_today_completed(&self) -> bool {
        self.is_completed_on(local_today())
    }

    pub fn is_completed_on(&self, today: NaiveDate) -> bool {
        self.habit
            .as_ref()
            .map(|h| h.is_completed_on(today))
            .unwrap_or(false)
    }

    /// Erase the stored record and forget the in-memory habit
    ///
    /// A full erase, not a soft delete. Confirmation belongs to the caller.
    pub fn reset_habit(&mut self) -> Result<(), TrackerError> {
        self.store.erase()?;
        self.habit = None;
        Ok(())
    }

    /// Re-load from the store and recompute the streak
    pub fn refresh(&mut self) -> Result<(), TrackerError> {
        self.refresh_on(local_today())
    }

    pub fn refresh_on(&mut self, today: NaiveDate) -> Result<(), TrackerError> {
        let mut habit = self.store.load()?;
        if let Some(h) = habit.as_mut() {
            h.recompute_streak(today);
        }
        self.habit = habit;
        Ok(())
    }

    fn persist(&self) -> Result<(), TrackerError> {
        match &self.habit {
            Some(habit) => Ok(self.store.save(habit)?),
            None => Ok(()),
        }
    }
}
