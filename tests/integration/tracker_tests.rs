/// Integration tests: HabitTracker over a JsonFileStore on disk
use chrono::{Duration, NaiveDate};
use quick_habit::*;
use tempfile::tempdir;

#[cfg(test)]
mod tracker_tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn store_at(dir: &std::path::Path) -> JsonFileStore {
        JsonFileStore::new(dir.join("habit.json")).expect("Failed to create store")
    }

    #[test]
    fn test_create_complete_and_reload() {
        let dir = tempdir().expect("Failed to create temp dir");
        let today = d(2024, 6, 15);

        let mut tracker =
            HabitTracker::open_on(store_at(dir.path()), today).expect("Failed to open tracker");
        assert!(tracker.habit().is_none());

        tracker.create_habit_on("Read", "📚", today).unwrap();
        assert_eq!(
            tracker.mark_complete_on(today).unwrap(),
            CompletionOutcome::Applied
        );
        assert!(tracker.is_completed_on(today));

        // A second tracker over the same file sees the saved state
        let tracker2 =
            HabitTracker::open_on(store_at(dir.path()), today).expect("Failed to reopen tracker");
        let habit = tracker2.habit().unwrap();
        assert_eq!(habit.title, "Read");
        assert_eq!(habit.current_streak, 1);
        assert_eq!(habit.best_streak, 1);
    }

    #[test]
    fn test_load_recomputes_stale_streak() {
        let dir = tempdir().unwrap();
        let day1 = d(2024, 6, 15);

        let mut tracker = HabitTracker::open_on(store_at(dir.path()), day1).unwrap();
        tracker.create_habit_on("Read", "📚", day1).unwrap();
        tracker.mark_complete_on(day1).unwrap();

        // Next day: the streak survives on the yesterday anchor
        let tracker2 =
            HabitTracker::open_on(store_at(dir.path()), day1 + Duration::days(1)).unwrap();
        assert_eq!(tracker2.habit().unwrap().current_streak, 1);

        // Two days later the stored streak of 1 is stale; load self-heals
        let tracker3 =
            HabitTracker::open_on(store_at(dir.path()), day1 + Duration::days(2)).unwrap();
        let habit = tracker3.habit().unwrap();
        assert_eq!(habit.current_streak, 0);
        assert_eq!(habit.best_streak, 1);
    }

    #[test]
    fn test_mark_is_idempotent_across_saves() {
        let dir = tempdir().unwrap();
        let today = d(2024, 6, 15);

        let mut tracker = HabitTracker::open_on(store_at(dir.path()), today).unwrap();
        tracker.create_habit_on("Read", "📚", today).unwrap();

        assert_eq!(
            tracker.mark_complete_on(today).unwrap(),
            CompletionOutcome::Applied
        );
        assert_eq!(
            tracker.mark_complete_on(today).unwrap(),
            CompletionOutcome::AlreadyCompleted
        );

        let habit = tracker.habit().unwrap();
        assert_eq!(habit.completed_dates.len(), 1);
        assert_eq!(habit.current_streak, 1);
    }

    #[test]
    fn test_toggle_reports_direction() {
        let dir = tempdir().unwrap();
        let today = d(2024, 6, 15);

        let mut tracker = HabitTracker::open_on(store_at(dir.path()), today).unwrap();
        tracker.create_habit_on("Read", "📚", today).unwrap();

        let on = tracker.toggle_completion_on(today).unwrap();
        assert!(on.now_completed);
        assert_eq!(on.outcome, CompletionOutcome::Applied);

        let off = tracker.toggle_completion_on(today).unwrap();
        assert!(!off.now_completed);
        assert_eq!(off.outcome, CompletionOutcome::Applied);
        assert!(!tracker.is_completed_on(today));
    }

    #[test]
    fn test_intents_before_creation_are_rejected() {
        let dir = tempdir().unwrap();
        let today = d(2024, 6, 15);

        let mut tracker = HabitTracker::open_on(store_at(dir.path()), today).unwrap();
        assert!(matches!(
            tracker.mark_complete_on(today),
            Err(TrackerError::NoHabit)
        ));
        assert!(matches!(
            tracker.update_habit(Some("x"), None),
            Err(TrackerError::NoHabit)
        ));
    }

    #[test]
    fn test_create_rejects_empty_title_and_persists_nothing() {
        let dir = tempdir().unwrap();
        let today = d(2024, 6, 15);

        let mut tracker = HabitTracker::open_on(store_at(dir.path()), today).unwrap();
        assert!(matches!(
            tracker.create_habit_on("   ", "✨", today),
            Err(TrackerError::Domain(_))
        ));
        assert!(tracker.habit().is_none());
        assert!(store_at(dir.path()).load().unwrap().is_none());
    }

    #[test]
    fn test_reset_erases_everything() {
        let dir = tempdir().unwrap();
        let today = d(2024, 6, 15);

        let mut tracker = HabitTracker::open_on(store_at(dir.path()), today).unwrap();
        tracker.create_habit_on("Read", "📚", today).unwrap();
        tracker.mark_complete_on(today).unwrap();

        tracker.reset_habit().unwrap();
        assert!(tracker.habit().is_none());

        let tracker2 = HabitTracker::open_on(store_at(dir.path()), today).unwrap();
        assert!(tracker2.habit().is_none());
    }

    #[test]
    fn test_corrupt_file_surfaces_distinct_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("habit.json");
        std::fs::write(&path, b"definitely not json").unwrap();

        let result = HabitTracker::open_on(JsonFileStore::new(path).unwrap(), d(2024, 6, 15));
        assert!(matches!(
            result,
            Err(TrackerError::Storage(StorageError::Corrupt { .. }))
        ));
    }

    #[test]
    fn test_refresh_picks_up_external_changes() {
        let dir = tempdir().unwrap();
        let today = d(2024, 6, 15);

        let mut tracker = HabitTracker::open_on(store_at(dir.path()), today).unwrap();
        tracker.create_habit_on("Read", "📚", today).unwrap();

        // Another writer updates the record
        let mut other = HabitTracker::open_on(store_at(dir.path()), today).unwrap();
        other.mark_complete_on(today).unwrap();

        assert!(!tracker.is_completed_on(today));
        tracker.refresh_on(today).unwrap();
        assert!(tracker.is_completed_on(today));
        assert_eq!(tracker.habit().unwrap().current_streak, 1);
    }

    #[test]
    fn test_edit_keeps_history() {
        let dir = tempdir().unwrap();
        let today = d(2024, 6, 15);

        let mut tracker = HabitTracker::open_on(store_at(dir.path()), today).unwrap();
        tracker.create_habit_on("Read", "📚", today).unwrap();
        tracker.mark_complete_on(today).unwrap();

        tracker.update_habit(Some("Read fiction"), Some("📖")).unwrap();

        let tracker2 = HabitTracker::open_on(store_at(dir.path()), today).unwrap();
        let habit = tracker2.habit().unwrap();
        assert_eq!(habit.title, "Read fiction");
        assert_eq!(habit.emoji, "📖");
        assert_eq!(habit.current_streak, 1);
        assert!(habit.is_completed_on(today));
    }
}
