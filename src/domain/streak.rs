/// Streak calculation
///
/// A streak is the number of consecutive calendar days, ending today or
/// yesterday, that are all marked complete. The rule is: anchor on today if
/// today is completed, otherwise on yesterday if yesterday is completed,
/// otherwise the streak is 0; then walk backward one day at a time counting
/// members of the completed set, stopping at the first gap.
///
/// Anchoring on yesterday gives a one-day grace window: a run is not broken
/// until the user has actually missed today, only failed to act yet.

use chrono::{Duration, NaiveDate};
use std::collections::BTreeSet;

/// Length of the current streak given the completed-day set and "today"
pub fn calculate_streak(completed: &BTreeSet<NaiveDate>, today: NaiveDate) -> u32 {
    if completed.is_empty() {
        return 0;
    }

    let yesterday = today - Duration::days(1);
    let anchor = if completed.contains(&today) {
        today
    } else if completed.contains(&yesterday) {
        yesterday
    } else {
        // Gap of two or more days since the last completion
        return 0;
    };

    let mut streak = 0u32;
    let mut day = anchor;
    while completed.contains(&day) {
        streak += 1;
        day = day - Duration::days(1);
    }
    streak
}
