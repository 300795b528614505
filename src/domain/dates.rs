/// Calendar date helpers for the streak engine and the week strip
///
/// All comparisons and offsets use chrono's calendar arithmetic, so month,
/// year and leap-day boundaries are handled correctly and a DST shift can
/// never move a date by a day. Every function takes its reference day as an
/// explicit parameter; only `local_today` reads the clock.

use chrono::{Datelike, Duration, Local, NaiveDate};

use crate::domain::DomainError;

/// Canonical calendar-date encoding: zero-padded ISO order, so string
/// comparison agrees with date comparison.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Format a date as `YYYY-MM-DD`
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parse a `YYYY-MM-DD` string back into a calendar date
pub fn parse_date(s: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| DomainError::InvalidDate(format!("{}: {}", s, e)))
}

/// The current calendar day on the local clock
///
/// This is the single place the domain reads the clock. Everything else
/// takes `today` as a parameter so it stays deterministic under test.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

pub fn is_past_date(date: NaiveDate, today: NaiveDate) -> bool {
    date < today
}

pub fn is_future_date(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// The calendar day `n` days before `today`
pub fn days_ago(today: NaiveDate, n: i64) -> NaiveDate {
    today - Duration::days(n)
}

/// The calendar day `n` days after `today`
pub fn days_from_now(today: NaiveDate, n: i64) -> NaiveDate {
    today + Duration::days(n)
}

/// The 7-day window centered on `center`: three days before through three
/// days after, ascending, with `center` at index 3. Used for the calendar
/// strip display.
pub fn week_window(center: NaiveDate) -> [NaiveDate; 7] {
    std::array::from_fn(|i| center + Duration::days(i as i64 - 3))
}

/// Short weekday label, e.g. "Mon"
pub fn day_name(date: NaiveDate) -> String {
    date.format("%a").to_string()
}

/// Day-of-month number, 1-31
pub fn day_of_month(date: NaiveDate) -> u32 {
    date.day()
}
