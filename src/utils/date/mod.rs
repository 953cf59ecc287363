// Date utility functions
// Date keys, minute-of-day arithmetic and calendar titles shared by the engine

use chrono::{Datelike, Duration, NaiveDate};

use crate::models::gesture::DateRange;

pub const MINUTES_IN_DAY: u32 = 24 * 60;

/// Format used for date keys (`YYYY-MM-DD`).
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

pub fn is_same_day(date1: NaiveDate, date2: NaiveDate) -> bool {
    date1 == date2
}

/// Calculate the start of the week containing the given date.
///
/// # Arguments
/// * `date` - The date to find the week start for
/// * `first_day_of_week` - 0 = Sunday, 1 = Monday, etc.
pub fn get_week_start(date: NaiveDate, first_day_of_week: u8) -> NaiveDate {
    let weekday = date.weekday().num_days_from_sunday() as i64;
    let offset = (weekday - (first_day_of_week % 7) as i64 + 7) % 7;
    date - Duration::days(offset)
}

pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    date.checked_add_signed(Duration::days(days)).unwrap_or(date)
}

/// Whole calendar days from `start` to `end` (negative when `end` is earlier).
pub fn diff_in_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

pub fn parse_date_key(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_KEY_FORMAT).ok()
}

pub fn format_date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Order an anchor/hover pair so that `start <= end`.
pub fn normalize_range(anchor: NaiveDate, hover: NaiveDate) -> DateRange {
    if anchor <= hover {
        DateRange::new(anchor, hover)
    } else {
        DateRange::new(hover, anchor)
    }
}

/// An end date is never allowed before its start.
pub fn normalize_end_date(start: NaiveDate, end: NaiveDate) -> NaiveDate {
    end.max(start)
}

/// Parse an `HH:MM` time-of-day into minutes after midnight.
///
/// Returns `None` for empty, malformed or out-of-range input; callers pick
/// their own fallback.
pub fn to_minutes(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let mut parts = trimmed.split(':');
    let hours: u32 = parts.next()?.trim().parse().ok()?;
    let minutes: u32 = parts.next()?.trim().parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

pub fn clamp_minutes(value: i64) -> u32 {
    value.clamp(0, MINUTES_IN_DAY as i64) as u32
}

/// Render minutes after midnight as `HH:MM`. `1440` renders as `24:00`.
pub fn format_time(minutes: u32) -> String {
    let safe = minutes.min(MINUTES_IN_DAY);
    format!("{:02}:{:02}", safe / 60, safe % 60)
}

/// Date and `HH:MM` text to store for a minute offset on `date`.
///
/// The end of the day (`1440`) is written as `00:00` on the next day so the
/// stored time always parses back with [`to_minutes`].
pub fn wall_clock(date: NaiveDate, minutes: u32) -> (NaiveDate, String) {
    if minutes >= MINUTES_IN_DAY {
        (add_days(date, 1), format_time(0))
    } else {
        (date, format_time(minutes))
    }
}

pub fn format_month_title(date: NaiveDate) -> String {
    format!("{:02} / {}", date.month(), date.year())
}

/// Title for the week containing `date`, e.g. `01 - 07, 12 / 2024`.
/// Month and year are taken from the last day of the week.
pub fn format_week_title(date: NaiveDate, first_day_of_week: u8) -> String {
    let start = get_week_start(date, first_day_of_week);
    let end = add_days(start, 6);
    format!(
        "{:02} - {:02}, {:02} / {}",
        start.day(),
        end.day(),
        end.month(),
        end.year()
    )
}

pub fn format_day_title(date: NaiveDate) -> String {
    format!("{:02} / {:02} / {}", date.month(), date.day(), date.year())
}
