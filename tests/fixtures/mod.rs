// Test fixtures - reusable test data
// Provides consistent events and grids across the integration tests

#![allow(dead_code)]

use chrono::NaiveDate;

use calendar_layout::models::event::{CalendarEvent, EditableEvent, EventLocation};

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Sunday, June 1 2025: the first cell of a Sunday-start June grid
    pub fn june_1_2025() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    pub fn june(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    pub fn all_day(title: &str, start: NaiveDate, end: Option<NaiveDate>) -> CalendarEvent {
        CalendarEvent {
            title: title.to_string(),
            all_day: true,
            date: Some(start),
            end_date: end,
            ..CalendarEvent::default()
        }
    }

    pub fn timed(title: &str, day: NaiveDate, start: &str, end: &str) -> CalendarEvent {
        CalendarEvent {
            title: title.to_string(),
            date: Some(day),
            start_time: Some(start.to_string()),
            end_time: Some(end.to_string()),
            ..CalendarEvent::default()
        }
    }

    /// A conference spanning the first full week of June 2025
    pub fn conference() -> CalendarEvent {
        all_day("Conference", dates::june(1), Some(dates::june(7)))
    }

    /// A trip crossing the boundary between the first two June weeks
    pub fn trip() -> CalendarEvent {
        all_day("Trip", dates::june(5), Some(dates::june(10)))
    }

    /// Overnight deploy window, 22:00 Monday to 02:00 Tuesday
    pub fn deploy_window() -> CalendarEvent {
        CalendarEvent {
            end_date: Some(dates::june(10)),
            ..timed("Deploy", dates::june(9), "22:00", "02:00")
        }
    }

    pub fn standup() -> CalendarEvent {
        timed("Standup", dates::june(10), "09:00", "10:30")
    }

    /// Pair events with locations in one notes file, one per line
    pub fn with_locations(events: Vec<CalendarEvent>) -> Vec<EditableEvent> {
        events
            .into_iter()
            .enumerate()
            .map(|(line, event)| {
                EditableEvent::new(event, EventLocation::new("calendar.md", Some(line as u32 + 1)))
            })
            .collect()
    }

    /// A busy June: overlapping all-day spans and a cluster of timed events
    pub fn busy_june() -> Vec<EditableEvent> {
        with_locations(vec![
            conference(),
            trip(),
            all_day("Offsite", dates::june(3), Some(dates::june(4))),
            all_day("Holiday", dates::june(6), None),
            deploy_window(),
            standup(),
            timed("Review", dates::june(10), "09:30", "10:00"),
            timed("Lunch", dates::june(10), "12:00", "13:00"),
            CalendarEvent {
                title: "Someday".to_string(),
                ..CalendarEvent::default()
            },
        ])
    }
}
