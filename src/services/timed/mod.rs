//! Timed event layout for week and day views.
//! Slices timed events per day and assigns side-by-side columns.

pub mod columns;
pub mod projector;

pub use columns::assign_columns;
pub use projector::build_timed_day_entries;

use crate::models::gesture::Gesture;
use crate::models::grid::DayCell;
use crate::models::layout::{EventRows, TimedEventPlacement};
use crate::services::segment::flatten_rows;

/// Timed placements for every cell of `week_grid` (7 cells for a week, 1 for
/// a day view). Each inner list holds one day's placements.
pub fn timed_events_by_day<'a>(
    week_grid: &[DayCell],
    rows: &'a EventRows,
    gesture: &'a Gesture,
) -> Vec<Vec<TimedEventPlacement<'a>>> {
    let segments = flatten_rows(rows);
    week_grid
        .iter()
        .enumerate()
        .map(|(offset, cell)| build_timed_day_entries(&segments, cell.date, offset, gesture))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::CalendarEvent;
    use crate::services::grid::build_week_grid;
    use crate::services::segment::build_event_rows_from_events;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_timed_events_by_day_for_week() {
        let grid = build_week_grid(date(2025, 6, 11), 0);
        let events = vec![
            CalendarEvent::builder()
                .title("Overnight")
                .date(date(2025, 6, 10))
                .end_date(date(2025, 6, 11))
                .times("20:00", "07:00")
                .build()
                .unwrap(),
            CalendarEvent::builder()
                .title("Review")
                .date(date(2025, 6, 11))
                .times("06:30", "08:00")
                .build()
                .unwrap(),
            CalendarEvent::new("Holiday", date(2025, 6, 13)),
        ];
        let rows = build_event_rows_from_events(&events, &grid);
        let gesture = Gesture::Idle;
        let by_day = timed_events_by_day(&grid, &rows, &gesture);

        assert_eq!(by_day.len(), 7);
        let counts: Vec<usize> = by_day.iter().map(Vec::len).collect();
        assert_eq!(counts, vec![0, 0, 1, 2, 0, 0, 0]);
        assert!(by_day[3].iter().all(|p| p.column_count == 2));
        assert!(by_day[3].iter().all(|p| p.day_offset == 3));
    }

    #[test]
    fn test_day_view_uses_single_cell() {
        let grid = build_week_grid(date(2025, 6, 11), 0);
        let day = &grid[3..4];
        let events = vec![CalendarEvent::builder()
            .title("Review")
            .date(date(2025, 6, 11))
            .times("06:30", "08:00")
            .build()
            .unwrap()];
        let rows = build_event_rows_from_events(&events, day);
        let gesture = Gesture::Idle;
        let by_day = timed_events_by_day(day, &rows, &gesture);
        assert_eq!(by_day.len(), 1);
        assert_eq!(by_day[0][0].day_offset, 0);
    }
}
