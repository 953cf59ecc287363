// Property-based tests for the layout engine
// Grid shape, segment bounds, stacking capacity, column assignment and drag
// duration hold for random inputs

use std::collections::BTreeSet;

use chrono::NaiveDate;
use proptest::prelude::*;

use calendar_layout::models::event::CalendarEvent;
use calendar_layout::models::gesture::{PointerTarget, TimeRange};
use calendar_layout::models::layout::{EventSegment, TimedEntry};
use calendar_layout::services::grid::{build_month_grid, build_week_grid, week_bounds};
use calendar_layout::services::interaction::drag::duration_minutes;
use calendar_layout::services::interaction::shifted_timed_range;
use calendar_layout::services::segment::{build_event_rows_from_events, flatten_rows};
use calendar_layout::services::stacking::week_event_layout;
use calendar_layout::services::timed::assign_columns;
use calendar_layout::utils::date::{add_days, diff_in_days, MINUTES_IN_DAY};

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 5, 20).unwrap()
}

/// All-day events within roughly two months of `base_date`
fn arb_all_day_event() -> impl Strategy<Value = CalendarEvent> {
    (0i64..60, 0i64..12, "[a-zA-Z]{1,8}").prop_map(|(start, length, title)| {
        let date = add_days(base_date(), start);
        CalendarEvent {
            title,
            all_day: true,
            date: Some(date),
            end_date: (length > 0).then(|| add_days(date, length)),
            ..CalendarEvent::default()
        }
    })
}

fn arb_intervals() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec(
        (0u32..1400).prop_flat_map(|start| (Just(start), (start + 1)..=MINUTES_IN_DAY)),
        0..12,
    )
}

fn blank_segment(title: String) -> EventSegment {
    let day = base_date();
    EventSegment {
        id: title.clone(),
        event: CalendarEvent {
            title,
            date: Some(day),
            ..CalendarEvent::default()
        },
        location: Default::default(),
        start: day,
        end: day,
        span: 1,
        start_index: 0,
        end_index: 0,
    }
}

proptest! {
    /// Property: month grids are 42 consecutive days containing the 1st
    #[test]
    fn prop_month_grid_shape(
        year in 1990..2100i32,
        month in 1..=12u32,
        first_day in 0..7u8,
    ) {
        let grid = build_month_grid(year, month, first_day);
        prop_assert_eq!(grid.len(), 42);
        for pair in grid.windows(2) {
            prop_assert_eq!(diff_in_days(pair[0].date, pair[1].date), 1);
        }
        let first = NaiveDate::from_ymd_opt(year, month, 1).unwrap();
        prop_assert!(grid[..7].iter().any(|cell| cell.date == first));
    }

    /// Property: week grids are 7 consecutive days containing the anchor
    #[test]
    fn prop_week_grid_shape(offset in 0i64..3650, first_day in 0..7u8) {
        let anchor = add_days(base_date(), offset);
        let grid = build_week_grid(anchor, first_day);
        prop_assert_eq!(grid.len(), 7);
        prop_assert!(grid.iter().any(|cell| cell.date == anchor));
        prop_assert_eq!(diff_in_days(grid[0].date, grid[6].date), 6);
    }

    /// Property: segments stay inside the grid and their span matches the indices
    #[test]
    fn prop_segment_bounds(events in prop::collection::vec(arb_all_day_event(), 0..30)) {
        let grid = build_month_grid(2025, 6, 0);
        let rows = build_event_rows_from_events(&events, &grid);
        for segment in flatten_rows(&rows) {
            prop_assert!(segment.start_index <= segment.end_index);
            prop_assert!(segment.end_index < grid.len());
            prop_assert_eq!(segment.end_index - segment.start_index + 1, segment.span);
            prop_assert_eq!(grid[segment.start_index].date, segment.start);
            prop_assert_eq!(grid[segment.end_index].date, segment.end);
        }
        for row in &rows {
            for (i, a) in row.iter().enumerate() {
                for b in &row[i + 1..] {
                    prop_assert!(!a.overlaps_indices(b.start_index, b.end_index));
                }
            }
        }
    }

    /// Property: placed rows stay below capacity and every unplaced segment is
    /// counted once on each day it covers
    #[test]
    fn prop_stacking_respects_capacity(
        events in prop::collection::vec(arb_all_day_event(), 0..30),
        capacity in 0usize..5,
        week in 0usize..6,
    ) {
        let grid = build_month_grid(2025, 6, 0);
        let rows = build_event_rows_from_events(&events, &grid);
        let (start, end) = week_bounds(week);
        let layout = week_event_layout(&rows, start, end, capacity);

        let used_rows: BTreeSet<usize> = layout.placements().map(|p| p.week_row).collect();
        prop_assert!(used_rows.len() <= capacity);
        prop_assert!(used_rows.iter().all(|row| *row < capacity));

        for offset in 0..7 {
            let index = start + offset;
            let covering = flatten_rows(&rows)
                .into_iter()
                .filter(|s| s.start_index <= index && index <= s.end_index)
                .count();
            let shown = layout
                .placements()
                .filter(|p| {
                    let first = start + p.column_start - 1;
                    first <= index && index < first + p.span_in_week
                })
                .count();
            prop_assert_eq!(shown + layout.hidden_counts_by_day[offset], covering);
        }
    }

    /// Property: the same input always yields the same layout
    #[test]
    fn prop_stacking_is_deterministic(
        events in prop::collection::vec(arb_all_day_event(), 0..30),
        capacity in 0usize..5,
    ) {
        let grid = build_month_grid(2025, 6, 0);
        let first = build_event_rows_from_events(&events, &grid);
        let second = build_event_rows_from_events(&events, &grid);
        for week in 0..6 {
            let (start, end) = week_bounds(week);
            prop_assert_eq!(
                week_event_layout(&first, start, end, capacity),
                week_event_layout(&second, start, end, capacity)
            );
        }
    }

    /// Property: entries sharing a column never overlap, and overlapping
    /// entries each leave room for the other's column
    #[test]
    fn prop_columns_never_overlap(intervals in arb_intervals()) {
        let segments: Vec<EventSegment> = (0..intervals.len())
            .map(|i| blank_segment(format!("e{i}")))
            .collect();
        let entries: Vec<TimedEntry<'_>> = intervals
            .iter()
            .zip(&segments)
            .map(|(&(start, end), segment)| TimedEntry {
                segment,
                day_offset: 0,
                start_minutes: start,
                end_minutes: end,
            })
            .collect();
        let placements = assign_columns(entries);
        prop_assert_eq!(placements.len(), intervals.len());

        for (i, a) in placements.iter().enumerate() {
            prop_assert!(a.column < a.column_count);
            for b in &placements[i + 1..] {
                if a.overlaps(b) {
                    prop_assert_ne!(a.column, b.column);
                    prop_assert!(a.column_count > b.column);
                    prop_assert!(b.column_count > a.column);
                }
            }
        }

        let again = assign_columns(
            placements
                .iter()
                .map(|p| TimedEntry {
                    segment: p.segment,
                    day_offset: p.day_offset,
                    start_minutes: p.start_minutes,
                    end_minutes: p.end_minutes,
                })
                .collect(),
        );
        prop_assert_eq!(again, placements);
    }

    /// Property: a timed drag keeps the event's length in minutes
    #[test]
    fn prop_drag_preserves_duration(
        span_days in 0i64..4,
        base_start in 0u32..MINUTES_IN_DAY,
        base_end in 0u32..MINUTES_IN_DAY,
        hover_offset in -30i64..30,
        hover_minutes in 0u32..=MINUTES_IN_DAY,
    ) {
        let base = TimeRange {
            start_date: base_date(),
            end_date: add_days(base_date(), span_days),
            start_minutes: base_start,
            end_minutes: base_end,
        };
        let hover = PointerTarget::new(add_days(base_date(), hover_offset), hover_minutes);
        let shifted = shifted_timed_range(&base, hover);

        prop_assert!(shifted.end_minutes < MINUTES_IN_DAY);
        let preserved = shifted.end_minutes as i64 - shifted.start_minutes as i64
            + MINUTES_IN_DAY as i64 * diff_in_days(hover.date, shifted.end_date);
        prop_assert_eq!(preserved, duration_minutes(&base));
    }
}
