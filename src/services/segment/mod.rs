//! Event segmentation and priority rows.
//!
//! Turns the raw event list into segments clipped to the visible grid, sorts
//! them once with a global deterministic order and first-fit packs them into
//! priority rows. The week stacker consumes the rows in that order, so long
//! and early events win visible slots in every week they appear in.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::models::event::{event_id, CalendarEvent, EditableEvent, EventLocation};
use crate::models::grid::DayCell;
use crate::models::layout::{EventRows, EventSegment};
use crate::services::grid::index_by_date;
use crate::utils::date::diff_in_days;

/// The unclipped day range an event occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySpan {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub span: usize,
}

/// Resolve the day range of an event.
///
/// `end` defaults to the start date; an end before the start collapses onto
/// the start. Undated events yield `None`.
pub fn split_multi_day(event: &CalendarEvent) -> Option<DaySpan> {
    let start = event.date?;
    let mut end = event.end_date.unwrap_or(start);
    if end < start {
        log::debug!(
            "Event '{}' ends ({}) before it starts ({}), collapsing to one day",
            event.title,
            end,
            start
        );
        end = start;
    }
    let span = diff_in_days(start, end) as usize + 1;
    Some(DaySpan { start, end, span })
}

/// Clip every placeable event to `grid`. Output keeps input order.
pub fn build_segments(events: &[EditableEvent], grid: &[DayCell]) -> Vec<EventSegment> {
    let (Some(first), Some(last)) = (grid.first(), grid.last()) else {
        return Vec::new();
    };
    let (grid_start, grid_end) = (first.date, last.date);
    let date_to_index = index_by_date(grid);

    let mut segments = Vec::with_capacity(events.len());
    for (index, entry) in events.iter().enumerate() {
        let Some(days) = split_multi_day(&entry.event) else {
            log::debug!("Skipping undated event '{}'", entry.event.title);
            continue;
        };
        if days.end < grid_start || days.start > grid_end {
            continue;
        }
        let start = days.start.max(grid_start);
        let end = days.end.min(grid_end);
        let (Some(&start_index), Some(&end_index)) =
            (date_to_index.get(&start), date_to_index.get(&end))
        else {
            continue;
        };

        let id = event_id(&entry.event, index);
        let mut event = entry.event.clone();
        event.id = Some(id.clone());
        segments.push(EventSegment {
            id,
            event,
            location: entry.location.clone(),
            start,
            end,
            span: diff_in_days(start, end) as usize + 1,
            start_index,
            end_index,
        });
    }
    segments
}

/// Timed events first by start minute; events without a start time sort last.
pub fn compare_start_times(a: &CalendarEvent, b: &CalendarEvent) -> Ordering {
    match (a.start_minutes(), b.start_minutes()) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn compare_titles(a: &CalendarEvent, b: &CalendarEvent) -> Ordering {
    a.title.to_lowercase().cmp(&b.title.to_lowercase())
}

/// Global segment order: start index, then longer spans, then (for
/// single-day segments only) start time and title.
pub fn compare_segments(a: &EventSegment, b: &EventSegment) -> Ordering {
    a.start_index
        .cmp(&b.start_index)
        .then_with(|| b.span.cmp(&a.span))
        .then_with(|| {
            if a.span == 1 && b.span == 1 {
                compare_start_times(&a.event, &b.event)
                    .then_with(|| compare_titles(&a.event, &b.event))
            } else {
                Ordering::Equal
            }
        })
}

/// First-fit bin packing into priority rows.
///
/// Segments are sorted with [`compare_segments`] (stable, so ties keep input
/// order) and each joins the first row none of whose members overlap it.
pub fn assign_priority_rows(mut segments: Vec<EventSegment>) -> EventRows {
    segments.sort_by(compare_segments);

    let mut rows: EventRows = Vec::new();
    for segment in segments {
        let free_row = rows.iter().position(|row| {
            row.iter()
                .all(|existing| !existing.overlaps_indices(segment.start_index, segment.end_index))
        });
        match free_row {
            Some(row_index) => rows[row_index].push(segment),
            None => rows.push(vec![segment]),
        }
    }
    rows
}

/// Segment `events` against `grid` and pack them into priority rows.
pub fn build_event_rows(events: &[EditableEvent], grid: &[DayCell]) -> EventRows {
    assign_priority_rows(build_segments(events, grid))
}

/// Same as [`build_event_rows`] for events that have no storage location.
pub fn build_event_rows_from_events(events: &[CalendarEvent], grid: &[DayCell]) -> EventRows {
    let entries: Vec<EditableEvent> = events
        .iter()
        .cloned()
        .map(|event| EditableEvent::new(event, EventLocation::default()))
        .collect();
    build_event_rows(&entries, grid)
}

/// All segments in priority order (row 0 first).
pub fn flatten_rows(rows: &EventRows) -> Vec<&EventSegment> {
    rows.iter().flatten().collect()
}

/// Every segment covering `date`, in priority order. Feeds the "+N more"
/// popover.
pub fn segments_on_date(rows: &EventRows, date: NaiveDate) -> Vec<&EventSegment> {
    rows.iter()
        .flatten()
        .filter(|segment| segment.covers(date))
        .collect()
}
