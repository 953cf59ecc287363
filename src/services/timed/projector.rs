//! Projection of timed events onto a single day column.
//!
//! Multi-day timed events are cut into per-day slices: the first day runs
//! from the start time to midnight, middle days cover the whole day and the
//! last day runs from midnight to the end time. A live drag or resize
//! replaces or extends the stored slices before columns are assigned.

use chrono::NaiveDate;

use crate::models::gesture::{Gesture, TimeRange};
use crate::models::layout::{EventSegment, TimedEntry, TimedEventPlacement};
use crate::services::interaction::{derive_timed_drag_range, derive_timed_resize_range};
use crate::services::segment::split_multi_day;
use crate::utils::date::MINUTES_IN_DAY;

use super::columns::assign_columns;

struct DayEntries<'a> {
    day_offset: usize,
    entries: Vec<TimedEntry<'a>>,
}

impl<'a> DayEntries<'a> {
    /// Zero-length slices (an end of exactly 00:00 on the next day) are dropped.
    fn push(&mut self, segment: &'a EventSegment, start_minutes: u32, end_minutes: u32) {
        let start_minutes = start_minutes.min(MINUTES_IN_DAY);
        let end_minutes = end_minutes.min(MINUTES_IN_DAY);
        if end_minutes <= start_minutes {
            return;
        }
        self.entries.push(TimedEntry {
            segment,
            day_offset: self.day_offset,
            start_minutes,
            end_minutes,
        });
    }

    fn contains(&self, id: &str) -> bool {
        self.entries.iter().any(|entry| entry.segment.id == id)
    }

    fn remove(&mut self, id: &str) {
        self.entries.retain(|entry| entry.segment.id != id);
    }
}

/// Visible minutes of `range` on `day`: boundary days use the range's own
/// minutes, days in between are covered fully.
fn minutes_on_day(range: &TimeRange, day: NaiveDate) -> Option<(u32, u32)> {
    let days = range.days();
    if !days.contains(day) {
        return None;
    }
    let start = if day == days.start { range.start_minutes } else { 0 };
    let end = if day == days.end {
        range.end_minutes
    } else {
        MINUTES_IN_DAY
    };
    Some((start, end))
}

/// Timed entries for `day`, laid out into columns.
///
/// `segments` is the full segment list of the visible grid; non-timed and
/// off-day segments are skipped. `day_offset` is the column of `day` within
/// its week.
pub fn build_timed_day_entries<'a>(
    segments: &[&'a EventSegment],
    day: NaiveDate,
    day_offset: usize,
    gesture: &'a Gesture,
) -> Vec<TimedEventPlacement<'a>> {
    let mut day_entries = DayEntries {
        day_offset,
        entries: Vec::new(),
    };

    for &segment in segments {
        let event = &segment.event;
        if !event.is_timed() {
            continue;
        }
        let Some(span) = split_multi_day(event) else {
            continue;
        };
        if day < span.start || day > span.end {
            continue;
        }
        let start = if day == span.start {
            event.start_minutes().unwrap_or(0)
        } else {
            0
        };
        let end = if day == span.end {
            event.end_minutes().unwrap_or(MINUTES_IN_DAY)
        } else {
            MINUTES_IN_DAY
        };
        day_entries.push(segment, start, end);
    }

    match gesture {
        Gesture::Resizing { segment, hover } if segment.event.is_timed() => {
            let range = derive_timed_resize_range(segment, *hover);
            // Only fills days the stored event does not reach yet
            if let Some((start, end)) = minutes_on_day(&range, day) {
                if !day_entries.contains(&segment.id) {
                    day_entries.push(segment, start, end);
                }
            }
        }
        Gesture::Dragging { segment, hover } if segment.event.is_timed() => {
            let range = derive_timed_drag_range(segment, *hover);
            if let Some((start, end)) = minutes_on_day(&range, day) {
                day_entries.remove(&segment.id);
                day_entries.push(segment, start, end);
            }
        }
        _ => {}
    }

    assign_columns(day_entries.entries)
}
