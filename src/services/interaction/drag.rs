//! Drag-move previews.
//!
//! All-day drags shift the whole day range by the offset between the
//! event's first day and the hovered day. Timed drags keep the event's total
//! length in minutes and let the end roll over midnight as often as needed.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::gesture::{DateRange, PointerTarget, TimeRange};
use crate::models::layout::EventSegment;
use crate::utils::date::{add_days, clamp_minutes, diff_in_days, MINUTES_IN_DAY};

/// Where a timed event ends once its start has been moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftedTimedRange {
    pub start_minutes: u32,
    pub end_minutes: u32,
    #[serde(rename = "endDateKey")]
    pub end_date: NaiveDate,
}

/// Move `[start, end]` so that it begins on `target`, keeping its length.
pub fn shifted_date_range(start: NaiveDate, end: NaiveDate, target: NaiveDate) -> DateRange {
    let offset = diff_in_days(start, target);
    DateRange::new(add_days(start, offset), add_days(end, offset))
}

/// Total length of a timed range in minutes, never negative.
pub fn duration_minutes(base: &TimeRange) -> i64 {
    let span_days = diff_in_days(base.start_date, base.end_date);
    let duration = span_days * MINUTES_IN_DAY as i64 + base.end_minutes as i64
        - base.start_minutes as i64;
    duration.max(0)
}

/// Re-anchor `base` so it starts at `hover`, preserving its duration.
pub fn shifted_timed_range(base: &TimeRange, hover: PointerTarget) -> ShiftedTimedRange {
    let duration = duration_minutes(base);
    let start_minutes = clamp_minutes(hover.minutes as i64);
    let total_end = start_minutes as i64 + duration;
    let end_day_offset = total_end.div_euclid(MINUTES_IN_DAY as i64);
    let end_minutes = (total_end - end_day_offset * MINUTES_IN_DAY as i64) as u32;

    ShiftedTimedRange {
        start_minutes,
        end_minutes,
        end_date: add_days(hover.date, end_day_offset),
    }
}

/// The stored day range of the event behind `segment`, not the clipped one.
pub fn segment_date_range(segment: &EventSegment) -> DateRange {
    let start = segment.event.date.unwrap_or(segment.start);
    let end = segment
        .event
        .end_date
        .or(segment.event.date)
        .unwrap_or(segment.end);
    DateRange::new(start, end)
}

/// The stored minute range of the event behind `segment`.
///
/// Missing times fall back to `0`.
pub fn segment_time_range(segment: &EventSegment) -> TimeRange {
    let days = segment_date_range(segment);
    TimeRange {
        start_date: days.start,
        end_date: days.end,
        start_minutes: segment.event.start_minutes().unwrap_or(0),
        end_minutes: segment.event.end_minutes().unwrap_or(0),
    }
}

/// Preview of an all-day drag hovering over `hover`.
pub fn derive_drag_range(segment: &EventSegment, hover: NaiveDate) -> DateRange {
    let base = segment_date_range(segment);
    shifted_date_range(base.start, base.end, hover)
}

/// Preview of a timed drag whose start hovers at `hover`.
pub fn derive_timed_drag_range(segment: &EventSegment, hover: PointerTarget) -> TimeRange {
    let shifted = shifted_timed_range(&segment_time_range(segment), hover);
    TimeRange {
        start_date: hover.date,
        end_date: shifted.end_date,
        start_minutes: shifted.start_minutes,
        end_minutes: shifted.end_minutes,
    }
}
