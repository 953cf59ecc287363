// Resize previews
// The start of the event stays fixed; only the end follows the pointer.

use chrono::NaiveDate;

use super::drag::segment_date_range;
use crate::models::gesture::{DateRange, PointerTarget, TimeRange};
use crate::models::layout::EventSegment;
use crate::utils::date::{clamp_minutes, normalize_end_date};

/// All-day resize: the end follows `hover` but never moves before the start.
pub fn derive_resize_range(segment: &EventSegment, hover: NaiveDate) -> DateRange {
    let start = segment_date_range(segment).start;
    DateRange::new(start, normalize_end_date(start, hover))
}

/// Timed resize: the end follows `hover`, clamped so it never precedes the
/// fixed start (same day and minute at the earliest).
pub fn derive_timed_resize_range(segment: &EventSegment, hover: PointerTarget) -> TimeRange {
    let start_date = segment_date_range(segment).start;
    let start_minutes = segment.event.start_minutes().unwrap_or(0);
    let end_date = normalize_end_date(start_date, hover.date);
    let mut end_minutes = clamp_minutes(hover.minutes as i64);
    if end_date == start_date {
        end_minutes = end_minutes.max(start_minutes);
    }
    TimeRange {
        start_date,
        end_date,
        start_minutes,
        end_minutes,
    }
}
