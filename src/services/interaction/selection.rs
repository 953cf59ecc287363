// Range selection
// Click-drag selection of whole days in the month grid and of minute ranges
// in the timed grid.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::gesture::{
    DateRange, PointerTarget, SelectionState, TimeRange, TimeSelectionState,
};
use crate::models::layout::IndexRange;
use crate::utils::date::{clamp_minutes, diff_in_days, normalize_range, MINUTES_IN_DAY};

/// Minimum length of a timed selection, and the default grid slot.
pub const SLOT_MINUTES: u32 = 30;

impl SelectionState {
    pub fn begin(date: NaiveDate) -> Self {
        Self {
            is_selecting: true,
            anchor: Some(date),
            hover: Some(date),
            range: Some(DateRange::single(date)),
        }
    }

    /// Track the hovered day. Ignored when no selection is in progress.
    pub fn update(&mut self, date: NaiveDate) {
        if !self.is_selecting {
            return;
        }
        let Some(anchor) = self.anchor else {
            return;
        };
        self.hover = Some(date);
        self.range = Some(normalize_range(anchor, date));
    }

    /// Finish the selection and hand back the chosen range.
    pub fn end(&mut self) -> Option<DateRange> {
        let range = if self.is_selecting { self.range } else { None };
        *self = Self::default();
        range
    }
}

impl TimeSelectionState {
    pub fn begin(target: PointerTarget) -> Self {
        Self {
            is_selecting: true,
            anchor: Some(target),
            hover: Some(target),
        }
    }

    pub fn update(&mut self, target: PointerTarget) {
        if self.is_selecting {
            self.hover = Some(target);
        }
    }

    pub fn range(&self) -> Option<TimeRange> {
        normalize_time_selection(self)
    }

    pub fn end(&mut self) -> Option<TimeRange> {
        let range = if self.is_selecting { self.range() } else { None };
        *self = Self::default();
        range
    }
}

/// Order an anchor/hover pair of pointer targets into a time range.
///
/// Days are ordered first; on a single day the minutes are ordered too. The
/// range always lasts at least one `slot_minutes`. On a single day it stays
/// inside `[0, 1440]`, so a selection at the bottom of the day grows upwards.
pub fn normalize_time_range(
    anchor: PointerTarget,
    hover: PointerTarget,
    slot_minutes: u32,
) -> TimeRange {
    let forward = if anchor.date == hover.date {
        anchor.minutes <= hover.minutes
    } else {
        anchor.date < hover.date
    };
    let (first, last) = if forward { (anchor, hover) } else { (hover, anchor) };
    let slot = slot_minutes.min(MINUTES_IN_DAY);

    if first.date == last.date {
        let start_minutes = first.minutes.min(MINUTES_IN_DAY - slot);
        let end_minutes = last.minutes.max(start_minutes + slot).min(MINUTES_IN_DAY);
        return TimeRange {
            start_date: first.date,
            end_date: last.date,
            start_minutes,
            end_minutes,
        };
    }

    let start_minutes = first.minutes.min(MINUTES_IN_DAY);
    let mut end_minutes = last.minutes.min(MINUTES_IN_DAY);
    let length = diff_in_days(first.date, last.date) * MINUTES_IN_DAY as i64
        + end_minutes as i64
        - start_minutes as i64;
    if length < slot as i64 {
        end_minutes = clamp_minutes(end_minutes as i64 + slot as i64 - length);
    }
    TimeRange {
        start_date: first.date,
        end_date: last.date,
        start_minutes,
        end_minutes,
    }
}

/// The normalized range of a timed selection, using the default slot.
pub fn normalize_time_selection(state: &TimeSelectionState) -> Option<TimeRange> {
    Some(normalize_time_range(state.anchor?, state.hover?, SLOT_MINUTES))
}

/// Grid indices for a selection between `start` and `end`, in order.
/// `None` if either day is off the grid.
pub fn derive_selection_range(
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    index_by_date: &HashMap<NaiveDate, usize>,
) -> Option<IndexRange> {
    let start_index = *index_by_date.get(&start?)?;
    let end_index = *index_by_date.get(&end?)?;
    Some(IndexRange {
        start_index: start_index.min(end_index),
        end_index: start_index.max(end_index),
    })
}
