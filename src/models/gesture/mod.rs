// Gesture module
// Pointer-driven interaction state handed to the engine on every pointer move

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::layout::EventSegment;

/// An inclusive day range, `start <= end` once normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn single(date: NaiveDate) -> Self {
        Self::new(date, date)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// The same range with its bounds ordered.
    pub fn ordered(self) -> Self {
        if self.start <= self.end {
            self
        } else {
            Self::new(self.end, self.start)
        }
    }
}

/// A range with minute precision on its boundary days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    #[serde(rename = "startDateKey")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDateKey")]
    pub end_date: NaiveDate,
    pub start_minutes: u32,
    pub end_minutes: u32,
}

impl TimeRange {
    pub fn days(&self) -> DateRange {
        DateRange::new(self.start_date, self.end_date).ordered()
    }
}

/// Where the pointer currently points in a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerTarget {
    pub date: NaiveDate,
    /// Minutes after midnight; ignored by all-day surfaces
    pub minutes: u32,
}

impl PointerTarget {
    pub fn new(date: NaiveDate, minutes: u32) -> Self {
        Self { date, minutes }
    }

    pub fn day(date: NaiveDate) -> Self {
        Self { date, minutes: 0 }
    }
}

/// The single interaction in progress, if any.
///
/// Dragging and resizing carry the segment being manipulated as it was when
/// the gesture began; the caller drops back to `Idle` on pointer-up or
/// cancel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        segment: EventSegment,
        hover: PointerTarget,
    },
    Resizing {
        segment: EventSegment,
        hover: PointerTarget,
    },
    Selecting {
        anchor: PointerTarget,
        hover: PointerTarget,
    },
}

/// Click-drag selection of a run of whole days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub is_selecting: bool,
    pub anchor: Option<NaiveDate>,
    pub hover: Option<NaiveDate>,
    pub range: Option<DateRange>,
}

/// Click-drag selection in the minute grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimeSelectionState {
    pub is_selecting: bool,
    pub anchor: Option<PointerTarget>,
    pub hover: Option<PointerTarget>,
}
