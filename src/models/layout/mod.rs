// Layout module
// Derived layout structures. All of them are rebuilt from scratch on every
// recomputation and borrow the segments they describe.

use chrono::NaiveDate;
use serde::Serialize;

use super::event::{CalendarEvent, EditableEvent, EventLocation};
use super::grid::DAYS_PER_WEEK;

/// An event clipped to the bounds of one visible grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSegment {
    pub id: String,
    pub event: CalendarEvent,
    pub location: EventLocation,
    /// Clipped first day
    pub start: NaiveDate,
    /// Clipped last day
    pub end: NaiveDate,
    /// Inclusive day count of the clipped range, at least 1
    pub span: usize,
    pub start_index: usize,
    pub end_index: usize,
}

impl EventSegment {
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn overlaps_indices(&self, start_index: usize, end_index: usize) -> bool {
        !(self.end_index < start_index || self.start_index > end_index)
    }

    /// The stored event and its location, as handed to storage.
    pub fn editable(&self) -> EditableEvent {
        EditableEvent::new(self.event.clone(), self.location.clone())
    }
}

/// Segments bin-packed into priority rows; row 0 has the highest priority.
pub type EventRows = Vec<Vec<EventSegment>>;

/// Placement of a segment inside one week window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekPlacement<'a> {
    pub segment: &'a EventSegment,
    /// Stack row, 0-based
    pub week_row: usize,
    /// 1-based column within the week's 7 columns
    pub column_start: usize,
    pub span_in_week: usize,
    /// The visible slice starts on the event's first day
    pub is_span_start: bool,
    /// The visible slice ends on the event's last day
    pub is_span_end: bool,
    /// Where the resize handle renders
    pub is_actual_end: bool,
}

/// A one-day placement; also records which weekday it sits on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SingleDayPlacement<'a> {
    #[serde(flatten)]
    pub placement: WeekPlacement<'a>,
    /// 0..=6 within the week
    pub day_offset: usize,
    /// Index into the whole grid
    pub cell_index: usize,
}

/// Stacked bars and overflow tallies for one week window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekEventLayout<'a> {
    pub row_capacity: usize,
    pub week_row_count: usize,
    pub multi_day_placements: Vec<WeekPlacement<'a>>,
    pub single_day_placements: Vec<SingleDayPlacement<'a>>,
    /// Segments pushed past capacity, per weekday
    pub hidden_counts_by_day: [usize; DAYS_PER_WEEK],
}

impl<'a> WeekEventLayout<'a> {
    pub fn empty(row_capacity: usize) -> Self {
        Self {
            row_capacity,
            week_row_count: 0,
            multi_day_placements: Vec::new(),
            single_day_placements: Vec::new(),
            hidden_counts_by_day: [0; DAYS_PER_WEEK],
        }
    }

    /// Rows the renderer should reserve height for.
    pub fn visible_row_count(&self) -> usize {
        self.week_row_count.min(self.row_capacity)
    }

    pub fn has_hidden(&self) -> bool {
        self.hidden_counts_by_day.iter().any(|count| *count > 0)
    }

    pub fn placement_count(&self) -> usize {
        self.multi_day_placements.len() + self.single_day_placements.len()
    }

    /// All placements, multi-day first.
    pub fn placements(&self) -> impl Iterator<Item = &WeekPlacement<'a>> {
        self.multi_day_placements
            .iter()
            .chain(self.single_day_placements.iter().map(|single| &single.placement))
    }
}

/// A timed event's visible minute range on one day, before columns are known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedEntry<'a> {
    pub segment: &'a EventSegment,
    pub day_offset: usize,
    pub start_minutes: u32,
    pub end_minutes: u32,
}

impl TimedEntry<'_> {
    pub fn duration(&self) -> u32 {
        self.end_minutes.saturating_sub(self.start_minutes)
    }
}

/// A timed event block positioned in a day column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimedEventPlacement<'a> {
    pub segment: &'a EventSegment,
    pub day_offset: usize,
    pub start_minutes: u32,
    pub end_minutes: u32,
    pub column: usize,
    pub column_count: usize,
}

impl TimedEventPlacement<'_> {
    pub fn overlaps(&self, other: &TimedEventPlacement<'_>) -> bool {
        self.start_minutes < other.end_minutes && other.start_minutes < self.end_minutes
    }
}

/// An inclusive range of grid indices, `start_index <= end_index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexRange {
    pub start_index: usize,
    pub end_index: usize,
}

/// A highlighted run of columns within one week, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionSpan {
    pub column_start: usize,
    pub span: usize,
}
