// Grid module
// Day cells that make up a month or week grid

use chrono::NaiveDate;
use serde::Serialize;

use crate::utils::date::format_date_key;

/// Number of cells in a month grid (6 weeks of 7 days).
pub const MONTH_GRID_CELLS: usize = 42;
/// Number of cells in a week grid.
pub const WEEK_GRID_CELLS: usize = 7;
pub const DAYS_PER_WEEK: usize = 7;

/// One day of a calendar grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DayCell {
    pub date: NaiveDate,
    /// True when the cell belongs to the month (or anchor week's month) being shown
    pub in_month: bool,
}

impl DayCell {
    pub fn new(date: NaiveDate, in_month: bool) -> Self {
        Self { date, in_month }
    }

    /// The `YYYY-MM-DD` key of this cell
    pub fn key(&self) -> String {
        format_date_key(self.date)
    }
}
