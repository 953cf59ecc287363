//! Date grid construction.
//!
//! Month grids are always 6 full weeks (42 cells) and week grids 7 cells, both
//! anchored to the configured first day of the week. Everything here works on
//! whole calendar days, so no time zone or time-of-day can leak in.

use std::collections::HashMap;

use chrono::{Datelike, Local, NaiveDate};

use crate::models::grid::{DayCell, DAYS_PER_WEEK, MONTH_GRID_CELLS, WEEK_GRID_CELLS};
use crate::utils::date::{add_days, get_week_start};

/// Build the 42-cell grid for `month` (1-12) of `year`.
///
/// Out-of-range months are clamped into 1..=12 rather than rejected.
pub fn build_month_grid(year: i32, month: u32, first_day_of_week: u8) -> Vec<DayCell> {
    let month = month.clamp(1, 12);
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default();
    let start = get_week_start(first_of_month, first_day_of_week);

    (0..MONTH_GRID_CELLS as i64)
        .map(|offset| {
            let date = add_days(start, offset);
            DayCell::new(date, date.month() == first_of_month.month())
        })
        .collect()
}

/// Build the 7-cell grid for the week containing `anchor`.
pub fn build_week_grid(anchor: NaiveDate, first_day_of_week: u8) -> Vec<DayCell> {
    let start = get_week_start(anchor, first_day_of_week);

    (0..WEEK_GRID_CELLS as i64)
        .map(|offset| {
            let date = add_days(start, offset);
            DayCell::new(date, date.month() == anchor.month())
        })
        .collect()
}

pub fn is_today(date: NaiveDate) -> bool {
    is_today_at(date, Local::now().date_naive())
}

pub fn is_today_at(date: NaiveDate, today: NaiveDate) -> bool {
    date == today
}

/// Position of `today` within `grid`, used for the now indicator.
pub fn today_index(grid: &[DayCell], today: NaiveDate) -> Option<usize> {
    grid.iter().position(|cell| is_today_at(cell.date, today))
}

pub fn index_by_date(grid: &[DayCell]) -> HashMap<NaiveDate, usize> {
    grid.iter()
        .enumerate()
        .map(|(index, cell)| (cell.date, index))
        .collect()
}

/// Inclusive grid indices of the `week_index`-th week row.
pub fn week_bounds(week_index: usize) -> (usize, usize) {
    let week_start = week_index * DAYS_PER_WEEK;
    (week_start, week_start + DAYS_PER_WEEK - 1)
}

/// The cells of one week row (shorter if the grid ends early).
pub fn week_cells(grid: &[DayCell], week_start: usize) -> &[DayCell] {
    let start = week_start.min(grid.len());
    let end = (week_start + DAYS_PER_WEEK).min(grid.len());
    &grid[start..end]
}

pub fn week_count(grid: &[DayCell]) -> usize {
    grid.len().div_ceil(DAYS_PER_WEEK)
}
