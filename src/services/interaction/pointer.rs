// Pointer mapping
// Converts pointer coordinates inside a grid's bounding box into days and
// minutes. Out-of-range coordinates are clamped, never rejected.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::gesture::PointerTarget;
use crate::models::grid::{DayCell, DAYS_PER_WEEK};
use crate::utils::date::MINUTES_IN_DAY;

/// Rows in a month grid.
pub const MONTH_GRID_ROWS: usize = 6;

/// Bounding box of a rendered grid, in the same units as pointer positions.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GridRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl GridRect {
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

fn clamp_index(value: f32, max: usize) -> usize {
    if !value.is_finite() || value < 0.0 {
        return 0;
    }
    (value as usize).min(max)
}

fn clamp_minutes_f32(value: f32) -> f32 {
    if value.is_finite() {
        value.clamp(0.0, MINUTES_IN_DAY as f32)
    } else {
        0.0
    }
}

/// Day column under `x` for a single row of 7 columns (week and day views).
pub fn date_from_pointer_x(x: f32, rect: GridRect, cells: &[DayCell]) -> Option<NaiveDate> {
    if rect.width <= 0.0 {
        return None;
    }
    let column_width = rect.width / DAYS_PER_WEEK as f32;
    let column = clamp_index(((x - rect.left) / column_width).floor(), DAYS_PER_WEEK - 1);
    cells.get(column).map(|cell| cell.date)
}

/// Day cell under `(x, y)` in a 7 x 6 month grid.
pub fn date_from_point(x: f32, y: f32, rect: GridRect, grid: &[DayCell]) -> Option<NaiveDate> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let column_width = rect.width / DAYS_PER_WEEK as f32;
    let row_height = rect.height / MONTH_GRID_ROWS as f32;
    let column = clamp_index(((x - rect.left) / column_width).floor(), DAYS_PER_WEEK - 1);
    let row = clamp_index(((y - rect.top) / row_height).floor(), MONTH_GRID_ROWS - 1);
    grid.get(row * DAYS_PER_WEEK + column).map(|cell| cell.date)
}

/// Continuous minute-of-day under `y`, clamped to `0..=1440`.
pub fn minutes_from_pointer(y: f32, rect: GridRect, slot_height: f32, slot_minutes: u32) -> f32 {
    if slot_height <= 0.0 {
        return 0.0;
    }
    let relative = (y - rect.top).max(0.0);
    clamp_minutes_f32(relative / slot_height * slot_minutes as f32)
}

/// Floor `minutes` to a multiple of `step`, clamped to `0..=1440`.
pub fn snap_minutes(minutes: f32, step: u32) -> u32 {
    let minutes = clamp_minutes_f32(minutes);
    if step == 0 {
        return minutes.floor() as u32;
    }
    let step_f = step as f32;
    let snapped = (minutes / step_f).floor() * step_f;
    (snapped as u32).min(MINUTES_IN_DAY)
}

/// Minute-of-day under `y`, floored to whole slots.
pub fn minutes_from_y(y: f32, grid_top: f32, slot_height: f32, slot_minutes: u32) -> u32 {
    if slot_height <= 0.0 {
        return 0;
    }
    let relative = (y - grid_top).max(0.0);
    let slots = (relative / slot_height).floor();
    clamp_minutes_f32(slots * slot_minutes as f32) as u32
}

/// Day and snapped minute under the pointer in a timed week or day grid.
pub fn pointer_target(
    x: f32,
    y: f32,
    rect: GridRect,
    cells: &[DayCell],
    slot_height: f32,
    slot_minutes: u32,
) -> Option<PointerTarget> {
    let date = date_from_pointer_x(x, rect, cells)?;
    let minutes = snap_minutes(
        minutes_from_pointer(y, rect, slot_height, slot_minutes),
        slot_minutes,
    );
    Some(PointerTarget::new(date, minutes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::grid::{build_month_grid, build_week_grid};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    const WEEK_RECT: GridRect = GridRect {
        left: 100.0,
        top: 50.0,
        width: 700.0,
        height: 1152.0,
    };

    #[test_case(150.0, 0 ; "first column")]
    #[test_case(499.0, 3 ; "middle column")]
    #[test_case(-40.0, 0 ; "left of grid clamps")]
    #[test_case(5000.0, 6 ; "right of grid clamps")]
    fn test_date_from_pointer_x(x: f32, expected_column: usize) {
        let cells = build_week_grid(date(2025, 6, 11), 0);
        assert_eq!(
            date_from_pointer_x(x, WEEK_RECT, &cells),
            Some(cells[expected_column].date)
        );
    }

    #[test]
    fn test_zero_size_rect_has_no_date() {
        let cells = build_week_grid(date(2025, 6, 11), 0);
        assert_eq!(date_from_pointer_x(10.0, GridRect::default(), &cells), None);
        assert_eq!(date_from_point(10.0, 10.0, GridRect::default(), &cells), None);
    }

    #[test]
    fn test_date_from_point_in_month_grid() {
        let grid = build_month_grid(2025, 6, 0);
        let rect = GridRect::new(0.0, 0.0, 700.0, 600.0);
        // Row 2, column 3
        assert_eq!(date_from_point(350.0, 250.0, rect, &grid), Some(grid[17].date));
        // Below and right of the grid clamp to the last cell
        assert_eq!(date_from_point(900.0, 900.0, rect, &grid), Some(grid[41].date));
        assert_eq!(date_from_point(-1.0, -1.0, rect, &grid), Some(grid[0].date));
    }

    #[test]
    fn test_minutes_mapping() {
        // 24px per 30 minute slot
        assert_eq!(minutes_from_pointer(50.0 + 36.0, WEEK_RECT, 24.0, 30), 45.0);
        assert_eq!(minutes_from_pointer(0.0, WEEK_RECT, 24.0, 30), 0.0);
        assert_eq!(minutes_from_pointer(99_999.0, WEEK_RECT, 24.0, 30), 1440.0);
        assert_eq!(minutes_from_y(50.0 + 36.0, 50.0, 24.0, 30), 30);
        assert_eq!(minutes_from_y(50.0 + 48.0, 50.0, 24.0, 30), 60);
        assert_eq!(minutes_from_y(10.0, 50.0, 0.0, 30), 0);
    }

    #[test_case(44.9, 30, 30 ; "floors to slot")]
    #[test_case(-5.0, 30, 0 ; "negative clamps")]
    #[test_case(2000.0, 30, 1440 ; "past midnight clamps")]
    #[test_case(17.0, 15, 15 ; "quarter hours")]
    fn test_snap_minutes(minutes: f32, step: u32, expected: u32) {
        assert_eq!(snap_minutes(minutes, step), expected);
    }

    #[test]
    fn test_pointer_target() {
        let cells = build_week_grid(date(2025, 6, 11), 0);
        let target = pointer_target(420.0, 50.0 + 24.0 * 19.5, WEEK_RECT, &cells, 24.0, 30);
        assert_eq!(target, Some(PointerTarget::new(cells[3].date, 570)));
    }
}
