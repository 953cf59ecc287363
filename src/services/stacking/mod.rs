//! Per-week row stacking with overflow accounting.
//!
//! Given the priority rows for a whole grid, [`week_event_layout`] stacks the
//! segments that touch one 7-day window into as few rows as possible. Rows
//! past the measured capacity are not drawn; instead each day they cover gets
//! its "+N more" tally bumped.

use std::cmp::Ordering;

use crate::models::grid::DAYS_PER_WEEK;
use crate::models::layout::{
    EventSegment, IndexRange, SelectionSpan, SingleDayPlacement, WeekEventLayout, WeekPlacement,
};
use crate::services::segment::{compare_start_times, compare_titles};

/// A segment reclipped to the week window, waiting for a row.
#[derive(Debug, Clone)]
struct WeekLayoutItem<'a> {
    segment: &'a EventSegment,
    clamped_start: usize,
    clamped_end: usize,
}

/// Ordering inside a week: start index, longer spans, start time, title.
/// The sort is stable, so ties keep priority-row order.
fn compare_week_items(a: &WeekLayoutItem<'_>, b: &WeekLayoutItem<'_>) -> Ordering {
    a.segment
        .start_index
        .cmp(&b.segment.start_index)
        .then_with(|| b.segment.span.cmp(&a.segment.span))
        .then_with(|| compare_start_times(&a.segment.event, &b.segment.event))
        .then_with(|| compare_titles(&a.segment.event, &b.segment.event))
}

fn clamp_to_week(
    start_index: usize,
    end_index: usize,
    week_start: usize,
    week_end: usize,
) -> Option<(usize, usize)> {
    let clamped_start = start_index.max(week_start);
    let clamped_end = end_index.min(week_end);
    (clamped_start <= clamped_end).then_some((clamped_start, clamped_end))
}

fn collides(row: &[(usize, usize)], start: usize, end: usize) -> bool {
    row.iter()
        .any(|&(taken_start, taken_end)| !(end < taken_start || start > taken_end))
}

fn increment_hidden_counts(
    hidden_counts: &mut [usize; DAYS_PER_WEEK],
    segment: &EventSegment,
    week_start: usize,
    week_end: usize,
) {
    let Some((start, end)) =
        clamp_to_week(segment.start_index, segment.end_index, week_start, week_end)
    else {
        return;
    };
    for index in start..=end {
        if let Some(count) = hidden_counts.get_mut(index - week_start) {
            *count += 1;
        }
    }
}

/// Stack the segments of `rows` that intersect `[week_start, week_end]`.
///
/// Segments landing on a row at or beyond `row_capacity` are not placed and
/// count towards `hidden_counts_by_day` for every day of the window they
/// cover. A capacity of zero places nothing and hides every segment.
pub fn week_event_layout<'a>(
    rows: &'a [Vec<EventSegment>],
    week_start: usize,
    week_end: usize,
    row_capacity: usize,
) -> WeekEventLayout<'a> {
    if row_capacity == 0 {
        let mut layout = WeekEventLayout::empty(row_capacity);
        for segment in rows.iter().flatten() {
            increment_hidden_counts(
                &mut layout.hidden_counts_by_day,
                segment,
                week_start,
                week_end,
            );
        }
        return layout;
    }

    let mut items: Vec<WeekLayoutItem<'a>> = rows
        .iter()
        .flatten()
        .filter_map(|segment| {
            let (clamped_start, clamped_end) =
                clamp_to_week(segment.start_index, segment.end_index, week_start, week_end)?;
            Some(WeekLayoutItem {
                segment,
                clamped_start,
                clamped_end,
            })
        })
        .collect();
    items.sort_by(compare_week_items);

    let mut layout = WeekEventLayout::empty(row_capacity);
    let mut occupancy: Vec<Vec<(usize, usize)>> = Vec::new();

    for item in items {
        let row_index = occupancy
            .iter()
            .position(|row| !collides(row, item.clamped_start, item.clamped_end))
            .unwrap_or(occupancy.len());
        if row_index == occupancy.len() {
            occupancy.push(Vec::new());
        }
        occupancy[row_index].push((item.clamped_start, item.clamped_end));

        if row_index >= row_capacity {
            increment_hidden_counts(
                &mut layout.hidden_counts_by_day,
                item.segment,
                week_start,
                week_end,
            );
            continue;
        }

        let is_actual_end = item.segment.end_index == item.clamped_end;
        let placement = WeekPlacement {
            segment: item.segment,
            week_row: row_index,
            column_start: item.clamped_start - week_start + 1,
            span_in_week: item.clamped_end - item.clamped_start + 1,
            is_span_start: item.segment.start_index == item.clamped_start,
            is_span_end: is_actual_end,
            is_actual_end,
        };
        if item.segment.span <= 1 {
            layout.single_day_placements.push(SingleDayPlacement {
                placement,
                day_offset: item.clamped_start - week_start,
                cell_index: item.clamped_start,
            });
        } else {
            layout.multi_day_placements.push(placement);
        }
    }

    layout.week_row_count = occupancy.len();
    if layout.has_hidden() {
        let hidden: usize = layout.hidden_counts_by_day.iter().sum();
        log::debug!(
            "Week {}..={}: {} rows used, capacity {}, {} hidden day slots",
            week_start,
            week_end,
            layout.week_row_count,
            row_capacity,
            hidden
        );
    }
    layout
}

/// Event rows that fit in a month cell; one row is kept free for the
/// "+N more" affordance.
pub fn row_capacity(grid_row_capacity: usize) -> usize {
    grid_row_capacity.saturating_sub(1)
}

/// How many event rows fit in one grid row of the measured height.
///
/// An unmeasured or zero height yields 0.
pub fn grid_row_capacity(
    grid_height: Option<f32>,
    row_count: usize,
    top_offset: f32,
    row_spacing: f32,
) -> usize {
    let Some(height) = grid_height.filter(|h| *h > 0.0) else {
        return 0;
    };
    if row_count == 0 || row_spacing <= 0.0 {
        return 0;
    }
    let row_height = height / row_count as f32;
    let available = ((row_height - top_offset) / row_spacing).floor();
    if available.is_finite() && available > 0.0 {
        available as usize
    } else {
        0
    }
}

/// The part of a selection that falls inside one week, as 1-based columns.
pub fn selection_span_for_week(
    selection: Option<IndexRange>,
    week_start: usize,
    week_end: usize,
) -> Option<SelectionSpan> {
    let selection = selection?;
    let (start, end) =
        clamp_to_week(selection.start_index, selection.end_index, week_start, week_end)?;
    Some(SelectionSpan {
        column_start: start - week_start + 1,
        span: end - start + 1,
    })
}
