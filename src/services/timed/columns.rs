// Timed column assignment
// Sweep-line coloring of one day's overlapping timed entries into columns

use std::cmp::Ordering;

use crate::models::layout::{TimedEntry, TimedEventPlacement};
use crate::services::segment::compare_titles;

fn compare_entries(a: &TimedEntry<'_>, b: &TimedEntry<'_>) -> Ordering {
    a.start_minutes
        .cmp(&b.start_minutes)
        .then_with(|| b.duration().cmp(&a.duration()))
        .then_with(|| compare_titles(&a.segment.event, &b.segment.event))
}

/// Assign each entry the lowest column free at its start time.
///
/// Every time an entry joins the active set, the resulting column count is
/// broadcast to all active members, so an overlap cluster shares one width.
/// Placements are returned in sweep order.
pub fn assign_columns<'a>(mut entries: Vec<TimedEntry<'a>>) -> Vec<TimedEventPlacement<'a>> {
    entries.sort_by(compare_entries);

    let mut placements: Vec<TimedEventPlacement<'a>> = Vec::with_capacity(entries.len());
    // Indices into `placements`
    let mut active: Vec<usize> = Vec::new();

    for entry in entries {
        active.retain(|&index| placements[index].end_minutes > entry.start_minutes);

        let mut column = 0;
        while active.iter().any(|&index| placements[index].column == column) {
            column += 1;
        }

        placements.push(TimedEventPlacement {
            segment: entry.segment,
            day_offset: entry.day_offset,
            start_minutes: entry.start_minutes,
            end_minutes: entry.end_minutes,
            column,
            column_count: 1,
        });
        active.push(placements.len() - 1);

        let column_count = active
            .iter()
            .map(|&index| placements[index].column)
            .max()
            .unwrap_or(0)
            + 1;
        for &index in &active {
            let placement = &mut placements[index];
            placement.column_count = placement.column_count.max(column_count);
        }
    }
    placements
}
