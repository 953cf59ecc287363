// Agenda service
// Day-by-day sections for the list view

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::grid::DayCell;
use crate::models::layout::{EventRows, EventSegment};
use crate::services::segment::flatten_rows;
use crate::utils::date::format_time;

/// One day of the agenda.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgendaDay<'a> {
    pub date: NaiveDate,
    pub all_day: Vec<&'a EventSegment>,
    pub timed: Vec<&'a EventSegment>,
}

impl AgendaDay<'_> {
    pub fn is_empty(&self) -> bool {
        self.all_day.is_empty() && self.timed.is_empty()
    }
}

fn is_all_day_entry(segment: &EventSegment) -> bool {
    segment.event.all_day || !segment.event.is_timed()
}

/// `"HH:MM - HH:MM"` for a timed segment, `None` for all-day ones.
pub fn time_label(segment: &EventSegment) -> Option<String> {
    if is_all_day_entry(segment) {
        return None;
    }
    let start = segment.event.start_minutes()?;
    let end = segment.event.end_minutes()?;
    Some(format!("{} - {}", format_time(start), format_time(end)))
}

/// One section per grid day. All-day entries keep priority order; timed
/// entries are ordered by their start time.
pub fn build_agenda<'a>(rows: &'a EventRows, grid: &[DayCell]) -> Vec<AgendaDay<'a>> {
    let segments = flatten_rows(rows);
    grid.iter()
        .map(|cell| {
            let (all_day, mut timed): (Vec<&EventSegment>, Vec<&EventSegment>) = segments
                .iter()
                .copied()
                .filter(|segment| segment.covers(cell.date))
                .partition(|segment| is_all_day_entry(segment));
            timed.sort_by_key(|segment| segment.event.start_minutes().unwrap_or(u32::MAX));
            AgendaDay {
                date: cell.date,
                all_day,
                timed,
            }
        })
        .collect()
}
