use chrono::NaiveDate;

use super::EventEdit;
use crate::models::event::{CalendarEvent, EditableEvent};
use crate::models::gesture::PointerTarget;
use crate::models::layout::EventSegment;
use crate::services::interaction::{
    derive_resize_range, derive_timed_drag_range, derive_timed_resize_range, segment_date_range,
};
use crate::utils::date::{add_days, diff_in_days, format_time, wall_clock};

fn edit_for(segment: &EventSegment, next_event: CalendarEvent) -> EventEdit {
    EventEdit::new(
        EditableEvent::new(next_event, segment.location.clone()),
        segment.editable(),
    )
}

/// Shift an event's start and end date by `offset` days. Undated events are
/// returned unchanged.
pub fn move_event_by_days(event: &CalendarEvent, offset: i64) -> CalendarEvent {
    let Some(date) = event.date else {
        return event.clone();
    };
    CalendarEvent {
        date: Some(add_days(date, offset)),
        end_date: event.end_date.map(|end| add_days(end, offset)),
        ..event.clone()
    }
}

/// Commit an all-day drag dropped on `target`.
///
/// Returns `None` for events that cannot move.
pub fn apply_date_drop(segment: &EventSegment, target: NaiveDate) -> Option<EventEdit> {
    if !segment.event.can_move() {
        log::debug!("Ignoring drop of undated event '{}'", segment.event.title);
        return None;
    }
    let offset = diff_in_days(segment_date_range(segment).start, target);
    Some(edit_for(segment, move_event_by_days(&segment.event, offset)))
}

/// Commit a timed drag released at `hover`.
///
/// The event becomes timed, starts at the hovered minute and keeps its
/// length; a same-day result drops the end date. A drop at the very end of
/// the day starts at `00:00` on the next one.
pub fn apply_timed_drop(segment: &EventSegment, hover: PointerTarget) -> Option<EventEdit> {
    if !segment.event.can_move() {
        return None;
    }
    let range = derive_timed_drag_range(segment, hover);
    let (start_date, start_time) = wall_clock(range.start_date, range.start_minutes);
    let (end_date, end_time) = wall_clock(range.end_date, range.end_minutes);
    let offset = diff_in_days(segment_date_range(segment).start, start_date);
    let next = CalendarEvent {
        all_day: false,
        date: Some(start_date),
        end_date: (end_date != start_date).then_some(end_date),
        start_time: Some(start_time),
        end_time: Some(end_time),
        ..move_event_by_days(&segment.event, offset)
    };
    Some(edit_for(segment, next))
}

/// Commit an all-day resize released over `hover`. Resizing back onto the
/// start day removes the end date.
pub fn apply_resize(segment: &EventSegment, hover: NaiveDate) -> EventEdit {
    let range = derive_resize_range(segment, hover);
    let next = CalendarEvent {
        end_date: (range.end != range.start).then_some(range.end),
        ..segment.event.clone()
    };
    edit_for(segment, next)
}

/// Commit a timed resize released at `hover`. Same-day ends are clamped to
/// the start minute; an end at `24:00` is stored as `00:00` the next day.
pub fn apply_timed_resize(segment: &EventSegment, hover: PointerTarget) -> EventEdit {
    let range = derive_timed_resize_range(segment, hover);
    let (end_date, end_time) = wall_clock(range.end_date, range.end_minutes);
    let next = CalendarEvent {
        end_date: (end_date != range.start_date).then_some(end_date),
        end_time: Some(end_time),
        start_time: segment
            .event
            .start_time
            .clone()
            .or_else(|| Some(format_time(range.start_minutes))),
        ..segment.event.clone()
    };
    edit_for(segment, next)
}

/// Flip `completed` on a task event. Plain events cannot be completed.
pub fn toggle_completed(segment: &EventSegment) -> Option<EventEdit> {
    if !segment.event.task_event {
        return None;
    }
    let next = CalendarEvent {
        completed: !segment.event.completed,
        ..segment.event.clone()
    };
    Some(edit_for(segment, next))
}
