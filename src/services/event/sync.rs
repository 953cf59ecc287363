// Optimistic list updates
// Applied to the in-memory event list before storage confirms a write, and
// reverted if the write fails. Entries are matched by location.

use super::EventEdit;
use crate::models::event::{CalendarEvent, EditableEvent, EventLocation};

/// Re-point every entry stored at `previous` to `next`.
pub fn update_event_location(
    events: &[EditableEvent],
    previous: &EventLocation,
    next: &EventLocation,
) -> Vec<EditableEvent> {
    events
        .iter()
        .map(|entry| {
            if &entry.location == previous {
                EditableEvent::new(entry.event.clone(), next.clone())
            } else {
                entry.clone()
            }
        })
        .collect()
}

/// Replace every entry stored at `previous` or `next` with `updated` at `next`.
pub fn update_event_entry(
    events: &[EditableEvent],
    previous: &EventLocation,
    next: &EventLocation,
    updated: &CalendarEvent,
) -> Vec<EditableEvent> {
    events
        .iter()
        .map(|entry| {
            if &entry.location == previous || &entry.location == next {
                EditableEvent::new(updated.clone(), next.clone())
            } else {
                entry.clone()
            }
        })
        .collect()
}

/// Show `edit.next` in place of `edit.previous` before the write lands.
pub fn apply_optimistic_move(events: &[EditableEvent], edit: &EventEdit) -> Vec<EditableEvent> {
    let location = &edit.previous.location;
    update_event_entry(events, location, location, &edit.next.event)
}

/// Undo [`apply_optimistic_move`]. `updated_location` is where storage said
/// the event lives now, which can differ from where it started.
pub fn rollback_optimistic_move(
    events: &[EditableEvent],
    previous: &EditableEvent,
    updated_location: &EventLocation,
) -> Vec<EditableEvent> {
    let relocated;
    let events = if updated_location != &previous.location {
        relocated = update_event_location(events, updated_location, &previous.location);
        relocated.as_slice()
    } else {
        events
    };
    update_event_entry(events, &previous.location, &previous.location, &previous.event)
}
