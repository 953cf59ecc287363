//! Calendar event edits.
//! Pure transforms that turn a finished gesture into the `(next, previous)`
//! pair the storage collaborator persists, plus optimistic list updates
//! organized across focused submodules.

pub mod edits;
pub mod sync;

pub use edits::{
    apply_date_drop, apply_resize, apply_timed_drop, apply_timed_resize, move_event_by_days,
    toggle_completed,
};
pub use sync::{
    apply_optimistic_move, rollback_optimistic_move, update_event_entry, update_event_location,
};

use crate::models::event::EditableEvent;

/// A committed change: the event to write and the entry it replaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventEdit {
    pub next: EditableEvent,
    pub previous: EditableEvent,
}

impl EventEdit {
    pub fn new(next: EditableEvent, previous: EditableEvent) -> Self {
        Self { next, previous }
    }

    /// True when applying the edit would not change anything.
    pub fn is_noop(&self) -> bool {
        self.next == self.previous
    }
}
