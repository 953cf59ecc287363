//! Interaction state derivation.
//!
//! Pure transforms from the single in-progress [`Gesture`] to the preview
//! ranges the renderer draws. Nothing here keeps state between calls; the
//! host replaces the gesture on every pointer move and drops it on
//! pointer-up.

pub mod drag;
pub mod pointer;
pub mod resize;
pub mod selection;

pub use drag::{
    derive_drag_range, derive_timed_drag_range, segment_date_range, segment_time_range,
    shifted_date_range, shifted_timed_range, ShiftedTimedRange,
};
pub use pointer::{
    date_from_point, date_from_pointer_x, minutes_from_pointer, minutes_from_y, pointer_target,
    snap_minutes, GridRect,
};
pub use resize::{derive_resize_range, derive_timed_resize_range};
pub use selection::{
    derive_selection_range, normalize_time_range, normalize_time_selection, SLOT_MINUTES,
};

use crate::models::gesture::{DateRange, Gesture, PointerTarget, TimeRange};
use crate::models::layout::EventSegment;
use crate::utils::date::normalize_range;

impl Gesture {
    pub fn drag(segment: EventSegment, hover: PointerTarget) -> Self {
        Self::Dragging { segment, hover }
    }

    pub fn resize(segment: EventSegment, hover: PointerTarget) -> Self {
        Self::Resizing { segment, hover }
    }

    pub fn select(anchor: PointerTarget) -> Self {
        Self::Selecting {
            anchor,
            hover: anchor,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The segment being dragged or resized.
    pub fn active_segment(&self) -> Option<&EventSegment> {
        match self {
            Self::Dragging { segment, .. } | Self::Resizing { segment, .. } => Some(segment),
            Self::Idle | Self::Selecting { .. } => None,
        }
    }

    pub fn hover(&self) -> Option<PointerTarget> {
        match self {
            Self::Idle => None,
            Self::Dragging { hover, .. }
            | Self::Resizing { hover, .. }
            | Self::Selecting { hover, .. } => Some(*hover),
        }
    }

    /// Move the pointer. Idle gestures stay idle.
    pub fn hover_at(&mut self, target: PointerTarget) {
        match self {
            Self::Idle => {}
            Self::Dragging { hover, .. }
            | Self::Resizing { hover, .. }
            | Self::Selecting { hover, .. } => *hover = target,
        }
    }

    /// Day-granularity preview for the all-day strip and the month grid.
    pub fn date_range(&self) -> Option<DateRange> {
        match self {
            Self::Idle => None,
            Self::Dragging { segment, hover } => Some(derive_drag_range(segment, hover.date)),
            Self::Resizing { segment, hover } => Some(derive_resize_range(segment, hover.date)),
            Self::Selecting { anchor, hover } => Some(normalize_range(anchor.date, hover.date)),
        }
    }

    /// Minute-granularity preview for the timed grid.
    pub fn time_range(&self) -> Option<TimeRange> {
        self.time_range_with_slot(SLOT_MINUTES)
    }

    pub fn time_range_with_slot(&self, slot_minutes: u32) -> Option<TimeRange> {
        match self {
            Self::Idle => None,
            Self::Dragging { segment, hover } => Some(derive_timed_drag_range(segment, *hover)),
            Self::Resizing { segment, hover } => Some(derive_timed_resize_range(segment, *hover)),
            Self::Selecting { anchor, hover } => {
                Some(normalize_time_range(*anchor, *hover, slot_minutes))
            }
        }
    }
}
