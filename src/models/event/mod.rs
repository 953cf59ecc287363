// Event module
// Calendar event model as supplied by the storage collaborator

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{LayoutError, Result};
use crate::utils::date::{format_date_key, to_minutes};

/// Which surface created an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCreator {
    Kanban,
    Calendar,
    Timeline,
}

/// A single calendar event.
///
/// Dates are date-only keys; times are `HH:MM` strings exactly as the user
/// typed them and are parsed lazily with [`to_minutes`]. The recurrence
/// fields are carried through untouched; the layout engine only ever sees
/// materialized single occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalendarEvent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub all_day: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    pub completed: bool,
    pub task_event: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<EventCreator>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub days_of_week: Vec<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_recur: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_recur: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rrule: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub skip_dates: Vec<NaiveDate>,
}

impl CalendarEvent {
    /// Create a dated all-day event
    pub fn new(title: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            all_day: true,
            date: Some(date),
            ..Self::default()
        }
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Events without a date cannot be placed on any grid.
    pub fn is_placeable(&self) -> bool {
        self.date.is_some()
    }

    /// Only dated events can be dragged to a new day.
    pub fn can_move(&self) -> bool {
        self.date.is_some()
    }

    pub fn start_minutes(&self) -> Option<u32> {
        self.start_time.as_deref().and_then(to_minutes)
    }

    pub fn end_minutes(&self) -> Option<u32> {
        self.end_time.as_deref().and_then(to_minutes)
    }

    pub fn is_cross_midnight(&self) -> bool {
        matches!((self.date, self.end_date), (Some(start), Some(end)) if start != end)
    }

    /// A timed event renders in the minute grid rather than the all-day strip.
    ///
    /// Both times must parse. A single-day event additionally needs a
    /// positive duration; a multi-day one is timed regardless of clock order.
    pub fn is_timed(&self) -> bool {
        if self.all_day || self.date.is_none() {
            return false;
        }
        let (Some(start), Some(end)) = (self.start_minutes(), self.end_minutes()) else {
            return false;
        };
        if self.is_cross_midnight() {
            return true;
        }
        end > start
    }

    /// Check if this event carries any recurrence data
    pub fn is_recurring(&self) -> bool {
        self.rrule.is_some() || !self.days_of_week.is_empty() || self.start_recur.is_some()
    }
}

/// Opaque handle to where an event lives in storage. The engine passes it
/// through unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLocation {
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_number: Option<u32>,
}

impl EventLocation {
    pub fn new(path: impl Into<String>, line_number: Option<u32>) -> Self {
        Self {
            path: path.into(),
            line_number,
        }
    }
}

/// An event paired with its storage location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableEvent {
    pub event: CalendarEvent,
    #[serde(default)]
    pub location: EventLocation,
}

impl EditableEvent {
    pub fn new(event: CalendarEvent, location: EventLocation) -> Self {
        Self { event, location }
    }
}

/// Stable identifier for an event within one load of the event list.
///
/// Uses the explicit id when present, otherwise derives one from the title,
/// date and list position.
pub fn event_id(event: &CalendarEvent, index: usize) -> String {
    if let Some(id) = &event.id {
        return id.clone();
    }
    let date = event
        .date
        .or(event.start_date)
        .map(format_date_key)
        .unwrap_or_else(|| "event".to_string());
    format!("{}-{}-{}", event.title, date, index)
}

pub fn normalize_event_color(color: Option<&str>) -> Option<String> {
    let trimmed = color?.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Normalize `#RGB` / `#RRGGBB` input to uppercase `#RRGGBB`.
pub fn normalize_hex_color(value: &str) -> Option<String> {
    let trimmed = value.trim();
    let digits = trimmed.strip_prefix('#')?;
    if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let upper = digits.to_ascii_uppercase();
    match upper.len() {
        3 => Some(format!(
            "#{}",
            upper.chars().flat_map(|c| [c, c]).collect::<String>()
        )),
        6 => Some(format!("#{}", upper)),
        _ => None,
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    all_day: bool,
    color: Option<String>,
    date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    start_time: Option<String>,
    end_time: Option<String>,
    task_event: bool,
    completed: bool,
    creator: Option<EventCreator>,
}

impl EventBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn all_day(mut self, all_day: bool) -> Self {
        self.all_day = all_day;
        self
    }

    /// Set the event color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Set start and end times (`HH:MM`)
    pub fn times(mut self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.start_time = Some(start.into());
        self.end_time = Some(end.into());
        self
    }

    pub fn task(mut self, completed: bool) -> Self {
        self.task_event = true;
        self.completed = completed;
        self
    }

    pub fn creator(mut self, creator: EventCreator) -> Self {
        self.creator = Some(creator);
        self
    }

    /// Build the event
    pub fn build(self) -> Result<CalendarEvent> {
        let title = self.title.unwrap_or_default();
        if title.trim().is_empty() {
            return Err(LayoutError::EmptyTitle);
        }
        for time in [&self.start_time, &self.end_time].into_iter().flatten() {
            if to_minutes(time).is_none() {
                return Err(LayoutError::InvalidTime(time.clone()));
            }
        }

        Ok(CalendarEvent {
            id: self.id,
            title,
            all_day: self.all_day,
            color: self.color.as_deref().and_then(normalize_hex_color),
            date: self.date,
            end_date: self.end_date,
            start_time: self.start_time,
            end_time: self.end_time,
            completed: self.task_event && self.completed,
            task_event: self.task_event,
            creator: self.creator,
            ..CalendarEvent::default()
        })
    }
}

/// What the create/edit form submits.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventDraft {
    pub title: String,
    pub date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub all_day: bool,
    pub task_event: bool,
    pub is_completed: bool,
    pub start_time: String,
    pub end_time: String,
    pub color: String,
}

impl EventDraft {
    fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(LayoutError::EmptyTitle);
        }
        if !self.all_day {
            let has_start = !self.start_time.trim().is_empty();
            let has_end = !self.end_time.trim().is_empty();
            if !has_start || !has_end {
                return Err(LayoutError::MissingTimes);
            }
        }
        Ok(())
    }

    fn apply_times(&self, event: &mut CalendarEvent) {
        if self.all_day {
            event.start_time = None;
            event.end_time = None;
        } else {
            event.start_time = Some(self.start_time.clone());
            event.end_time = Some(self.end_time.clone());
        }
    }

    /// Turn a create-form draft into a new event.
    pub fn into_event(self) -> Result<CalendarEvent> {
        self.validate()?;
        let end_date = self.end_date.filter(|end| Some(*end) != self.date);
        let mut event = CalendarEvent {
            title: self.title.clone(),
            all_day: self.all_day,
            date: self.date,
            end_date,
            task_event: self.task_event,
            completed: self.task_event && self.is_completed,
            color: normalize_hex_color(&self.color),
            ..CalendarEvent::default()
        };
        self.apply_times(&mut event);
        Ok(event)
    }

    /// Apply an edit-form draft on top of an existing event. The end date and
    /// recurrence fields of `existing` are kept.
    pub fn apply_to(&self, existing: &CalendarEvent) -> Result<CalendarEvent> {
        self.validate()?;
        let mut event = CalendarEvent {
            title: self.title.clone(),
            all_day: self.all_day,
            date: self.date.or(existing.date),
            task_event: self.task_event,
            completed: self.task_event && self.is_completed,
            color: normalize_hex_color(&self.color),
            ..existing.clone()
        };
        self.apply_times(&mut event);
        Ok(event)
    }
}
