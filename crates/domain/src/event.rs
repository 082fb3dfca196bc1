// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::options::RecipeOption;
use crate::record::ScheduleRecord;
use crate::status::ScheduleStatus;
use time::macros::time;
use time::{Date, Duration, PrimitiveDateTime, Time};

/// Default start of day for records that carry no start time.
pub const DEFAULT_START_TIME: Time = time!(09:00);

/// Default production duration for records and recipes that declare none,
/// and the correction applied when a record's end does not follow its start.
pub const DEFAULT_DURATION: Duration = Duration::hours(2);

/// Identifier of one calendar event.
///
/// Persisted events mirror their schedule record's id; placeholders get a
/// synthetic id that can never collide with a record id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventId {
    /// Event backed by a persisted schedule record.
    Record(i64),
    /// Transient placeholder for an in-flight gesture.
    Placeholder(u64),
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Record(id) => write!(f, "rec-{id}"),
            Self::Placeholder(id) => write!(f, "ph-{id}"),
        }
    }
}

/// Derives concrete start and end timestamps for a scheduled date.
///
/// The rule is a deterministic contract, not a display nicety:
///
/// - date + recorded time-of-day combine directly;
/// - a missing start time defaults to 09:00;
/// - a missing end time becomes start + 2 h;
/// - an end at or before the start is corrected to start + 2 h.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if adding the default
/// duration overflows the date range.
pub fn derive_times(
    date: Date,
    start_time: Option<Time>,
    end_time: Option<Time>,
) -> Result<(PrimitiveDateTime, PrimitiveDateTime), DomainError> {
    let start: PrimitiveDateTime = date.with_time(start_time.unwrap_or(DEFAULT_START_TIME));
    let end: PrimitiveDateTime = match end_time {
        Some(end_time) => date.with_time(end_time),
        None => start
            .checked_add(DEFAULT_DURATION)
            .ok_or_else(overflow_error)?,
    };
    if end <= start {
        return start
            .checked_add(DEFAULT_DURATION)
            .map(|corrected| (start, corrected))
            .ok_or_else(overflow_error);
    }
    Ok((start, end))
}

fn overflow_error() -> DomainError {
    DomainError::DateArithmeticOverflow {
        operation: String::from("applying the default production duration"),
    }
}

/// The engine's projection of one schedule record (or one in-flight
/// gesture) onto the time/resource grid.
///
/// Every non-placeholder event corresponds to exactly one schedule record
/// in the currently fetched date window.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarEvent {
    /// Event identifier; mirrors the record id for persisted events.
    pub id: EventId,
    /// The resource column this event renders in. `None` for records the
    /// backend holds unassigned.
    pub resource_id: Option<i64>,
    /// Title shown on the event block.
    pub title: String,
    /// Derived start timestamp.
    pub start: PrimitiveDateTime,
    /// Derived end timestamp.
    pub end: PrimitiveDateTime,
    /// Lifecycle status, used for style hints.
    pub status: ScheduleStatus,
    /// Back-reference to the full record payload. `None` only for
    /// placeholder projections.
    pub record: Option<ScheduleRecord>,
}

impl CalendarEvent {
    /// Projects a schedule record onto the calendar grid.
    ///
    /// Uses the primary-resource projection: a record with multiple
    /// assigned resources yields one event pinned to its first resource.
    ///
    /// # Errors
    ///
    /// Returns an error if time derivation overflows.
    pub fn from_record(record: &ScheduleRecord) -> Result<Self, DomainError> {
        let (start, end) = derive_times(
            record.scheduled_date,
            record.start_time,
            record.end_time,
        )?;
        Ok(Self {
            id: EventId::Record(record.id),
            resource_id: record.primary_resource(),
            title: record.recipe_name.clone(),
            start,
            end,
            status: record.status,
            record: Some(record.clone()),
        })
    }

    /// Returns the record id for persisted events.
    #[must_use]
    pub const fn record_id(&self) -> Option<i64> {
        match self.id {
            EventId::Record(id) => Some(id),
            EventId::Placeholder(_) => None,
        }
    }
}

/// What a placeholder stands in for.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaceholderOrigin {
    /// A palette recipe dropped onto an empty slot.
    Drop {
        /// The dropped recipe option.
        recipe: RecipeOption,
    },
    /// An existing event dragged or resized.
    Move {
        /// The original event, captured whole so the move can be undone.
        original: CalendarEvent,
        /// Whether the gesture was a resize (end taken from the gesture)
        /// rather than a drag (original duration preserved).
        resized: bool,
    },
}

/// A transient, unpersisted event representing a gesture awaiting
/// confirmation.
///
/// At most one placeholder is live at any instant. While it exists the
/// assignment dialog is open; closing the dialog by any path resolves the
/// placeholder, never abandons it.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceholderEvent {
    /// Synthetic identifier (`EventId::Placeholder`).
    pub id: EventId,
    /// Proposed resource. `None` when a move originated from an
    /// unassigned record.
    pub resource_id: Option<i64>,
    /// Proposed start.
    pub start: PrimitiveDateTime,
    /// Proposed end.
    pub end: PrimitiveDateTime,
    /// The gesture this placeholder stands in for.
    pub origin: PlaceholderOrigin,
}

impl PlaceholderEvent {
    /// Title to render while the gesture is pending.
    #[must_use]
    pub fn title(&self) -> &str {
        match &self.origin {
            PlaceholderOrigin::Drop { recipe } => &recipe.name,
            PlaceholderOrigin::Move { original, .. } => &original.title,
        }
    }

    /// Returns the original event for move gestures.
    #[must_use]
    pub const fn original(&self) -> Option<&CalendarEvent> {
        match &self.origin {
            PlaceholderOrigin::Move { original, .. } => Some(original),
            PlaceholderOrigin::Drop { .. } => None,
        }
    }

    /// Projects this placeholder as a calendar event for rendering.
    #[must_use]
    pub fn to_calendar_event(&self) -> CalendarEvent {
        CalendarEvent {
            id: self.id,
            resource_id: self.resource_id,
            title: self.title().to_owned(),
            start: self.start,
            end: self.end,
            status: ScheduleStatus::Scheduled,
            record: self.original().and_then(|original| original.record.clone()),
        }
    }
}
