// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use prep_board_domain::{CalendarEvent, EventId, ScheduleRecord, ScheduleStatus, wire};
use serde::Serialize;
use time::PrimitiveDateTime;

/// Maps a lifecycle status to its board color.
#[must_use]
pub const fn status_color(status: ScheduleStatus) -> &'static str {
    match status {
        ScheduleStatus::Scheduled => "#3788d8",
        ScheduleStatus::InProgress => "#f39c12",
        ScheduleStatus::Completed => "#2ecc71",
        ScheduleStatus::Cancelled => "#95a5a6",
        ScheduleStatus::PendingReview => "#9b59b6",
        ScheduleStatus::OnHold => "#e74c3c",
    }
}

/// One event block, shaped for the rendering layer.
///
/// Serializes to the flat object calendar widgets consume: string id,
/// ISO-8601 local timestamps, a precomputed color, and the full record
/// tucked into `extended` for persisted events.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SurfaceEvent {
    /// String form of the event id (`rec-N` or `ph-N`).
    pub id: String,
    /// The resource column, when assigned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<i64>,
    /// Title shown on the block.
    pub title: String,
    /// Start timestamp.
    #[serde(with = "wire::iso_datetime")]
    pub start: PrimitiveDateTime,
    /// End timestamp.
    #[serde(with = "wire::iso_datetime")]
    pub end: PrimitiveDateTime,
    /// Lifecycle status.
    pub status: ScheduleStatus,
    /// Block color derived from the status.
    pub color: &'static str,
    /// Whether this block is an unconfirmed gesture placeholder.
    pub pending: bool,
    /// The backing record, absent for placeholders.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extended: Option<ScheduleRecord>,
}

impl SurfaceEvent {
    /// Shapes an engine event for rendering.
    #[must_use]
    pub fn from_calendar(event: &CalendarEvent) -> Self {
        let pending: bool = matches!(event.id, EventId::Placeholder(_));
        Self {
            id: event.id.to_string(),
            resource_id: event.resource_id,
            title: event.title.clone(),
            start: event.start,
            end: event.end,
            status: event.status,
            color: status_color(event.status),
            pending,
            extended: if pending { None } else { event.record.clone() },
        }
    }
}
