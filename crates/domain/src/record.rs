// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::event::{PlaceholderEvent, PlaceholderOrigin};
use crate::recurrence::Recurrence;
use crate::status::ScheduleStatus;
use serde::{Deserialize, Serialize};
use time::{Date, Time};

/// The authoritative backend record of one production task assignment.
///
/// Records are created through the assignment dialog, mutated by the
/// engine (time, resource, and status changes), and deleted via explicit
/// user action. Edits replace the record in place, keyed by `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    /// The record's canonical identifier, assigned by the backend.
    pub id: i64,
    /// The recipe being produced.
    pub recipe_id: i64,
    /// Recipe name, denormalized by the backend for display.
    pub recipe_name: String,
    /// The department this task belongs to.
    pub department_id: i64,
    /// The date production is scheduled for.
    #[serde(with = "crate::wire::iso_date")]
    pub scheduled_date: Date,
    /// Start time of day, when the backend recorded one.
    #[serde(with = "crate::wire::iso_time::option", default)]
    pub start_time: Option<Time>,
    /// End time of day, when the backend recorded one.
    #[serde(with = "crate::wire::iso_time::option", default)]
    pub end_time: Option<Time>,
    /// Assigned staff resources. May be empty for unassigned records.
    #[serde(default)]
    pub resource_ids: Vec<i64>,
    /// Lifecycle status.
    #[serde(default)]
    pub status: ScheduleStatus,
    /// Quantity to produce.
    pub batch_size: f64,
    /// Unit for `batch_size` (e.g. "kg", "trays").
    pub batch_unit: String,
    /// Free-form production notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Recurrence descriptor. Expansion happens backend-side.
    #[serde(default)]
    pub recurrence: Recurrence,
}

impl ScheduleRecord {
    /// Returns the primary assigned resource.
    ///
    /// A record with multiple resources projects onto its first resource
    /// only (primary-resource projection); the calendar never renders one
    /// record in several columns at once.
    #[must_use]
    pub fn primary_resource(&self) -> Option<i64> {
        self.resource_ids.first().copied()
    }
}

/// A draft of one schedule record, as assembled by the assignment dialog.
///
/// Fields are optional because the dialog edits them incrementally; the
/// draft validation contract decides when the draft is complete. A draft
/// with an `id` updates the existing record, one without creates a new
/// record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ScheduleDraft {
    /// Identifier of the record being edited, absent for new records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// The recipe being produced.
    pub recipe_id: Option<i64>,
    /// Recipe name, carried for display while the draft is open.
    pub recipe_name: Option<String>,
    /// The department this task belongs to.
    pub department_id: Option<i64>,
    /// The date production is scheduled for.
    #[serde(with = "crate::wire::iso_date::option", default)]
    pub scheduled_date: Option<Date>,
    /// Start time of day.
    #[serde(with = "crate::wire::iso_time::option", default)]
    pub start_time: Option<Time>,
    /// End time of day.
    #[serde(with = "crate::wire::iso_time::option", default)]
    pub end_time: Option<Time>,
    /// Quantity to produce.
    pub batch_size: Option<f64>,
    /// Unit for `batch_size`.
    pub batch_unit: Option<String>,
    /// Assigned staff resources.
    #[serde(default)]
    pub resource_ids: Vec<i64>,
    /// Free-form production notes.
    #[serde(default)]
    pub notes: Option<String>,
    /// Recurrence descriptor.
    #[serde(default)]
    pub recurrence: Recurrence,
}

impl ScheduleDraft {
    /// Seeds a draft from an existing record (the view/edit path).
    #[must_use]
    pub fn from_record(record: &ScheduleRecord) -> Self {
        Self {
            id: Some(record.id),
            recipe_id: Some(record.recipe_id),
            recipe_name: Some(record.recipe_name.clone()),
            department_id: Some(record.department_id),
            scheduled_date: Some(record.scheduled_date),
            start_time: record.start_time,
            end_time: record.end_time,
            batch_size: Some(record.batch_size),
            batch_unit: Some(record.batch_unit.clone()),
            resource_ids: record.resource_ids.clone(),
            notes: record.notes.clone(),
            recurrence: record.recurrence,
        }
    }

    /// Seeds a draft from a live placeholder.
    ///
    /// For an external drop the recipe fields come from the dropped
    /// palette option. For a move of an existing event the draft starts
    /// from that event's record with the proposed date, times, and
    /// resource applied on top; a move reassigns the record wholly to the
    /// target resource.
    #[must_use]
    pub fn from_placeholder(placeholder: &PlaceholderEvent) -> Self {
        let mut draft: Self = match &placeholder.origin {
            PlaceholderOrigin::Drop { recipe } => Self {
                recipe_id: Some(recipe.id),
                recipe_name: Some(recipe.name.clone()),
                department_id: recipe.department_id,
                ..Self::default()
            },
            PlaceholderOrigin::Move { original, .. } => original
                .record
                .as_ref()
                .map_or_else(Self::default, Self::from_record),
        };

        draft.scheduled_date = Some(placeholder.start.date());
        draft.start_time = Some(placeholder.start.time());
        draft.end_time = Some(placeholder.end.time());
        draft.resource_ids = placeholder.resource_id.map_or_else(Vec::new, |id| vec![id]);
        draft
    }

    /// Returns whether committing this draft updates an existing record.
    #[must_use]
    pub const fn is_update(&self) -> bool {
        self.id.is_some()
    }
}
