// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::record::ScheduleDraft;

/// The draft fields that validation can reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    /// The recipe selection.
    Recipe,
    /// The batch size quantity.
    BatchSize,
    /// The scheduled date.
    Date,
    /// The start time of day.
    StartTime,
    /// The end time of day.
    EndTime,
    /// The assigned resources.
    Resources,
    /// The recurrence block.
    Recurrence,
}

/// A field-level validation failure, surfaced inline in the dialog.
///
/// Validation errors are recovered locally; they block submit and never
/// reach the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The field that failed validation.
    pub field: DraftField,
    /// Human-readable message shown next to the field.
    pub message: String,
}

impl FieldError {
    /// Creates a new `FieldError`.
    #[must_use]
    pub const fn new(field: DraftField, message: String) -> Self {
        Self { field, message }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}: {}", self.field, self.message)
    }
}

/// Validates a schedule draft against the assignment contract.
///
/// Returns every outstanding failure; an empty vector means the draft is
/// complete and may be committed. Rules:
///
/// - recipe: required;
/// - batch size: required, finite, strictly positive;
/// - date: required;
/// - start/end time: both required, end strictly after start;
/// - resources: at least one required;
/// - recurrence: weekly and monthly patterns must be in range.
#[must_use]
pub fn validate_draft(draft: &ScheduleDraft) -> Vec<FieldError> {
    let mut errors: Vec<FieldError> = Vec::new();

    if draft.recipe_id.is_none() {
        errors.push(FieldError::new(
            DraftField::Recipe,
            String::from("A recipe is required"),
        ));
    }

    match draft.batch_size {
        None => errors.push(FieldError::new(
            DraftField::BatchSize,
            String::from("Batch size is required"),
        )),
        Some(size) if !size.is_finite() || size <= 0.0 => errors.push(FieldError::new(
            DraftField::BatchSize,
            String::from("Batch size must be greater than zero"),
        )),
        Some(_) => {}
    }

    if draft.scheduled_date.is_none() {
        errors.push(FieldError::new(
            DraftField::Date,
            String::from("A production date is required"),
        ));
    }

    if draft.start_time.is_none() {
        errors.push(FieldError::new(
            DraftField::StartTime,
            String::from("A start time is required"),
        ));
    }

    match (draft.start_time, draft.end_time) {
        (_, None) => errors.push(FieldError::new(
            DraftField::EndTime,
            String::from("An end time is required"),
        )),
        (Some(start), Some(end)) if end <= start => errors.push(FieldError::new(
            DraftField::EndTime,
            String::from("End time must be after the start time"),
        )),
        _ => {}
    }

    if draft.resource_ids.is_empty() {
        errors.push(FieldError::new(
            DraftField::Resources,
            String::from("At least one staff resource must be assigned"),
        ));
    }

    if let Err(error) = draft.recurrence.validate() {
        errors.push(FieldError::new(DraftField::Recurrence, error.to_string()));
    }

    errors
}
