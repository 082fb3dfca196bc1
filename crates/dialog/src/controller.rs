// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use prep_board_domain::{
    DraftField, FieldError, PlaceholderEvent, RecipeOption, Recurrence, ResourceOption,
    ScheduleDraft, ScheduleRecord, validate_draft,
};
use time::{Date, Time};
use tracing::debug;

/// Controller for the assignment dialog: one schedule record's editable
/// fields, validated on every change and once more on submit.
///
/// The controller is a pure form state machine. It never talks to the
/// schedule store; a finished draft is handed to the engine's commit, and
/// closing without submit maps to the engine's discard. Validation
/// failures are surfaced inline per field and block submit.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignmentDialog {
    draft: ScheduleDraft,
    errors: Vec<FieldError>,
    recipes: Vec<RecipeOption>,
    resources: Vec<ResourceOption>,
    fallback_department: Option<i64>,
    recurrence_enabled: bool,
}

impl AssignmentDialog {
    /// Opens the dialog for a live placeholder (drop or move gesture).
    #[must_use]
    pub fn for_placeholder(
        placeholder: &PlaceholderEvent,
        recipes: Vec<RecipeOption>,
        resources: Vec<ResourceOption>,
        fallback_department: Option<i64>,
    ) -> Self {
        Self::open(
            ScheduleDraft::from_placeholder(placeholder),
            recipes,
            resources,
            fallback_department,
        )
    }

    /// Opens the dialog pre-populated from an existing record (the
    /// view/edit path; no placeholder exists).
    #[must_use]
    pub fn for_record(
        record: &ScheduleRecord,
        recipes: Vec<RecipeOption>,
        resources: Vec<ResourceOption>,
        fallback_department: Option<i64>,
    ) -> Self {
        Self::open(
            ScheduleDraft::from_record(record),
            recipes,
            resources,
            fallback_department,
        )
    }

    fn open(
        draft: ScheduleDraft,
        recipes: Vec<RecipeOption>,
        resources: Vec<ResourceOption>,
        fallback_department: Option<i64>,
    ) -> Self {
        let mut dialog = Self {
            recurrence_enabled: draft.recurrence.is_recurring(),
            draft,
            errors: Vec::new(),
            recipes,
            resources,
            fallback_department,
        };
        dialog.derive_department();
        dialog.revalidate();
        dialog
    }

    /// Selects a recipe, deriving its name and department.
    pub fn set_recipe(&mut self, recipe_id: i64) {
        self.draft.recipe_id = Some(recipe_id);
        if let Some(recipe) = self.recipes.iter().find(|recipe| recipe.id == recipe_id) {
            self.draft.recipe_name = Some(recipe.name.clone());
            if let Some(department) = recipe.department_id {
                self.draft.department_id = Some(department);
            }
        }
        self.derive_department();
        self.revalidate();
    }

    /// Sets the batch size quantity.
    pub fn set_batch_size(&mut self, batch_size: f64) {
        self.draft.batch_size = Some(batch_size);
        self.revalidate();
    }

    /// Sets the batch unit.
    pub fn set_batch_unit(&mut self, batch_unit: String) {
        self.draft.batch_unit = Some(batch_unit);
        self.revalidate();
    }

    /// Sets the production date.
    pub fn set_date(&mut self, date: Date) {
        self.draft.scheduled_date = Some(date);
        self.revalidate();
    }

    /// Sets the start time. The start/end ordering rule is re-checked.
    pub fn set_start_time(&mut self, start: Time) {
        self.draft.start_time = Some(start);
        self.revalidate();
    }

    /// Sets the end time. The start/end ordering rule is re-checked.
    pub fn set_end_time(&mut self, end: Time) {
        self.draft.end_time = Some(end);
        self.revalidate();
    }

    /// Replaces the assigned resources.
    pub fn set_resources(&mut self, resource_ids: Vec<i64>) {
        self.draft.resource_ids = resource_ids;
        self.revalidate();
    }

    /// Sets the free-form notes.
    pub fn set_notes(&mut self, notes: Option<String>) {
        self.draft.notes = notes;
        self.revalidate();
    }

    /// Enables or disables the recurrence block. Disabling clears the
    /// descriptor.
    pub fn enable_recurrence(&mut self, enabled: bool) {
        self.recurrence_enabled = enabled;
        if !enabled {
            self.draft.recurrence = Recurrence::None;
        }
        self.revalidate();
    }

    /// Sets the recurrence descriptor, enabling the block.
    pub fn set_recurrence(&mut self, recurrence: Recurrence) {
        self.recurrence_enabled = true;
        self.draft.recurrence = recurrence;
        self.revalidate();
    }

    /// Returns the outstanding validation errors.
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the error for one field, for inline display.
    #[must_use]
    pub fn error_for(&self, field: DraftField) -> Option<&FieldError> {
        self.errors.iter().find(|error| error.field == field)
    }

    /// Returns whether submit is currently allowed.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the draft as currently edited.
    #[must_use]
    pub const fn draft(&self) -> &ScheduleDraft {
        &self.draft
    }

    /// Returns whether submitting updates an existing record.
    #[must_use]
    pub const fn is_update(&self) -> bool {
        self.draft.is_update()
    }

    /// Returns the recipe options offered by the dialog.
    #[must_use]
    pub fn recipes(&self) -> &[RecipeOption] {
        &self.recipes
    }

    /// Returns the resource options offered by the dialog.
    #[must_use]
    pub fn resources(&self) -> &[ResourceOption] {
        &self.resources
    }

    /// Validates once more and yields the fully-typed draft.
    ///
    /// # Errors
    ///
    /// Returns the outstanding field errors if the draft is incomplete;
    /// the dialog keeps its state so the user can correct and retry.
    pub fn submit(&mut self) -> Result<ScheduleDraft, Vec<FieldError>> {
        self.revalidate();
        if self.errors.is_empty() {
            debug!(update = self.draft.is_update(), "assignment dialog submitted");
            Ok(self.draft.clone())
        } else {
            Err(self.errors.clone())
        }
    }

    /// Department falls back to the session's department when neither
    /// the draft nor the recipe supplies one.
    fn derive_department(&mut self) {
        if self.draft.department_id.is_none() {
            self.draft.department_id = self.fallback_department;
        }
    }

    fn revalidate(&mut self) {
        self.errors = validate_draft(&self.draft);
        if self.recurrence_enabled && !self.draft.recurrence.is_recurring() {
            self.errors.push(FieldError::new(
                DraftField::Recurrence,
                String::from("A recurrence type is required"),
            ));
        }
    }
}
