// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::SurfaceError;
use crate::gesture::Gesture;
use crate::view::SurfaceEvent;
use prep_board_dialog::AssignmentDialog;
use prep_board_domain::{
    CalendarEvent, DateWindow, EventId, RecipeOption, ResourceOption, ScheduleRecord,
};
use prep_board_engine::{LoadMode, SchedulingEngine};
use prep_board_store::{
    RecipePalette, RecipePaletteCache, ResourceDirectory, ResourceDirectoryCache, ScheduleFilters,
    ScheduleStore,
};
use tracing::debug;

/// One user's board session: the scheduling engine plus the cached
/// option directories the assignment dialog needs.
///
/// The board owns every interaction the calendar host forwards. Gestures
/// come in as [`Gesture`] values; the ones that open the assignment
/// dialog hand back an [`AssignmentDialog`] seeded with the live option
/// lists.
#[derive(Debug)]
pub struct ScheduleBoard<S, D, P> {
    engine: SchedulingEngine<S>,
    resources: ResourceDirectoryCache<D>,
    recipes: RecipePaletteCache<P>,
    department: Option<i64>,
}

impl<S, D, P> ScheduleBoard<S, D, P>
where
    S: ScheduleStore,
    D: ResourceDirectory,
    P: RecipePalette,
{
    /// Creates a board scoped to `department` (or unscoped for `None`).
    #[must_use]
    pub fn new(store: S, directory: D, palette: P, department: Option<i64>) -> Self {
        let filters = ScheduleFilters {
            department,
            ..ScheduleFilters::default()
        };
        Self {
            engine: SchedulingEngine::with_filters(store, filters),
            resources: ResourceDirectoryCache::new(directory),
            recipes: RecipePaletteCache::new(palette),
            department,
        }
    }

    /// Restricts subsequent range loads beyond the department scope.
    pub fn set_filters(&mut self, filters: ScheduleFilters) {
        self.engine.set_filters(ScheduleFilters {
            department: self.department,
            ..filters
        });
    }

    /// Loads the visible date range and returns the shaped event blocks.
    ///
    /// # Errors
    ///
    /// Returns `SurfaceError::Engine` if the range load fails; the
    /// previously shaped events remain valid.
    pub async fn load(
        &mut self,
        window: DateWindow,
        mode: LoadMode,
    ) -> Result<Vec<SurfaceEvent>, SurfaceError> {
        let events: Vec<CalendarEvent> = self.engine.load_range(window, mode).await?;
        Ok(events.iter().map(SurfaceEvent::from_calendar).collect())
    }

    /// Returns the currently held events, shaped for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Vec<SurfaceEvent> {
        self.engine
            .events()
            .iter()
            .map(SurfaceEvent::from_calendar)
            .collect()
    }

    /// Routes one calendar gesture.
    ///
    /// Drop, move, and resize gestures start an engine gesture and open
    /// the assignment dialog; a click on a persisted event opens the
    /// dialog directly with no placeholder.
    ///
    /// # Errors
    ///
    /// Returns `SurfaceError::UnknownRecipe` or
    /// `SurfaceError::UnknownEvent` for dangling references,
    /// `SurfaceError::Store` if the option directories cannot be
    /// fetched, or `SurfaceError::Engine` if the engine refuses the
    /// gesture.
    pub async fn handle(&mut self, gesture: Gesture) -> Result<AssignmentDialog, SurfaceError> {
        debug!(?gesture, "calendar gesture received");
        // Options are fetched before the engine gesture begins so a
        // failed fetch never strands a live placeholder.
        let (recipes, resources) = self.dialog_options().await?;
        match gesture {
            Gesture::ExternalDrop {
                recipe_id,
                start,
                resource_id,
            } => {
                let recipe: RecipeOption = recipes
                    .iter()
                    .find(|option| option.id == recipe_id)
                    .cloned()
                    .ok_or(SurfaceError::UnknownRecipe(recipe_id))?;
                let placeholder = self
                    .engine
                    .begin_external_drop(&recipe, start, resource_id)?;
                Ok(AssignmentDialog::for_placeholder(
                    &placeholder,
                    recipes,
                    resources,
                    self.department,
                ))
            }
            Gesture::Move {
                event_id,
                new_start,
                new_resource_id,
            } => {
                let placeholder =
                    self.engine
                        .begin_move(event_id, new_start, new_resource_id, None)?;
                Ok(AssignmentDialog::for_placeholder(
                    &placeholder,
                    recipes,
                    resources,
                    self.department,
                ))
            }
            Gesture::Resize {
                event_id,
                new_start,
                new_end,
            } => {
                let placeholder =
                    self.engine
                        .begin_move(event_id, new_start, None, Some(new_end))?;
                Ok(AssignmentDialog::for_placeholder(
                    &placeholder,
                    recipes,
                    resources,
                    self.department,
                ))
            }
            Gesture::Click { event_id } => {
                let record: ScheduleRecord = self
                    .engine
                    .events()
                    .into_iter()
                    .find(|event| event.id == event_id)
                    .and_then(|event| event.record)
                    .ok_or(SurfaceError::UnknownEvent(event_id))?;
                Ok(AssignmentDialog::for_record(
                    &record,
                    recipes,
                    resources,
                    self.department,
                ))
            }
        }
    }

    /// Submits the dialog, committing its draft through the engine.
    ///
    /// # Errors
    ///
    /// Returns `SurfaceError::Validation` if the draft is still
    /// incomplete (the dialog stays open), or `SurfaceError::Engine` if
    /// the store rejects the commit.
    pub async fn submit(
        &mut self,
        dialog: &mut AssignmentDialog,
    ) -> Result<ScheduleRecord, SurfaceError> {
        let draft = dialog.submit().map_err(SurfaceError::Validation)?;
        let record: ScheduleRecord = self.engine.commit(&draft).await?;
        Ok(record)
    }

    /// Closes the dialog without saving, resolving any live placeholder.
    pub fn cancel(&mut self) {
        self.engine.discard();
    }

    /// Deletes a persisted event from the board and the store.
    ///
    /// # Errors
    ///
    /// Returns `SurfaceError::Engine` if the event is not deletable or
    /// the store call fails.
    pub async fn delete(&mut self, event_id: EventId) -> Result<(), SurfaceError> {
        self.engine.delete_event(event_id).await?;
        Ok(())
    }

    /// Returns the underlying engine, for hosts that need direct access.
    #[must_use]
    pub const fn engine(&self) -> &SchedulingEngine<S> {
        &self.engine
    }

    async fn dialog_options(
        &mut self,
    ) -> Result<(Vec<RecipeOption>, Vec<ResourceOption>), SurfaceError> {
        let recipes: Vec<RecipeOption> = self.recipes.options(self.department).await?.to_vec();
        let resources: Vec<ResourceOption> =
            self.resources.options(self.department).await?.to_vec();
        Ok((recipes, resources))
    }
}
