// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::EngineError;
use crate::state::GestureState;
use prep_board_domain::{
    CalendarEvent, DateWindow, DomainError, EventId, PlaceholderEvent, PlaceholderOrigin,
    RecipeOption, ScheduleDraft, ScheduleRecord, validate_draft,
};
use prep_board_store::{ScheduleFilters, ScheduleStore};
use std::collections::BTreeMap;
use time::PrimitiveDateTime;
use tracing::{debug, info, warn};

/// How a range load reconciles fetched records with the held event set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMode {
    /// Same-id events are overwritten; everything else is retained. This
    /// is the default and avoids visual flicker when the visible range is
    /// a subset of previously loaded data.
    Merge,
    /// Events inside the fetched window are replaced wholesale. Used
    /// after a confirmed mutation so the board reflects the just-written
    /// truth rather than a stale optimistic copy.
    Replace,
}

/// The optimistic scheduling reconciliation engine.
///
/// Owns the in-memory set of calendar events, the placeholder lifecycle
/// for in-flight gestures, and all schedule store calls. Single-threaded
/// and gesture-driven: callers await each operation before issuing the
/// next gesture, and at most one placeholder is live at a time.
#[derive(Debug)]
pub struct SchedulingEngine<S> {
    store: S,
    filters: ScheduleFilters,
    events: BTreeMap<EventId, CalendarEvent>,
    gesture: GestureState,
    next_placeholder: u64,
}

impl<S: ScheduleStore> SchedulingEngine<S> {
    /// Creates an engine over a schedule store with no filters.
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_filters(store, ScheduleFilters::default())
    }

    /// Creates an engine with an initial filter set.
    #[must_use]
    pub fn with_filters(store: S, filters: ScheduleFilters) -> Self {
        Self {
            store,
            filters,
            events: BTreeMap::new(),
            gesture: GestureState::Idle,
            next_placeholder: 0,
        }
    }

    /// Returns the underlying store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Returns the active list filters.
    #[must_use]
    pub const fn filters(&self) -> &ScheduleFilters {
        &self.filters
    }

    /// Replaces the list filters. Takes effect on the next range load.
    pub const fn set_filters(&mut self, filters: ScheduleFilters) {
        self.filters = filters;
    }

    /// Returns the live placeholder, if a gesture is in flight.
    #[must_use]
    pub const fn live_placeholder(&self) -> Option<&PlaceholderEvent> {
        self.gesture.placeholder()
    }

    /// Returns the current gesture state.
    #[must_use]
    pub const fn gesture(&self) -> &GestureState {
        &self.gesture
    }

    /// Returns the visible event set, placeholder included, ordered by
    /// start then id.
    #[must_use]
    pub fn events(&self) -> Vec<CalendarEvent> {
        let mut events: Vec<CalendarEvent> = self.events.values().cloned().collect();
        if let Some(placeholder) = self.gesture.placeholder() {
            events.push(placeholder.to_calendar_event());
        }
        events.sort_by(|a, b| a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id)));
        events
    }

    /// Fetches the records overlapping `window` and reconciles them with
    /// the held event set.
    ///
    /// A merge never removes an event outside the requested window, so a
    /// response for a range the user has already navigated away from can
    /// only add events the next navigation would have fetched anyway.
    /// Loads cannot overlap: the engine is borrowed exclusively for the
    /// duration of the call.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::Fetch` if the list call fails; the prior
    /// visible events are retained untouched.
    pub async fn load_range(
        &mut self,
        window: DateWindow,
        mode: LoadMode,
    ) -> Result<Vec<CalendarEvent>, EngineError> {
        let records: Vec<ScheduleRecord> = self
            .store
            .list(window, &self.filters)
            .await
            .map_err(EngineError::Fetch)?;

        if mode == LoadMode::Replace {
            self.events
                .retain(|_, event| !window.contains(event.start.date()));
        }
        for record in &records {
            let event: CalendarEvent = CalendarEvent::from_record(record)?;
            self.events.insert(event.id, event);
        }
        debug!(count = records.len(), ?mode, "range load reconciled");
        Ok(self.events())
    }

    /// Begins an external-drop gesture: a palette recipe dropped onto a
    /// time/resource slot.
    ///
    /// The proposed end is the start plus the recipe's default duration
    /// (two hours when the recipe declares none). No store call is made
    /// until the draft is committed.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::GestureInProgress` if another gesture is
    /// pending.
    pub fn begin_external_drop(
        &mut self,
        recipe: &RecipeOption,
        start: PrimitiveDateTime,
        resource_id: i64,
    ) -> Result<PlaceholderEvent, EngineError> {
        self.ensure_idle()?;
        let end: PrimitiveDateTime = start
            .checked_add(recipe.default_duration())
            .ok_or_else(duration_overflow)?;
        let placeholder = PlaceholderEvent {
            id: EventId::Placeholder(self.allocate_placeholder_id()),
            resource_id: Some(resource_id),
            start,
            end,
            origin: PlaceholderOrigin::Drop {
                recipe: recipe.clone(),
            },
        };
        debug!(placeholder = %placeholder.id, recipe = recipe.id, "external drop began");
        self.gesture = GestureState::PlaceholderPending(placeholder.clone());
        Ok(placeholder)
    }

    /// Begins a move or resize gesture on an existing event.
    ///
    /// The original event leaves the visible set and is captured whole in
    /// the placeholder so a cancel restores it exactly. A drag preserves
    /// the original duration; a resize takes its end from the gesture.
    /// Passing `None` for `new_resource_id` keeps the original resource.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::GestureInProgress` if another gesture is
    /// pending, or `EngineError::EventNotFound` if the event is not
    /// visible.
    pub fn begin_move(
        &mut self,
        id: EventId,
        new_start: PrimitiveDateTime,
        new_resource_id: Option<i64>,
        resize_end: Option<PrimitiveDateTime>,
    ) -> Result<PlaceholderEvent, EngineError> {
        self.ensure_idle()?;
        let original: CalendarEvent = self
            .events
            .get(&id)
            .ok_or(EngineError::EventNotFound(id))?
            .clone();

        let resized: bool = resize_end.is_some();
        let end: PrimitiveDateTime = match resize_end {
            Some(end) if end > new_start => end,
            _ => new_start
                .checked_add(original.end - original.start)
                .ok_or_else(duration_overflow)?,
        };

        self.events.remove(&id);
        let placeholder = PlaceholderEvent {
            id: EventId::Placeholder(self.allocate_placeholder_id()),
            resource_id: new_resource_id.or(original.resource_id),
            start: new_start,
            end,
            origin: PlaceholderOrigin::Move { original, resized },
        };
        debug!(placeholder = %placeholder.id, event = %id, "move began");
        self.gesture = GestureState::PlaceholderPending(placeholder.clone());
        Ok(placeholder)
    }

    /// Commits a draft: create when it has no id, update otherwise.
    ///
    /// On success the placeholder is discarded, the authoritative record
    /// is upserted immediately, and the draft's date is force-reloaded so
    /// the board shows the just-written truth. On failure the placeholder
    /// is discarded, any moved original is restored, and the error is
    /// surfaced — the board never shows a moved event that was not
    /// actually persisted.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidDraft` without touching the network
    /// if the draft is incomplete, or `EngineError::Commit` if the store
    /// rejects it.
    pub async fn commit(&mut self, draft: &ScheduleDraft) -> Result<ScheduleRecord, EngineError> {
        let errors = validate_draft(draft);
        if !errors.is_empty() {
            return Err(EngineError::InvalidDraft(errors));
        }
        if matches!(self.gesture, GestureState::Committing(_)) {
            return Err(EngineError::GestureInProgress);
        }
        if let GestureState::PlaceholderPending(placeholder) = std::mem::take(&mut self.gesture) {
            self.gesture = GestureState::Committing(placeholder);
        }

        let result: Result<ScheduleRecord, _> = match draft.id {
            Some(id) => self.store.update(id, draft).await,
            None => self.store.create(draft).await,
        };
        let resolved: GestureState = std::mem::take(&mut self.gesture);

        match result {
            Ok(record) => {
                info!(record_id = record.id, update = draft.is_update(), "schedule committed");
                let event: CalendarEvent = CalendarEvent::from_record(&record)?;
                self.events.insert(event.id, event);
                let window: DateWindow = DateWindow::single(record.scheduled_date);
                if let Err(error) = self.load_range(window, LoadMode::Replace).await {
                    warn!(%error, "post-commit reload failed; optimistic copy retained");
                }
                Ok(record)
            }
            Err(error) => {
                if let GestureState::Committing(placeholder) = resolved {
                    self.restore_original(placeholder);
                }
                warn!(%error, "commit rejected; gesture rolled back");
                Err(EngineError::Commit(error))
            }
        }
    }

    /// Cancels the live placeholder, restoring any moved original.
    ///
    /// Idempotent: calling with no live placeholder is a no-op.
    pub fn discard(&mut self) {
        match std::mem::take(&mut self.gesture) {
            GestureState::Idle => {}
            GestureState::PlaceholderPending(placeholder)
            | GestureState::Committing(placeholder) => {
                debug!(placeholder = %placeholder.id, "gesture discarded");
                self.restore_original(placeholder);
            }
        }
    }

    /// Deletes a persisted event.
    ///
    /// The event leaves the visible set immediately for responsiveness;
    /// a forced reload of its date then reconciles any server-side
    /// cascade effects (e.g. recurrence expansion). A failed delete
    /// reverts the optimistic removal.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NotPersisted` for placeholder ids,
    /// `EngineError::EventNotFound` for unknown events, or
    /// `EngineError::Delete` if the store call fails.
    pub async fn delete_event(&mut self, id: EventId) -> Result<(), EngineError> {
        let EventId::Record(record_id) = id else {
            return Err(EngineError::NotPersisted(id));
        };
        let removed: CalendarEvent = self
            .events
            .remove(&id)
            .ok_or(EngineError::EventNotFound(id))?;

        match self.store.delete(record_id).await {
            Ok(()) => {
                info!(record_id, "schedule deleted");
                let window: DateWindow = DateWindow::single(removed.start.date());
                if let Err(error) = self.load_range(window, LoadMode::Replace).await {
                    warn!(%error, "post-delete reload failed");
                }
                Ok(())
            }
            Err(error) => {
                self.events.insert(id, removed);
                warn!(%error, record_id, "delete rejected; removal reverted");
                Err(EngineError::Delete(error))
            }
        }
    }

    const fn ensure_idle(&self) -> Result<(), EngineError> {
        if self.gesture.is_idle() {
            Ok(())
        } else {
            Err(EngineError::GestureInProgress)
        }
    }

    fn restore_original(&mut self, placeholder: PlaceholderEvent) {
        if let PlaceholderOrigin::Move { original, .. } = placeholder.origin {
            self.events.insert(original.id, original);
        }
    }

    fn allocate_placeholder_id(&mut self) -> u64 {
        self.next_placeholder += 1;
        self.next_placeholder
    }
}

fn duration_overflow() -> EngineError {
    EngineError::DomainViolation(DomainError::DateArithmeticOverflow {
        operation: String::from("computing the proposed event end"),
    })
}
