// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use prep_board_domain::{DomainError, EventId, FieldError};
use prep_board_store::StoreError;

/// Errors surfaced by the scheduling engine.
///
/// No variant is fatal: the engine returns to `Idle` after every failure
/// so the board stays interactive, and nothing is retried silently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// A gesture was begun while another one was still pending.
    ///
    /// New gestures are refused rather than force-discarding the pending
    /// one, so a half-finished dialog is never silently thrown away.
    GestureInProgress,
    /// The addressed event is not in the visible set.
    EventNotFound(EventId),
    /// The operation requires a persisted record, but the event is a
    /// placeholder.
    NotPersisted(EventId),
    /// The draft failed the assignment contract; commit was refused
    /// before any store call.
    InvalidDraft(Vec<FieldError>),
    /// A domain rule was violated while projecting records.
    DomainViolation(DomainError),
    /// A range load failed. Prior visible events are retained.
    Fetch(StoreError),
    /// A create or update was rejected by the store. The placeholder was
    /// discarded and the original event restored.
    Commit(StoreError),
    /// A delete failed. The optimistic removal was reverted.
    Delete(StoreError),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::GestureInProgress => {
                write!(f, "Another scheduling gesture is already in progress")
            }
            Self::EventNotFound(id) => write!(f, "Calendar event '{id}' not found"),
            Self::NotPersisted(id) => {
                write!(f, "Calendar event '{id}' has no persisted schedule record")
            }
            Self::InvalidDraft(errors) => {
                write!(f, "Schedule draft is incomplete: ")?;
                for (index, error) in errors.iter().enumerate() {
                    if index > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{error}")?;
                }
                Ok(())
            }
            Self::DomainViolation(error) => write!(f, "Domain violation: {error}"),
            Self::Fetch(error) => write!(f, "Failed to load schedules: {error}"),
            Self::Commit(error) => write!(f, "Failed to save the schedule: {error}"),
            Self::Delete(error) => write!(f, "Failed to delete the schedule: {error}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<DomainError> for EngineError {
    fn from(error: DomainError) -> Self {
        Self::DomainViolation(error)
    }
}
