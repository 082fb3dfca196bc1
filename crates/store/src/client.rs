// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use async_trait::async_trait;
use prep_board_domain::{DateWindow, ScheduleDraft, ScheduleRecord, ScheduleStatus};
use serde::{Deserialize, Serialize};

/// Optional filters applied to range loads.
///
/// Every list call carries the same filter set the board UI exposes:
/// department scope, a status dropdown, and a recipe filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScheduleFilters {
    /// Restrict to one department.
    pub department: Option<i64>,
    /// Restrict to one lifecycle status.
    pub status: Option<ScheduleStatus>,
    /// Restrict to one recipe.
    pub recipe: Option<i64>,
}

/// CRUD façade over the remote production-schedule resource.
///
/// All durable state lives behind this trait; the engine holds no
/// persistence of its own. Errors surface the server-provided message
/// when present.
#[async_trait]
pub trait ScheduleStore: Send + Sync {
    /// Lists the records whose scheduled date falls inside `window`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    async fn list(
        &self,
        window: DateWindow,
        filters: &ScheduleFilters,
    ) -> Result<Vec<ScheduleRecord>, StoreError>;

    /// Creates a new schedule record from a complete draft.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the draft or the request
    /// fails.
    async fn create(&self, draft: &ScheduleDraft) -> Result<ScheduleRecord, StoreError>;

    /// Replaces the record identified by `id` with the draft's fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist, the store rejects
    /// the draft, or the request fails.
    async fn update(&self, id: i64, draft: &ScheduleDraft) -> Result<ScheduleRecord, StoreError>;

    /// Deletes the record identified by `id`.
    ///
    /// # Errors
    ///
    /// Returns an error if the record does not exist or the request
    /// fails.
    async fn delete(&self, id: i64) -> Result<(), StoreError>;
}
