// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! In-memory store and directory implementations.
//!
//! These back the test suites and local development. The store behaves
//! like the real backend: it validates draft completeness, assigns ids,
//! and can be told to fail its next call to exercise rollback paths.

use crate::client::{ScheduleFilters, ScheduleStore};
use crate::directory::ResourceDirectory;
use crate::error::StoreError;
use crate::palette::RecipePalette;
use async_trait::async_trait;
use prep_board_domain::{
    DateWindow, RecipeOption, ResourceOption, ScheduleDraft, ScheduleRecord,
};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Per-operation call counters, for asserting which store calls a
/// scenario made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CallCounts {
    /// Number of `list` calls.
    pub list: usize,
    /// Number of `create` calls.
    pub create: usize,
    /// Number of `update` calls.
    pub update: usize,
    /// Number of `delete` calls.
    pub delete: usize,
}

#[derive(Debug, Default)]
struct Inner {
    records: BTreeMap<i64, ScheduleRecord>,
    next_id: i64,
    calls: CallCounts,
    fail_next: Option<StoreError>,
}

/// In-memory implementation of the [`ScheduleStore`] trait.
#[derive(Debug, Default)]
pub struct MemoryScheduleStore {
    inner: Mutex<Inner>,
}

impl MemoryScheduleStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store seeded with existing records.
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = ScheduleRecord>) -> Self {
        let records: BTreeMap<i64, ScheduleRecord> =
            records.into_iter().map(|record| (record.id, record)).collect();
        let next_id: i64 = records.keys().max().map_or(1, |max| max + 1);
        Self {
            inner: Mutex::new(Inner {
                records,
                next_id,
                calls: CallCounts::default(),
                fail_next: None,
            }),
        }
    }

    /// Returns the call counters accumulated so far.
    #[must_use]
    pub fn calls(&self) -> CallCounts {
        self.lock().calls
    }

    /// Makes the next store call fail with `error`.
    pub fn fail_next(&self, error: StoreError) {
        self.lock().fail_next = Some(error);
    }

    /// Returns a snapshot of all stored records.
    #[must_use]
    pub fn records(&self) -> Vec<ScheduleRecord> {
        self.lock().records.values().cloned().collect()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Materializes a record from a complete draft, rejecting incomplete
/// drafts the way the backend would (422).
fn record_from_draft(id: i64, draft: &ScheduleDraft) -> Result<ScheduleRecord, StoreError> {
    let incomplete = |field: &str| StoreError::Rejected {
        status: 422,
        message: format!("missing required field: {field}"),
    };
    Ok(ScheduleRecord {
        id,
        recipe_id: draft.recipe_id.ok_or_else(|| incomplete("recipe_id"))?,
        recipe_name: draft
            .recipe_name
            .clone()
            .ok_or_else(|| incomplete("recipe_name"))?,
        department_id: draft
            .department_id
            .ok_or_else(|| incomplete("department_id"))?,
        scheduled_date: draft
            .scheduled_date
            .ok_or_else(|| incomplete("scheduled_date"))?,
        start_time: draft.start_time,
        end_time: draft.end_time,
        resource_ids: draft.resource_ids.clone(),
        status: prep_board_domain::ScheduleStatus::Scheduled,
        batch_size: draft.batch_size.ok_or_else(|| incomplete("batch_size"))?,
        batch_unit: draft
            .batch_unit
            .clone()
            .unwrap_or_else(|| String::from("units")),
        notes: draft.notes.clone(),
        recurrence: draft.recurrence,
    })
}

fn matches_filters(record: &ScheduleRecord, filters: &ScheduleFilters) -> bool {
    filters
        .department
        .is_none_or(|department| record.department_id == department)
        && filters.status.is_none_or(|status| record.status == status)
        && filters.recipe.is_none_or(|recipe| record.recipe_id == recipe)
}

#[async_trait]
impl ScheduleStore for MemoryScheduleStore {
    async fn list(
        &self,
        window: DateWindow,
        filters: &ScheduleFilters,
    ) -> Result<Vec<ScheduleRecord>, StoreError> {
        let mut inner = self.lock();
        inner.calls.list += 1;
        if let Some(error) = inner.fail_next.take() {
            return Err(error);
        }
        Ok(inner
            .records
            .values()
            .filter(|record| window.contains(record.scheduled_date))
            .filter(|record| matches_filters(record, filters))
            .cloned()
            .collect())
    }

    async fn create(&self, draft: &ScheduleDraft) -> Result<ScheduleRecord, StoreError> {
        let mut inner = self.lock();
        inner.calls.create += 1;
        if let Some(error) = inner.fail_next.take() {
            return Err(error);
        }
        let id: i64 = inner.next_id;
        inner.next_id += 1;
        let record: ScheduleRecord = record_from_draft(id, draft)?;
        inner.records.insert(id, record.clone());
        Ok(record)
    }

    async fn update(&self, id: i64, draft: &ScheduleDraft) -> Result<ScheduleRecord, StoreError> {
        let mut inner = self.lock();
        inner.calls.update += 1;
        if let Some(error) = inner.fail_next.take() {
            return Err(error);
        }
        if !inner.records.contains_key(&id) {
            return Err(StoreError::RecordNotFound(id));
        }
        let record: ScheduleRecord = record_from_draft(id, draft)?;
        inner.records.insert(id, record.clone());
        Ok(record)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let mut inner = self.lock();
        inner.calls.delete += 1;
        if let Some(error) = inner.fail_next.take() {
            return Err(error);
        }
        if inner.records.remove(&id).is_none() {
            return Err(StoreError::RecordNotFound(id));
        }
        Ok(())
    }
}

/// In-memory implementation of the [`ResourceDirectory`] trait.
#[derive(Debug, Default)]
pub struct MemoryResourceDirectory {
    entries: Vec<ResourceOption>,
    fetches: AtomicUsize,
}

impl MemoryResourceDirectory {
    /// Creates a directory with a fixed entry list.
    #[must_use]
    pub fn new(entries: Vec<ResourceOption>) -> Self {
        Self {
            entries,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Returns how many times the directory was fetched.
    #[must_use]
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ResourceDirectory for MemoryResourceDirectory {
    async fn list(&self, _department: Option<i64>) -> Result<Vec<ResourceOption>, StoreError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        Ok(self.entries.clone())
    }
}

/// In-memory implementation of the [`RecipePalette`] trait.
#[derive(Debug, Default)]
pub struct MemoryRecipePalette {
    entries: Vec<RecipeOption>,
    fetches: AtomicUsize,
}

impl MemoryRecipePalette {
    /// Creates a palette with a fixed entry list.
    #[must_use]
    pub fn new(entries: Vec<RecipeOption>) -> Self {
        Self {
            entries,
            fetches: AtomicUsize::new(0),
        }
    }

    /// Returns how many times the palette was fetched.
    #[must_use]
    pub fn fetches(&self) -> usize {
        self.fetches.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl RecipePalette for MemoryRecipePalette {
    async fn list(&self, _department: Option<i64>) -> Result<Vec<RecipeOption>, StoreError> {
        self.fetches.fetch_add(1, Ordering::Relaxed);
        Ok(self.entries.clone())
    }
}
