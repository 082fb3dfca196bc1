// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use async_trait::async_trait;
use prep_board_domain::ResourceOption;
use tracing::debug;

/// Read-only directory of assignable staff resources.
#[async_trait]
pub trait ResourceDirectory: Send + Sync {
    /// Lists assignable resources, optionally scoped to a department.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list(&self, department: Option<i64>) -> Result<Vec<ResourceOption>, StoreError>;
}

/// Read-through cache over a [`ResourceDirectory`].
///
/// Entries are fetched on first use and reused until the cache is
/// invalidated or queried for a different department scope. The cache is
/// refreshed per dialog open, not per keystroke.
#[derive(Debug)]
pub struct ResourceDirectoryCache<D> {
    source: D,
    department: Option<i64>,
    entries: Option<Vec<ResourceOption>>,
}

impl<D: ResourceDirectory> ResourceDirectoryCache<D> {
    /// Creates an empty cache over `source`.
    #[must_use]
    pub const fn new(source: D) -> Self {
        Self {
            source,
            department: None,
            entries: None,
        }
    }

    /// Returns the cached options, fetching them on a miss or when the
    /// department scope changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying directory fetch fails; the
    /// previously cached entries are kept in that case.
    pub async fn options(
        &mut self,
        department: Option<i64>,
    ) -> Result<&[ResourceOption], StoreError> {
        if self.entries.is_none() || self.department != department {
            let fetched: Vec<ResourceOption> = self.source.list(department).await?;
            debug!(count = fetched.len(), ?department, "resource directory refreshed");
            self.department = department;
            self.entries = Some(fetched);
        }
        Ok(self.entries.as_deref().unwrap_or_default())
    }

    /// Returns the cached options without fetching.
    #[must_use]
    pub fn cached(&self) -> &[ResourceOption] {
        self.entries.as_deref().unwrap_or_default()
    }

    /// Drops the cached entries; the next `options` call refetches.
    pub fn invalidate(&mut self) {
        self.entries = None;
    }

    /// Returns the underlying directory.
    #[must_use]
    pub const fn source(&self) -> &D {
        &self.source
    }
}
