// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::StoreError;
use async_trait::async_trait;
use prep_board_domain::RecipeOption;
use tracing::debug;

/// Read-only palette of schedulable recipe templates.
#[async_trait]
pub trait RecipePalette: Send + Sync {
    /// Lists schedulable recipes, optionally scoped to a department.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list(&self, department: Option<i64>) -> Result<Vec<RecipeOption>, StoreError>;
}

/// Read-through cache over a [`RecipePalette`].
#[derive(Debug)]
pub struct RecipePaletteCache<P> {
    source: P,
    department: Option<i64>,
    entries: Option<Vec<RecipeOption>>,
}

impl<P: RecipePalette> RecipePaletteCache<P> {
    /// Creates an empty cache over `source`.
    #[must_use]
    pub const fn new(source: P) -> Self {
        Self {
            source,
            department: None,
            entries: None,
        }
    }

    /// Returns the cached recipes, fetching them on a miss or when the
    /// department scope changed.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying palette fetch fails.
    pub async fn options(&mut self, department: Option<i64>) -> Result<&[RecipeOption], StoreError> {
        if self.entries.is_none() || self.department != department {
            let fetched: Vec<RecipeOption> = self.source.list(department).await?;
            debug!(count = fetched.len(), ?department, "recipe palette refreshed");
            self.department = department;
            self.entries = Some(fetched);
        }
        Ok(self.entries.as_deref().unwrap_or_default())
    }

    /// Looks a recipe up among the cached entries.
    #[must_use]
    pub fn find(&self, recipe_id: i64) -> Option<&RecipeOption> {
        self.entries
            .as_deref()
            .unwrap_or_default()
            .iter()
            .find(|recipe| recipe.id == recipe_id)
    }

    /// Returns the cached recipes without fetching.
    #[must_use]
    pub fn cached(&self) -> &[RecipeOption] {
        self.entries.as_deref().unwrap_or_default()
    }

    /// Drops the cached entries; the next `options` call refetches.
    pub fn invalidate(&mut self) {
        self.entries = None;
    }

    /// Returns the underlying palette.
    #[must_use]
    pub const fn source(&self) -> &P {
        &self.source
    }
}
