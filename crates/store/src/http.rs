// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP bindings for the schedule store and the option directories.
//!
//! Endpoints:
//!
//! - `GET /production-schedules?start_date=..&end_date=..` + filters
//! - `POST /production-schedules`
//! - `PUT /production-schedules/{id}`
//! - `DELETE /production-schedules/{id}`
//! - `GET /staff-resources`, `GET /recipes` (+ `department_id`)

use crate::client::{ScheduleFilters, ScheduleStore};
use crate::directory::ResourceDirectory;
use crate::error::StoreError;
use crate::palette::RecipePalette;
use async_trait::async_trait;
use prep_board_domain::{
    DateWindow, RecipeOption, ResourceOption, ScheduleDraft, ScheduleRecord,
};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;
use tracing::debug;

/// Error body shape the backend uses for rejections.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Maps a non-success response to a `StoreError`, preferring the
/// server-provided message when the body carries one.
async fn rejection(response: Response) -> StoreError {
    let status: StatusCode = response.status();
    let message: String = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.message)
        .unwrap_or_else(|| {
            status
                .canonical_reason()
                .unwrap_or("request failed")
                .to_owned()
        });
    StoreError::Rejected {
        status: status.as_u16(),
        message,
    }
}

/// Builds the query pairs for a range load.
pub(crate) fn list_query(
    window: DateWindow,
    filters: &ScheduleFilters,
) -> Vec<(&'static str, String)> {
    let mut query: Vec<(&'static str, String)> = vec![
        ("start_date", window.start().to_string()),
        ("end_date", window.end().to_string()),
    ];
    if let Some(department) = filters.department {
        query.push(("department_id", department.to_string()));
    }
    if let Some(status) = filters.status {
        query.push(("status", status.as_str().to_owned()));
    }
    if let Some(recipe) = filters.recipe {
        query.push(("recipe_id", recipe.to_string()));
    }
    query
}

/// HTTP implementation of the [`ScheduleStore`] trait.
#[derive(Debug, Clone)]
pub struct HttpScheduleStore {
    client: Client,
    base_url: String,
}

impl HttpScheduleStore {
    /// Creates a store client rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: trim_base(base_url.into()),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

pub(crate) fn trim_base(mut base_url: String) -> String {
    while base_url.ends_with('/') {
        base_url.pop();
    }
    base_url
}

#[async_trait]
impl ScheduleStore for HttpScheduleStore {
    async fn list(
        &self,
        window: DateWindow,
        filters: &ScheduleFilters,
    ) -> Result<Vec<ScheduleRecord>, StoreError> {
        let response: Response = self
            .client
            .get(self.endpoint("/production-schedules"))
            .query(&list_query(window, filters))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        let records: Vec<ScheduleRecord> = response.json().await?;
        debug!(count = records.len(), "production schedules fetched");
        Ok(records)
    }

    async fn create(&self, draft: &ScheduleDraft) -> Result<ScheduleRecord, StoreError> {
        let response: Response = self
            .client
            .post(self.endpoint("/production-schedules"))
            .json(draft)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        Ok(response.json().await?)
    }

    async fn update(&self, id: i64, draft: &ScheduleDraft) -> Result<ScheduleRecord, StoreError> {
        let response: Response = self
            .client
            .put(self.endpoint(&format!("/production-schedules/{id}")))
            .json(draft)
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::RecordNotFound(id));
        }
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        Ok(response.json().await?)
    }

    async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let response: Response = self
            .client
            .delete(self.endpoint(&format!("/production-schedules/{id}")))
            .send()
            .await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(StoreError::RecordNotFound(id));
        }
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        Ok(())
    }
}

/// HTTP implementation of the [`ResourceDirectory`] trait.
#[derive(Debug, Clone)]
pub struct HttpResourceDirectory {
    client: Client,
    base_url: String,
}

impl HttpResourceDirectory {
    /// Creates a directory client rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: trim_base(base_url.into()),
        }
    }
}

#[async_trait]
impl ResourceDirectory for HttpResourceDirectory {
    async fn list(&self, department: Option<i64>) -> Result<Vec<ResourceOption>, StoreError> {
        let mut request = self
            .client
            .get(format!("{}/staff-resources", self.base_url));
        if let Some(department) = department {
            request = request.query(&[("department_id", department.to_string())]);
        }
        let response: Response = request.send().await?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        Ok(response.json().await?)
    }
}

/// HTTP implementation of the [`RecipePalette`] trait.
#[derive(Debug, Clone)]
pub struct HttpRecipePalette {
    client: Client,
    base_url: String,
}

impl HttpRecipePalette {
    /// Creates a palette client rooted at `base_url`.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: trim_base(base_url.into()),
        }
    }
}

#[async_trait]
impl RecipePalette for HttpRecipePalette {
    async fn list(&self, department: Option<i64>) -> Result<Vec<RecipeOption>, StoreError> {
        let mut request = self.client.get(format!("{}/recipes", self.base_url));
        if let Some(department) = department {
            request = request.query(&[("department_id", department.to_string())]);
        }
        let response: Response = request.send().await?;
        if !response.status().is_success() {
            return Err(rejection(response).await);
        }
        Ok(response.json().await?)
    }
}
