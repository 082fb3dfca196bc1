// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle status of a production schedule record.
///
/// The status taxonomy is owned by the backend store; the engine reads and
/// writes it but never invents new values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    /// Planned but not started. Initial state for new records.
    #[default]
    Scheduled,
    /// Production is underway.
    InProgress,
    /// Production finished.
    Completed,
    /// Task was cancelled before completion.
    Cancelled,
    /// Awaiting supervisor review.
    PendingReview,
    /// Paused pending ingredients, staff, or equipment.
    OnHold,
}

impl FromStr for ScheduleStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(Self::Scheduled),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            "pending_review" => Ok(Self::PendingReview),
            "on_hold" => Ok(Self::OnHold),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ScheduleStatus {
    /// Converts this status to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::PendingReview => "pending_review",
            Self::OnHold => "on_hold",
        }
    }

    /// Returns whether the record has reached a terminal state.
    ///
    /// Terminal records are still rendered but no further status
    /// transitions are expected from the backend.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}
