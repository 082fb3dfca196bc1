// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Recurrence descriptor carried on a schedule record.
///
/// The engine only reads and writes the descriptor. Expanding a recurring
/// record into its individual occurrences is the backend's responsibility;
/// the client never materializes a series itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Recurrence {
    /// No recurrence; the record is a single occurrence.
    #[default]
    None,
    /// Repeats every day.
    Daily,
    /// Repeats weekly on a fixed day.
    Weekly {
        /// Day of week, Sunday-based (0 = Sunday, 6 = Saturday).
        day_of_week: u8,
    },
    /// Repeats monthly on a fixed day.
    Monthly {
        /// Day of month (1-31).
        day_of_month: u8,
    },
}

impl Recurrence {
    /// Validates the pattern value for weekly and monthly recurrences.
    ///
    /// # Errors
    ///
    /// Returns an error if a weekly day-of-week is outside 0-6 or a
    /// monthly day-of-month is outside 1-31.
    pub const fn validate(&self) -> Result<(), DomainError> {
        match self {
            Self::None | Self::Daily => Ok(()),
            Self::Weekly { day_of_week } => {
                if *day_of_week <= 6 {
                    Ok(())
                } else {
                    Err(DomainError::InvalidWeekday { day: *day_of_week })
                }
            }
            Self::Monthly { day_of_month } => {
                if *day_of_month >= 1 && *day_of_month <= 31 {
                    Ok(())
                } else {
                    Err(DomainError::InvalidDayOfMonth { day: *day_of_month })
                }
            }
        }
    }

    /// Returns whether this descriptor denotes a repeating record.
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        !matches!(self, Self::None)
    }
}
