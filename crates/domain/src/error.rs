// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur during domain validation and time derivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Schedule status string is not recognized.
    InvalidStatus(String),
    /// Weekly recurrence day-of-week is out of range.
    InvalidWeekday {
        /// The invalid day value (valid range is 0-6, Sunday-based).
        day: u8,
    },
    /// Monthly recurrence day-of-month is out of range.
    InvalidDayOfMonth {
        /// The invalid day value (valid range is 1-31).
        day: u8,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
    /// A date window's end precedes its start.
    InvalidDateWindow {
        /// The window start date.
        start: time::Date,
        /// The window end date.
        end: time::Date,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStatus(value) => write!(f, "Unknown schedule status: {value}"),
            Self::InvalidWeekday { day } => {
                write!(f, "Invalid day of week: {day}. Must be between 0 and 6")
            }
            Self::InvalidDayOfMonth { day } => {
                write!(f, "Invalid day of month: {day}. Must be between 1 and 31")
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
            Self::InvalidDateWindow { start, end } => {
                write!(f, "Invalid date window: end {end} precedes start {start}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
