// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use time::Date;

/// An inclusive range of calendar dates.
///
/// Range loads, merges, and forced reloads are all scoped by a window.
/// Only records whose scheduled date falls inside the window are
/// materialized as calendar events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    /// The first date in the window.
    start: Date,
    /// The last date in the window (inclusive).
    end: Date,
}

impl DateWindow {
    /// Creates a new `DateWindow`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidDateWindow` if `end` precedes `start`.
    pub fn new(start: Date, end: Date) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvalidDateWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a window covering a single date.
    #[must_use]
    pub const fn single(date: Date) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    /// Returns the first date in the window.
    #[must_use]
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Returns the last date in the window (inclusive).
    #[must_use]
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Checks whether a date falls inside the window.
    #[must_use]
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }
}
