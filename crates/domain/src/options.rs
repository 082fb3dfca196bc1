// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::event::DEFAULT_DURATION;
use serde::{Deserialize, Serialize};
use time::Duration;

/// An assignable staff resource — one column on the scheduling grid.
///
/// Reference data only; there is no write path through the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceOption {
    /// The resource's canonical identifier.
    pub id: i64,
    /// The name shown on the resource column header.
    pub display_name: String,
}

/// Unit for a recipe's default production duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationUnit {
    /// Duration value is in minutes.
    Minutes,
    /// Duration value is in hours.
    Hours,
}

/// A schedulable recipe template from the palette.
///
/// Reference data only; refreshed per dialog open or on explicit cache
/// refresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeOption {
    /// The recipe's canonical identifier.
    pub id: i64,
    /// The recipe name, used as the event title.
    pub name: String,
    /// The department that owns this recipe, when known.
    pub department_id: Option<i64>,
    /// Default production duration value, when the recipe declares one.
    pub default_duration_value: Option<f64>,
    /// Unit for `default_duration_value`.
    pub default_duration_unit: Option<DurationUnit>,
}

/// Longest default duration accepted from the palette. Anything longer
/// is bad reference data, not a plannable production run.
const MAX_DEFAULT_DURATION_SECONDS: f64 = 7.0 * 24.0 * 3600.0;

impl RecipeOption {
    /// Returns the recipe's default production duration.
    ///
    /// Falls back to two hours when the recipe declares no duration, a
    /// value without a unit, or an unusable value (non-positive,
    /// non-finite, or longer than a week). The palette payload is
    /// untrusted input and must never panic the scheduling path.
    #[must_use]
    pub fn default_duration(&self) -> Duration {
        let (Some(value), Some(unit)) = (self.default_duration_value, self.default_duration_unit)
        else {
            return DEFAULT_DURATION;
        };
        let seconds: f64 = match unit {
            DurationUnit::Minutes => value * 60.0,
            DurationUnit::Hours => value * 3600.0,
        };
        if seconds.is_finite() && seconds > 0.0 && seconds <= MAX_DEFAULT_DURATION_SECONDS {
            Duration::seconds_f64(seconds)
        } else {
            DEFAULT_DURATION
        }
    }
}
