// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod event;
mod options;
mod record;
mod recurrence;
mod status;
mod validation;
mod window;
pub mod wire;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use error::DomainError;
pub use event::{
    CalendarEvent, DEFAULT_DURATION, DEFAULT_START_TIME, EventId, PlaceholderEvent,
    PlaceholderOrigin, derive_times,
};
pub use options::{DurationUnit, RecipeOption, ResourceOption};
pub use record::{ScheduleDraft, ScheduleRecord};
pub use recurrence::Recurrence;
pub use status::ScheduleStatus;
pub use validation::{DraftField, FieldError, validate_draft};
pub use window::DateWindow;
