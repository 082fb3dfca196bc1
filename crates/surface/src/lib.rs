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
#![allow(clippy::multiple_crate_versions)]

mod board;
mod error;
mod gesture;
mod view;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use board::ScheduleBoard;
pub use error::SurfaceError;
pub use gesture::Gesture;
pub use view::{SurfaceEvent, status_color};
