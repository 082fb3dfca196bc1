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

mod client;
mod directory;
mod error;
mod http;
mod memory;
mod palette;

#[cfg(test)]
mod tests;

// Re-export public types and functions
pub use client::{ScheduleFilters, ScheduleStore};
pub use directory::{ResourceDirectory, ResourceDirectoryCache};
pub use error::StoreError;
pub use http::{HttpRecipePalette, HttpResourceDirectory, HttpScheduleStore};
pub use memory::{CallCounts, MemoryRecipePalette, MemoryResourceDirectory, MemoryScheduleStore};
pub use palette::{RecipePalette, RecipePaletteCache};
