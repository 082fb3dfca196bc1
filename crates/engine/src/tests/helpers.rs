// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::SchedulingEngine;
use prep_board_domain::{
    DateWindow, DurationUnit, RecipeOption, Recurrence, ScheduleRecord, ScheduleStatus,
};
use prep_board_store::MemoryScheduleStore;
use time::macros::{date, time};
use time::{Date, Time};

pub fn sourdough_recipe() -> RecipeOption {
    RecipeOption {
        id: 7,
        name: String::from("Sourdough Batch"),
        department_id: Some(3),
        default_duration_value: Some(2.0),
        default_duration_unit: Some(DurationUnit::Hours),
    }
}

pub fn record_at(id: i64, scheduled_date: Date, start: Time, end: Time) -> ScheduleRecord {
    ScheduleRecord {
        id,
        recipe_id: 7,
        recipe_name: String::from("Sourdough Batch"),
        department_id: 3,
        scheduled_date,
        start_time: Some(start),
        end_time: Some(end),
        resource_ids: vec![1],
        status: ScheduleStatus::Scheduled,
        batch_size: 24.0,
        batch_unit: String::from("loaves"),
        notes: None,
        recurrence: Recurrence::None,
    }
}

pub fn engine_with(
    records: impl IntoIterator<Item = ScheduleRecord>,
) -> SchedulingEngine<MemoryScheduleStore> {
    SchedulingEngine::new(MemoryScheduleStore::with_records(records))
}

pub fn january_window() -> DateWindow {
    DateWindow::new(date!(2024 - 01 - 08), date!(2024 - 01 - 14)).unwrap()
}
