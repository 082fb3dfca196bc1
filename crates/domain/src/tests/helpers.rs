// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    DurationUnit, RecipeOption, Recurrence, ScheduleDraft, ScheduleRecord, ScheduleStatus,
};
use time::macros::{date, time};

pub fn sourdough_recipe() -> RecipeOption {
    RecipeOption {
        id: 7,
        name: String::from("Sourdough Batch"),
        department_id: Some(3),
        default_duration_value: Some(2.0),
        default_duration_unit: Some(DurationUnit::Hours),
    }
}

pub fn test_record(id: i64) -> ScheduleRecord {
    ScheduleRecord {
        id,
        recipe_id: 7,
        recipe_name: String::from("Sourdough Batch"),
        department_id: 3,
        scheduled_date: date!(2024 - 01 - 10),
        start_time: Some(time!(10:00:00)),
        end_time: Some(time!(12:00:00)),
        resource_ids: vec![1],
        status: ScheduleStatus::Scheduled,
        batch_size: 24.0,
        batch_unit: String::from("loaves"),
        notes: None,
        recurrence: Recurrence::None,
    }
}

pub fn complete_draft() -> ScheduleDraft {
    ScheduleDraft {
        id: None,
        recipe_id: Some(7),
        recipe_name: Some(String::from("Sourdough Batch")),
        department_id: Some(3),
        scheduled_date: Some(date!(2024 - 01 - 10)),
        start_time: Some(time!(09:00:00)),
        end_time: Some(time!(11:00:00)),
        batch_size: Some(24.0),
        batch_unit: Some(String::from("loaves")),
        resource_ids: vec![1],
        notes: None,
        recurrence: Recurrence::None,
    }
}
