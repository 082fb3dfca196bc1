// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use prep_board_domain::{
    DurationUnit, EventId, PlaceholderEvent, PlaceholderOrigin, RecipeOption, Recurrence,
    ResourceOption, ScheduleRecord, ScheduleStatus,
};
use time::macros::{date, datetime, time};

pub fn sourdough_recipe() -> RecipeOption {
    RecipeOption {
        id: 7,
        name: String::from("Sourdough Batch"),
        department_id: Some(3),
        default_duration_value: Some(2.0),
        default_duration_unit: Some(DurationUnit::Hours),
    }
}

pub fn rye_recipe() -> RecipeOption {
    RecipeOption {
        id: 9,
        name: String::from("Rye Loaf"),
        department_id: None,
        default_duration_value: None,
        default_duration_unit: None,
    }
}

pub fn recipes() -> Vec<RecipeOption> {
    vec![sourdough_recipe(), rye_recipe()]
}

pub fn bakers() -> Vec<ResourceOption> {
    vec![
        ResourceOption {
            id: 1,
            display_name: String::from("Baker One"),
        },
        ResourceOption {
            id: 2,
            display_name: String::from("Baker Two"),
        },
    ]
}

pub fn drop_placeholder() -> PlaceholderEvent {
    PlaceholderEvent {
        id: EventId::Placeholder(1),
        resource_id: Some(1),
        start: datetime!(2024-01-10 09:00),
        end: datetime!(2024-01-10 11:00),
        origin: PlaceholderOrigin::Drop {
            recipe: sourdough_recipe(),
        },
    }
}

pub fn saved_record() -> ScheduleRecord {
    ScheduleRecord {
        id: 42,
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
