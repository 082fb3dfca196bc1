// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::saved_record;
use crate::{SurfaceEvent, status_color};
use prep_board_domain::{CalendarEvent, ScheduleStatus};
use serde_json::Value;

#[test]
fn test_every_status_has_a_distinct_color() {
    let statuses = [
        ScheduleStatus::Scheduled,
        ScheduleStatus::InProgress,
        ScheduleStatus::Completed,
        ScheduleStatus::Cancelled,
        ScheduleStatus::PendingReview,
        ScheduleStatus::OnHold,
    ];
    let mut colors: Vec<&'static str> = statuses.iter().map(|&s| status_color(s)).collect();
    colors.sort_unstable();
    colors.dedup();
    assert_eq!(colors.len(), statuses.len());
}

#[test]
fn test_surface_event_serializes_the_widget_shape() {
    let record = saved_record();
    let event = CalendarEvent::from_record(&record).expect("projection");
    let surface = SurfaceEvent::from_calendar(&event);

    let json: Value = serde_json::to_value(&surface).expect("serialize");

    assert_eq!(json["id"], "rec-42");
    assert_eq!(json["resource_id"], 1);
    assert_eq!(json["title"], "Sourdough Batch");
    assert_eq!(json["start"], "2024-01-10T10:00:00");
    assert_eq!(json["end"], "2024-01-10T12:00:00");
    assert_eq!(json["status"], "scheduled");
    assert_eq!(json["color"], "#3788d8");
    assert_eq!(json["pending"], false);
    assert_eq!(json["extended"]["recipe_id"], 7);
}

#[test]
fn test_unassigned_records_omit_the_resource_field() {
    let mut record = saved_record();
    record.resource_ids.clear();
    let event = CalendarEvent::from_record(&record).expect("projection");
    let surface = SurfaceEvent::from_calendar(&event);

    let json: Value = serde_json::to_value(&surface).expect("serialize");

    assert!(json.get("resource_id").is_none());
}
