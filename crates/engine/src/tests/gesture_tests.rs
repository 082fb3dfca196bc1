// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{engine_with, january_window, record_at, sourdough_recipe};
use crate::{EngineError, LoadMode};
use prep_board_domain::{CalendarEvent, EventId, ScheduleDraft};
use prep_board_store::StoreError;
use time::macros::{date, datetime, time};

#[tokio::test]
async fn test_external_drop_proposes_default_duration_slot() {
    // Scenario A: recipe R (default 2h) dropped at 09:00 on resource S1.
    let mut engine = engine_with([]);

    let placeholder = engine
        .begin_external_drop(&sourdough_recipe(), datetime!(2024-01-10 09:00:00), 1)
        .unwrap();

    assert_eq!(placeholder.start, datetime!(2024-01-10 09:00:00));
    assert_eq!(placeholder.end, datetime!(2024-01-10 11:00:00));
    assert_eq!(placeholder.resource_id, Some(1));
    assert!(engine.live_placeholder().is_some());
    assert_eq!(engine.store().calls().create, 0);
}

#[tokio::test]
async fn test_confirmed_drop_creates_exactly_one_event() {
    // Scenario A, confirmation half.
    let mut engine = engine_with([]);
    let placeholder = engine
        .begin_external_drop(&sourdough_recipe(), datetime!(2024-01-10 09:00:00), 1)
        .unwrap();

    let mut draft = ScheduleDraft::from_placeholder(&placeholder);
    draft.batch_size = Some(24.0);
    draft.batch_unit = Some(String::from("loaves"));

    let record = engine.commit(&draft).await.unwrap();

    assert_eq!(engine.store().calls().create, 1);
    assert_eq!(engine.store().calls().update, 0);
    assert!(engine.live_placeholder().is_none());

    let events = engine.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, EventId::Record(record.id));
    assert_eq!(events[0].title, "Sourdough Batch");
    assert_eq!(events[0].start, datetime!(2024-01-10 09:00:00));
    assert_eq!(events[0].end, datetime!(2024-01-10 11:00:00));
}

#[tokio::test]
async fn test_second_gesture_is_refused_while_one_is_pending() {
    let mut engine = engine_with([record_at(
        1,
        date!(2024 - 01 - 10),
        time!(10:00:00),
        time!(12:00:00),
    )]);
    engine.load_range(january_window(), LoadMode::Merge).await.unwrap();

    engine
        .begin_external_drop(&sourdough_recipe(), datetime!(2024-01-10 09:00:00), 1)
        .unwrap();

    let second = engine.begin_move(
        EventId::Record(1),
        datetime!(2024-01-11 10:00:00),
        Some(2),
        None,
    );
    assert_eq!(second, Err(EngineError::GestureInProgress));

    // The refused gesture must not have disturbed the visible set.
    assert_eq!(engine.events().len(), 2);
}

#[tokio::test]
async fn test_move_then_discard_restores_original_exactly() {
    // Scenario B: E{10:00-12:00, S1} dragged to 14:00 on S2, then cancelled.
    let mut engine = engine_with([record_at(
        1,
        date!(2024 - 01 - 10),
        time!(10:00:00),
        time!(12:00:00),
    )]);
    engine.load_range(january_window(), LoadMode::Merge).await.unwrap();
    let before: Vec<CalendarEvent> = engine.events();
    let calls_before = engine.store().calls();

    let placeholder = engine
        .begin_move(EventId::Record(1), datetime!(2024-01-10 14:00:00), Some(2), None)
        .unwrap();

    // The placeholder carries the proposal and the original for undo.
    assert_eq!(placeholder.start, datetime!(2024-01-10 14:00:00));
    assert_eq!(placeholder.end, datetime!(2024-01-10 16:00:00));
    assert_eq!(placeholder.resource_id, Some(2));
    let original = placeholder.original().unwrap();
    assert_eq!(original.start, datetime!(2024-01-10 10:00:00));
    assert_eq!(original.end, datetime!(2024-01-10 12:00:00));
    assert_eq!(original.resource_id, Some(1));

    engine.discard();

    assert_eq!(engine.events(), before);
    assert_eq!(engine.store().calls(), calls_before);
}

#[tokio::test]
async fn test_resize_takes_end_from_gesture() {
    let mut engine = engine_with([record_at(
        1,
        date!(2024 - 01 - 10),
        time!(10:00:00),
        time!(12:00:00),
    )]);
    engine.load_range(january_window(), LoadMode::Merge).await.unwrap();

    let placeholder = engine
        .begin_move(
            EventId::Record(1),
            datetime!(2024-01-10 10:00:00),
            None,
            Some(datetime!(2024-01-10 13:30:00)),
        )
        .unwrap();

    assert_eq!(placeholder.end, datetime!(2024-01-10 13:30:00));
    // Resource is kept when the gesture does not change it.
    assert_eq!(placeholder.resource_id, Some(1));
}

#[tokio::test]
async fn test_commit_with_id_updates_instead_of_creating() {
    let mut engine = engine_with([record_at(
        1,
        date!(2024 - 01 - 10),
        time!(10:00:00),
        time!(12:00:00),
    )]);
    engine.load_range(january_window(), LoadMode::Merge).await.unwrap();

    let placeholder = engine
        .begin_move(EventId::Record(1), datetime!(2024-01-10 14:00:00), Some(2), None)
        .unwrap();
    let draft = ScheduleDraft::from_placeholder(&placeholder);
    assert_eq!(draft.id, Some(1));

    engine.commit(&draft).await.unwrap();

    assert_eq!(engine.store().calls().update, 1);
    assert_eq!(engine.store().calls().create, 0);

    let events = engine.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].start, datetime!(2024-01-10 14:00:00));
    assert_eq!(events[0].resource_id, Some(2));
}

#[tokio::test]
async fn test_failed_commit_restores_pre_gesture_state() {
    // Scenario C: the store rejects the move; the board must roll back.
    let mut engine = engine_with([record_at(
        1,
        date!(2024 - 01 - 10),
        time!(10:00:00),
        time!(12:00:00),
    )]);
    engine.load_range(january_window(), LoadMode::Merge).await.unwrap();
    let before: Vec<CalendarEvent> = engine.events();

    let placeholder = engine
        .begin_move(EventId::Record(1), datetime!(2024-01-10 14:00:00), Some(2), None)
        .unwrap();
    let draft = ScheduleDraft::from_placeholder(&placeholder);

    engine
        .store()
        .fail_next(StoreError::Transport(String::from("connection reset")));
    let result = engine.commit(&draft).await;

    assert!(matches!(result, Err(EngineError::Commit(_))));
    assert!(engine.live_placeholder().is_none());
    assert_eq!(engine.events(), before);
    assert!(engine.gesture().is_idle());
}

#[tokio::test]
async fn test_invalid_draft_is_refused_before_the_network() {
    let mut engine = engine_with([]);
    engine
        .begin_external_drop(&sourdough_recipe(), datetime!(2024-01-10 09:00:00), 1)
        .unwrap();

    // No batch size: the assignment contract rejects the draft.
    let placeholder = engine.live_placeholder().unwrap().clone();
    let draft = ScheduleDraft::from_placeholder(&placeholder);

    let result = engine.commit(&draft).await;
    assert!(matches!(result, Err(EngineError::InvalidDraft(_))));

    // The gesture is still pending; the user can fix the draft and retry.
    assert!(engine.live_placeholder().is_some());
    assert_eq!(engine.store().calls().create, 0);
}

#[tokio::test]
async fn test_discard_is_idempotent() {
    let mut engine = engine_with([]);
    engine.discard();
    assert!(engine.gesture().is_idle());

    engine
        .begin_external_drop(&sourdough_recipe(), datetime!(2024-01-10 09:00:00), 1)
        .unwrap();
    engine.discard();
    engine.discard();
    assert!(engine.gesture().is_idle());
    assert!(engine.events().is_empty());
}

#[tokio::test]
async fn test_discard_after_successful_commit_is_a_no_op() {
    let mut engine = engine_with([]);
    let placeholder = engine
        .begin_external_drop(&sourdough_recipe(), datetime!(2024-01-10 09:00:00), 1)
        .unwrap();
    let mut draft = ScheduleDraft::from_placeholder(&placeholder);
    draft.batch_size = Some(24.0);
    engine.commit(&draft).await.unwrap();

    let after_commit = engine.events();
    engine.discard();
    assert_eq!(engine.events(), after_commit);
}

#[tokio::test]
async fn test_placeholder_is_rendered_while_pending() {
    let mut engine = engine_with([]);
    let placeholder = engine
        .begin_external_drop(&sourdough_recipe(), datetime!(2024-01-10 09:00:00), 1)
        .unwrap();

    let events = engine.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, placeholder.id);
    assert_eq!(events[0].title, "Sourdough Batch");
}
