// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end event lifecycle workflow tests.
//!
//! These tests validate complete workflows from clicking an empty day through
//! creating, editing and deleting the event.

use jifelog_core::{CoreError, DayAction, EventKind, EventPatch, LooseDateTime};

use crate::common::{at, date, sample_controller};

#[test]
fn event_lifecycle_create_from_empty_day() {
    // Arrange
    let mut controller = sample_controller();
    let DayAction::CreateEvent(mut draft) = controller.click_day(date(2026, 1, 12)) else {
        panic!("2026-01-12 should be empty");
    };

    // Act
    draft.title = "치과 예약".to_string();
    draft.location = Some("강남역".to_string());
    let id = controller.new_event(draft).unwrap().id.clone();

    // Assert - drawn inline on its day
    let event = controller.get_event(&id).unwrap();
    assert_eq!(event.kind(), EventKind::SingleDayTimed);
    assert_eq!(event.time_label(), "09:30 - 10:30");
    let layout = controller.layout();
    assert_eq!(layout.events_per_day[&15][0].id, id);
    assert!(!layout.lanes.contains(&id));
}

#[test]
fn event_lifecycle_stretching_an_event_gives_it_a_lane() {
    // Arrange
    let mut controller = sample_controller();

    // Act - turn the concert into a two-night trip
    let patch = EventPatch {
        end: Some(at(2026, 1, 26, 11, 0)),
        ..Default::default()
    };
    controller.update_event("3", patch).unwrap();

    // Assert
    let layout = controller.layout();
    assert_eq!(layout.lanes.get("3"), Some(0));
    assert!(!layout.events_per_day.contains_key(&27));
    assert_eq!(controller.select_day(date(2026, 1, 25)).len(), 1);
}

#[test]
fn event_lifecycle_all_day_toggle() {
    let mut controller = sample_controller();
    let patch = EventPatch {
        all_day: Some(true),
        start: Some(LooseDateTime::DateOnly(date(2026, 1, 23))),
        end: Some(LooseDateTime::DateOnly(date(2026, 1, 23))),
        ..Default::default()
    };
    let event = controller.update_event("1", patch).unwrap();
    assert_eq!(event.time_label(), "종일");

    // all-day events come first on their day
    let day = controller.select_day(date(2026, 1, 23));
    assert_eq!(day[0].id, "1");
    assert_eq!(controller.layout().lanes.get("1"), Some(0));
}

#[test]
fn event_lifecycle_delete_flow() {
    // Arrange
    let mut controller = sample_controller();
    let before = controller.events().len();

    // Act
    let removed = controller.delete_event("2").unwrap();

    // Assert
    assert_eq!(removed.title, "저녁 약속");
    assert_eq!(controller.events().len(), before - 1);
    assert_eq!(
        controller.get_event("2"),
        Err(CoreError::EventNotFound("2".to_string()))
    );
    assert_eq!(controller.select_day(date(2026, 1, 23)).len(), 1);
}

#[test]
fn event_lifecycle_rejects_blank_titles() {
    let mut controller = sample_controller();
    let DayAction::CreateEvent(draft) = controller.click_day(date(2026, 1, 12)) else {
        panic!("2026-01-12 should be empty");
    };
    assert_eq!(controller.new_event(draft), Err(CoreError::EmptyTitle));
    assert_eq!(controller.events().len(), 5);
}
