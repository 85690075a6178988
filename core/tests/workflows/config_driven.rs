// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration-driven behavior workflow tests.
//!
//! These tests validate how configuration affects the controller, including
//! layout limits, validation and data loaded from TOML.

use jifelog_core::{CalendarController, Config, CoreError};

use crate::common::{at, date, test_all_day_event, test_config, test_timed_event};

#[test]
fn config_limits_shape_day_cells() {
    // Arrange - five meetings on one day
    let events = (0..5)
        .map(|i| {
            test_timed_event(
                &format!("m{i}"),
                at(2026, 3, 10, 9 + i, 0),
                at(2026, 3, 10, 9 + i, 30),
            )
        })
        .collect();
    let config = Config {
        min_lane_slots: 2,
        max_visible_lanes: 3,
        ..test_config(events)
    };
    let now = date(2026, 3, 1).and_hms_opt(8, 0, 0).unwrap();

    // Act
    let controller = CalendarController::with_now(config, now).unwrap();
    let layout = controller.layout();

    // Assert
    let cell = layout
        .cells
        .iter()
        .find(|c| c.date == date(2026, 3, 10))
        .unwrap();
    assert_eq!(cell.slots.len(), 3);
    assert_eq!(cell.overflow, 2);
    assert!(
        layout
            .cells
            .iter()
            .filter(|c| c.date != date(2026, 3, 10))
            .all(|c| c.slots.len() == 2)
    );
}

#[test]
fn config_invalid_data_is_rejected() {
    let now = date(2026, 1, 1).and_hms_opt(0, 0, 0).unwrap();
    let day = date(2026, 1, 1);

    let config = test_config(vec![
        test_all_day_event("a", day, day),
        test_all_day_event("a", day, day),
    ]);
    assert_eq!(
        CalendarController::with_now(config, now).map(|_| ()),
        Err(CoreError::DuplicateId("a".to_string()))
    );

    let config = Config {
        min_lane_slots: 4,
        max_visible_lanes: 2,
        ..test_config(Vec::new())
    };
    assert!(matches!(
        CalendarController::with_now(config, now),
        Err(CoreError::Config(_))
    ));
}

#[test]
fn config_loaded_from_toml_drives_the_controller() {
    // Arrange
    let config: Config = toml::from_str(
        r##"
upcoming_days = 3

[[calendars]]
id = "my"
name = "나의 캘린더"
color = "#10b981"

[[events]]
id = "trip"
title = "부산 여행"
start = "2026-05-01T08:00"
end = "2026-05-03T20:00"
calendar_id = "my"

[[events]]
id = "orphan"
title = "고아 일정"
start = "2026-05-02"
end = "2026-05-02"
all_day = true
calendar_id = "deleted"
"##,
    )
    .unwrap();
    let now = date(2026, 4, 30).and_hms_opt(12, 0, 0).unwrap();

    // Act
    let days = config.upcoming_days;
    let mut controller = CalendarController::with_now(config, now).unwrap();
    controller.step_month(jifelog_core::Direction::Next);

    // Assert
    let layout = controller.layout();
    assert_eq!(layout.lanes.get("trip"), Some(0));
    assert!(!layout.lanes.contains("orphan"));
    let upcoming: Vec<_> = controller
        .upcoming(days)
        .iter()
        .map(|e| e.id.clone())
        .collect();
    assert_eq!(upcoming, vec!["trip".to_string()]);
}
