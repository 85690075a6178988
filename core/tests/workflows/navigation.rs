// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Month navigation and day selection workflows.

use jifelog_core::{DayAction, Direction, YearMonth};

use crate::common::{assert_event_ids, date, sample_controller};

#[test]
fn navigation_round_trip_across_years() {
    // Arrange
    let mut controller = sample_controller();

    // Act - a full year back, then forward again
    for _ in 0..12 {
        controller.step_month(Direction::Prev);
    }
    assert_eq!(controller.month(), YearMonth::new(2025, 0));
    for _ in 0..12 {
        controller.step_month(Direction::Next);
    }

    // Assert
    assert_eq!(controller.month(), YearMonth::new(2026, 0));
    assert!(!controller.jump_to_today());
}

#[test]
fn navigation_layout_follows_the_displayed_month() {
    let mut controller = sample_controller();
    controller.step_month(Direction::Next);

    let layout = controller.layout();
    assert_eq!(layout.grid.month(), YearMonth::new(2026, 1));
    assert_eq!(layout.grid.first_date(), date(2026, 2, 1));

    // today (2026-01-21) is outside the February grid
    assert!(layout.cells.iter().all(|c| !c.is_today));

    // the holiday ends on the 31st, outside the window
    assert!(!layout.lanes.contains("4"));
}

#[test]
fn navigation_neighbour_month_shows_spilled_events() {
    let mut controller = sample_controller();
    controller.step_month(Direction::Prev);

    // the December grid runs until 2026-01-10
    let layout = controller.layout();
    assert_eq!(layout.grid.last_date(), date(2026, 1, 10));
    assert!(layout.lanes.is_empty());
    assert!(layout.events_per_day.is_empty());
}

#[test]
fn navigation_today_moves_with_the_clock() {
    let mut controller = sample_controller();
    controller.set_today(date(2026, 4, 2));

    assert!(controller.jump_to_today());
    assert_eq!(controller.month(), YearMonth::new(2026, 3));
    let layout = controller.layout();
    let today: Vec<_> = layout.cells.iter().filter(|c| c.is_today).collect();
    assert_eq!(today.len(), 1);
    assert_eq!(today[0].date, date(2026, 4, 2));
}

#[test]
fn selection_of_multi_day_events_on_inner_days() {
    let controller = sample_controller();

    assert_event_ids(&controller.select_day(date(2026, 1, 19)), &["5"]);
    assert_event_ids(&controller.select_day(date(2026, 1, 30)), &["4"]);
    assert!(controller.select_day(date(2026, 1, 27)).is_empty());
}

#[test]
fn selection_through_an_event_opens_its_start_day() {
    let controller = sample_controller();
    let holiday = controller.get_event("4").unwrap();

    assert_event_ids(&controller.select_event(holiday), &["4"]);

    match controller.click_day(date(2026, 1, 23)) {
        DayAction::ShowDay(events) => assert_event_ids(&events, &["1", "2"]),
        other => panic!("expected the day list, got {other:?}"),
    }
}
