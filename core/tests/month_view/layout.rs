// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Cell layout behaviour with configurable row limits.

use jifelog_core::{
    CellLayout, LayoutOptions, ScheduleEvent, Slot, assign_lanes, build_month_grid,
    layout_month, visible_events,
};

use crate::common::{at, date, test_all_day_event, test_calendar, test_timed_event};

fn lay_out(events: &[ScheduleEvent], options: LayoutOptions) -> Vec<CellLayout> {
    let grid = build_month_grid(2026, 0);
    let calendars = vec![test_calendar("my", "#10b981")];
    let visible = visible_events(events, &calendars);
    let lanes = assign_lanes(&grid, visible.iter().copied());
    layout_month(&grid, visible, &lanes, &calendars, options, None)
}

fn busy_day(count: u32) -> Vec<ScheduleEvent> {
    (0..count)
        .map(|i| {
            test_timed_event(
                &format!("t{i}"),
                at(2026, 1, 14, 8 + i, 0),
                at(2026, 1, 14, 8 + i, 45),
            )
        })
        .collect()
}

#[test]
fn row_count_stays_between_limits() {
    for count in 0..8 {
        let cells = lay_out(&busy_day(count), LayoutOptions::default());
        let cell = &cells[17];
        assert_eq!(cell.date, date(2026, 1, 14));
        let expected_rows = (count as usize).clamp(3, 4);
        assert_eq!(cell.slots.len(), expected_rows, "{count} events");
        assert_eq!(cell.overflow, (count as usize).saturating_sub(4));
    }
}

#[test]
fn custom_limits_are_respected() {
    let options = LayoutOptions {
        min_slots: 1,
        max_visible: 2,
    };
    let cells = lay_out(&busy_day(5), options);
    assert_eq!(cells[17].slots.len(), 2);
    assert_eq!(cells[17].overflow, 3);
    assert!(cells.iter().filter(|c| c.index != 17).all(|c| c.slots.len() == 1));
}

#[test]
fn every_cell_of_a_week_has_the_same_rows_for_a_bar() {
    let events = [
        test_all_day_event("outer", date(2026, 1, 11), date(2026, 1, 17)),
        test_all_day_event("inner", date(2026, 1, 13), date(2026, 1, 14)),
    ];
    let cells = lay_out(&events, LayoutOptions::default());
    for cell in &cells[14..21] {
        assert_eq!(cell.slots[0].event_id(), Some("outer"), "{}", cell.date);
    }
    assert_eq!(cells[16].slots[1].event_id(), Some("inner"));
    assert_eq!(cells[17].slots[1].event_id(), Some("inner"));
    assert!(cells[18].slots[1].is_empty());
}

#[test]
fn hidden_lanes_count_as_overflow() {
    let mut events: Vec<_> = (0..5)
        .map(|i| test_all_day_event(&format!("bar{i}"), date(2026, 1, 5), date(2026, 1, 7)))
        .collect();
    events.push(test_timed_event(
        "late",
        at(2026, 1, 6, 22, 0),
        at(2026, 1, 6, 23, 0),
    ));
    let cells = lay_out(&events, LayoutOptions::default());
    let cell = &cells[9];
    assert_eq!(cell.date, date(2026, 1, 6));
    assert_eq!(cell.slots.len(), 4);
    assert!(cell.slots.iter().all(|s| matches!(s, Slot::Bar(_))));
    assert_eq!(cell.overflow, 2);
}

#[test]
fn inline_events_use_rows_freed_by_bars() {
    let events = [
        test_all_day_event("long", date(2026, 1, 5), date(2026, 1, 9)),
        test_all_day_event("short", date(2026, 1, 5), date(2026, 1, 6)),
        test_timed_event("call", at(2026, 1, 8, 9, 0), at(2026, 1, 8, 9, 30)),
    ];
    let cells = lay_out(&events, LayoutOptions::default());
    let cell = &cells[11];
    assert_eq!(cell.date, date(2026, 1, 8));
    assert_eq!(cell.slots[0].event_id(), Some("long"));
    assert_eq!(cell.slots[1].event_id(), Some("call"));
    assert!(cell.slots[2].is_empty());
}
