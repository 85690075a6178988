// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The sample month of January 2026, as shown on first launch.

use jifelog_core::{Slot, YearMonth, assign_lanes, build_month_grid, visible_events};

use crate::common::{assert_event_ids, date, sample_controller, test_all_day_event};

#[test]
fn january_2026_starts_with_the_tail_of_december() {
    let grid = build_month_grid(2026, 0);
    let leading: Vec<_> = grid.cells()[..4].iter().map(|c| c.date).collect();
    assert_eq!(
        leading,
        vec![
            date(2025, 12, 28),
            date(2025, 12, 29),
            date(2025, 12, 30),
            date(2025, 12, 31)
        ]
    );
    assert!(grid.cells()[..4].iter().all(|c| !c.is_current_month));
    assert_eq!(grid.cells()[4].date, date(2026, 1, 1));
    assert!(grid.cells()[4].is_current_month);
}

#[test]
fn holiday_and_launch_share_the_first_lane() {
    let controller = sample_controller();
    let grid = controller.grid();
    let mut events: Vec<_> = controller.events().to_vec();

    let lanes = assign_lanes(&grid, &events);
    assert_eq!(lanes.get("4"), Some(0));
    assert_eq!(lanes.get("5"), Some(0));

    events.push(test_all_day_event("6", date(2026, 1, 29), date(2026, 1, 29)));
    let lanes = assign_lanes(&grid, &events);
    assert_eq!(lanes.get("4"), Some(0));
    assert_eq!(lanes.get("5"), Some(0));
    assert_eq!(lanes.get("6"), Some(1));
}

#[test]
fn team_meeting_is_drawn_inline() {
    let controller = sample_controller();
    let layout = controller.layout();
    assert!(!layout.lanes.contains("1"));
    assert!(!layout.lanes.contains("2"));
    assert!(!layout.lanes.contains("3"));

    let cell = &layout.cells[26];
    assert_eq!(cell.date, date(2026, 1, 23));
    match &cell.slots[..] {
        [Slot::Inline(meeting), Slot::Inline(dinner), Slot::Empty] => {
            assert_eq!(meeting.title, "팀 회의");
            assert_eq!(meeting.color, "#3b82f6");
            assert_eq!(dinner.title, "저녁 약속");
        }
        other => panic!("unexpected slots {other:?}"),
    }
}

#[test]
fn selecting_the_23rd_lists_meeting_then_dinner() {
    let controller = sample_controller();
    let events = controller.select_day(date(2026, 1, 23));
    assert_event_ids(&events, &["1", "2"]);
    assert_eq!(events[0].title, "팀 회의");
    assert_eq!(events[1].title, "저녁 약속");
}

#[test]
fn holiday_bar_is_shaped_over_its_days() {
    let controller = sample_controller();
    let layout = controller.layout();

    let Slot::Bar(first) = &layout.cells[31].slots[0] else {
        panic!("expected the holiday bar on 2026-01-28");
    };
    assert_eq!(first.title.as_deref(), Some("설날 연휴"));
    assert!(first.rounded_left);
    assert!(first.continues);
    assert_eq!(first.color, "#10b981");

    let Slot::Bar(last) = &layout.cells[34].slots[0] else {
        panic!("expected the holiday bar on 2026-01-31");
    };
    assert_eq!(last.title, None);
    assert!(last.rounded_right);
    assert!(!last.continues);
}

#[test]
fn filter_is_idempotent_on_sample_data() {
    let controller = sample_controller();
    let once = visible_events(controller.events(), controller.calendars());
    let twice = visible_events(once.iter().copied(), controller.calendars());
    assert_eq!(once, twice);
    assert_eq!(once.len(), 5);
}

#[test]
fn sample_opens_on_the_month_of_today() {
    let controller = sample_controller();
    assert_eq!(controller.month(), YearMonth::new(2026, 0));
    assert_eq!(controller.month().title(), "2026년 1월");
}
