// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Lane assignment properties.

use chrono::TimeDelta;

use jifelog_core::{ScheduleEvent, assign_lanes, build_month_grid};

use crate::common::{assert_no_lane_collisions, at, date, test_all_day_event, test_timed_event};

/// A fixed, varied set of bar events around January 2026.
fn crowded_events() -> Vec<ScheduleEvent> {
    let base = date(2025, 12, 20);
    let mut seed: u64 = 42;
    let mut next = move |bound: u64| {
        seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
        (seed >> 33) % bound
    };

    (0..40)
        .map(|i| {
            let first = base + TimeDelta::days(next(60) as i64);
            let last = first + TimeDelta::days(next(6) as i64);
            let id = format!("e{i}");
            if i % 3 == 0 {
                let start = first.and_hms_opt(20, 0, 0).unwrap();
                let end = last.succ_opt().unwrap().and_hms_opt(8, 0, 0).unwrap();
                test_timed_event(&id, start.into(), end.into())
            } else {
                test_all_day_event(&id, first, last)
            }
        })
        .collect()
}

#[test]
fn lanes_never_collide() {
    let events = crowded_events();
    for month0 in [-1, 0, 1] {
        let grid = build_month_grid(2026, month0);
        let lanes = assign_lanes(&grid, &events);
        assert_no_lane_collisions(&grid, &events, &lanes);
        assert!(lanes.iter().all(|(_, lane)| lane < lanes.lane_count()));
    }
}

#[test]
fn lanes_are_deterministic() {
    let events = crowded_events();
    let grid = build_month_grid(2026, 0);
    let first = assign_lanes(&grid, &events);
    for _ in 0..5 {
        assert_eq!(assign_lanes(&grid, &events), first);
    }
}

#[test]
fn only_bar_events_hold_lanes() {
    let events = crowded_events();
    let grid = build_month_grid(2026, 0);
    let lanes = assign_lanes(&grid, &events);
    let window = grid.span();
    for event in &events {
        assert!(event.kind().takes_lane());
        let visible = event.span().intersects(&window);
        assert_eq!(lanes.contains(&event.id), visible, "{}", event.id);
    }
}

#[test]
fn lane_count_is_bounded_by_event_count() {
    // every event covers the same day
    let events: Vec<_> = (0..6)
        .map(|i| test_all_day_event(&format!("e{i}"), date(2026, 1, 10), date(2026, 1, 12)))
        .collect();
    let grid = build_month_grid(2026, 0);
    let lanes = assign_lanes(&grid, &events);
    assert_eq!(lanes.lane_count(), 6);
    let mut taken: Vec<_> = lanes.iter().map(|(_, lane)| lane).collect();
    taken.sort_unstable();
    assert_eq!(taken, vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn reversed_event_takes_no_lane() {
    let grid = build_month_grid(2026, 0);
    let events = [test_timed_event(
        "reversed",
        at(2026, 1, 15, 10, 0),
        at(2026, 1, 12, 10, 0),
    )];
    let lanes = assign_lanes(&grid, &events);
    assert!(lanes.is_empty());
}
