// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use jifelog_core::{LaneAssignment, MonthGrid, ScheduleEvent};

/// Asserts that the ids of `events` are exactly `expected`, in order.
pub fn assert_event_ids(events: &[&ScheduleEvent], expected: &[&str]) {
    let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, expected, "Event ids mismatch");
}

/// Asserts that no two events sharing a lane cover the same visible day.
///
/// # Panics
///
/// Panics with both event ids if a collision is found.
pub fn assert_no_lane_collisions(
    grid: &MonthGrid,
    events: &[ScheduleEvent],
    lanes: &LaneAssignment,
) {
    let window = grid.span();
    for (i, a) in events.iter().enumerate() {
        for b in &events[i + 1..] {
            let (Some(lane_a), Some(lane_b)) = (lanes.get(&a.id), lanes.get(&b.id)) else {
                continue;
            };
            if lane_a != lane_b {
                continue;
            }

            let (Some(span_a), Some(span_b)) = (a.span().clip(&window), b.span().clip(&window))
            else {
                panic!("events {} and {} hold a lane outside the grid", a.id, b.id);
            };
            assert!(
                !span_a.intersects(&span_b),
                "events {} and {} collide in lane {lane_a}",
                a.id,
                b.id
            );
        }
    }
}
