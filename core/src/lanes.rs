// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use crate::{EventKind, MonthGrid, ScheduleEvent, grid::GRID_CELLS};

/// Lane index of every bar event visible in a month grid.
///
/// A lane is a horizontal row inside the day cells. Two events sharing a lane
/// never cover the same cell.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct LaneAssignment {
    lanes: BTreeMap<String, usize>,
    lane_count: usize,
}

impl LaneAssignment {
    /// Lane of the event with `id`, absent for inline events and events outside the grid.
    pub fn get(&self, id: &str) -> Option<usize> {
        self.lanes.get(id).copied()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.lanes.contains_key(id)
    }

    /// Number of events holding a lane.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Number of lanes in use.
    pub fn lane_count(&self) -> usize {
        self.lane_count
    }

    /// Iterates `(event id, lane)` pairs ordered by id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.lanes.iter().map(|(id, lane)| (id.as_str(), *lane))
    }
}

/// Assigns lanes to the all-day and multi-day events of `events` visible in `grid`.
///
/// All-day events are placed first, then longer events before shorter ones; ties keep
/// their input order, so equal inputs always give equal assignments. Each event takes
/// the lowest lane that is free over every cell it covers.
pub fn assign_lanes<'a, E>(grid: &MonthGrid, events: E) -> LaneAssignment
where
    E: IntoIterator<Item = &'a ScheduleEvent>,
{
    let mut candidates: Vec<(&ScheduleEvent, EventKind)> = events
        .into_iter()
        .map(|e| (e, e.kind()))
        .filter(|(_, kind)| kind.takes_lane())
        .collect();

    // sort_by is stable
    candidates.sort_by(|(a, a_kind), (b, b_kind)| {
        let a_all_day = *a_kind == EventKind::AllDay;
        let b_all_day = *b_kind == EventKind::AllDay;
        b_all_day
            .cmp(&a_all_day)
            .then_with(|| b.duration().cmp(&a.duration()))
    });

    let window = grid.span();
    let mut occupied: Vec<[bool; GRID_CELLS]> = Vec::new();
    let mut assignment = LaneAssignment::default();
    for (event, _) in candidates {
        let Some(clipped) = event.span().clip(&window) else {
            continue;
        };
        let (Some(first), Some(last)) = (
            grid.index_of(clipped.first()),
            grid.index_of(clipped.last()),
        ) else {
            continue;
        };

        let lane = match occupied
            .iter()
            .position(|cells| cells[first..=last].iter().all(|taken| !taken))
        {
            Some(lane) => lane,
            None => {
                occupied.push([false; GRID_CELLS]);
                occupied.len() - 1
            }
        };
        occupied[lane][first..=last].fill(true);

        tracing::trace!(id = %event.id, lane, first, last, "assigned lane");
        assignment.lanes.insert(event.id.clone(), lane);
    }

    assignment.lane_count = occupied.len();
    assignment
}
