// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::{
    CalendarCategory, EventKind, LaneAssignment, LooseDateTime, MonthGrid, ScheduleEvent,
    calendar::event_color, event::by_start,
};

/// Limits on the number of rows drawn inside a day cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LayoutOptions {
    /// Rows always drawn, padded with empty placeholders.
    pub min_slots: usize,

    /// Rows drawn at most, the rest is folded into an overflow count.
    pub max_visible: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            min_slots: 3,
            max_visible: 4,
        }
    }
}

/// The part of a bar event drawn in one cell.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BarSegment {
    pub event_id: String,

    /// Only set on the start day and at the start of each week row.
    pub title: Option<String>,

    /// Left edge is rounded on the start day.
    pub rounded_left: bool,

    /// Right edge is rounded on the end day.
    pub rounded_right: bool,

    /// The bar goes on into the next cell.
    pub continues: bool,

    pub color: String,
}

/// A single-day timed event listed inside its cell.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct InlineEvent {
    pub event_id: String,
    pub title: String,
    pub start: LooseDateTime,
    pub color: String,
}

/// One row of a day cell.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Slot {
    Bar(BarSegment),
    Inline(InlineEvent),

    /// Placeholder keeping rows aligned across a week.
    Empty,
}

impl Slot {
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    pub fn event_id(&self) -> Option<&str> {
        match self {
            Slot::Bar(bar) => Some(&bar.event_id),
            Slot::Inline(inline) => Some(&inline.event_id),
            Slot::Empty => None,
        }
    }
}

/// Everything needed to draw one cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct CellLayout {
    pub index: usize,
    pub date: NaiveDate,
    pub is_current_month: bool,
    pub is_today: bool,
    pub slots: Vec<Slot>,

    /// Number of entries not drawn, shown as `+N`.
    pub overflow: usize,
}

impl CellLayout {
    /// Whether no event touches the cell.
    pub fn is_blank(&self) -> bool {
        self.overflow == 0 && self.slots.iter().all(Slot::is_empty)
    }
}

/// Single-day timed events of `events` per cell index, each list sorted by start.
///
/// Cells without such events are absent.
pub fn events_per_day<'a, E>(
    grid: &MonthGrid,
    events: E,
) -> BTreeMap<usize, Vec<&'a ScheduleEvent>>
where
    E: IntoIterator<Item = &'a ScheduleEvent>,
{
    let mut days: BTreeMap<usize, Vec<&ScheduleEvent>> = BTreeMap::new();
    for event in events {
        if event.kind() != EventKind::SingleDayTimed {
            continue;
        }
        if let Some(index) = grid.index_of(event.start.date()) {
            days.entry(index).or_default().push(event);
        }
    }
    for list in days.values_mut() {
        list.sort_by(|a, b| by_start(a, b));
    }
    days
}

/// Lays out the cells of `grid`.
///
/// Bars take the row of their lane, inline events fill the remaining rows from the
/// top. `today` marks the matching cell.
pub fn layout_month<'a, E>(
    grid: &MonthGrid,
    events: E,
    lanes: &LaneAssignment,
    calendars: &[CalendarCategory],
    options: LayoutOptions,
    today: Option<NaiveDate>,
) -> Vec<CellLayout>
where
    E: IntoIterator<Item = &'a ScheduleEvent>,
{
    let events: Vec<&ScheduleEvent> = events.into_iter().collect();
    let bars: Vec<(&ScheduleEvent, usize)> = events
        .iter()
        .filter_map(|e| lanes.get(&e.id).map(|lane| (*e, lane)))
        .collect();
    let inline = events_per_day(grid, events.iter().copied());

    grid.cells()
        .iter()
        .enumerate()
        .map(|(index, cell)| {
            let mut rows: Vec<Option<Slot>> = vec![None; lanes.lane_count()];
            for (event, lane) in &bars {
                let span = event.span();
                if !span.contains(cell.date) {
                    continue;
                }

                let is_start = span.first() == cell.date;
                let is_end = span.last() == cell.date;
                let show_title = is_start || MonthGrid::is_week_start(index);
                rows[*lane] = Some(Slot::Bar(BarSegment {
                    event_id: event.id.clone(),
                    title: show_title.then(|| event.title.clone()),
                    rounded_left: is_start,
                    rounded_right: is_end,
                    continues: !is_end,
                    color: event_color(calendars, event).to_string(),
                }));
            }

            for event in inline.get(&index).into_iter().flatten() {
                let slot = Slot::Inline(InlineEvent {
                    event_id: event.id.clone(),
                    title: event.title.clone(),
                    start: event.start,
                    color: event_color(calendars, event).to_string(),
                });
                match rows.iter_mut().find(|row| row.is_none()) {
                    Some(row) => *row = Some(slot),
                    None => rows.push(Some(slot)),
                }
            }

            let used = rows.iter().rposition(Option::is_some).map_or(0, |i| i + 1);
            let shown = options.min_slots.max(used.min(options.max_visible));
            rows.resize(shown.max(rows.len()), None);
            let overflow = rows[shown..].iter().filter(|row| row.is_some()).count();
            rows.truncate(shown);

            CellLayout {
                index,
                date: cell.date,
                is_current_month: cell.is_current_month,
                is_today: today == Some(cell.date),
                slots: rows
                    .into_iter()
                    .map(|row| row.unwrap_or(Slot::Empty))
                    .collect(),
                overflow,
            }
        })
        .collect()
}
