// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Month calendar engine of JifeLog.
//!
//! Builds the six-week grid of a month, packs multi-day events into lanes and lays
//! out every day cell, while [`CalendarController`] keeps the page state.

mod calendar;
mod config;
mod controller;
mod datetime;
mod error;
mod event;
mod grid;
mod lanes;
mod layout;

pub use crate::calendar::{
    CALENDAR_PALETTE, CalendarCategory, CalendarDraft, FALLBACK_COLOR, event_color,
    find_calendar, parse_hex_color, validate_color, visible_events,
};
pub use crate::config::{APP_NAME, Config};
pub use crate::controller::{CalendarController, DayAction, Direction, MonthLayout};
pub use crate::datetime::{DaySpan, LooseDateTime, RangePosition};
pub use crate::error::CoreError;
pub use crate::event::{EventDraft, EventKind, EventPatch, ScheduleEvent, by_start};
pub use crate::grid::{
    DAYS_PER_WEEK, DayCell, GRID_CELLS, MonthGrid, YearMonth, build_month_grid,
};
pub use crate::lanes::{LaneAssignment, assign_lanes};
pub use crate::layout::{
    BarSegment, CellLayout, InlineEvent, LayoutOptions, Slot, events_per_day, layout_month,
};
