// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};

use crate::{CoreError, DaySpan, LooseDateTime};

/// A scheduled event on one of the user's calendars.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScheduleEvent {
    /// Unique identifier.
    pub id: String,

    /// The title shown on the bar or inline label.
    pub title: String,

    /// Start, a bare date for all-day events.
    pub start: LooseDateTime,

    /// End, inclusive for all-day events.
    pub end: LooseDateTime,

    /// All-day events only look at the date part of start and end.
    #[serde(default)]
    pub all_day: bool,

    /// Id of the owning [`crate::CalendarCategory`].
    pub calendar_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// How an event is drawn in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// All-day event, drawn as a bar in a lane.
    AllDay,

    /// Timed event crossing midnight, drawn as a bar in a lane.
    MultiDayTimed,

    /// Timed event within one day, drawn inline.
    SingleDayTimed,
}

impl EventKind {
    /// Whether the event occupies a lane.
    pub fn takes_lane(&self) -> bool {
        !matches!(self, EventKind::SingleDayTimed)
    }
}

impl ScheduleEvent {
    /// The calendar days covered by the event, reversed bounds collapse onto the start day.
    pub fn span(&self) -> DaySpan {
        DaySpan::from_bounds(&self.start, &self.end)
    }

    pub fn kind(&self) -> EventKind {
        if self.all_day {
            EventKind::AllDay
        } else if self.span().is_single_day() {
            EventKind::SingleDayTimed
        } else {
            EventKind::MultiDayTimed
        }
    }

    /// Length from start to end, both taken at the start of their day when no time is
    /// given. Never negative.
    pub fn duration(&self) -> TimeDelta {
        let delta = self.end.with_start_of_day() - self.start.with_start_of_day();
        delta.max(TimeDelta::zero())
    }

    /// Whether the event covers `date`.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.span().contains(date)
    }

    /// Label for day detail lists, `종일` or `HH:MM - HH:MM`.
    pub fn time_label(&self) -> String {
        if self.all_day {
            return "종일".to_string();
        }
        let start = self.start.with_start_of_day();
        let end = self.end.with_start_of_day().max(start);
        format!("{} - {}", start.format("%H:%M"), end.format("%H:%M"))
    }
}

/// Orders events by start, earliest first.
///
/// Bare dates sort as midnight of that day.
pub fn by_start(a: &ScheduleEvent, b: &ScheduleEvent) -> Ordering {
    a.start.with_start_of_day().cmp(&b.start.with_start_of_day())
}

/// Draft for an event, used for creating new events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub start: LooseDateTime,
    pub end: LooseDateTime,
    pub all_day: bool,
    pub calendar_id: String,
    pub description: Option<String>,
    pub location: Option<String>,
}

impl EventDraft {
    /// A one hour timed draft on `date`, starting at the wall-clock time of `now`.
    ///
    /// This is what clicking an empty day pre-fills.
    pub fn for_date(date: NaiveDate, now: NaiveDateTime, calendar_id: impl Into<String>) -> Self {
        let time = NaiveTime::from_hms_opt(now.hour(), now.minute(), 0).unwrap_or(now.time());
        let start = NaiveDateTime::new(date, time);
        Self {
            title: String::new(),
            start: start.into(),
            end: (start + TimeDelta::hours(1)).into(),
            all_day: false,
            calendar_id: calendar_id.into(),
            description: None,
            location: None,
        }
    }

    pub(crate) fn into_event(self, id: String) -> Result<ScheduleEvent, CoreError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(CoreError::EmptyTitle);
        }

        Ok(ScheduleEvent {
            id,
            title: title.to_string(),
            start: self.start,
            end: self.end,
            all_day: self.all_day,
            calendar_id: self.calendar_id,
            description: non_blank(self.description),
            location: non_blank(self.location),
        })
    }
}

/// Patch for an event, `None` leaves the field untouched.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EventPatch {
    pub title: Option<String>,
    pub start: Option<LooseDateTime>,
    pub end: Option<LooseDateTime>,
    pub all_day: Option<bool>,
    pub calendar_id: Option<String>,

    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,

    /// `Some(None)` clears the location.
    pub location: Option<Option<String>>,
}

impl EventPatch {
    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    pub(crate) fn apply_to(self, event: &mut ScheduleEvent) -> Result<(), CoreError> {
        if let Some(title) = self.title {
            let title = title.trim();
            if title.is_empty() {
                return Err(CoreError::EmptyTitle);
            }
            event.title = title.to_string();
        }
        if let Some(start) = self.start {
            event.start = start;
        }
        if let Some(end) = self.end {
            event.end = end;
        }
        if let Some(all_day) = self.all_day {
            event.all_day = all_day;
        }
        if let Some(calendar_id) = self.calendar_id {
            event.calendar_id = calendar_id;
        }
        if let Some(description) = self.description {
            event.description = non_blank(description);
        }
        if let Some(location) = self.location {
            event.location = non_blank(location);
        }
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
