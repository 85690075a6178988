// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use colored::Color;
use jifelog_core::{CalendarCategory, FALLBACK_COLOR, ScheduleEvent, find_calendar};

use crate::table::{Column, PaddingDirection, Table};
use crate::util::{OutputFormat, hex_to_color};

/// An event with its resolved calendar.
#[derive(Debug, Clone, Copy)]
pub struct EventRow<'a> {
    pub event: &'a ScheduleEvent,
    pub calendar: Option<&'a CalendarCategory>,
}

impl<'a> EventRow<'a> {
    pub fn with(calendars: &'a [CalendarCategory], event: &'a ScheduleEvent) -> Self {
        Self {
            event,
            calendar: find_calendar(calendars, &event.calendar_id),
        }
    }

    fn color(&self) -> &'a str {
        self.calendar.map_or(FALLBACK_COLOR, |c| c.color.as_str())
    }
}

#[derive(Debug, serde::Serialize)]
struct EventJson<'a> {
    #[serde(flatten)]
    event: &'a ScheduleEvent,
    calendar: Option<&'a str>,
    color: &'a str,
    time: String,
}

#[derive(Debug)]
pub struct EventFormatter {
    columns: Vec<EventColumn>,
    format: OutputFormat,
}

impl EventFormatter {
    pub fn new(columns: Vec<EventColumn>) -> Self {
        Self {
            columns,
            format: OutputFormat::Table,
        }
    }

    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    pub fn format<'a>(&'a self, events: &'a [EventRow<'a>]) -> Display<'a> {
        Display {
            events,
            formatter: self,
        }
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    events: &'a [EventRow<'a>],
    formatter: &'a EventFormatter,
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.formatter.format {
            OutputFormat::Json => {
                let events: Vec<_> = self
                    .events
                    .iter()
                    .map(|row| EventJson {
                        event: row.event,
                        calendar: row.calendar.map(|c| c.name.as_str()),
                        color: row.color(),
                        time: row.event.time_label(),
                    })
                    .collect();
                let json = serde_json::to_string_pretty(&events).map_err(|_| fmt::Error)?;
                writeln!(f, "{json}")
            }
            OutputFormat::Table => {
                write!(f, "{}", Table::new(&self.formatter.columns, self.events))
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColumn {
    Id,
    Date,
    Time,
    Title,
    Calendar,
    Location,
}

impl EventColumn {
    pub fn id() -> Self {
        EventColumn::Id
    }

    /// Start date, with the end date when the event spans days.
    pub fn date() -> Self {
        EventColumn::Date
    }

    pub fn time() -> Self {
        EventColumn::Time
    }

    pub fn title() -> Self {
        EventColumn::Title
    }

    pub fn calendar() -> Self {
        EventColumn::Calendar
    }

    pub fn location() -> Self {
        EventColumn::Location
    }
}

impl Column<EventRow<'_>> for EventColumn {
    fn format(&self, row: &EventRow<'_>) -> String {
        let event = row.event;
        match self {
            EventColumn::Id => format!("#{}", event.id),
            EventColumn::Date => {
                let span = event.span();
                if span.is_single_day() {
                    span.first().format("%m-%d").to_string()
                } else {
                    format!(
                        "{}~{}",
                        span.first().format("%m-%d"),
                        span.last().format("%m-%d")
                    )
                }
            }
            EventColumn::Time => event.time_label(),
            EventColumn::Title => event.title.clone(),
            EventColumn::Calendar => match row.calendar {
                Some(calendar) => format!("● {}", calendar.name),
                None => "● -".to_string(),
            },
            EventColumn::Location => event.location.clone().unwrap_or_default(),
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            EventColumn::Id => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, row: &EventRow<'_>) -> Option<Color> {
        match self {
            EventColumn::Calendar => hex_to_color(row.color()),
            EventColumn::Id => Some(Color::BrightBlack),
            _ => None,
        }
    }
}
