// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use crate::{CoreError, ScheduleEvent};

/// Preset colors offered when adding a calendar.
pub const CALENDAR_PALETTE: [&str; 8] = [
    "#10b981", "#3b82f6", "#8b5cf6", "#f59e0b", "#ef4444", "#ec4899", "#64748b", "#06b6d4",
];

/// Color used when an event's calendar cannot be resolved.
pub const FALLBACK_COLOR: &str = "#cccccc";

/// A user calendar that groups events under a name and color.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CalendarCategory {
    /// Unique identifier, referenced by [`ScheduleEvent::calendar_id`].
    pub id: String,

    /// Display name.
    pub name: String,

    /// Hex color, `#rrggbb`.
    pub color: String,

    /// Hidden calendars keep their events, which are just not laid out.
    #[serde(default = "default_visible")]
    pub is_visible: bool,
}

const fn default_visible() -> bool {
    true
}

impl CalendarCategory {
    /// Checks the name and color.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.name.trim().is_empty() {
            return Err(CoreError::EmptyTitle);
        }
        validate_color(&self.color)
    }

    /// Color as an `(r, g, b)` triple.
    pub fn rgb(&self) -> Option<(u8, u8, u8)> {
        parse_hex_color(&self.color)
    }
}

/// Draft for a new calendar, the id is generated on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarDraft {
    pub name: String,
    pub color: String,
}

impl CalendarDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color: CALENDAR_PALETTE[0].to_string(),
        }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    pub(crate) fn into_category(self, id: String) -> Result<CalendarCategory, CoreError> {
        let category = CalendarCategory {
            id,
            name: self.name.trim().to_string(),
            color: self.color.to_ascii_lowercase(),
            is_visible: true,
        };
        category.validate()?;
        Ok(category)
    }
}

/// Ensures `color` is a `#rrggbb` hex string.
pub fn validate_color(color: &str) -> Result<(), CoreError> {
    match parse_hex_color(color) {
        Some(_) => Ok(()),
        None => Err(CoreError::InvalidColor(color.to_string())),
    }
}

/// Parses `#rrggbb` (or the short `#rgb`) into an rgb triple.
pub fn parse_hex_color(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        3 => {
            let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
            Some((digit(0)?, digit(1)?, digit(2)?))
        }
        _ => None,
    }
}

/// Finds a calendar by id.
pub fn find_calendar<'a>(
    calendars: &'a [CalendarCategory],
    id: &str,
) -> Option<&'a CalendarCategory> {
    calendars.iter().find(|c| c.id == id)
}

/// Color of the calendar an event belongs to, or [`FALLBACK_COLOR`].
pub fn event_color<'a>(calendars: &'a [CalendarCategory], event: &ScheduleEvent) -> &'a str {
    find_calendar(calendars, &event.calendar_id).map_or(FALLBACK_COLOR, |c| c.color.as_str())
}

/// Keeps the events whose calendar exists and is visible.
///
/// Events pointing at an unknown calendar are dropped without error, edits in
/// progress may reference calendars that are not there yet.
pub fn visible_events<'a, E>(events: E, calendars: &[CalendarCategory]) -> Vec<&'a ScheduleEvent>
where
    E: IntoIterator<Item = &'a ScheduleEvent>,
{
    events
        .into_iter()
        .filter(|e| match find_calendar(calendars, &e.calendar_id) {
            Some(calendar) => calendar.is_visible,
            None => {
                tracing::trace!(id = %e.id, calendar_id = %e.calendar_id, "unknown calendar");
                false
            }
        })
        .collect()
}
