// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::{CalendarCategory, CoreError, LayoutOptions, LooseDateTime, ScheduleEvent};

/// The name of the JifeLog application.
pub const APP_NAME: &str = "jifelog";

/// Configuration and data of the calendar page.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Rows always drawn in a day cell.
    #[serde(default = "default_min_lane_slots")]
    pub min_lane_slots: usize,

    /// Rows drawn at most in a day cell before folding into `+N`.
    #[serde(default = "default_max_visible_lanes")]
    pub max_visible_lanes: usize,

    /// Number of days covered by the upcoming list, today included.
    #[serde(default = "default_upcoming_days")]
    pub upcoming_days: u32,

    /// Calendar categories, in display order.
    #[serde(default)]
    pub calendars: Vec<CalendarCategory>,

    /// Scheduled events.
    #[serde(default)]
    pub events: Vec<ScheduleEvent>,
}

const fn default_min_lane_slots() -> usize {
    3
}

const fn default_max_visible_lanes() -> usize {
    4
}

const fn default_upcoming_days() -> u32 {
    7
}

impl Config {
    /// An empty configuration with default layout limits.
    pub fn empty() -> Self {
        Self {
            min_lane_slots: default_min_lane_slots(),
            max_visible_lanes: default_max_visible_lanes(),
            upcoming_days: default_upcoming_days(),
            calendars: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Sample calendars and events of January 2026, used when no config file exists.
    pub fn sample() -> Self {
        let calendars = vec![
            calendar("my", "나의 캘린더", "#10b981"),
            calendar("concert", "콘서트", "#8b5cf6"),
            calendar("company", "회사", "#3b82f6"),
        ];

        let events = vec![
            ScheduleEvent {
                description: Some("주간 업무 보고".to_string()),
                ..timed("1", "팀 회의", (23, 14, 0), (23, 15, 30), "company")
            },
            timed("2", "저녁 약속", (23, 19, 0), (23, 21, 0), "my"),
            ScheduleEvent {
                location: Some("KSPO 돔".to_string()),
                ..timed("3", "아이유 콘서트", (24, 18, 0), (24, 22, 0), "concert")
            },
            ScheduleEvent {
                id: "4".to_string(),
                title: "설날 연휴".to_string(),
                start: january(28).into(),
                end: january(31).into(),
                all_day: true,
                calendar_id: "my".to_string(),
                description: None,
                location: None,
            },
            ScheduleEvent {
                all_day: true,
                ..timed("5", "프로젝트 런칭", (18, 10, 0), (20, 12, 0), "company")
            },
        ];

        Self {
            calendars,
            events,
            ..Self::empty()
        }
    }

    /// Layout limits of day cells.
    pub fn layout_options(&self) -> LayoutOptions {
        LayoutOptions {
            min_slots: self.min_lane_slots,
            max_visible: self.max_visible_lanes,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.max_visible_lanes == 0 {
            return Err(CoreError::Config(
                "max_visible_lanes must be at least 1".to_string(),
            ));
        }
        if self.min_lane_slots > self.max_visible_lanes {
            return Err(CoreError::Config(format!(
                "min_lane_slots ({}) must not exceed max_visible_lanes ({})",
                self.min_lane_slots, self.max_visible_lanes
            )));
        }

        let mut ids = HashSet::new();
        for calendar in &self.calendars {
            calendar.validate()?;
            if !ids.insert(calendar.id.as_str()) {
                return Err(CoreError::DuplicateId(calendar.id.clone()));
            }
        }

        let mut ids = HashSet::new();
        for event in &self.events {
            if event.title.trim().is_empty() {
                return Err(CoreError::EmptyTitle);
            }
            if !ids.insert(event.id.as_str()) {
                return Err(CoreError::DuplicateId(event.id.clone()));
            }
        }

        tracing::debug!(
            calendars = self.calendars.len(),
            events = self.events.len(),
            "config validated"
        );
        Ok(())
    }
}

fn calendar(id: &str, name: &str, color: &str) -> CalendarCategory {
    CalendarCategory {
        id: id.to_string(),
        name: name.to_string(),
        color: color.to_string(),
        is_visible: true,
    }
}

fn january(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, day).unwrap_or(NaiveDate::MIN)
}

fn timed(
    id: &str,
    title: &str,
    (start_day, start_hour, start_min): (u32, u32, u32),
    (end_day, end_hour, end_min): (u32, u32, u32),
    calendar_id: &str,
) -> ScheduleEvent {
    let at = |day, hour, min| -> LooseDateTime {
        january(day)
            .and_hms_opt(hour, min, 0)
            .unwrap_or_default()
            .into()
    };
    ScheduleEvent {
        id: id.to_string(),
        title: title.to_string(),
        start: at(start_day, start_hour, start_min),
        end: at(end_day, end_hour, end_min),
        all_day: false,
        calendar_id: calendar_id.to_string(),
        description: None,
        location: None,
    }
}
