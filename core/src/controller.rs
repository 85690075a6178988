// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;

use chrono::{Local, NaiveDate, NaiveDateTime, TimeDelta};
use uuid::Uuid;

use crate::{
    CalendarCategory, CalendarDraft, CellLayout, Config, CoreError, EventDraft, EventPatch,
    LaneAssignment, LayoutOptions, MonthGrid, ScheduleEvent, YearMonth, assign_lanes,
    build_month_grid,
    calendar::{find_calendar, visible_events},
    datetime::DaySpan,
    event::by_start,
    events_per_day, layout_month,
};

/// Month navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The previous month.
    Prev,

    /// The next month.
    Next,
}

/// What clicking a day leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayAction<'a> {
    /// The day has events, show them.
    ShowDay(Vec<&'a ScheduleEvent>),

    /// The day is empty, start creating an event on it.
    CreateEvent(EventDraft),
}

/// Everything computed for drawing the displayed month.
#[derive(Debug, Clone)]
pub struct MonthLayout<'a> {
    pub grid: MonthGrid,
    pub lanes: LaneAssignment,
    pub events_per_day: BTreeMap<usize, Vec<&'a ScheduleEvent>>,
    pub cells: Vec<CellLayout>,
}

/// State of the calendar page: the displayed month, the clock, calendars and events.
#[derive(Debug, Clone)]
pub struct CalendarController {
    now: NaiveDateTime,
    month: YearMonth,
    options: LayoutOptions,
    upcoming_days: u32,
    calendars: Vec<CalendarCategory>,
    events: Vec<ScheduleEvent>,
}

impl CalendarController {
    /// Creates a controller showing the current month.
    pub fn new(config: Config) -> Result<Self, CoreError> {
        Self::with_now(config, Local::now().naive_local())
    }

    /// Creates a controller with a fixed clock, showing the month of `now`.
    pub fn with_now(config: Config, now: NaiveDateTime) -> Result<Self, CoreError> {
        config.validate()?;
        let options = config.layout_options();
        Ok(Self {
            now,
            month: YearMonth::from_date(now.date()),
            options,
            upcoming_days: config.upcoming_days,
            calendars: config.calendars,
            events: config.events,
        })
    }

    /// The current time of the controller.
    pub fn now(&self) -> NaiveDateTime {
        self.now
    }

    pub fn today(&self) -> NaiveDate {
        self.now.date()
    }

    /// Moves the clock to `date`, keeping the time of day. The displayed month is left alone.
    pub fn set_today(&mut self, date: NaiveDate) {
        self.now = NaiveDateTime::new(date, self.now.time());
    }

    /// Refresh the clock to the local time.
    pub fn refresh_today(&mut self) {
        self.now = Local::now().naive_local();
    }

    /// The displayed month.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn show_month(&mut self, month: YearMonth) {
        tracing::debug!(%month, "showing month");
        self.month = month;
    }

    /// Moves the displayed month by one.
    pub fn step_month(&mut self, direction: Direction) {
        let month = match direction {
            Direction::Prev => self.month.pred(),
            Direction::Next => self.month.succ(),
        };
        self.show_month(month);
    }

    /// Shows the month of today, returns whether the displayed month changed.
    pub fn jump_to_today(&mut self) -> bool {
        let month = YearMonth::from_date(self.today());
        if month == self.month {
            return false;
        }
        self.show_month(month);
        true
    }

    pub fn layout_options(&self) -> LayoutOptions {
        self.options
    }

    /// Default window of [`Self::upcoming`], in days.
    pub fn upcoming_days(&self) -> u32 {
        self.upcoming_days
    }

    pub fn calendars(&self) -> &[CalendarCategory] {
        &self.calendars
    }

    /// All events, hidden ones included.
    pub fn events(&self) -> &[ScheduleEvent] {
        &self.events
    }

    /// Events of visible calendars, in insertion order.
    pub fn visible_events(&self) -> Vec<&ScheduleEvent> {
        visible_events(&self.events, &self.calendars)
    }

    /// The grid of the displayed month.
    pub fn grid(&self) -> MonthGrid {
        build_month_grid(self.month.year(), self.month.month0() as i32)
    }

    /// Lays out the displayed month.
    pub fn layout(&self) -> MonthLayout<'_> {
        let grid = self.grid();
        let events = self.visible_events();
        let lanes = assign_lanes(&grid, events.iter().copied());
        let cells = layout_month(
            &grid,
            events.iter().copied(),
            &lanes,
            &self.calendars,
            self.options,
            Some(self.today()),
        );
        let events_per_day = events_per_day(&grid, events.iter().copied());
        tracing::debug!(
            month = %self.month,
            events = events.len(),
            lanes = lanes.lane_count(),
            "laid out month"
        );
        MonthLayout {
            grid,
            lanes,
            events_per_day,
            cells,
        }
    }

    /// Visible events covering `date`, sorted by start.
    pub fn select_day(&self, date: NaiveDate) -> Vec<&ScheduleEvent> {
        let mut events: Vec<_> = self
            .visible_events()
            .into_iter()
            .filter(|e| e.occurs_on(date))
            .collect();
        events.sort_by(|a, b| by_start(a, b));
        events
    }

    /// Events of the start day of `event`.
    pub fn select_event(&self, event: &ScheduleEvent) -> Vec<&ScheduleEvent> {
        self.select_day(event.start.date())
    }

    /// Shows the events of `date`, or a draft on it when there are none.
    pub fn click_day(&self, date: NaiveDate) -> DayAction<'_> {
        let events = self.select_day(date);
        if !events.is_empty() {
            return DayAction::ShowDay(events);
        }

        let calendar_id = self
            .calendars
            .iter()
            .find(|c| c.is_visible)
            .or(self.calendars.first())
            .map(|c| c.id.clone())
            .unwrap_or_default();
        DayAction::CreateEvent(EventDraft::for_date(date, self.now, calendar_id))
    }

    /// Visible events touching the `days` days from today, sorted by start.
    ///
    /// An event is included when it starts or ends in the window, or spans it entirely.
    pub fn upcoming(&self, days: u32) -> Vec<&ScheduleEvent> {
        let today = self.today();
        let last = today
            .checked_add_signed(TimeDelta::days(i64::from(days)))
            .unwrap_or(NaiveDate::MAX);
        let window = DaySpan::between(today, last);
        let mut events: Vec<_> = self
            .visible_events()
            .into_iter()
            .filter(|e| {
                let start = e.start.date();
                let end = e.end.date();
                window.contains(start) || window.contains(end) || (start <= today && end >= last)
            })
            .collect();
        events.sort_by(|a, b| by_start(a, b));
        events
    }

    /// Get an event by its id.
    pub fn get_event(&self, id: &str) -> Result<&ScheduleEvent, CoreError> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| CoreError::EventNotFound(id.to_string()))
    }

    /// Add a new event from the given draft.
    pub fn new_event(&mut self, draft: EventDraft) -> Result<&ScheduleEvent, CoreError> {
        self.ensure_calendar(&draft.calendar_id)?;
        let id = self.generate_uid(|this, uid| this.events.iter().any(|e| e.id == uid))?;
        let event = draft.into_event(id)?;
        tracing::debug!(id = %event.id, title = %event.title, "created event");
        self.events.push(event);
        self.events.last().ok_or_else(|| CoreError::EventNotFound(String::new()))
    }

    /// Applies `patch` to the event with `id`.
    pub fn update_event(
        &mut self,
        id: &str,
        patch: EventPatch,
    ) -> Result<&ScheduleEvent, CoreError> {
        if let Some(calendar_id) = &patch.calendar_id {
            self.ensure_calendar(calendar_id)?;
        }
        let event = self
            .events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| CoreError::EventNotFound(id.to_string()))?;

        let mut updated = event.clone();
        patch.apply_to(&mut updated)?;
        *event = updated;
        tracing::debug!(id, "updated event");
        Ok(&*event)
    }

    /// Removes the event with `id` and returns it.
    pub fn delete_event(&mut self, id: &str) -> Result<ScheduleEvent, CoreError> {
        let index = self
            .events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| CoreError::EventNotFound(id.to_string()))?;
        tracing::debug!(id, "deleted event");
        Ok(self.events.remove(index))
    }

    /// Adds a visible calendar.
    pub fn add_calendar(&mut self, draft: CalendarDraft) -> Result<&CalendarCategory, CoreError> {
        let id = self.generate_uid(|this, uid| find_calendar(&this.calendars, uid).is_some())?;
        let category = draft.into_category(id)?;
        tracing::debug!(id = %category.id, name = %category.name, "added calendar");
        self.calendars.push(category);
        self.calendars
            .last()
            .ok_or_else(|| CoreError::CalendarNotFound(String::new()))
    }

    /// Flips the visibility of a calendar, returns the new state.
    pub fn toggle_visibility(&mut self, id: &str) -> Result<bool, CoreError> {
        let calendar = self.calendar_mut(id)?;
        calendar.is_visible = !calendar.is_visible;
        Ok(calendar.is_visible)
    }

    pub fn set_visibility(&mut self, id: &str, visible: bool) -> Result<(), CoreError> {
        self.calendar_mut(id)?.is_visible = visible;
        Ok(())
    }

    /// Removes a calendar. Its events are kept but no longer shown.
    pub fn remove_calendar(&mut self, id: &str) -> Result<CalendarCategory, CoreError> {
        let index = self
            .calendars
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| CoreError::CalendarNotFound(id.to_string()))?;
        let orphans = self.events.iter().filter(|e| e.calendar_id == id).count();
        tracing::info!(id, orphans, "removed calendar");
        Ok(self.calendars.remove(index))
    }

    fn calendar_mut(&mut self, id: &str) -> Result<&mut CalendarCategory, CoreError> {
        self.calendars
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| CoreError::CalendarNotFound(id.to_string()))
    }

    fn ensure_calendar(&self, id: &str) -> Result<(), CoreError> {
        match find_calendar(&self.calendars, id) {
            Some(_) => Ok(()),
            None => Err(CoreError::CalendarNotFound(id.to_string())),
        }
    }

    fn generate_uid(&self, taken: impl Fn(&Self, &str) -> bool) -> Result<String, CoreError> {
        for _ in 0..16 {
            let uid = Uuid::new_v4().to_string();
            if !taken(self, &uid) {
                return Ok(uid);
            }
        }
        Err(CoreError::DuplicateId(
            "failed to generate a unique id after multiple attempts".to_string(),
        ))
    }
}
