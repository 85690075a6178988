// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use chrono::{Datelike, NaiveDate, TimeDelta};

use crate::{CoreError, DaySpan};

/// Number of cells in a month grid, six full weeks.
pub const GRID_CELLS: usize = 42;

/// Number of days in a grid row, Sunday first.
pub const DAYS_PER_WEEK: usize = 7;

// Keep a margin from chrono's limits so that padding days never overflow.
const MIN_YEAR: i32 = -262_000;
const MAX_YEAR: i32 = 262_000;

/// A calendar month, with a zero-based month number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month0: u32,
}

impl YearMonth {
    /// Creates a month, rolling `month0` outside `0..=11` over into neighbouring years.
    pub fn new(year: i32, month0: i32) -> Self {
        let year = year
            .saturating_add(month0.div_euclid(12))
            .clamp(MIN_YEAR, MAX_YEAR);
        let month0 = month0.rem_euclid(12) as u32;
        Self { year, month0 }
    }

    /// The month containing `date`.
    pub fn from_date(date: NaiveDate) -> Self {
        Self::new(date.year(), date.month0() as i32)
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month, January is 0.
    pub fn month0(&self) -> u32 {
        self.month0
    }

    /// One-based month, January is 1.
    pub fn month(&self) -> u32 {
        self.month0 + 1
    }

    /// The month `delta` months away.
    pub fn shift(&self, delta: i32) -> Self {
        Self::new(self.year, (self.month0 as i32).saturating_add(delta))
    }

    pub fn succ(&self) -> Self {
        self.shift(1)
    }

    pub fn pred(&self) -> Self {
        self.shift(-1)
    }

    /// The first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month(), 1).unwrap_or(NaiveDate::MIN)
    }

    /// The last day of the month, leap years included.
    pub fn last_day(&self) -> NaiveDate {
        self.succ().first_day().pred_opt().unwrap_or(NaiveDate::MIN)
    }

    pub fn days_in_month(&self) -> u32 {
        self.last_day().day()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month0() == self.month0
    }

    /// Title shown above the grid, e.g. `2026년 1월`.
    pub fn title(&self) -> String {
        format!("{}년 {}월", self.year, self.month())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month())
    }
}

impl FromStr for YearMonth {
    type Err = CoreError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CoreError::InvalidDate(format!("expected YYYY-MM, got {s:?}"));
        let (year, month) = s.trim().rsplit_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: i32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self::new(year, month - 1))
    }
}

/// One day in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_current_month: bool,
}

/// Six Sunday-first weeks around a month, always [`GRID_CELLS`] days long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: YearMonth,
    cells: Vec<DayCell>,
}

impl MonthGrid {
    pub fn month(&self) -> YearMonth {
        self.month
    }

    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&DayCell> {
        self.cells.get(index)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Date of the top-left cell.
    pub fn first_date(&self) -> NaiveDate {
        self.cells[0].date
    }

    /// Date of the bottom-right cell.
    pub fn last_date(&self) -> NaiveDate {
        self.cells[GRID_CELLS - 1].date
    }

    /// The visible window as a day span.
    pub fn span(&self) -> DaySpan {
        DaySpan::between(self.first_date(), self.last_date())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.index_of(date).is_some()
    }

    /// Cell index of `date`, if it is visible.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        let offset = (date - self.first_date()).num_days();
        usize::try_from(offset).ok().filter(|i| *i < GRID_CELLS)
    }

    /// Whether the cell opens a week row.
    pub fn is_week_start(index: usize) -> bool {
        index % DAYS_PER_WEEK == 0
    }

    /// The grid split into its six week rows.
    pub fn week_rows(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(DAYS_PER_WEEK)
    }
}

/// Builds the 42-cell grid for `month0` (zero-based) of `year`.
///
/// The grid starts with the tail of the previous month so that the first of the
/// month lands on its weekday column, and is padded with the head of the next month.
pub fn build_month_grid(year: i32, month0: i32) -> MonthGrid {
    let month = YearMonth::new(year, month0);
    let first = month.first_day();
    let leading = i64::from(first.weekday().num_days_from_sunday());
    let start = first - TimeDelta::days(leading);

    let cells = start
        .iter_days()
        .take(GRID_CELLS)
        .map(|date| DayCell {
            date,
            is_current_month: month.contains(date),
        })
        .collect();

    tracing::trace!(%month, %start, "built month grid");
    MonthGrid { month, cells }
}
