// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{NaiveDate, NaiveTime};

use crate::LooseDateTime;

/// NOTE: Used for config files, so it should be stable across different runs.
pub const STABLE_FORMAT_DATEONLY: &str = "%Y-%m-%d";
pub const STABLE_FORMAT_FLOATING: &str = "%Y-%m-%dT%H:%M:%S";
pub const STABLE_FORMAT_MINUTES: &str = "%Y-%m-%dT%H:%M";

/// The position of a date relative to a day span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePosition {
    /// The date is before the first day of the span.
    Before,

    /// The date is within the span.
    InRange,

    /// The date is after the last day of the span.
    After,
}

pub const fn start_of_day_naive() -> NaiveTime {
    NaiveTime::from_hms_opt(0, 0, 0).expect("00:00:00 must exist in NaiveTime")
}

/// Using a leap second to represent the end of the day
pub const fn end_of_day_naive() -> NaiveTime {
    NaiveTime::from_hms_nano_opt(23, 59, 59, 1_999_999_999)
        .expect("23:59:59:1_999_999_999 must exist in NaiveTime")
}

/// An inclusive range of calendar days, `first <= last` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DaySpan {
    first: NaiveDate,
    last: NaiveDate,
}

impl DaySpan {
    /// Builds the span covered by `start..=end`, using only the date parts.
    ///
    /// An end before the start collapses the span onto the start day.
    pub fn from_bounds(start: &LooseDateTime, end: &LooseDateTime) -> Self {
        let first = start.date();
        let last = end.date();
        if start.with_start_of_day() > end.with_start_of_day() {
            tracing::warn!(%start, %end, "end before start, collapsing to the start day");
            return Self::single(first);
        }
        Self { first, last }
    }

    /// The span between two dates, in either order.
    pub fn between(a: NaiveDate, b: NaiveDate) -> Self {
        Self {
            first: a.min(b),
            last: a.max(b),
        }
    }

    /// A span of exactly one day.
    pub const fn single(date: NaiveDate) -> Self {
        Self {
            first: date,
            last: date,
        }
    }

    pub fn first(&self) -> NaiveDate {
        self.first
    }

    pub fn last(&self) -> NaiveDate {
        self.last
    }

    /// Number of calendar days covered, at least 1.
    pub fn num_days(&self) -> i64 {
        (self.last - self.first).num_days() + 1
    }

    pub fn is_single_day(&self) -> bool {
        self.first == self.last
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.position(date) == RangePosition::InRange
    }

    /// Where `date` falls relative to the span.
    pub fn position(&self, date: NaiveDate) -> RangePosition {
        if date < self.first {
            RangePosition::Before
        } else if date > self.last {
            RangePosition::After
        } else {
            RangePosition::InRange
        }
    }

    /// Whether both spans share at least one day.
    pub fn intersects(&self, other: &DaySpan) -> bool {
        self.first <= other.last && other.first <= self.last
    }

    /// The part of the span inside `window`, if any.
    pub fn clip(&self, window: &DaySpan) -> Option<DaySpan> {
        self.intersects(window).then(|| DaySpan {
            first: self.first.max(window.first),
            last: self.last.min(window.last),
        })
    }
}
