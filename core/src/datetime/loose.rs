// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, ops::Add};

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::de;

use crate::datetime::util::{
    STABLE_FORMAT_DATEONLY, STABLE_FORMAT_FLOATING, STABLE_FORMAT_MINUTES, end_of_day_naive,
    start_of_day_naive,
};

/// A point in time that is either a bare date or a floating local date and time.
///
/// Schedules are entered in the user's wall-clock time, so no timezone is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LooseDateTime {
    /// Date only without time.
    DateOnly(NaiveDate),

    /// Floating date and time without timezone.
    Floating(NaiveDateTime),
}

impl LooseDateTime {
    /// Returns the date part
    pub fn date(&self) -> NaiveDate {
        match self {
            LooseDateTime::DateOnly(d) => *d,
            LooseDateTime::Floating(dt) => dt.date(),
        }
    }

    /// Returns the time part, if available.
    pub fn time(&self) -> Option<NaiveTime> {
        match self {
            LooseDateTime::DateOnly(_) => None,
            LooseDateTime::Floating(dt) => Some(dt.time()),
        }
    }

    /// Converts to a datetime with default start time (00:00:00) if time is missing.
    pub fn with_start_of_day(&self) -> NaiveDateTime {
        NaiveDateTime::new(self.date(), self.time().unwrap_or_else(start_of_day_naive))
    }

    /// Converts to a datetime with default end time (23:59:59.999999999) if time is missing.
    pub fn with_end_of_day(&self) -> NaiveDateTime {
        NaiveDateTime::new(self.date(), self.time().unwrap_or_else(end_of_day_naive))
    }

    /// Converts to a string representation of date and time.
    pub fn format_stable(&self) -> String {
        match self {
            LooseDateTime::DateOnly(d) => d.format(STABLE_FORMAT_DATEONLY).to_string(),
            LooseDateTime::Floating(dt) => dt.format(STABLE_FORMAT_FLOATING).to_string(),
        }
    }

    /// Parses the stable representation, also accepting `YYYY-MM-DDTHH:MM` as typed
    /// into a datetime-local input.
    pub fn parse_stable(s: &str) -> Option<Self> {
        match s.len() {
            // 2006-01-02
            10 => NaiveDate::parse_from_str(s, STABLE_FORMAT_DATEONLY)
                .map(Self::DateOnly)
                .ok(),

            // 2006-01-02T15:04
            16 => NaiveDateTime::parse_from_str(s, STABLE_FORMAT_MINUTES)
                .map(Self::Floating)
                .ok(),

            // 2006-01-02T15:04:05
            19 => NaiveDateTime::parse_from_str(s, STABLE_FORMAT_FLOATING)
                .map(Self::Floating)
                .ok(),

            _ => None,
        }
    }
}

impl fmt::Display for LooseDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LooseDateTime::DateOnly(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            LooseDateTime::Floating(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M")),
        }
    }
}

impl From<NaiveDate> for LooseDateTime {
    fn from(d: NaiveDate) -> Self {
        LooseDateTime::DateOnly(d)
    }
}

impl From<NaiveDateTime> for LooseDateTime {
    fn from(dt: NaiveDateTime) -> Self {
        LooseDateTime::Floating(dt)
    }
}

impl Add<TimeDelta> for LooseDateTime {
    type Output = Self;
    fn add(self, rhs: TimeDelta) -> Self::Output {
        match self {
            LooseDateTime::DateOnly(d) => LooseDateTime::DateOnly(d.add(rhs)),
            LooseDateTime::Floating(dt) => LooseDateTime::Floating(dt.add(rhs)),
        }
    }
}

impl serde::Serialize for LooseDateTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.format_stable())
    }
}

impl<'de> serde::Deserialize<'de> for LooseDateTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct LooseVisitor;

        impl de::Visitor<'_> for LooseVisitor {
            type Value = LooseDateTime;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(
                    r#"a date like "2026-01-28" or a datetime like "2026-01-23T14:00:00""#,
                )
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                LooseDateTime::parse_stable(value)
                    .ok_or_else(|| de::Error::custom(format!("invalid date or datetime: {value}")))
            }
        }

        deserializer.deserialize_str(LooseVisitor)
    }
}
