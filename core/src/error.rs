// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

/// Errors raised by the calendar controller and configuration.
///
/// Layout itself never fails; only edits and config loading can.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// No event with this id.
    EventNotFound(String),

    /// No calendar category with this id.
    CalendarNotFound(String),

    /// An id that must be unique is already taken.
    DuplicateId(String),

    /// Event or calendar title is blank.
    EmptyTitle,

    /// Color is not a `#rrggbb` hex string.
    InvalidColor(String),

    /// A date or month could not be parsed.
    InvalidDate(String),

    /// Configuration error.
    Config(String),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EventNotFound(id) => write!(f, "Event not found: {id}"),
            Self::CalendarNotFound(id) => write!(f, "Calendar not found: {id}"),
            Self::DuplicateId(id) => write!(f, "Duplicate id: {id}"),
            Self::EmptyTitle => write!(f, "Title must not be empty"),
            Self::InvalidColor(color) => {
                write!(f, "Invalid color {color:?}, expected a hex color like #10b981")
            }
            Self::InvalidDate(e) => write!(f, "Invalid date: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
        }
    }
}

impl std::error::Error for CoreError {}
