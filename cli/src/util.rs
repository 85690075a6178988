// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use chrono::{Datelike, NaiveDate, Weekday};
use colored::Color;
use jifelog_core::parse_hex_color;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// The output format for commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| format!("Invalid date: {s:?}. Expected format: YYYY-MM-DD"))
}

/// Short Korean label of the weekday.
pub fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Sun => "일",
        Weekday::Mon => "월",
        Weekday::Tue => "화",
        Weekday::Wed => "수",
        Weekday::Thu => "목",
        Weekday::Fri => "금",
        Weekday::Sat => "토",
    }
}

/// Formats a date like `2026-01-23 (금)`.
pub fn format_date(date: NaiveDate) -> String {
    format!(
        "{} ({})",
        date.format("%Y-%m-%d"),
        weekday_label(date.weekday())
    )
}

/// Terminal color of a `#rrggbb` string.
pub fn hex_to_color(hex: &str) -> Option<Color> {
    parse_hex_color(hex).map(|(r, g, b)| Color::TrueColor { r, g, b })
}

/// Cuts `s` to at most `width` terminal columns, on grapheme boundaries.
pub fn truncate_to_width(s: &str, width: usize) -> &str {
    let mut used = 0;
    for (idx, g) in s.grapheme_indices(true) {
        let w = g.width();
        if used + w > width {
            return &s[..idx];
        }
        used += w;
    }
    s
}

/// Truncates or pads `s` with spaces to exactly `width` terminal columns.
pub fn fit_to_width(s: &str, width: usize) -> String {
    let s = truncate_to_width(s, width);
    let padding = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(padding))
}
