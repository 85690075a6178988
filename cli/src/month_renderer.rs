// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

use chrono::{Datelike, Weekday};
use colored::{Color, ColoredString, Colorize};
use jifelog_core::{CellLayout, DAYS_PER_WEEK, FALLBACK_COLOR, Slot, YearMonth};
use unicode_width::UnicodeWidthStr;

use crate::util::{fit_to_width, hex_to_color, weekday_label};

const WEEKDAYS: [Weekday; DAYS_PER_WEEK] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Draws laid out month cells as a terminal grid.
///
/// Every day cell is `cell_width` columns wide. Bars are drawn on the calendar color
/// and join across neighbouring cells, so cells have no border.
#[derive(Debug, Clone, Copy)]
pub struct MonthRenderer {
    cell_width: usize,
}

impl MonthRenderer {
    pub const DEFAULT_CELL_WIDTH: usize = 14;
    pub const MIN_CELL_WIDTH: usize = 6;

    pub fn new(cell_width: usize) -> Self {
        Self {
            cell_width: cell_width.max(Self::MIN_CELL_WIDTH),
        }
    }

    pub fn render<'a>(&'a self, month: YearMonth, cells: &'a [CellLayout]) -> Display<'a> {
        Display {
            renderer: self,
            month,
            cells,
        }
    }

    fn date_label(&self, cell: &CellLayout) -> ColoredString {
        let day = cell.date.day();
        let label = match cell.is_today {
            true => format!("{day} 오늘"),
            false => day.to_string(),
        };
        let label = fit_to_width(&label, self.cell_width);

        let label = match cell.date.weekday() {
            Weekday::Sun => label.red(),
            Weekday::Sat => label.blue(),
            _ => label.normal(),
        };
        match (cell.is_today, cell.is_current_month) {
            (true, _) => label.bold().underline(),
            (false, true) => label,
            (false, false) => label.dimmed(),
        }
    }

    fn write_slot(&self, f: &mut fmt::Formatter<'_>, slot: Option<&Slot>) -> fmt::Result {
        let width = self.cell_width;
        match slot {
            Some(Slot::Bar(bar)) => {
                let color = color_of(&bar.color);
                let edge = |rounded: bool| match rounded {
                    true => " ".normal(),
                    false => " ".on_color(color),
                };
                let title = bar.title.as_deref().unwrap_or_default();
                let body = fit_to_width(title, width - 2).on_color(color).white();
                write!(f, "{}{}{}", edge(bar.rounded_left), body, edge(bar.rounded_right))
            }
            Some(Slot::Inline(inline)) => {
                let dot = "●".color(color_of(&inline.color));
                let title = fit_to_width(&format!(" {}", inline.title), width - 1);
                write!(f, "{dot}{title}")
            }
            Some(Slot::Empty) | None => write!(f, "{}", " ".repeat(width)),
        }
    }
}

impl Default for MonthRenderer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CELL_WIDTH)
    }
}

#[derive(Debug)]
pub struct Display<'a> {
    renderer: &'a MonthRenderer,
    month: YearMonth,
    cells: &'a [CellLayout],
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self.renderer.cell_width;

        let title = self.month.title();
        let indent = (width * DAYS_PER_WEEK).saturating_sub(title.width()) / 2;
        writeln!(f, "{}{}", " ".repeat(indent), title.bold())?;

        for weekday in WEEKDAYS {
            let label = fit_to_width(weekday_label(weekday), width);
            let label = match weekday {
                Weekday::Sun => label.red(),
                Weekday::Sat => label.blue(),
                _ => label.normal(),
            };
            write!(f, "{}", label.bold())?;
        }
        writeln!(f)?;

        for week in self.cells.chunks(DAYS_PER_WEEK) {
            for cell in week {
                write!(f, "{}", self.renderer.date_label(cell))?;
            }
            writeln!(f)?;

            let rows = week.iter().map(|c| c.slots.len()).max().unwrap_or(0);
            for row in 0..rows {
                for cell in week {
                    self.renderer.write_slot(f, cell.slots.get(row))?;
                }
                writeln!(f)?;
            }

            if week.iter().any(|c| c.overflow > 0) {
                for cell in week {
                    let more = match cell.overflow {
                        0 => String::new(),
                        n => format!("+{n}"),
                    };
                    write!(f, "{}", fit_to_width(&more, width).dimmed())?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

fn color_of(hex: &str) -> Color {
    hex_to_color(hex)
        .or_else(|| hex_to_color(FALLBACK_COLOR))
        .unwrap_or(Color::White)
}
