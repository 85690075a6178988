// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::{Color, Colorize};
use jifelog_core::{CalendarCategory, CalendarController};

use crate::arg::CommonArgs;
use crate::table::{Column, PaddingDirection, Table};
use crate::util::{OutputFormat, hex_to_color};

#[derive(Debug, Clone, Copy)]
pub struct CmdCalendars {
    pub output_format: OutputFormat,
}

impl CmdCalendars {
    pub const NAME: &str = "calendars";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("cal")
            .about("List calendars with their color and visibility")
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        Self {
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(self, calendar: &CalendarController) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing calendars...");
        let rows: Vec<_> = calendar
            .calendars()
            .iter()
            .map(|c| CalendarRow {
                events: calendar
                    .events()
                    .iter()
                    .filter(|e| e.calendar_id == c.id)
                    .count(),
                category: c,
            })
            .collect();

        match self.output_format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            }
            OutputFormat::Table if rows.is_empty() => {
                println!("{}", "No calendars".italic());
            }
            OutputFormat::Table => {
                let columns = [
                    CalendarColumn::Visibility,
                    CalendarColumn::Id,
                    CalendarColumn::Name,
                    CalendarColumn::Color,
                    CalendarColumn::Events,
                ];
                print!("{}", Table::new(&columns, &rows));
            }
        }
        Ok(())
    }
}

#[derive(Debug, serde::Serialize)]
struct CalendarRow<'a> {
    #[serde(flatten)]
    category: &'a CalendarCategory,
    events: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CalendarColumn {
    Visibility,
    Id,
    Name,
    Color,
    Events,
}

impl Column<CalendarRow<'_>> for CalendarColumn {
    fn format(&self, row: &CalendarRow<'_>) -> String {
        let category = row.category;
        match self {
            CalendarColumn::Visibility => match category.is_visible {
                true => "●".to_string(),
                false => "○".to_string(),
            },
            CalendarColumn::Id => category.id.clone(),
            CalendarColumn::Name => category.name.clone(),
            CalendarColumn::Color => category.color.clone(),
            CalendarColumn::Events => match row.events {
                1 => "1 event".to_string(),
                n => format!("{n} events"),
            },
        }
    }

    fn padding_direction(&self) -> PaddingDirection {
        match self {
            CalendarColumn::Events => PaddingDirection::Right,
            _ => PaddingDirection::Left,
        }
    }

    fn get_color(&self, row: &CalendarRow<'_>) -> Option<Color> {
        match self {
            CalendarColumn::Visibility | CalendarColumn::Color => {
                hex_to_color(&row.category.color)
            }
            CalendarColumn::Id if !row.category.is_visible => Some(Color::BrightBlack),
            _ => None,
        }
    }
}
