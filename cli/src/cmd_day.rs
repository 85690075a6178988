// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use chrono::NaiveDate;
use clap::{ArgMatches, Command, arg};
use colored::Colorize;
use jifelog_core::{CalendarController, DayAction, find_calendar};

use crate::arg::CommonArgs;
use crate::event_formatter::{EventColumn, EventFormatter, EventRow};
use crate::util::{OutputFormat, format_date, parse_date};

#[derive(Debug, Clone, Copy)]
pub struct CmdDay {
    pub date: NaiveDate,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdDay {
    pub const NAME: &str = "day";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("List the events of a day")
            .arg(arg!(<DATE> "The day to show (YYYY-MM-DD)").value_parser(parse_date))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches, verbose: bool) -> Result<Self, Box<dyn Error>> {
        let date = matches
            .get_one::<NaiveDate>("DATE")
            .copied()
            .ok_or("date is required")?;

        Ok(Self {
            date,
            output_format: CommonArgs::get_output_format(matches),
            verbose,
        })
    }

    pub fn run(self, calendar: &CalendarController) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing day...");
        let events = match calendar.click_day(self.date) {
            DayAction::ShowDay(events) => events,
            DayAction::CreateEvent(draft) => {
                if self.output_format == OutputFormat::Json {
                    println!("[]");
                    return Ok(());
                }

                let calendar_name = find_calendar(calendar.calendars(), &draft.calendar_id)
                    .map_or("-", |c| c.name.as_str());
                println!(
                    "{}",
                    format!("No events on {}", format_date(self.date)).italic()
                );
                println!(
                    "Add one from {} to {} in {}",
                    draft.start.to_string().bold(),
                    draft.end.to_string().bold(),
                    calendar_name.bold(),
                );
                return Ok(());
            }
        };

        if self.output_format == OutputFormat::Table {
            println!("{} {}", "►".green(), format_date(self.date).italic());
        }

        let rows: Vec<_> = events
            .into_iter()
            .map(|e| EventRow::with(calendar.calendars(), e))
            .collect();

        let mut columns = vec![
            EventColumn::time(),
            EventColumn::title(),
            EventColumn::calendar(),
        ];
        if self.verbose {
            columns.insert(0, EventColumn::id());
            columns.push(EventColumn::location());
        }

        let formatter = EventFormatter::new(columns).with_output_format(self.output_format);
        print!("{}", formatter.format(&rows));
        Ok(())
    }
}
