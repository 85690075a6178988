// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use colored::Colorize;
use jifelog_core::CalendarController;

use crate::arg::CommonArgs;
use crate::event_formatter::{EventColumn, EventFormatter, EventRow};
use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdUpcoming {
    /// Days to look ahead, the configured window when absent.
    pub days: Option<u32>,
    pub output_format: OutputFormat,
    pub verbose: bool,
}

impl CmdUpcoming {
    pub const NAME: &str = "upcoming";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("up")
            .about("List the events of the coming days")
            .arg(
                arg!(-d --days <DAYS> "Number of days to look ahead, today included")
                    .value_parser(value_parser!(u32)),
            )
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches, verbose: bool) -> Self {
        Self {
            days: matches.get_one("days").copied(),
            output_format: CommonArgs::get_output_format(matches),
            verbose,
        }
    }

    pub fn run(self, calendar: &CalendarController) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "listing upcoming events...");
        let days = self.days.unwrap_or(calendar.upcoming_days());
        Self::list(calendar, days, self.output_format, self.verbose)
    }

    /// List the upcoming events of `days` days with the given output format.
    pub fn list(
        calendar: &CalendarController,
        days: u32,
        output_format: OutputFormat,
        verbose: bool,
    ) -> Result<(), Box<dyn Error>> {
        let events = calendar.upcoming(days);
        if events.is_empty() && output_format == OutputFormat::Table {
            println!("{}", "No upcoming events".italic());
            return Ok(());
        }

        let rows: Vec<_> = events
            .into_iter()
            .map(|e| EventRow::with(calendar.calendars(), e))
            .collect();

        let mut columns = vec![
            EventColumn::date(),
            EventColumn::time(),
            EventColumn::title(),
            EventColumn::calendar(),
        ];
        if verbose {
            columns.insert(0, EventColumn::id());
            columns.push(EventColumn::location());
        }

        let formatter = EventFormatter::new(columns).with_output_format(output_format);
        print!("{}", formatter.format(&rows));
        Ok(())
    }
}
