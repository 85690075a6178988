// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command, arg, value_parser};
use jifelog_core::{CalendarController, Direction, YearMonth};

use crate::arg::CommonArgs;
use crate::config::Config;
use crate::month_renderer::MonthRenderer;
use crate::util::OutputFormat;

#[derive(Debug, Clone, Copy)]
pub struct CmdMonth {
    /// The month to show, the month of today when absent.
    pub month: Option<YearMonth>,
    pub step: Option<Direction>,
    pub output_format: OutputFormat,
}

impl CmdMonth {
    pub const NAME: &str = "month";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .alias("m")
            .about("Show a month calendar")
            .arg(
                arg!([MONTH] "The month to show (YYYY-MM), defaults to the month of today")
                    .value_parser(value_parser!(YearMonth)),
            )
            .arg(arg!(--prev "Show the month before").conflicts_with("next"))
            .arg(arg!(--next "Show the month after"))
            .arg(CommonArgs::output_format())
    }

    pub fn from(matches: &ArgMatches) -> Self {
        let step = if matches.get_flag("prev") {
            Some(Direction::Prev)
        } else if matches.get_flag("next") {
            Some(Direction::Next)
        } else {
            None
        };

        Self {
            month: matches.get_one("MONTH").copied(),
            step,
            output_format: CommonArgs::get_output_format(matches),
        }
    }

    pub fn run(
        self,
        calendar: &mut CalendarController,
        config: &Config,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "showing month...");
        match self.month {
            Some(month) => calendar.show_month(month),
            None => {
                calendar.jump_to_today();
            }
        }
        if let Some(step) = self.step {
            calendar.step_month(step);
        }

        Self::render(calendar, config, self.output_format)
    }

    /// Print the displayed month of `calendar`.
    pub fn render(
        calendar: &CalendarController,
        config: &Config,
        output_format: OutputFormat,
    ) -> Result<(), Box<dyn Error>> {
        let layout = calendar.layout();
        match output_format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&layout.cells)?);
            }
            OutputFormat::Table => {
                let renderer = MonthRenderer::new(config.cell_width);
                print!("{}", renderer.render(calendar.month(), &layout.cells));
            }
        }
        Ok(())
    }
}
