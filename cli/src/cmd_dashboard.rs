// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;

use clap::{ArgMatches, Command};
use colored::Colorize;
use jifelog_core::CalendarController;

use crate::cmd_month::CmdMonth;
use crate::cmd_upcoming::CmdUpcoming;
use crate::config::Config;
use crate::util::OutputFormat;

#[derive(Debug, Default, Clone, Copy)]
pub struct CmdDashboard {
    pub verbose: bool,
}

impl CmdDashboard {
    pub const NAME: &str = "dashboard";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Show the dashboard, which includes this month and upcoming events")
    }

    pub fn from(_matches: &ArgMatches, verbose: bool) -> Self {
        CmdDashboard { verbose }
    }

    /// Show the month of today and the upcoming events.
    pub fn run(
        self,
        calendar: &mut CalendarController,
        config: &Config,
    ) -> Result<(), Box<dyn Error>> {
        tracing::debug!(?self, "generating dashboard...");

        calendar.jump_to_today();
        CmdMonth::render(calendar, config, OutputFormat::Table)?;
        println!();

        let days = calendar.upcoming_days();
        println!("🗓️ {}", format!("다가오는 일정: {days} days").bold());
        CmdUpcoming::list(calendar, days, OutputFormat::Table, self.verbose)
    }
}
