// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, path::PathBuf};

use chrono::NaiveDate;
use clap::{ArgMatches, Command, builder::styling, crate_version};
use colored::Colorize;
use jifelog_core::{APP_NAME, CalendarController};
use tracing_subscriber::EnvFilter;

use crate::arg::GlobalArgs;
use crate::cmd_calendars::CmdCalendars;
use crate::cmd_dashboard::CmdDashboard;
use crate::cmd_day::CmdDay;
use crate::cmd_month::CmdMonth;
use crate::cmd_upcoming::CmdUpcoming;
use crate::config::{Config, parse_config};

/// Run the JifeLog command-line interface.
pub async fn run() -> Result<(), Box<dyn Error>> {
    match Cli::parse() {
        Ok(cli) => {
            init_tracing(cli.verbose);
            if let Err(e) = cli.run().await {
                println!("{} {}", "Error:".red(), e);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Calendars hidden for this run
    pub hide: Vec<String>,

    /// Overrides the date of today
    pub today: Option<NaiveDate>,

    pub verbose: bool,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("JifeLog - your month at a glance, with calendars and upcoming events.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // allow default to dashboard
            .arg_required_else_help(false)
            .arg(GlobalArgs::config())
            .arg(GlobalArgs::hide())
            .arg(GlobalArgs::today())
            .arg(GlobalArgs::verbose())
            .subcommand(CmdDashboard::command())
            .subcommand(CmdMonth::command())
            .subcommand(CmdDay::command())
            .subcommand(CmdUpcoming::command())
            .subcommand(CmdCalendars::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let verbose = GlobalArgs::get_verbose(&matches);
        let command = match matches.subcommand() {
            Some((CmdDashboard::NAME, matches)) => Dashboard(CmdDashboard::from(matches, verbose)),
            Some((CmdMonth::NAME, matches)) => Month(CmdMonth::from(matches)),
            Some((CmdDay::NAME, matches)) => Day(CmdDay::from(matches, verbose)?),
            Some((CmdUpcoming::NAME, matches)) => Upcoming(CmdUpcoming::from(matches, verbose)),
            Some((CmdCalendars::NAME, matches)) => Calendars(CmdCalendars::from(matches)),
            None => Dashboard(CmdDashboard { verbose }),
            _ => unreachable!(),
        };

        Ok(Cli {
            config: GlobalArgs::get_config(&matches),
            hide: GlobalArgs::get_hide(&matches),
            today: GlobalArgs::get_today(&matches),
            verbose,
            command,
        })
    }

    /// Run the command
    pub async fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!("parsing configuration...");
        let (core_config, config) = parse_config(self.config).await?;
        let mut calendar = CalendarController::new(core_config)?;

        if let Some(today) = self.today {
            calendar.set_today(today);
            calendar.jump_to_today();
        }
        for id in &self.hide {
            calendar.set_visibility(id, false)?;
        }

        self.command.run(&mut calendar, &config)
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Show the month of today and upcoming events
    Dashboard(CmdDashboard),

    /// Show a month calendar
    Month(CmdMonth),

    /// List the events of a day
    Day(CmdDay),

    /// List upcoming events
    Upcoming(CmdUpcoming),

    /// List calendars
    Calendars(CmdCalendars),
}

impl Commands {
    /// Run the command on the loaded calendar
    #[rustfmt::skip]
    pub fn run(
        self,
        calendar: &mut CalendarController,
        config: &Config,
    ) -> Result<(), Box<dyn Error>> {
        use Commands::*;
        match self {
            Dashboard(a) => a.run(calendar, config),
            Month(a)     => a.run(calendar, config),
            Day(a)       => a.run(calendar),
            Upcoming(a)  => a.run(calendar),
            Calendars(a) => a.run(calendar),
        }
    }
}
