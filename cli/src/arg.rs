// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Arg, ArgAction, ArgMatches, ValueHint, arg, value_parser};

use crate::util::{OutputFormat, parse_date};

#[derive(Debug, Clone, Copy)]
pub struct CommonArgs;

impl CommonArgs {
    pub fn output_format() -> Arg {
        arg!(--"output-format" <FORMAT> "Output format")
            .value_parser(value_parser!(OutputFormat))
            .default_value("table")
    }

    pub fn get_output_format(matches: &ArgMatches) -> OutputFormat {
        matches
            .get_one("output-format")
            .copied()
            .unwrap_or(OutputFormat::Table)
    }
}

/// Flags accepted before or after any subcommand.
#[derive(Debug, Clone, Copy)]
pub struct GlobalArgs;

impl GlobalArgs {
    pub fn config() -> Arg {
        arg!(-c --config [CONFIG] "Path to the configuration file")
            .long_help(
                "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/jifelog/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/jifelog/config.toml on Windows. Sample data is shown when no file exists there.",
            )
            .value_parser(value_parser!(PathBuf))
            .value_hint(ValueHint::FilePath)
            .global(true)
    }

    pub fn get_config(matches: &ArgMatches) -> Option<PathBuf> {
        matches.get_one("config").cloned()
    }

    pub fn hide() -> Arg {
        arg!(--hide <ID> "Hide a calendar for this run, may be repeated")
            .action(ArgAction::Append)
            .value_delimiter(',')
            .global(true)
    }

    pub fn get_hide(matches: &ArgMatches) -> Vec<String> {
        matches
            .get_many::<String>("hide")
            .map(|ids| ids.cloned().collect())
            .unwrap_or_default()
    }

    pub fn today() -> Arg {
        arg!(--today <DATE> "Treat DATE (YYYY-MM-DD) as today")
            .value_parser(parse_date)
            .global(true)
    }

    pub fn get_today(matches: &ArgMatches) -> Option<NaiveDate> {
        matches.get_one("today").copied()
    }

    pub fn verbose() -> Arg {
        arg!(-v --verbose "Show more detailed information and debug logs").global(true)
    }

    pub fn get_verbose(matches: &ArgMatches) -> bool {
        matches.get_flag("verbose")
    }
}
