// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Terminal front end of JifeLog: month grids, day lists and the upcoming list.

mod arg;
mod cli;
mod cmd_calendars;
mod cmd_dashboard;
mod cmd_day;
mod cmd_month;
mod cmd_upcoming;
mod config;
mod event_formatter;
mod month_renderer;
mod table;
mod util;

pub use crate::cli::{Cli, Commands, run};
pub use crate::config::{Config, parse_config};
pub use crate::month_renderer::MonthRenderer;
pub use crate::util::OutputFormat;
