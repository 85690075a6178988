// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, path::PathBuf, str::FromStr};

use tokio::fs;

use jifelog_core::{APP_NAME, Config as CoreConfig};

use crate::month_renderer::MonthRenderer;

const JIFELOG_CONFIG_ENV: &str = "JIFELOG_CONFIG";

/// Loads the configuration.
///
/// The path is taken from `path`, then the `JIFELOG_CONFIG` environment variable, then
/// the user config directory. Only a missing file at the default location falls back
/// to the bundled sample data.
#[tracing::instrument]
pub async fn parse_config(path: Option<PathBuf>) -> Result<(CoreConfig, Config), Box<dyn Error>> {
    let path = if let Some(path) = path {
        path
    } else if let Ok(env_path) = std::env::var(JIFELOG_CONFIG_ENV) {
        PathBuf::from(env_path)
    } else {
        let config = get_config_dir()?.join(format!("{APP_NAME}/config.toml"));
        if !config.exists() {
            tracing::info!(path = %config.display(), "no config found, showing sample data");
            return Ok((CoreConfig::sample(), Config::default()));
        }
        config
    };

    let raw = fs::read_to_string(&path)
        .await
        .map_err(|e| format!("Failed to read config file at {}: {}", path.display(), e))?
        .parse::<ConfigRaw>()?;

    raw.core.validate()?;
    raw.cli.validate()?;
    Ok((raw.core, raw.cli))
}

/// Settings of the terminal front end, the `[cli]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Width of a day cell in the month grid, in terminal columns.
    #[serde(default = "default_cell_width")]
    pub cell_width: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell_width: default_cell_width(),
        }
    }
}

impl Config {
    fn validate(&self) -> Result<(), Box<dyn Error>> {
        if self.cell_width < MonthRenderer::MIN_CELL_WIDTH {
            return Err(format!(
                "cli.cell_width must be at least {}, got {}",
                MonthRenderer::MIN_CELL_WIDTH,
                self.cell_width
            )
            .into());
        }
        Ok(())
    }
}

const fn default_cell_width() -> usize {
    MonthRenderer::DEFAULT_CELL_WIDTH
}

#[derive(Debug, serde::Deserialize)]
struct ConfigRaw {
    #[serde(default = "CoreConfig::empty")]
    core: CoreConfig,

    #[serde(default)]
    cli: Config,
}

impl FromStr for ConfigRaw {
    type Err = Box<dyn Error>;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str(s)?)
    }
}

fn get_config_dir() -> Result<PathBuf, Box<dyn Error>> {
    #[cfg(unix)]
    let config_dir = xdg::BaseDirectories::new().get_config_home();
    #[cfg(not(unix))]
    let config_dir = dirs::config_dir();
    config_dir.ok_or_else(|| "User-specific home directory not found".into())
}
