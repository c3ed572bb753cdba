//! recur configuration at ~/.config/recur/config.toml

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use recur_core::Scope;
use recur_core::event::DEFAULT_NOTIFICATION_MINUTES;
use serde::{Deserialize, Serialize};

const DEFAULT_DURATION_MINUTES: u32 = 60;

fn default_notification_minutes() -> u32 {
    DEFAULT_NOTIFICATION_MINUTES
}

fn default_duration_minutes() -> u32 {
    DEFAULT_DURATION_MINUTES
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Reminder lead time for new events when --notify is omitted
    #[serde(default = "default_notification_minutes")]
    pub notification_minutes: u32,

    /// Event length used when --end is omitted
    #[serde(default = "default_duration_minutes")]
    pub default_duration_minutes: u32,

    /// Scope for edit/delete when --scope is omitted
    #[serde(default)]
    pub default_scope: Scope,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            notification_minutes: DEFAULT_NOTIFICATION_MINUTES,
            default_duration_minutes: DEFAULT_DURATION_MINUTES,
            default_scope: Scope::default(),
        }
    }
}

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("recur");

        Ok(config_dir.join("config.toml"))
    }

    /// Load config from `path`, or the default location. A missing file means defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => Self::config_path()?,
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Invalid config file {}", path.display()))
    }

    fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> Result<()> {
        let contents = format!(
            "\
# recur configuration

# Reminder lead time (minutes) for new events:
# notification_minutes = {}

# Event length (minutes) when no end time is given:
# default_duration_minutes = {}

# Scope for edit/delete when --scope is omitted (\"single\" or \"all\"):
# default_scope = \"{}\"
",
            DEFAULT_NOTIFICATION_MINUTES,
            DEFAULT_DURATION_MINUTES,
            Scope::default()
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Could not create config directory")?;
        }

        std::fs::write(path, contents).context("Could not write config file")?;

        Ok(())
    }
}
