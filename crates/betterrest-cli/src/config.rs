//! Configuration management for the CLI.

use crate::cli::Cli;
use crate::error::{CliError, Result};
use crate::form::SleepForm;
use crate::output::Formatter;
use betterrest_domain::ClockStyle;
use betterrest_model::{ModelKind, OnDemandRegressor};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Regression backend
    #[serde(default)]
    pub model: ModelSettings,

    /// Initial form values
    #[serde(default)]
    pub defaults: FormDefaults,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Regression backend selection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ModelSettings {
    /// Backend kind
    #[serde(default)]
    pub kind: ModelKind,

    /// Artifact path; the bundled model is used when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Values the form starts with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormDefaults {
    /// Wake time (HH:MM or H:MM AM/PM)
    #[serde(default = "default_wake")]
    pub wake: String,

    /// Sleep goal in hours
    #[serde(default = "default_sleep_hours")]
    pub sleep_hours: f64,

    /// Coffee cups per day
    #[serde(default = "default_coffee_cups")]
    pub coffee_cups: u32,
}

/// Global CLI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Clock style for bedtimes
    #[serde(default)]
    pub clock: ClockSetting,

    /// REPL history size
    #[serde(default = "default_history_size")]
    pub history_size: usize,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
    /// Quiet (bedtime only) format
    Quiet,
}

/// Clock style as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ClockSetting {
    /// `10:45 PM`
    #[default]
    #[serde(rename = "12h")]
    TwelveHour,
    /// `22:45`
    #[serde(rename = "24h")]
    TwentyFourHour,
}

impl From<ClockSetting> for ClockStyle {
    fn from(setting: ClockSetting) -> Self {
        match setting {
            ClockSetting::TwelveHour => ClockStyle::TwelveHour,
            ClockSetting::TwentyFourHour => ClockStyle::TwentyFourHour,
        }
    }
}

impl Config {
    /// Directory holding the config and REPL history.
    pub fn dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".betterrest"))
    }

    /// Get the configuration file path.
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// REPL history file kept next to the given config file.
    pub fn history_path_for(config_path: &Path) -> PathBuf {
        config_path.with_file_name("history.txt")
    }

    /// Load configuration from a file, or defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Serialize to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))
    }

    /// Apply command-line flags on top of the file values.
    ///
    /// An explicit `--model` artifact always selects the linear backend.
    pub fn apply_overrides(&mut self, cli: &Cli) {
        if let Some(path) = &cli.model {
            self.model.kind = ModelKind::Linear;
            self.model.path = Some(path.clone());
        }
        if let Some(format) = cli.format {
            self.settings.format = format.into();
        }
        if let Some(clock) = cli.clock {
            self.settings.clock = clock.into();
        }
        if cli.no_color {
            self.settings.color = false;
        }
    }

    /// Regressor for the configured backend.
    pub fn regressor(&self) -> OnDemandRegressor {
        OnDemandRegressor::new(self.model.kind, self.model.path.clone())
    }

    /// Formatter for the configured output settings.
    pub fn formatter(&self) -> Formatter {
        Formatter::new(
            self.settings.format,
            self.settings.color,
            self.settings.clock.into(),
        )
    }

    /// Check that the form defaults are acceptable inputs.
    pub fn validate(&self) -> Result<()> {
        SleepForm::from_defaults(&self.defaults)
            .map(|_| ())
            .map_err(|e| CliError::Config(format!("Invalid [defaults]: {}", e)))
    }
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            wake: default_wake(),
            sleep_hours: default_sleep_hours(),
            coffee_cups: default_coffee_cups(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            clock: ClockSetting::TwelveHour,
            history_size: 1000,
        }
    }
}

fn default_wake() -> String {
    "07:00".to_string()
}

fn default_sleep_hours() -> f64 {
    8.0
}

fn default_coffee_cups() -> u32 {
    1
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_history_size() -> usize {
    1000
}
