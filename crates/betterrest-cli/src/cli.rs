//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// BetterRest - Find out when to go to bed.
#[derive(Debug, Parser)]
#[command(name = "betterrest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Configuration file path
    #[arg(short, long, global = true, env = "BETTERREST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Model artifact path (overrides the configured model)
    #[arg(short, long, global = true)]
    pub model: Option<PathBuf>,

    /// Clock style for bedtimes
    #[arg(long, value_enum, global = true)]
    pub clock: Option<ClockArg>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Output format options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Table format (default)
    Table,
    /// JSON format
    Json,
    /// Quiet format (bedtime only)
    Quiet,
}

/// Clock style options.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ClockArg {
    /// 12-hour clock, e.g. 10:45 PM
    #[value(name = "12h")]
    TwelveHour,
    /// 24-hour clock, e.g. 22:45
    #[value(name = "24h")]
    TwentyFourHour,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Calculate a bedtime
    Calculate(CalculateArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),

    /// Enter the interactive form
    Repl,
}

/// Arguments for the calculate command.
#[derive(Debug, Parser)]
pub struct CalculateArgs {
    /// When you want to wake up (HH:MM or H:MM AM/PM)
    #[arg(short, long)]
    pub wake: Option<String>,

    /// Desired hours of sleep (4-12, quarter-hour steps)
    #[arg(short, long)]
    pub sleep: Option<f64>,

    /// Daily coffee intake in cups (1-20)
    #[arg(short = 'k', long)]
    pub coffee: Option<u32>,
}

/// Arguments for configuration management.
#[derive(Debug, Parser)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Configuration actions.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Table => crate::config::OutputFormat::Table,
            CliFormat::Json => crate::config::OutputFormat::Json,
            CliFormat::Quiet => crate::config::OutputFormat::Quiet,
        }
    }
}

impl From<ClockArg> for crate::config::ClockSetting {
    fn from(clock: ClockArg) -> Self {
        match clock {
            ClockArg::TwelveHour => crate::config::ClockSetting::TwelveHour,
            ClockArg::TwentyFourHour => crate::config::ClockSetting::TwentyFourHour,
        }
    }
}
