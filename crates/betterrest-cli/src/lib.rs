//! BetterRest CLI library.
//!
//! This library provides the terminal front-end for bedtime estimation:
//! configuration management, the input form, command execution, and output
//! formatting.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod form;
pub mod output;
pub mod repl;

pub use cli::{Cli, Command};
pub use config::Config;
pub use error::{CliError, Result};
pub use form::SleepForm;
pub use output::Formatter;
