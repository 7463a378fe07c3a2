//! BetterRest CLI - Find out when to go to bed.

use anyhow::Context;
use betterrest_cli::config::Config;
use betterrest_cli::{commands, repl, Cli, Command, Formatter, SleepForm};
use betterrest_domain::BedtimeEstimator;
use betterrest_model::OnDemandRegressor;
use clap::Parser;
use std::process::ExitCode;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    // Initialize tracing (log to stderr)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Load config, falling back to defaults when no file exists
    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => Config::path()?,
    };
    let mut config = Config::load_from(&config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;

    // Flags override config settings
    config.apply_overrides(&cli);
    let formatter = config.formatter();

    match cli.command {
        Some(Command::Config(args)) => {
            commands::execute_config(args, &config, &config_path, &formatter)?;
        }
        Some(Command::Calculate(args)) => {
            let estimator = build_estimator(&config, &formatter);
            let initial = SleepForm::from_defaults(&config.defaults)?;
            let result = commands::execute_calculate(args, &initial, &estimator, &formatter)?;
            return Ok(ExitCode::from(commands::exit_status(&result)));
        }
        None | Some(Command::Repl) => {
            let estimator = build_estimator(&config, &formatter);
            let initial = SleepForm::from_defaults(&config.defaults)?;
            repl::run_repl(&config, &config_path, initial, &estimator, &formatter)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Wrap the configured regressor, warning up front if it cannot be loaded.
///
/// Calculations still run and report the failure as an error alert.
fn build_estimator(
    config: &Config,
    formatter: &Formatter,
) -> BedtimeEstimator<OnDemandRegressor> {
    let estimator = BedtimeEstimator::new(config.regressor());
    match estimator.model().load() {
        Ok(model) => info!(model = %model.describe(), "Model ready"),
        Err(e) => {
            warn!(error = %e, kind = %estimator.model().kind(), "Model could not be loaded");
            eprintln!("{}", formatter.warning(&e.to_string()));
        }
    }
    estimator
}
