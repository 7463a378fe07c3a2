//! Interactive form (Read-Eval-Print Loop) mode.
//!
//! The user edits the three inputs with steppers and triggers a calculation
//! as often as they like. A failed calculation prints the error alert and
//! the session carries on.

use crate::commands;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::form::{SleepForm, Step};
use crate::output::Formatter;
use betterrest_domain::traits::SleepRegressor;
use betterrest_domain::{AlertMessage, BedtimeEstimator, WakeTime};
use rustyline::config::Config as EditorConfig;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::fmt::Display;
use std::path::Path;

/// Run the interactive form.
pub fn run_repl<R>(
    config: &Config,
    config_path: &Path,
    initial: SleepForm,
    estimator: &BedtimeEstimator<R>,
    formatter: &Formatter,
) -> Result<()>
where
    R: SleepRegressor,
    R::Error: Display,
{
    println!("{}", formatter.info("BetterRest - Type 'help' for commands, 'exit' to quit"));
    println!();
    println!("{}", formatter.form_summary(&initial));

    // Initialize readline editor
    let editor_config = EditorConfig::builder()
        .max_history_size(config.settings.history_size)
        .map_err(|e| CliError::Config(format!("Invalid history size: {}", e)))?
        .build();
    let mut editor = DefaultEditor::with_config(editor_config).map_err(|e| {
        CliError::Io(std::io::Error::other(format!(
            "Failed to initialize editor: {}",
            e
        )))
    })?;

    // History is best-effort
    let history_path = Config::history_path_for(config_path);
    editor.load_history(&history_path).ok();

    let mut form = initial;

    loop {
        match editor.readline("betterrest> ") {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                match parse_repl_command(line) {
                    Ok(ReplCommand::Exit) => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    Ok(ReplCommand::Help) => print_help(),
                    Ok(ReplCommand::Show) => println!("{}", formatter.form_summary(&form)),
                    Ok(ReplCommand::Calculate) => {
                        let result = commands::calculate(estimator, &form);
                        let message = AlertMessage::from_result(&result, formatter.clock());
                        println!("{}", formatter.alert(&message));
                    }
                    Ok(edit) => match apply_edit(&mut form, edit, initial) {
                        Ok(()) => println!("{}", formatter.form_summary(&form)),
                        Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                    },
                    Err(e) => {
                        eprintln!("{}", formatter.error(&e.to_string()));
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    // Save history
    if let Some(parent) = history_path.parent() {
        std::fs::create_dir_all(parent).ok();
    }
    editor.save_history(&history_path).ok();

    Ok(())
}

/// REPL command type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReplCommand {
    /// Leave the REPL
    Exit,
    /// Print usage
    Help,
    /// Print the current form
    Show,
    /// Estimate a bedtime for the current form
    Calculate,
    /// Restore the starting values
    Reset,
    /// Set the wake time
    Wake(WakeTime),
    /// Change the sleep goal
    Sleep(Step<f64>),
    /// Change the coffee intake
    Coffee(Step<u32>),
}

/// Parse a REPL command line.
pub fn parse_repl_command(line: &str) -> Result<ReplCommand> {
    let parts: Vec<&str> = line.split_whitespace().collect();

    let Some((&name, args)) = parts.split_first() else {
        return Err(CliError::InvalidInput("Empty command".to_string()));
    };

    match name {
        "exit" | "quit" | "q" => Ok(ReplCommand::Exit),
        "help" | "?" => Ok(ReplCommand::Help),
        "show" => Ok(ReplCommand::Show),
        "calculate" | "calc" | "c" => Ok(ReplCommand::Calculate),
        "reset" => Ok(ReplCommand::Reset),
        "wake" => {
            if args.is_empty() {
                return Err(CliError::InvalidInput(
                    "Usage: wake <HH:MM | H:MM AM/PM>".to_string(),
                ));
            }
            Ok(ReplCommand::Wake(WakeTime::parse(&args.join(" "))?))
        }
        "sleep" => parse_step(args, "sleep <hours | + | ->").map(ReplCommand::Sleep),
        "coffee" => parse_step(args, "coffee <cups | + | ->").map(ReplCommand::Coffee),
        _ => Err(CliError::InvalidInput(format!(
            "Unknown command: {}. Type 'help' for available commands.",
            name
        ))),
    }
}

fn parse_step<T: std::str::FromStr>(args: &[&str], usage: &str) -> Result<Step<T>> {
    match args {
        ["+"] | ["up"] => Ok(Step::Up),
        ["-"] | ["down"] => Ok(Step::Down),
        [value] => value
            .parse()
            .map(Step::Set)
            .map_err(|_| CliError::InvalidInput(format!("Not a number: {}", value))),
        _ => Err(CliError::InvalidInput(format!("Usage: {}", usage))),
    }
}

/// Apply a form-editing command.
pub fn apply_edit(form: &mut SleepForm, command: ReplCommand, initial: SleepForm) -> Result<()> {
    match command {
        ReplCommand::Wake(wake) => form.set_wake(wake),
        ReplCommand::Sleep(step) => form.step_sleep(step)?,
        ReplCommand::Coffee(step) => form.step_coffee(step)?,
        ReplCommand::Reset => *form = initial,
        other => {
            return Err(CliError::InvalidInput(format!(
                "{:?} does not edit the form",
                other
            )))
        }
    }
    Ok(())
}

/// Print REPL help.
fn print_help() {
    println!("Available commands:");
    println!();
    println!("  wake <time>             Set wake time (07:00 or 7:00 AM)");
    println!("  sleep <hours | + | ->   Set desired sleep (4-12, steps of 0.25)");
    println!("  coffee <cups | + | ->   Set daily coffee (1-20)");
    println!("  show                    Show current values");
    println!("  calculate               Calculate your ideal bedtime");
    println!("  reset                   Restore starting values");
    println!("  help                    Show this help message");
    println!("  exit                    Exit the REPL");
    println!();
}
