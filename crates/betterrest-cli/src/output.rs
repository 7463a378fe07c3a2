//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use crate::form::SleepForm;
use betterrest_domain::{AlertMessage, ClockStyle, EstimationResult};
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
    clock: ClockStyle,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool, clock: ClockStyle) -> Self {
        Self {
            format,
            color_enabled,
            clock,
        }
    }

    /// Clock style used for bedtimes.
    pub fn clock(&self) -> ClockStyle {
        self.clock
    }

    /// Format the outcome of one estimation.
    pub fn format_outcome(&self, form: &SleepForm, result: &EstimationResult) -> Result<String> {
        let message = AlertMessage::from_result(result, self.clock);
        match self.format {
            OutputFormat::Json => self.format_outcome_json(form, result, &message),
            OutputFormat::Table => Ok(self.format_outcome_table(form, &message)),
            OutputFormat::Quiet => Ok(message.body),
        }
    }

    /// Format the outcome as JSON.
    fn format_outcome_json(
        &self,
        form: &SleepForm,
        result: &EstimationResult,
        message: &AlertMessage,
    ) -> Result<String> {
        let status = if result.is_success() { "success" } else { "error" };
        let bedtime = result.bedtime().map(|t| t.format("%H:%M").to_string());

        let value = serde_json::json!({
            "wake": form.wake.to_string(),
            "sleep_hours": form.sleep.hours(),
            "coffee_cups": form.coffee.cups(),
            "status": status,
            "bedtime": bedtime,
            "title": message.title,
            "message": message.body,
        });

        Ok(serde_json::to_string_pretty(&value)?)
    }

    /// Format the inputs and the alert as a table.
    fn format_outcome_table(&self, form: &SleepForm, message: &AlertMessage) -> String {
        let mut table = self.form_table(form);
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        format!("{}\n{}", table, self.alert(message))
    }

    /// Describe the current form values.
    pub fn form_summary(&self, form: &SleepForm) -> String {
        let mut table = self.form_table(form);
        table.with(Style::rounded());
        table.to_string()
    }

    fn form_table(&self, form: &SleepForm) -> tabled::Table {
        let mut builder = Builder::default();
        builder.push_record(["Input", "Value"]);
        builder.push_record(["Wake up".to_string(), self.clock.format(form.wake.time())]);
        builder.push_record(["Desired sleep".to_string(), form.sleep.to_string()]);
        builder.push_record(["Daily coffee".to_string(), form.coffee.to_string()]);
        builder.build()
    }

    /// Format a titled alert.
    pub fn alert(&self, message: &AlertMessage) -> String {
        if message.is_error() {
            format!(
                "{}\n  {}",
                self.colorize(&format!("✗ {}", message.title), "red"),
                message.body
            )
        } else {
            format!(
                "{}\n  {}",
                self.colorize(&message.title, "cyan"),
                self.colorize(&message.body, "green")
            )
        }
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use betterrest_domain::FAILURE_MESSAGE;
    use chrono::NaiveTime;

    fn success() -> EstimationResult {
        EstimationResult::Success {
            bedtime: NaiveTime::from_hms_opt(22, 45, 0).unwrap(),
        }
    }

    fn plain(format: OutputFormat) -> Formatter {
        Formatter::new(format, false, ClockStyle::TwelveHour)
    }

    #[test]
    fn test_quiet_format() {
        let output = plain(OutputFormat::Quiet)
            .format_outcome(&SleepForm::default(), &success())
            .unwrap();
        assert_eq!(output, "10:45 PM");

        let output = plain(OutputFormat::Quiet)
            .format_outcome(&SleepForm::default(), &EstimationResult::failure())
            .unwrap();
        assert_eq!(output, FAILURE_MESSAGE);
    }

    #[test]
    fn test_json_format() {
        let output = plain(OutputFormat::Json)
            .format_outcome(&SleepForm::default(), &success())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["status"], "success");
        assert_eq!(value["bedtime"], "22:45");
        assert_eq!(value["wake"], "07:00");
        assert_eq!(value["coffee_cups"], 1);
        assert_eq!(value["title"], "Your ideal bedtime is");
    }

    #[test]
    fn test_json_failure() {
        let output = plain(OutputFormat::Json)
            .format_outcome(&SleepForm::default(), &EstimationResult::failure())
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["status"], "error");
        assert!(value["bedtime"].is_null());
        assert_eq!(value["message"], FAILURE_MESSAGE);
    }

    #[test]
    fn test_table_format() {
        let output = plain(OutputFormat::Table)
            .format_outcome(&SleepForm::default(), &success())
            .unwrap();
        assert!(output.contains("Wake up"));
        assert!(output.contains("7:00 AM"));
        assert!(output.contains("8 hours"));
        assert!(output.contains("1 cup"));
        assert!(output.contains("Your ideal bedtime is"));
        assert!(output.contains("10:45 PM"));
    }

    #[test]
    fn test_error_alert() {
        let formatter = plain(OutputFormat::Table);
        let message = AlertMessage::from_result(&EstimationResult::failure(), formatter.clock());
        assert_eq!(formatter.alert(&message), format!("✗ Error\n  {}", FAILURE_MESSAGE));
    }

    #[test]
    fn test_twenty_four_hour_clock() {
        let formatter = Formatter::new(OutputFormat::Quiet, false, ClockStyle::TwentyFourHour);
        let output = formatter.format_outcome(&SleepForm::default(), &success()).unwrap();
        assert_eq!(output, "22:45");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = plain(OutputFormat::Table);
        assert_eq!(formatter.success("test"), "✓ test");
        assert_eq!(formatter.info("test"), "ℹ test");
    }
}
