//! Output formatting and writing utilities
//!
//! This module provides utilities for formatting and writing output
//! in various formats (JSON, YAML, human-readable) for validation
//! results and per-number command outcomes.

use crate::cli::OutputFormat;
use crate::error::Result;
use bdphone_core::{PhoneFormat, PhoneNumber, RejectionReason, ValidationResult};
use colored::Colorize;
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};
use tracing::trace;

/// Result of running one command over one input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome<T> {
    /// The input as given
    pub input: String,

    /// Command output for an accepted number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<T>,

    /// Why the number was rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectionReason>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason_code: Option<&'static str>,
}

impl<T> Outcome<T> {
    pub fn accepted(input: impl Into<String>, value: T) -> Self {
        Self {
            input: input.into(),
            value: Some(value),
            reason: None,
            reason_code: None,
        }
    }

    pub fn rejected(input: impl Into<String>, reason: RejectionReason) -> Self {
        Self {
            input: input.into(),
            value: None,
            reason: Some(reason),
            reason_code: Some(reason.code()),
        }
    }

    pub fn is_accepted(&self) -> bool {
        self.reason.is_none()
    }
}

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format validation results, optionally listing every derived form
    fn format_validation_results(&self, results: &[ValidationResult], detailed: bool)
        -> Result<String>;

    /// Format per-number outcomes
    fn format_outcomes<T: Serialize + Display>(&self, outcomes: &[Outcome<T>]) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => {
                // For human format, use pretty JSON as fallback
                Ok(serde_json::to_string_pretty(value)?)
            }
        }
    }

    fn format_validation_results(
        &self,
        results: &[ValidationResult],
        detailed: bool,
    ) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_validation_results_human(results, detailed)),
            _ => self.format(&results),
        }
    }

    fn format_outcomes<T: Serialize + Display>(&self, outcomes: &[Outcome<T>]) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_outcomes_human(outcomes)),
            _ => self.format(&outcomes),
        }
    }
}

/// Format validation results for human consumption
fn format_validation_results_human(results: &[ValidationResult], detailed: bool) -> String {
    let mut output = String::new();

    for result in results {
        match result {
            ValidationResult::Valid(number) => {
                let operator = number
                    .operator()
                    .map(|op| op.display_name())
                    .unwrap_or("unknown operator");
                output.push_str(&format!(
                    "{} {} -> {} ({})\n",
                    "✓".green(),
                    number.input(),
                    number.e164(),
                    operator
                ));
                if detailed {
                    output.push_str(&format_forms_human(number));
                }
            }
            ValidationResult::Invalid(rejection) => {
                output.push_str(&format!(
                    "{} {}: {} [{}]\n",
                    "✗".red(),
                    display_input(&rejection.input),
                    rejection.reason,
                    rejection.reason_code().dimmed()
                ));
            }
        }
    }

    output.trim_end().to_string()
}

/// Every presentation form of an accepted number, indented
fn format_forms_human(number: &PhoneNumber) -> String {
    let mut output = String::new();
    for format in PhoneFormat::ALL {
        output.push_str(&format!(
            "    {:<14} {}\n",
            format!("{}:", format).bold(),
            number.format(format)
        ));
    }
    output.push_str(&format!(
        "    {:<14} {}\n",
        "core:".bold(),
        number.core()
    ));
    output.push_str(&format!(
        "    {:<14} {}\n",
        "operator code:".bold(),
        number.operator_code()
    ));
    output
}

/// Format outcomes one per line
fn format_outcomes_human<T: Display>(outcomes: &[Outcome<T>]) -> String {
    outcomes
        .iter()
        .map(|outcome| match (&outcome.value, &outcome.reason) {
            (Some(value), _) => format!("{} -> {}", outcome.input, value),
            (None, Some(reason)) => format!(
                "{} {}: {}",
                "✗".red(),
                display_input(&outcome.input),
                reason
            ),
            (None, None) => outcome.input.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn display_input(input: &str) -> String {
    if input.is_empty() {
        "(empty)".to_string()
    } else {
        input.to_string()
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Write raw output
    pub fn write(&mut self, content: &str) -> Result<()> {
        write!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write a warning message
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.format != OutputFormat::Human {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.yellow().to_string())
        } else {
            self.writeln(&format!("WARNING: {}", message))
        }
    }

    /// Write validation results with specialized formatting
    pub fn validation_results(&mut self, results: &[ValidationResult], detailed: bool) -> Result<()> {
        let formatted = self.format.format_validation_results(results, detailed)?;
        self.emit(&formatted)
    }

    /// Write per-number outcomes with specialized formatting
    pub fn outcomes<T: Serialize + Display>(&mut self, outcomes: &[Outcome<T>]) -> Result<()> {
        let formatted = self.format.format_outcomes(outcomes)?;
        self.emit(&formatted)
    }

    fn emit(&mut self, formatted: &str) -> Result<()> {
        trace!(bytes = formatted.len(), "Outputting data");
        match self.format {
            OutputFormat::Yaml => self.write(formatted),
            _ => self.writeln(formatted),
        }
    }
}
