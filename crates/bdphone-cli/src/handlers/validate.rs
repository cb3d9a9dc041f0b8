//! Validate command handler

use super::utils::{ensure_all_valid, read_numbers};
use crate::cli::ValidateArgs;
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::OutputWriter;
use bdphone_core::{validate, ValidationResult};

/// Handle the validate command
pub fn handle_validate(args: ValidateArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let numbers = read_numbers(&args.input)?;
    let options = config.validation_options(&args.validation);
    let _timer = Timer::with_details("validate", &format!("{} number(s)", numbers.len()));

    let results: Vec<ValidationResult> = numbers
        .iter()
        .map(|number| validate(number.as_str(), &options))
        .collect();

    output.validation_results(&results, args.detailed)?;

    let invalid = results.iter().filter(|r| !r.is_valid()).count();
    if invalid == 0 && results.len() > 1 {
        output.success(&format!("✓ All {} numbers are valid", results.len()))?;
    }
    ensure_all_valid(invalid, results.len())
}
