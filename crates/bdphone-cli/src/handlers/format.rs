//! Format and normalize command handlers

use super::utils::{ensure_outcomes_valid, outcome_for, read_numbers};
use crate::cli::{FormatArgs, NormalizeArgs, NumberArgs};
use crate::config::Config;
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::{Outcome, OutputWriter};
use bdphone_core::{PhoneFormat, ValidationOptions};

/// Handle the format command
pub fn handle_format(args: FormatArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let options = config.validation_options(&args.validation);
    render(&args.input, args.format.into(), &options, output)
}

/// Handle the normalize command
///
/// Without `--as` the configured format is used, then E.164.
pub fn handle_normalize(
    args: NormalizeArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let options = config.validation_options(&args.validation);
    let format = args
        .format
        .map(PhoneFormat::from)
        .or(options.format)
        .unwrap_or(PhoneFormat::E164);
    render(&args.input, format, &options, output)
}

fn render(
    input: &NumberArgs,
    format: PhoneFormat,
    options: &ValidationOptions,
    output: &mut OutputWriter,
) -> Result<()> {
    let numbers = read_numbers(input)?;
    let _timer = Timer::with_details("format", format.as_str());

    let outcomes = numbers
        .iter()
        .map(|number| outcome_for(number, options, |n| Ok(n.format(format).to_string())))
        .collect::<Result<Vec<Outcome<String>>>>()?;

    output.outcomes(&outcomes)?;
    ensure_outcomes_valid(&outcomes)
}
