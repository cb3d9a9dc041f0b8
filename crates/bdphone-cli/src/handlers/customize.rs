//! Customize (refactor) command handler

use super::utils::{ensure_outcomes_valid, outcome_for, read_numbers};
use crate::cli::CustomizeArgs;
use crate::config::{apply_validation_flags, Config};
use crate::error::Result;
use crate::logging::timing::Timer;
use crate::output::{Outcome, OutputWriter};
use bdphone_core::TransformOptions;

/// Handle the customize command
pub fn handle_customize(
    args: CustomizeArgs,
    config: &Config,
    output: &mut OutputWriter,
) -> Result<()> {
    let options = transform_options(&args, config)?;
    let numbers = read_numbers(&args.input)?;
    let _timer = Timer::new("customize");

    tracing::debug!(
        base = %options.base,
        remove_from_start = options.remove_from_start,
        remove_from_end = options.remove_from_end,
        "Applying transform"
    );

    let outcomes = numbers
        .iter()
        .map(|number| outcome_for(number, &options.validation, |n| Ok(options.apply(n)?)))
        .collect::<Result<Vec<Outcome<String>>>>()?;

    output.outcomes(&outcomes)?;
    ensure_outcomes_valid(&outcomes)
}

/// Preset (or configured validation defaults) with command-line overrides on top
fn transform_options(args: &CustomizeArgs, config: &Config) -> Result<TransformOptions> {
    let mut options = match &args.preset {
        Some(name) => config.transform_preset(name)?.clone(),
        None => TransformOptions::new().validation(config.validation.clone()),
    };

    if let Some(base) = args.base {
        options.base = base.into();
    }
    if let Some(count) = args.remove_start {
        options.remove_from_start = count;
    }
    if let Some(count) = args.remove_end {
        options.remove_from_end = count;
    }
    if let Some(prefix) = &args.prefix {
        options.prefix = prefix.clone();
    }
    if let Some(separator) = &args.separator {
        options.separator = separator.clone();
    }
    options.validation = apply_validation_flags(options.validation, &args.validation);

    Ok(options)
}
