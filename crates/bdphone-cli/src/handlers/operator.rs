//! Operator command handler

use super::utils::{ensure_outcomes_valid, outcome_for, read_numbers};
use crate::cli::OperatorArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::{Outcome, OutputWriter};
use bdphone_core::Operator;

/// Handle the operator command
///
/// With `--is`, prints whether each number belongs to that operator.
/// An unknown operator name is a usage error, reported before any input is read.
pub fn handle_operator(args: OperatorArgs, config: &Config, output: &mut OutputWriter) -> Result<()> {
    let options = config.validation_options(&args.validation);

    match args.is.as_deref() {
        Some(name) => {
            let expected: Operator = name.parse()?;
            let numbers = read_numbers(&args.input)?;
            tracing::debug!(operator = %expected, "Checking operator membership");

            let outcomes = numbers
                .iter()
                .map(|number| outcome_for(number, &options, |n| Ok(n.operator() == Some(expected))))
                .collect::<Result<Vec<Outcome<bool>>>>()?;

            output.outcomes(&outcomes)?;
            ensure_outcomes_valid(&outcomes)
        }
        None => {
            let numbers = read_numbers(&args.input)?;
            let outcomes = numbers
                .iter()
                .map(|number| {
                    outcome_for(number, &options, |n| {
                        Ok(n.operator()
                            .map(Operator::display_name)
                            .unwrap_or("Unknown")
                            .to_string())
                    })
                })
                .collect::<Result<Vec<Outcome<String>>>>()?;

            output.outcomes(&outcomes)?;
            ensure_outcomes_valid(&outcomes)
        }
    }
}
