//! Shared utilities for command handlers

use crate::cli::NumberArgs;
use crate::error::{Error, Result};
use crate::output::Outcome;
use bdphone_core::{validate, PhoneNumber, ValidationOptions, ValidationResult};
use std::io::{self, BufRead};

/// Numbers from the command line, or one per line from stdin
pub fn read_numbers(args: &NumberArgs) -> Result<Vec<String>> {
    if !args.numbers.is_empty() {
        return Ok(args.numbers.clone());
    }

    let stdin = io::stdin();
    read_numbers_from(stdin.lock())
}

/// Non-blank lines of `reader`, at least one required
pub fn read_numbers_from(reader: impl BufRead) -> Result<Vec<String>> {
    let mut numbers = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            numbers.push(line);
        }
    }

    if numbers.is_empty() {
        return Err(Error::NoInput);
    }

    tracing::debug!(count = numbers.len(), "Read numbers from stdin");
    Ok(numbers)
}

/// Validate `input` and run `render` on the accepted number
pub fn outcome_for<T>(
    input: &str,
    options: &ValidationOptions,
    render: impl FnOnce(&PhoneNumber) -> Result<T>,
) -> Result<Outcome<T>> {
    match validate(input, options) {
        ValidationResult::Valid(number) => Ok(Outcome::accepted(input, render(&number)?)),
        ValidationResult::Invalid(rejection) => Ok(Outcome::rejected(input, rejection.reason)),
    }
}

/// Fail with [`Error::InvalidNumbers`] when anything was rejected
pub fn ensure_all_valid(invalid: usize, total: usize) -> Result<()> {
    if invalid > 0 {
        tracing::info!(invalid, total, "Some numbers were rejected");
        return Err(Error::InvalidNumbers { invalid, total });
    }
    Ok(())
}

/// Count rejected outcomes and fail if there are any
pub fn ensure_outcomes_valid<T>(outcomes: &[Outcome<T>]) -> Result<()> {
    let invalid = outcomes.iter().filter(|o| !o.is_accepted()).count();
    ensure_all_valid(invalid, outcomes.len())
}
