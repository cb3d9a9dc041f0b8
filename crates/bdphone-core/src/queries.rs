//! Projections over a validation result
//!
//! Each query validates first and returns `None` (or `false`) when the number
//! is invalid. Caller mistakes such as an unknown format name surface as
//! [`crate::Error`] instead.

use crate::descriptor::PhoneFormat;
use crate::error::{Error, Result};
use crate::normalizer::PhoneInput;
use crate::operator::Operator;
use crate::validation::{validate, ValidationOptions};

/// Project `format` from a valid number
pub fn format(
    input: impl Into<PhoneInput>,
    format: PhoneFormat,
    options: &ValidationOptions,
) -> Option<String> {
    validate(input, options)
        .as_valid()
        .map(|number| number.format(format).to_string())
}

/// As [`format`], with the format given by name.
///
/// The number is validated first; the name is only parsed for an accepted
/// number, so an invalid number yields `Ok(None)` whatever the name.
pub fn format_str(
    input: impl Into<PhoneInput>,
    format_name: &str,
    options: &ValidationOptions,
) -> Result<Option<String>> {
    let Some(number) = validate(input, options).into_valid() else {
        return Ok(None);
    };
    let target = format_name.parse::<PhoneFormat>()?;
    Ok(Some(number.format(target).to_string()))
}

/// Project `options.format`, defaulting to E.164
pub fn normalize(input: impl Into<PhoneInput>, options: &ValidationOptions) -> Option<String> {
    format(input, options.format.unwrap_or(PhoneFormat::E164), options)
}

pub fn get_operator(input: impl Into<PhoneInput>, options: &ValidationOptions) -> Option<Operator> {
    validate(input, options)
        .as_valid()
        .and_then(|number| number.operator())
}

/// Whether `input` is a valid number owned by `operator`
pub fn is_operator(
    input: impl Into<PhoneInput>,
    operator: Operator,
    options: &ValidationOptions,
) -> bool {
    get_operator(input, options) == Some(operator)
}

/// As [`is_operator`], resolving `operator_name` through the alias table.
///
/// The name is resolved before the number is examined, so an unknown alias is
/// an error even when the number is invalid.
pub fn is_operator_named(
    input: impl Into<PhoneInput>,
    operator_name: &str,
    options: &ValidationOptions,
) -> Result<bool> {
    let operator = Operator::from_alias(operator_name).ok_or_else(|| Error::UnsupportedOperator {
        value: operator_name.to_string(),
    })?;
    Ok(is_operator(input, operator, options))
}
