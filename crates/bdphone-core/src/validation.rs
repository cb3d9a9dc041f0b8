//! Validation entry point
//!
//! [`validate`] runs the normalizer, builds the descriptor, and applies the
//! optional expected-operator check. Every rejection comes back as
//! [`ValidationResult::Invalid`]; nothing here returns an `Err`.
//!
//! Copyright (c) 2026 Bdphone Team
//! Licensed under the Apache-2.0 license

use crate::descriptor::{describe, PhoneFormat, PhoneNumber};
use crate::normalizer::{normalize_local, PhoneInput, RejectionReason};
use crate::operator::Operator;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Options accepted by every validating operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Accept ten-digit input starting with `1` as if the leading zero were there
    pub allow_missing_leading_zero: bool,

    /// Reject numbers not owned by this carrier (alias text accepted)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_operator: Option<String>,

    /// Target format for [`crate::normalize`]; E.164 when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<PhoneFormat>,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            allow_missing_leading_zero: true,
            expected_operator: None,
            format: None,
        }
    }
}

impl ValidationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allow_missing_leading_zero(mut self, allow: bool) -> Self {
        self.allow_missing_leading_zero = allow;
        self
    }

    /// Require a carrier; accepts an [`Operator`] or any alias text
    pub fn expected_operator(mut self, operator: impl ToString) -> Self {
        self.expected_operator = Some(operator.to_string());
        self
    }

    pub fn format(mut self, format: PhoneFormat) -> Self {
        self.format = Some(format);
        self
    }
}

/// A rejected input and the first rule it failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub input: String,
    pub reason: RejectionReason,
}

impl Rejection {
    pub fn reason_code(&self) -> &'static str {
        self.reason.code()
    }
}

/// Outcome of [`validate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid(PhoneNumber),
    Invalid(Rejection),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid(_))
    }

    /// The text the caller supplied (trimmed when valid)
    pub fn input(&self) -> &str {
        match self {
            ValidationResult::Valid(number) => number.input(),
            ValidationResult::Invalid(rejection) => &rejection.input,
        }
    }

    pub fn reason(&self) -> Option<RejectionReason> {
        match self {
            ValidationResult::Valid(_) => None,
            ValidationResult::Invalid(rejection) => Some(rejection.reason),
        }
    }

    pub fn as_valid(&self) -> Option<&PhoneNumber> {
        match self {
            ValidationResult::Valid(number) => Some(number),
            ValidationResult::Invalid(_) => None,
        }
    }

    pub fn into_valid(self) -> Option<PhoneNumber> {
        match self {
            ValidationResult::Valid(number) => Some(number),
            ValidationResult::Invalid(_) => None,
        }
    }
}

impl Serialize for ValidationResult {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Tagged<'a, T> {
            is_valid: bool,
            #[serde(flatten)]
            body: &'a T,
        }

        match self {
            ValidationResult::Valid(number) => Tagged {
                is_valid: true,
                body: number,
            }
            .serialize(serializer),
            ValidationResult::Invalid(rejection) => {
                #[derive(Serialize)]
                struct Body<'a> {
                    input: &'a str,
                    reason: &'a RejectionReason,
                    reason_code: &'static str,
                }

                Tagged {
                    is_valid: false,
                    body: &Body {
                        input: &rejection.input,
                        reason: &rejection.reason,
                        reason_code: rejection.reason_code(),
                    },
                }
                .serialize(serializer)
            }
        }
    }
}

fn reject(input: String, reason: RejectionReason) -> ValidationResult {
    debug!(reason_code = reason.code(), "phone number rejected");
    ValidationResult::Invalid(Rejection { input, reason })
}

/// Validate `input` as a Bangladeshi mobile number.
///
/// An `expected_operator` that does not resolve through the alias table
/// rejects before the number itself is looked at.
pub fn validate(input: impl Into<PhoneInput>, options: &ValidationOptions) -> ValidationResult {
    let input = input.into();

    let expected = match options.expected_operator.as_deref() {
        Some(name) => match Operator::from_alias(name) {
            Some(operator) => Some(operator),
            None => return reject(input.to_text(), RejectionReason::UnsupportedOperator),
        },
        None => None,
    };

    let normalized = match normalize_local(&input, options.allow_missing_leading_zero) {
        Ok(normalized) => normalized,
        Err(reason) => return reject(input.to_text(), reason),
    };

    let number = describe(normalized.input, normalized.local);

    if let Some(expected) = expected {
        if number.operator() != Some(expected) {
            return reject(
                number.input().to_string(),
                RejectionReason::OperatorMismatch { expected },
            );
        }
    }

    debug!(
        masked = number.masked(),
        operator = ?number.operator(),
        "phone number accepted"
    );
    ValidationResult::Valid(number)
}

/// Whether `input` is a valid Bangladeshi mobile number
pub fn is_valid(input: impl Into<PhoneInput>, options: &ValidationOptions) -> bool {
    validate(input, options).is_valid()
}
