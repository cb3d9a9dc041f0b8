//! Custom string transforms over a validated number
//!
//! A transform picks a base form, cuts characters off either end, and glues
//! a prefix back on. The separator is only inserted when a prefix is present
//! as well; a prefix on its own is concatenated directly.
//!
//! Copyright (c) 2026 Bdphone Team
//! Licensed under the Apache-2.0 license

use crate::descriptor::PhoneNumber;
use crate::error::{Error, Result};
use crate::normalizer::PhoneInput;
use crate::validation::{validate, ValidationOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Which form of the number a transform starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransformBase {
    /// `01712345678`
    #[default]
    Local,
    /// `1712345678`
    Core,
    /// `8801712345678`
    International,
}

impl TransformBase {
    pub fn as_str(self) -> &'static str {
        match self {
            TransformBase::Local => "local",
            TransformBase::Core => "core",
            TransformBase::International => "international",
        }
    }

    fn select(self, number: &PhoneNumber) -> &str {
        match self {
            TransformBase::Local => number.local(),
            TransformBase::Core => number.core(),
            TransformBase::International => number.international(),
        }
    }
}

impl fmt::Display for TransformBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransformBase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" => Ok(TransformBase::Local),
            "core" => Ok(TransformBase::Core),
            "international" => Ok(TransformBase::International),
            _ => Err(Error::UnsupportedBase {
                value: s.to_string(),
            }),
        }
    }
}

/// Options for [`customize`]. Validation options ride along.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformOptions {
    pub base: TransformBase,
    pub remove_from_start: usize,
    pub remove_from_end: usize,
    pub prefix: String,
    pub separator: String,
    #[serde(flatten)]
    pub validation: ValidationOptions,
}

impl TransformOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(mut self, base: TransformBase) -> Self {
        self.base = base;
        self
    }

    pub fn remove_from_start(mut self, count: usize) -> Self {
        self.remove_from_start = count;
        self
    }

    pub fn remove_from_end(mut self, count: usize) -> Self {
        self.remove_from_end = count;
        self
    }

    /// Signed variant of [`Self::remove_from_start`] for untyped callers
    pub fn try_remove_from_start(self, count: i64) -> Result<Self> {
        Ok(self.remove_from_start(non_negative("removeFromStart", count)?))
    }

    /// Signed variant of [`Self::remove_from_end`] for untyped callers
    pub fn try_remove_from_end(self, count: i64) -> Result<Self> {
        Ok(self.remove_from_end(non_negative("removeFromEnd", count)?))
    }

    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn validation(mut self, validation: ValidationOptions) -> Self {
        self.validation = validation;
        self
    }

    /// Apply the transform to an already validated number
    pub fn apply(&self, number: &PhoneNumber) -> Result<String> {
        let base = self.base.select(number);
        let length = base.len();

        if self.remove_from_start.saturating_add(self.remove_from_end) >= length {
            return Err(Error::RemovesEntireNumber {
                remove_from_start: self.remove_from_start,
                remove_from_end: self.remove_from_end,
                length,
            });
        }

        let trimmed = &base[self.remove_from_start..length - self.remove_from_end];

        if !self.prefix.is_empty() && !self.separator.is_empty() {
            Ok(format!("{}{}{}", self.prefix, self.separator, trimmed))
        } else {
            Ok(format!("{}{}", self.prefix, trimmed))
        }
    }
}

fn non_negative(field: &'static str, count: i64) -> Result<usize> {
    usize::try_from(count).map_err(|_| Error::InvalidRemovalCount {
        field,
        value: count.to_string(),
    })
}

/// Validate `input` and apply a custom transform.
///
/// `Ok(None)` means the number is invalid; `Err` means the options are.
pub fn customize(input: impl Into<PhoneInput>, options: &TransformOptions) -> Result<Option<String>> {
    let result = validate(input, &options.validation);
    let Some(number) = result.as_valid() else {
        return Ok(None);
    };

    let output = options.apply(number)?;
    debug!(base = %options.base, "custom transform applied");
    Ok(Some(output))
}

/// Same as [`customize`]
pub fn refactor(input: impl Into<PhoneInput>, options: &TransformOptions) -> Result<Option<String>> {
    customize(input, options)
}
