//! Presentation forms derived from a canonical local number
//!
//! Everything here is string slicing over a [`LocalNumber`] plus one lookup in
//! the operator code table. There is no failure path.

use crate::error::{Error, Result};
use crate::normalizer::LocalNumber;
use crate::operator::Operator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const MASK: &str = "****";

/// Output formats a validated number can be projected to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhoneFormat {
    /// `01712345678`
    #[default]
    Local,
    /// `8801712345678`
    International,
    /// `+8801712345678`
    E164,
    /// `017-123-45678`
    Pretty,
    /// `017****5678`
    Masked,
}

impl PhoneFormat {
    pub const ALL: [PhoneFormat; 5] = [
        PhoneFormat::Local,
        PhoneFormat::International,
        PhoneFormat::E164,
        PhoneFormat::Pretty,
        PhoneFormat::Masked,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            PhoneFormat::Local => "local",
            PhoneFormat::International => "international",
            PhoneFormat::E164 => "e164",
            PhoneFormat::Pretty => "pretty",
            PhoneFormat::Masked => "masked",
        }
    }
}

impl fmt::Display for PhoneFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PhoneFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        PhoneFormat::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnsupportedFormat {
                value: s.to_string(),
            })
    }
}

/// A validated Bangladeshi mobile number and all of its derived forms
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhoneNumber {
    input: String,
    local: LocalNumber,
    international: String,
    e164: String,
    pretty: String,
    masked: String,
    operator_code: String,
    operator: Option<Operator>,
}

impl PhoneNumber {
    /// The trimmed input text this number was parsed from
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn local(&self) -> &str {
        self.local.as_str()
    }

    pub fn local_number(&self) -> &LocalNumber {
        &self.local
    }

    /// Local form without the leading zero
    pub fn core(&self) -> &str {
        self.local.core()
    }

    pub fn international(&self) -> &str {
        &self.international
    }

    pub fn e164(&self) -> &str {
        &self.e164
    }

    pub fn pretty(&self) -> &str {
        &self.pretty
    }

    pub fn masked(&self) -> &str {
        &self.masked
    }

    pub fn operator_code(&self) -> &str {
        &self.operator_code
    }

    /// Carrier owning the operator code. Always `Some` for numbers the
    /// normalizer accepted; `None` would mean the code tables disagree.
    pub fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// Project one presentation form
    pub fn format(&self, format: PhoneFormat) -> &str {
        match format {
            PhoneFormat::Local => self.local(),
            PhoneFormat::International => self.international(),
            PhoneFormat::E164 => self.e164(),
            PhoneFormat::Pretty => self.pretty(),
            PhoneFormat::Masked => self.masked(),
        }
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.e164)
    }
}

/// Build every derived form from a canonical local number.
pub fn describe(input: impl Into<String>, local: LocalNumber) -> PhoneNumber {
    let digits = local.as_str();
    let core = local.core();
    let operator_code = local.operator_code().to_string();

    let international = format!("880{core}");
    let e164 = format!("+{international}");
    let pretty = format!("{}-{}-{}", &digits[..3], &digits[3..6], &digits[6..]);
    let masked = format!("{}{MASK}{}", &digits[..3], &digits[7..]);
    let operator = Operator::from_code(&operator_code);

    PhoneNumber {
        input: input.into(),
        international,
        e164,
        pretty,
        masked,
        operator,
        operator_code,
        local,
    }
}
