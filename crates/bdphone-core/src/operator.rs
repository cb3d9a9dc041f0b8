//! Mobile operator classification
//!
//! Two fixed tables drive this module: the two-digit operator code taken from
//! the local form, and the alias table used when a caller names an operator.
//! Aliases are input-only; output always uses [`Operator::display_name`].
//!
//! Copyright (c) 2026 Bdphone Team
//! Licensed under the Apache-2.0 license

use crate::error::{Error, Result};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Bangladeshi mobile carriers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Grameenphone,
    Robi,
    Banglalink,
    Teletalk,
}

/// Operator code (characters 1..3 of the local form) to carrier
const OPERATOR_BY_CODE: [(&str, Operator); 7] = [
    ("13", Operator::Grameenphone),
    ("14", Operator::Banglalink),
    ("15", Operator::Teletalk),
    ("16", Operator::Robi),
    ("17", Operator::Grameenphone),
    ("18", Operator::Robi),
    ("19", Operator::Banglalink),
];

/// Normalized alias to carrier
const OPERATOR_ALIASES: [(&str, Operator); 9] = [
    ("gp", Operator::Grameenphone),
    ("grameenphone", Operator::Grameenphone),
    ("robi", Operator::Robi),
    ("airtel", Operator::Robi),
    ("robi airtel", Operator::Robi),
    ("banglalink", Operator::Banglalink),
    ("bl", Operator::Banglalink),
    ("teletalk", Operator::Teletalk),
    ("tt", Operator::Teletalk),
];

static SEPARATOR_RUNS: OnceLock<Regex> = OnceLock::new();
static WHITESPACE_RUNS: OnceLock<Regex> = OnceLock::new();

impl Operator {
    /// Every carrier, in display order
    pub const ALL: [Operator; 4] = [
        Operator::Grameenphone,
        Operator::Robi,
        Operator::Banglalink,
        Operator::Teletalk,
    ];

    /// Look up the carrier owning a two-digit operator code such as `"17"`
    pub fn from_code(code: &str) -> Option<Operator> {
        OPERATOR_BY_CODE
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, operator)| *operator)
    }

    /// Resolve a free-form operator name through the alias table.
    ///
    /// Matching ignores case and surrounding whitespace, and treats runs of
    /// `_` or `-` and runs of whitespace as a single space, so `"Robi-Airtel"`
    /// and `"ROBI   airtel"` both resolve to [`Operator::Robi`].
    pub fn from_alias(name: &str) -> Option<Operator> {
        let key = normalize_alias(name);
        OPERATOR_ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, operator)| *operator)
    }

    /// Operator codes assigned to this carrier
    pub fn codes(self) -> Vec<&'static str> {
        OPERATOR_BY_CODE
            .iter()
            .filter(|(_, operator)| *operator == self)
            .map(|(code, _)| *code)
            .collect()
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Operator::Grameenphone => "Grameenphone",
            Operator::Robi => "Robi",
            Operator::Banglalink => "Banglalink",
            Operator::Teletalk => "Teletalk",
        }
    }

    /// Whether `name` resolves to this carrier
    pub fn matches_alias(self, name: &str) -> bool {
        Operator::from_alias(name) == Some(self)
    }
}

fn normalize_alias(name: &str) -> String {
    let separators = SEPARATOR_RUNS.get_or_init(|| Regex::new(r"[_-]+").unwrap());
    let whitespace = WHITESPACE_RUNS.get_or_init(|| Regex::new(r"\s+").unwrap());

    let lowered = name.trim().to_lowercase();
    let spaced = separators.replace_all(&lowered, " ");
    whitespace.replace_all(&spaced, " ").into_owned()
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Operator::from_alias(s).ok_or_else(|| Error::UnsupportedOperator {
            value: s.to_string(),
        })
    }
}
