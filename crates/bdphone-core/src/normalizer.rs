//! Raw input normalization
//!
//! Turns whatever the caller supplied (text, an integer, or nothing) into the
//! canonical 11-digit local form, or into the reason the first failing rule
//! gives. Rules run in a fixed order and the first failure wins:
//!
//! 1. input must be present and non-blank
//! 2. no ASCII letters anywhere
//! 3. at most one `+`, and only as the first character
//! 4. at least one digit
//! 5. country code / dialing prefix / missing leading zero resolution
//! 6. exactly 11 digits
//! 7. starts with `01`
//! 8. third digit in `3..=9`
//!
//! Copyright (c) 2026 Bdphone Team
//! Licensed under the Apache-2.0 license

use crate::operator::Operator;
use serde::Serialize;
use std::fmt;
use tracing::trace;

/// Length of a canonical local number
pub const LOCAL_LENGTH: usize = 11;

const COUNTRY_CODE: &str = "880";
const INTERNATIONAL_DIALING_PREFIX: &str = "00880";

/// Not Unicode whitespace, but stripped along with it
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Raw phone input: text, an integer, or nothing at all
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PhoneInput {
    #[default]
    Absent,
    Text(String),
    Number(i128),
}

impl PhoneInput {
    /// The input coerced to text; absence becomes an empty string
    pub fn to_text(&self) -> String {
        match self {
            PhoneInput::Absent => String::new(),
            PhoneInput::Text(text) => text.clone(),
            PhoneInput::Number(number) => number.to_string(),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, PhoneInput::Absent)
    }
}

impl From<&str> for PhoneInput {
    fn from(value: &str) -> Self {
        PhoneInput::Text(value.to_string())
    }
}

impl From<String> for PhoneInput {
    fn from(value: String) -> Self {
        PhoneInput::Text(value)
    }
}

impl From<&String> for PhoneInput {
    fn from(value: &String) -> Self {
        PhoneInput::Text(value.clone())
    }
}

impl From<&PhoneInput> for PhoneInput {
    fn from(value: &PhoneInput) -> Self {
        value.clone()
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for PhoneInput {
                fn from(value: $ty) -> Self {
                    PhoneInput::Number(i128::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(u8, u16, u32, u64, i8, i16, i32, i64);

impl<T: Into<PhoneInput>> From<Option<T>> for PhoneInput {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(PhoneInput::Absent)
    }
}

/// Why an input was rejected. Data problems only, never caller mistakes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionReason {
    Required,
    ContainsLetters,
    PlusSignMisuse,
    MissingDigits,
    UnsupportedCountryCode,
    InvalidLength,
    InvalidPrefix,
    InvalidOperatorCode,
    /// Expected operator given to validation did not resolve to a carrier
    UnsupportedOperator,
    /// Number is valid but belongs to a different carrier
    OperatorMismatch { expected: Operator },
}

impl RejectionReason {
    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            RejectionReason::Required => "REQUIRED",
            RejectionReason::ContainsLetters => "CONTAINS_LETTERS",
            RejectionReason::PlusSignMisuse => "PLUS_SIGN_MISUSE",
            RejectionReason::MissingDigits => "MISSING_DIGITS",
            RejectionReason::UnsupportedCountryCode => "UNSUPPORTED_COUNTRY_CODE",
            RejectionReason::InvalidLength => "INVALID_LENGTH",
            RejectionReason::InvalidPrefix => "INVALID_PREFIX",
            RejectionReason::InvalidOperatorCode => "INVALID_OPERATOR_CODE",
            RejectionReason::UnsupportedOperator => "UNSUPPORTED_OPERATOR",
            RejectionReason::OperatorMismatch { .. } => "OPERATOR_MISMATCH",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::Required => f.write_str("Phone number is required."),
            RejectionReason::ContainsLetters => f.write_str("Phone number cannot contain letters."),
            RejectionReason::PlusSignMisuse => {
                f.write_str("Plus sign is only allowed once at the beginning.")
            }
            RejectionReason::MissingDigits => f.write_str("Phone number must contain digits."),
            RejectionReason::UnsupportedCountryCode => {
                f.write_str("Only Bangladesh country code +880 is supported.")
            }
            RejectionReason::InvalidLength => {
                f.write_str("Bangladesh mobile numbers must be 11 digits in local format.")
            }
            RejectionReason::InvalidPrefix => {
                f.write_str("Bangladesh mobile numbers must start with 01.")
            }
            RejectionReason::InvalidOperatorCode => {
                f.write_str("Invalid Bangladesh mobile operator code.")
            }
            RejectionReason::UnsupportedOperator => f.write_str(
                "Unsupported operator. Use one of: Grameenphone, Robi, Banglalink, Teletalk.",
            ),
            RejectionReason::OperatorMismatch { expected } => {
                write!(f, "Phone number operator mismatch. Expected {}.", expected)
            }
        }
    }
}

impl Serialize for RejectionReason {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A canonical local number: `01`, an operator digit in `3..=9`, eight more digits.
///
/// Only the normalizer hands these out, so holding one is proof the checks passed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct LocalNumber(String);

impl LocalNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits after the leading zero
    pub fn core(&self) -> &str {
        &self.0[1..]
    }

    /// The two digits after the leading zero
    pub fn operator_code(&self) -> &str {
        &self.0[1..3]
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for LocalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocalNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Output of a successful normalization: the trimmed input text and its local form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub input: String,
    pub local: LocalNumber,
}

/// Run the normalization rules over `input`.
pub fn normalize_local(
    input: &PhoneInput,
    allow_missing_leading_zero: bool,
) -> Result<Normalized, RejectionReason> {
    if input.is_absent() {
        return Err(RejectionReason::Required);
    }

    let text = input.to_text();
    let raw = text.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);
    if raw.is_empty() {
        return Err(RejectionReason::Required);
    }

    if raw.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(RejectionReason::ContainsLetters);
    }

    let starts_with_plus = raw.starts_with('+');
    let plus_count = raw.matches('+').count();
    if plus_count > 1 || (plus_count == 1 && !starts_with_plus) {
        return Err(RejectionReason::PlusSignMisuse);
    }

    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(RejectionReason::MissingDigits);
    }

    let local = resolve_local_digits(&digits, starts_with_plus, allow_missing_leading_zero)?;
    check_local_shape(&local)?;

    Ok(Normalized {
        input: raw.to_string(),
        local: LocalNumber(local),
    })
}

/// Strip country code or dialing prefix, restore a missing leading zero.
fn resolve_local_digits(
    digits: &str,
    starts_with_plus: bool,
    allow_missing_leading_zero: bool,
) -> Result<String, RejectionReason> {
    if starts_with_plus {
        let rest = digits
            .strip_prefix(COUNTRY_CODE)
            .ok_or(RejectionReason::UnsupportedCountryCode)?;
        trace!(branch = "plus_country_code", "resolved local form");
        return Ok(format!("0{rest}"));
    }

    if let Some(rest) = digits.strip_prefix(INTERNATIONAL_DIALING_PREFIX) {
        trace!(branch = "dialing_prefix", "resolved local form");
        return Ok(format!("0{rest}"));
    }

    if let Some(rest) = digits.strip_prefix(COUNTRY_CODE) {
        trace!(branch = "country_code", "resolved local form");
        return Ok(format!("0{rest}"));
    }

    if digits.starts_with('0') {
        trace!(branch = "local", "resolved local form");
        return Ok(digits.to_string());
    }

    if allow_missing_leading_zero && digits.len() == LOCAL_LENGTH - 1 && digits.starts_with('1') {
        trace!(branch = "missing_leading_zero", "resolved local form");
        return Ok(format!("0{digits}"));
    }

    trace!(branch = "unchanged", "resolved local form");
    Ok(digits.to_string())
}

/// Length, `01` prefix, operator digit. `local` holds ASCII digits only.
fn check_local_shape(local: &str) -> Result<(), RejectionReason> {
    if local.len() != LOCAL_LENGTH {
        return Err(RejectionReason::InvalidLength);
    }

    if !local.starts_with("01") {
        return Err(RejectionReason::InvalidPrefix);
    }

    match local.as_bytes()[2] {
        b'3'..=b'9' => Ok(()),
        _ => Err(RejectionReason::InvalidOperatorCode),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local(input: impl Into<PhoneInput>) -> Result<String, RejectionReason> {
        normalize_local(&input.into(), true).map(|n| n.local.into_string())
    }

    #[test]
    fn test_accepts_every_encoding() {
        assert_eq!(local("01712345678"), Ok("01712345678".to_string()));
        assert_eq!(local("+8801712345678"), Ok("01712345678".to_string()));
        assert_eq!(local("8801712345678"), Ok("01712345678".to_string()));
        assert_eq!(local("008801712345678"), Ok("01712345678".to_string()));
        assert_eq!(local("1712345678"), Ok("01712345678".to_string()));
        assert_eq!(local("+880 1712-345678"), Ok("01712345678".to_string()));
        assert_eq!(local("(017) 1234 5678"), Ok("01712345678".to_string()));
    }

    #[test]
    fn test_accepts_integers() {
        assert_eq!(local(8801712345678_u64), Ok("01712345678".to_string()));
        assert_eq!(local(1712345678_i64), Ok("01712345678".to_string()));
    }

    #[test]
    fn test_required() {
        assert_eq!(local(PhoneInput::Absent), Err(RejectionReason::Required));
        assert_eq!(local(None::<&str>), Err(RejectionReason::Required));
        assert_eq!(local(""), Err(RejectionReason::Required));
        assert_eq!(local("   \t "), Err(RejectionReason::Required));
        assert_eq!(local("\u{FEFF}"), Err(RejectionReason::Required));
        assert_eq!(local("\u{FEFF} 01712345678"), Ok("01712345678".to_string()));
    }

    #[test]
    fn test_letters_checked_before_digits() {
        assert_eq!(local("abc01712345678"), Err(RejectionReason::ContainsLetters));
        assert_eq!(local("0171234x5678"), Err(RejectionReason::ContainsLetters));
        // letters beat plus misuse
        assert_eq!(local("1+a"), Err(RejectionReason::ContainsLetters));
    }

    #[test]
    fn test_plus_sign_misuse() {
        assert_eq!(local("++8801712345678"), Err(RejectionReason::PlusSignMisuse));
        assert_eq!(local("880+1712345678"), Err(RejectionReason::PlusSignMisuse));
        assert_eq!(local("+880171234567+8"), Err(RejectionReason::PlusSignMisuse));
    }

    #[test]
    fn test_missing_digits() {
        assert_eq!(local("+"), Err(RejectionReason::MissingDigits));
        assert_eq!(local("--- ()"), Err(RejectionReason::MissingDigits));
    }

    #[test]
    fn test_plus_requires_bangladesh_country_code() {
        assert_eq!(local("+441712345678"), Err(RejectionReason::UnsupportedCountryCode));
        // a bare "+" never falls through to the missing-zero rule
        assert_eq!(local("+1712345678"), Err(RejectionReason::UnsupportedCountryCode));
    }

    #[test]
    fn test_missing_leading_zero_policy() {
        let input = PhoneInput::from("1712345678");
        assert!(normalize_local(&input, true).is_ok());
        assert_eq!(
            normalize_local(&input, false).unwrap_err(),
            RejectionReason::InvalidLength
        );
        // eleven digits starting with 1 are not rescued
        assert_eq!(local("17123456789"), Err(RejectionReason::InvalidPrefix));
    }

    #[test]
    fn test_shape_checks() {
        assert_eq!(local("0171234567"), Err(RejectionReason::InvalidLength));
        assert_eq!(local("016123"), Err(RejectionReason::InvalidLength));
        assert_eq!(local("02712345678"), Err(RejectionReason::InvalidPrefix));
        assert_eq!(local("01212345678"), Err(RejectionReason::InvalidOperatorCode));
        assert_eq!(local("01012345678"), Err(RejectionReason::InvalidOperatorCode));
    }

    #[test]
    fn test_input_is_trimmed_on_success() {
        let normalized = normalize_local(&PhoneInput::from("  01712345678 \n"), true).unwrap();
        assert_eq!(normalized.input, "01712345678");
        assert_eq!(normalized.local.core(), "1712345678");
        assert_eq!(normalized.local.operator_code(), "17");
    }

    #[test]
    fn test_reason_codes_and_messages() {
        assert_eq!(RejectionReason::Required.code(), "REQUIRED");
        assert_eq!(
            RejectionReason::ContainsLetters.to_string(),
            "Phone number cannot contain letters."
        );
        let mismatch = RejectionReason::OperatorMismatch {
            expected: Operator::Grameenphone,
        };
        assert_eq!(mismatch.code(), "OPERATOR_MISMATCH");
        assert_eq!(
            mismatch.to_string(),
            "Phone number operator mismatch. Expected Grameenphone."
        );
    }
}
