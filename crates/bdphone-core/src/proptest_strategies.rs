//! Property-based testing strategies for generating phone numbers
//!
//! Strategies produce canonical local numbers and the textual encodings a
//! user might type for them.

#![cfg(test)]

use crate::descriptor::PhoneFormat;
use proptest::prelude::*;

/// Strategy for generating canonical local numbers (`01[3-9]` + 8 digits)
pub fn local_number_strategy() -> impl Strategy<Value = String> {
    "01[3-9][0-9]{8}"
}

/// Ways a user might write the same number
#[derive(Debug, Clone, Copy)]
pub enum Encoding {
    Local,
    PlusCountryCode,
    CountryCode,
    DialingPrefix,
    MissingLeadingZero,
    Spaced,
    Hyphenated,
    Padded,
}

impl Encoding {
    pub fn apply(self, local: &str) -> String {
        let core = &local[1..];
        match self {
            Encoding::Local => local.to_string(),
            Encoding::PlusCountryCode => format!("+880{core}"),
            Encoding::CountryCode => format!("880{core}"),
            Encoding::DialingPrefix => format!("00880{core}"),
            Encoding::MissingLeadingZero => core.to_string(),
            Encoding::Spaced => format!("+880 {} {}", &core[..4], &core[4..]),
            Encoding::Hyphenated => format!("{}-{}-{}", &local[..3], &local[3..6], &local[6..]),
            Encoding::Padded => format!("  {local}\t"),
        }
    }
}

/// Strategy for generating encodings
pub fn encoding_strategy() -> impl Strategy<Value = Encoding> {
    prop_oneof![
        Just(Encoding::Local),
        Just(Encoding::PlusCountryCode),
        Just(Encoding::CountryCode),
        Just(Encoding::DialingPrefix),
        Just(Encoding::MissingLeadingZero),
        Just(Encoding::Spaced),
        Just(Encoding::Hyphenated),
        Just(Encoding::Padded),
    ]
}

/// Strategy for generating output formats
pub fn phone_format_strategy() -> impl Strategy<Value = PhoneFormat> {
    prop_oneof![
        Just(PhoneFormat::Local),
        Just(PhoneFormat::International),
        Just(PhoneFormat::E164),
        Just(PhoneFormat::Pretty),
        Just(PhoneFormat::Masked),
    ]
}
