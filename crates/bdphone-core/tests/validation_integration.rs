//! Integration tests for the public validation and formatting API
//!
//! Exercises the documented behaviour end to end through the crate root.

use bdphone_core::{
    customize, format, format_str, get_operator, is_operator, is_operator_named, is_valid,
    normalize, refactor, validate, Error, Operator, PhoneFormat, PhoneInput, RejectionReason,
    TransformBase, TransformOptions, ValidationOptions,
};

fn defaults() -> ValidationOptions {
    ValidationOptions::default()
}

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn test_accepts_valid_local_number() {
        let result = validate("01712345678", &defaults());
        let number = result.as_valid().expect("should be valid");
        assert_eq!(number.local(), "01712345678");
        assert_eq!(number.e164(), "+8801712345678");
        assert_eq!(number.pretty(), "017-123-45678");
        assert_eq!(number.masked(), "017****5678");
    }

    #[test]
    fn test_accepts_country_code_encodings() {
        assert!(is_valid("+8801712345678", &defaults()));
        assert!(is_valid("8801712345678", &defaults()));
        assert!(is_valid("008801712345678", &defaults()));
    }

    #[test]
    fn test_missing_leading_zero() {
        assert!(is_valid("1712345678", &defaults()));
        assert!(!is_valid(
            "1712345678",
            &ValidationOptions::new().allow_missing_leading_zero(false)
        ));
    }

    #[test]
    fn test_rejects_bad_length_and_prefixes() {
        assert!(!is_valid("0171234567", &defaults()));
        assert!(!is_valid("02712345678", &defaults()));
        assert!(!is_valid("01212345678", &defaults()));
    }

    #[test]
    fn test_reason_for_letters() {
        let result = validate("abc01712345678", &defaults());
        assert!(!result.is_valid());
        assert_eq!(result.reason(), Some(RejectionReason::ContainsLetters));
        assert_eq!(
            result.reason().unwrap().to_string(),
            "Phone number cannot contain letters."
        );
    }

    #[test]
    fn test_numeric_and_absent_inputs() {
        assert!(is_valid(8801712345678_u64, &defaults()));
        assert!(is_valid(Some("01712345678"), &defaults()));
        assert!(!is_valid(None::<String>, &defaults()));
        assert!(!is_valid(PhoneInput::Absent, &defaults()));
    }

    #[test]
    fn test_expected_operator() {
        assert!(is_valid(
            "01812345678",
            &ValidationOptions::new().expected_operator("robi")
        ));
        assert!(!is_valid(
            "01812345678",
            &ValidationOptions::new().expected_operator("Grameenphone")
        ));
    }

    #[test]
    fn test_idempotent_on_canonical_input() {
        let local = format("01912345678", PhoneFormat::Local, &defaults()).unwrap();
        assert_eq!(local, "01912345678");
        assert_eq!(
            format(local.as_str(), PhoneFormat::Local, &defaults()).as_deref(),
            Some("01912345678")
        );
    }
}

#[cfg(test)]
mod formatting {
    use super::*;

    #[test]
    fn test_normalizes_different_inputs() {
        assert_eq!(
            normalize("+880 1712-345678", &defaults()).as_deref(),
            Some("+8801712345678")
        );
        assert_eq!(
            format("01712345678", PhoneFormat::International, &defaults()).as_deref(),
            Some("8801712345678")
        );
        assert_eq!(
            format("01712345678", PhoneFormat::Masked, &defaults()).as_deref(),
            Some("017****5678")
        );
    }

    #[test]
    fn test_none_for_invalid_input() {
        assert_eq!(format("016123", PhoneFormat::E164, &defaults()), None);
    }

    #[test]
    fn test_unsupported_format_name_is_an_error() {
        let err = format_str("01712345678", "raw", &defaults()).unwrap_err();
        assert!(err.to_string().contains("Unsupported format"));
    }
}

#[cfg(test)]
mod operators {
    use super::*;

    #[test]
    fn test_detects_operator_from_prefix() {
        let result = validate("01712345678", &defaults());
        assert_eq!(
            result.as_valid().and_then(|n| n.operator()),
            Some(Operator::Grameenphone)
        );
        assert_eq!(get_operator("01612345678", &defaults()), Some(Operator::Robi));
        assert_eq!(get_operator("01512345678", &defaults()), Some(Operator::Teletalk));
        assert_eq!(get_operator("01912345678", &defaults()), Some(Operator::Banglalink));
    }

    #[test]
    fn test_operator_helpers() {
        assert!(is_operator("01712345678", Operator::Grameenphone, &defaults()));
        assert_eq!(is_operator_named("01712345678", "gp", &defaults()), Ok(true));
        assert_eq!(is_operator_named("01712345678", "robi", &defaults()), Ok(false));
    }

    #[test]
    fn test_unsupported_operator_in_helper() {
        let err = is_operator_named("01712345678", "unknown-operator", &defaults()).unwrap_err();
        assert!(err.to_string().contains("Unsupported operator"));
    }
}

#[cfg(test)]
mod transforms {
    use super::*;

    #[test]
    fn test_prefix_conversion() -> anyhow::Result<()> {
        let options = TransformOptions::new().remove_from_start(1).prefix("+880");
        assert_eq!(customize("01615928286", &options)?.as_deref(), Some("+8801615928286"));
        assert_eq!(customize("1615928286", &options)?.as_deref(), Some("+8801615928286"));
        assert_eq!(customize("8801615928286", &options)?.as_deref(), Some("+8801615928286"));
        assert_eq!(customize("+8801615928286", &options)?.as_deref(), Some("+8801615928286"));
        Ok(())
    }

    #[test]
    fn test_remove_from_start_and_end() -> anyhow::Result<()> {
        let options = TransformOptions::new()
            .remove_from_start(1)
            .remove_from_end(2)
            .prefix("X");
        assert_eq!(customize("01615928286", &options)?.as_deref(), Some("X16159282"));

        let options = TransformOptions::new()
            .base(TransformBase::International)
            .remove_from_start(3)
            .prefix("+")
            .separator("-");
        assert_eq!(customize("01615928286", &options)?.as_deref(), Some("+-1615928286"));
        Ok(())
    }

    #[test]
    fn test_refactor_alias() -> anyhow::Result<()> {
        let options = TransformOptions::new().remove_from_start(1).prefix("880");
        assert_eq!(refactor("01615928286", &options)?.as_deref(), Some("8801615928286"));
        Ok(())
    }

    #[test]
    fn test_none_for_invalid_phone() -> anyhow::Result<()> {
        let options = TransformOptions::new().prefix("880");
        assert_eq!(customize("abc123", &options)?, None);
        Ok(())
    }

    #[test]
    fn test_invalid_transform_options() {
        assert!(matches!(
            TransformOptions::new().try_remove_from_start(-1),
            Err(Error::InvalidRemovalCount { .. })
        ));
        assert!(matches!(
            "e164".parse::<TransformBase>(),
            Err(Error::UnsupportedBase { .. })
        ));
        assert!(matches!(
            customize("01615928286", &TransformOptions::new().remove_from_start(11)),
            Err(Error::RemovesEntireNumber { .. })
        ));
    }
}
