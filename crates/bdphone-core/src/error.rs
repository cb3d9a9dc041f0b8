//! Error types for the bdphone core library
//!
//! Only caller contract violations live here: an unknown format or base name,
//! an operator alias that does not resolve, or removal counts that would leave
//! nothing behind. Bad phone-number data is never an `Error`; it is reported
//! through [`crate::ValidationResult::Invalid`] or a `None` projection.

use thiserror::Error;

/// Main error type for bdphone operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Format name outside local, international, e164, pretty, masked
    #[error("Unsupported format. Use one of: local, international, e164, pretty, masked.")]
    UnsupportedFormat { value: String },

    /// Transform base name outside local, core, international
    #[error("Unsupported base. Use one of: local, core, international.")]
    UnsupportedBase { value: String },

    /// Operator name that no alias resolves
    #[error("Unsupported operator. Use one of: Grameenphone, Robi, Banglalink, Teletalk.")]
    UnsupportedOperator { value: String },

    /// Negative or non-integer removal count
    #[error("{field} must be a non-negative integer.")]
    InvalidRemovalCount { field: &'static str, value: String },

    /// Removal counts cover the whole base string
    #[error("Cannot remove all digits. Decrease removeFromStart/removeFromEnd.")]
    RemovesEntireNumber {
        remove_from_start: usize,
        remove_from_end: usize,
        length: usize,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// The offending value as the caller supplied it, when there is one
    pub fn value(&self) -> Option<&str> {
        match self {
            Error::UnsupportedFormat { value }
            | Error::UnsupportedBase { value }
            | Error::UnsupportedOperator { value }
            | Error::InvalidRemovalCount { value, .. } => Some(value),
            Error::RemovesEntireNumber { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::UnsupportedFormat {
            value: "raw".to_string(),
        };
        assert!(err.to_string().starts_with("Unsupported format"));
        assert_eq!(err.value(), Some("raw"));
    }

    #[test]
    fn test_removal_count_message_names_field() {
        let err = Error::InvalidRemovalCount {
            field: "removeFromStart",
            value: "-1".to_string(),
        };
        assert_eq!(err.to_string(), "removeFromStart must be a non-negative integer.");
    }

    #[test]
    fn test_removes_entire_number_has_no_value() {
        let err = Error::RemovesEntireNumber {
            remove_from_start: 11,
            remove_from_end: 0,
            length: 11,
        };
        assert_eq!(err.value(), None);
        assert!(err.to_string().contains("Cannot remove all digits"));
    }
}
