//! Error types and handling for the CLI
//!
//! This module provides error types and utilities for handling
//! various failure modes in the CLI application.

use std::io;
use std::path::PathBuf;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for CLI operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error (file operations, stdin, etc.)
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Caller mistake reported by bdphone-core
    #[error("{0}")]
    Core(#[from] bdphone_core::Error),

    /// One or more numbers failed validation
    #[error("{invalid} of {total} phone number(s) are invalid")]
    InvalidNumbers { invalid: usize, total: usize },

    /// No numbers on the command line or stdin
    #[error("No phone numbers given. Pass them as arguments or one per line on stdin")]
    NoInput,

    /// File not found
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transform preset missing from the configuration
    #[error("Transform preset '{}' not found in configuration", name)]
    PresetNotFound { name: String },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML serialization/deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML deserialization error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Generic error with context
    #[error("{message}")]
    Other { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a generic error with message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other {
            message: message.into(),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Io(_) => 1,
            Self::InvalidNumbers { .. } => 2,
            Self::Core(_) => 3,
            Self::NoInput => 4,
            Self::FileNotFound { .. } => 5,
            Self::Config(_) => 6,
            Self::PresetNotFound { .. } => 7,
            Self::Json(_) => 12,
            Self::Yaml(_) => 13,
            Self::Toml(_) => 14,
            Self::Other { .. } => 99,
        }
    }

    /// Check if this error should display usage help
    pub fn should_show_help(&self) -> bool {
        matches!(self, Self::NoInput | Self::Core(_))
    }
}

/// Format an error for display to the user
pub fn format_error(error: &Error, use_color: bool) -> String {
    if use_color {
        use colored::Colorize;
        format!("{} {}", "Error:".red().bold(), error)
    } else {
        format!("Error: {}", error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_for_data_and_usage() {
        let invalid = Error::InvalidNumbers { invalid: 1, total: 3 };
        let usage = Error::Core(bdphone_core::Error::UnsupportedBase {
            value: "e164".to_string(),
        });
        assert_eq!(invalid.exit_code(), 2);
        assert_eq!(usage.exit_code(), 3);
        assert!(!invalid.should_show_help());
        assert!(usage.should_show_help());
    }

    #[test]
    fn test_format_error_plain() {
        let err = Error::PresetNotFound {
            name: "sms".to_string(),
        };
        assert_eq!(
            format_error(&err, false),
            "Error: Transform preset 'sms' not found in configuration"
        );
    }

    #[test]
    fn test_invalid_numbers_message() {
        let err = Error::InvalidNumbers { invalid: 2, total: 5 };
        assert_eq!(err.to_string(), "2 of 5 phone number(s) are invalid");
    }
}
