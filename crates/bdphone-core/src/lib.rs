//! bdphone core - Bangladeshi mobile number validation and formatting
//!
//! This crate turns phone numbers typed in any of the usual shapes (local,
//! `+880`, `00880`, spaced or hyphenated, missing the leading zero) into a
//! canonical 11-digit local form, derives the other presentation forms, and
//! identifies the mobile operator.
//!
//! # Main Components
//!
//! - **Normalizer**: ordered input rules producing a [`LocalNumber`] or a [`RejectionReason`]
//! - **Descriptor**: derived forms and operator lookup ([`PhoneNumber`])
//! - **Validation**: the [`validate`] entry point and [`ValidationResult`]
//! - **Queries**: [`format`], [`normalize`], [`get_operator`], [`is_operator`]
//! - **Transforms**: [`customize`] with [`TransformOptions`]
//!
//! Invalid phone data never produces an [`Error`]; it yields
//! [`ValidationResult::Invalid`], `None`, or `false`. [`Error`] is reserved for
//! caller mistakes such as an unknown format name.
//!
//! # Example
//!
//! ```
//! use bdphone_core::{validate, PhoneFormat, Operator, ValidationOptions};
//!
//! let result = validate("+880 1712-345678", &ValidationOptions::default());
//! let number = result.as_valid().expect("valid number");
//! assert_eq!(number.local(), "01712345678");
//! assert_eq!(number.format(PhoneFormat::Pretty), "017-123-45678");
//! assert_eq!(number.operator(), Some(Operator::Grameenphone));
//! ```

pub mod descriptor;
pub mod error;
pub mod normalizer;
pub mod operator;
pub mod queries;
pub mod transform;
pub mod validation;

#[cfg(test)]
mod proptest_strategies;

// Re-export main types for convenience
pub use descriptor::{describe, PhoneFormat, PhoneNumber};
pub use error::{Error, Result};
pub use normalizer::{normalize_local, LocalNumber, Normalized, PhoneInput, RejectionReason};
pub use operator::Operator;
pub use queries::{format, format_str, get_operator, is_operator, is_operator_named, normalize};
pub use transform::{customize, refactor, TransformBase, TransformOptions};
pub use validation::{is_valid, validate, Rejection, ValidationOptions, ValidationResult};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
