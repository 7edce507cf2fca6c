//! Structured failures raised while resolving run options.

use thiserror::Error;

/// Error raised by an input rule or by the resolver.
///
/// Resolution is fail-fast: the first error aborts the whole pass and no
/// snapshot is produced. Every message names the offending field and quotes
/// the raw value that was supplied, so the caller can correct it without
/// consulting documentation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OptionsError {
    /// A supplied raw value failed its field's own syntax or semantic check.
    #[error("invalid value '{value}' for {field}: {reason}")]
    InvalidValue {
        /// Canonical field name.
        field: &'static str,
        /// The raw value exactly as supplied.
        value: String,
        /// What the field expected instead.
        reason: String,
    },
    /// A field required by an enabled feature was absent or empty.
    #[error("{field} is required {context}")]
    MissingRequired {
        /// Canonical field name.
        field: &'static str,
        /// The feature that makes the field mandatory.
        context: &'static str,
    },
    /// Two individually valid fields conflict with each other.
    #[error("inconsistent options: {message}")]
    InconsistentCombination {
        /// Description of the conflicting pair.
        message: String,
    },
}

impl OptionsError {
    /// Build an invalid-value error, quoting the raw value verbatim.
    pub fn invalid(
        field: &'static str,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// Build a missing-required error for a feature-gated field.
    pub fn missing(field: &'static str, context: &'static str) -> Self {
        Self::MissingRequired { field, context }
    }

    /// Build an inconsistent-combination error.
    pub fn inconsistent(message: impl Into<String>) -> Self {
        Self::InconsistentCombination {
            message: message.into(),
        }
    }
}
