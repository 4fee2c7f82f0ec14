//! Domain error types

use thiserror::Error;

/// Domain-level errors that can occur during validation or generation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An argument is outside the range the operation accepts.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A divisibility rule was given a zero divisor.
    #[error("invalid divisor for rule {label:?}: divisor must be greater than zero")]
    InvalidDivisor {
        /// Label of the offending rule.
        label: String,
    },

    /// A rule label is empty.
    #[error("rule label cannot be empty")]
    EmptyLabel,
}

/// Result type alias for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
