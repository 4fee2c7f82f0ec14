//! Application error types

use fizzbuzz_domain::DomainError;
use thiserror::Error;

use crate::ports::{RuleSourceError, SinkError};

/// Application-level errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Writing output failed.
    #[error("output error: {0}")]
    Sink(#[from] SinkError),

    /// Loading the rule set failed.
    #[error("rule source error: {0}")]
    RuleSource(#[from] RuleSourceError),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
