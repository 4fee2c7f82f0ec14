//! Rule source port
//!
//! Defines the interface for obtaining the rule set.

use fizzbuzz_domain::RuleSet;

/// Errors that can occur while loading rules.
#[derive(Debug, thiserror::Error)]
pub enum RuleSourceError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The rule document could not be parsed.
    #[error("Parse error: {0}")]
    Parse(String),

    /// The rule document format is not supported.
    #[error("Unsupported rule format: {0}")]
    UnsupportedFormat(String),
}

/// Provides the ordered rule set a generator runs with.
pub trait RuleSource {
    /// Loads the rules.
    ///
    /// # Errors
    /// Returns an error if the rules cannot be read or are invalid.
    fn load(&self) -> Result<RuleSet, RuleSourceError>;
}

impl RuleSource for RuleSet {
    fn load(&self) -> Result<RuleSet, RuleSourceError> {
        Ok(self.clone())
    }
}
