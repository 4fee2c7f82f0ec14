//! Sequence generation.

use crate::error::{DomainError, DomainResult};
use crate::rule_set::RuleSet;
use crate::token::Token;

/// Upper bound used when none is configured.
pub const DEFAULT_MAX_NUMBER: i64 = 100;

/// Produces the output sequence for `1..=N` from an ordered [`RuleSet`].
///
/// A generator is immutable after construction. Every call is a pure
/// function of the rule set and the requested bound, so one instance can be
/// reused freely, including across threads.
///
/// # Example
///
/// ```
/// use fizzbuzz_domain::Generator;
///
/// let output = Generator::standard().generate(5).unwrap();
/// assert_eq!(output, ["1", "2", "Fizz", "4", "Buzz"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generator {
    rules: RuleSet,
}

impl Generator {
    /// Creates a generator over the given rules.
    #[must_use]
    pub const fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// Creates a generator over [`RuleSet::standard`].
    #[must_use]
    pub fn standard() -> Self {
        Self::new(RuleSet::standard())
    }

    /// Returns the rules in evaluation order.
    #[must_use]
    pub const fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns the token for a single number.
    #[must_use]
    pub fn token_for(&self, number: u64) -> Token<'_> {
        self.rules
            .first_match(number)
            .map_or(Token::Number(number), |rule| Token::Label(rule.label()))
    }

    /// Lazily yields the tokens for `1..=max_number`.
    pub fn tokens(&self, max_number: u64) -> impl Iterator<Item = Token<'_>> {
        (1..=max_number).map(move |number| self.token_for(number))
    }

    /// Generates the tokens for `1..=max_number` as strings.
    ///
    /// The result has exactly `max_number` entries and entry `k` belongs to
    /// the integer `k + 1`. A bound of zero yields an empty sequence.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidArgument`] if `max_number` is negative.
    pub fn generate(&self, max_number: i64) -> DomainResult<Vec<String>> {
        let max_number = validate_max_number(max_number)?;
        Ok(self.tokens(max_number).map(|token| token.to_string()).collect())
    }
}

/// Converts a signed bound into the unsigned range the generator walks.
///
/// # Errors
/// Returns [`DomainError::InvalidArgument`] if `max_number` is negative.
pub fn validate_max_number(max_number: i64) -> DomainResult<u64> {
    u64::try_from(max_number).map_err(|_| {
        DomainError::InvalidArgument(format!(
            "max number must be zero or greater, got {max_number}"
        ))
    })
}
