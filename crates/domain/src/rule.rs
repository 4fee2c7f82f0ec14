//! Divisibility rules.

use std::fmt;
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

const FIZZ: &str = "Fizz";
const BUZZ: &str = "Buzz";
const FIZZ_BUZZ: &str = "FizzBuzz";

/// A predicate-and-label pair that overrides the output for a number.
///
/// Rules are immutable values. `matches` is a pure function of the number
/// and `label` never changes for a given rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", try_from = "RuleRepr")]
pub enum Rule {
    /// Multiples of 15 print "FizzBuzz".
    FizzBuzz,
    /// Multiples of 3 print "Fizz".
    Fizz,
    /// Multiples of 5 print "Buzz".
    Buzz,
    /// Multiples of `divisor` print `label`.
    Divisible {
        /// The divisor tested against each number.
        divisor: NonZeroU64,
        /// Output used when the rule matches.
        label: String,
    },
}

impl Rule {
    /// Creates a custom divisibility rule.
    ///
    /// # Errors
    /// - [`DomainError::InvalidDivisor`] if `divisor` is zero
    /// - [`DomainError::EmptyLabel`] if `label` is empty
    pub fn divisible(divisor: u64, label: impl Into<String>) -> DomainResult<Self> {
        let label = label.into();
        if label.is_empty() {
            return Err(DomainError::EmptyLabel);
        }
        let Some(divisor) = NonZeroU64::new(divisor) else {
            return Err(DomainError::InvalidDivisor { label });
        };
        Ok(Self::Divisible { divisor, label })
    }

    /// Returns the divisor this rule tests.
    #[must_use]
    pub const fn divisor(&self) -> u64 {
        match self {
            Self::FizzBuzz => 15,
            Self::Fizz => 3,
            Self::Buzz => 5,
            Self::Divisible { divisor, .. } => divisor.get(),
        }
    }

    /// Returns whether the rule applies to `number`.
    ///
    /// Zero is a multiple of every divisor, so every rule matches it.
    #[must_use]
    pub const fn matches(&self, number: u64) -> bool {
        number % self.divisor() == 0
    }

    /// Returns the output for a number that matches the rule.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::FizzBuzz => FIZZ_BUZZ,
            Self::Fizz => FIZZ,
            Self::Buzz => BUZZ,
            Self::Divisible { label, .. } => label,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.divisor(), self.label())
    }
}

/// Wire shape accepted when deserializing a [`Rule`].
///
/// Custom rules go through [`Rule::divisible`] so files get the same
/// validation as code.
#[derive(Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RuleRepr {
    FizzBuzz,
    Fizz,
    Buzz,
    Divisible { divisor: u64, label: String },
}

impl TryFrom<RuleRepr> for Rule {
    type Error = DomainError;

    fn try_from(repr: RuleRepr) -> DomainResult<Self> {
        match repr {
            RuleRepr::FizzBuzz => Ok(Self::FizzBuzz),
            RuleRepr::Fizz => Ok(Self::Fizz),
            RuleRepr::Buzz => Ok(Self::Buzz),
            RuleRepr::Divisible { divisor, label } => Self::divisible(divisor, label),
        }
    }
}
