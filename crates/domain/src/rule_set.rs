//! Ordered rule collections.

use serde::{Deserialize, Serialize};

use crate::rule::Rule;

/// An ordered list of rules. Position is priority: the first matching rule wins.
///
/// Any order is accepted. Putting a less specific rule ahead of a more
/// specific one (for example `Fizz` before `FizzBuzz`) masks the latter,
/// and [`RuleSet::shadowed`] reports such cases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

/// A rule that can never fire because an earlier rule covers all its multiples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShadowedRule {
    /// Position of the rule that never fires.
    pub index: usize,
    /// Position of the earlier rule that masks it.
    pub shadowed_by: usize,
}

impl RuleSet {
    /// Creates a rule set evaluated in the given order.
    #[must_use]
    pub const fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The classic rules: `FizzBuzz`, then `Fizz`, then `Buzz`.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(vec![Rule::FizzBuzz, Rule::Fizz, Rule::Buzz])
    }

    /// Returns the rules in evaluation order.
    #[must_use]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Returns the first rule matching `number`, if any.
    #[must_use]
    pub fn first_match(&self, number: u64) -> Option<&Rule> {
        self.rules.iter().find(|rule| rule.matches(number))
    }

    /// Lists rules masked by an earlier rule whose divisor divides theirs.
    #[must_use]
    pub fn shadowed(&self) -> Vec<ShadowedRule> {
        self.rules
            .iter()
            .enumerate()
            .filter_map(|(index, rule)| {
                self.rules[..index]
                    .iter()
                    .position(|earlier| rule.divisor() % earlier.divisor() == 0)
                    .map(|shadowed_by| ShadowedRule { index, shadowed_by })
            })
            .collect()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::standard()
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self::new(rules)
    }
}
