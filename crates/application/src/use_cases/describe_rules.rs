//! Describe rules use case.

use fizzbuzz_domain::{RuleSet, ShadowedRule};

use crate::error::ApplicationResult;
use crate::ports::{SinkError, TokenSink};

/// Output from describing a rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DescribeRulesOutput {
    /// Number of rules accepted by the sink.
    pub rules_written: usize,
    /// True if the reader closed the output before every rule was written.
    pub closed_early: bool,
    /// Rules that can never match under the configured order.
    pub shadowed: Vec<ShadowedRule>,
}

/// Use case for listing the effective rules, one `divisor label` per line.
pub struct DescribeRules<S: TokenSink> {
    sink: S,
}

impl<S: TokenSink> DescribeRules<S> {
    /// Creates a new `DescribeRules` use case.
    #[must_use]
    pub const fn new(sink: S) -> Self {
        Self { sink }
    }

    /// Consumes the use case and returns the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Writes every rule in evaluation order and warns about masked rules.
    ///
    /// A closed reader ends the listing without error.
    ///
    /// # Errors
    /// Returns a sink error for write failures other than a closed reader.
    pub fn execute(&mut self, rules: &RuleSet) -> ApplicationResult<DescribeRulesOutput> {
        let shadowed = super::warn_shadowed(rules);

        let mut rules_written = 0;
        for rule in rules.rules() {
            match self.sink.write_line(rule) {
                Ok(()) => rules_written += 1,
                Err(SinkError::Closed) => {
                    tracing::debug!(rules_written, "output closed early");
                    return Ok(DescribeRulesOutput {
                        rules_written,
                        closed_early: true,
                        shadowed,
                    });
                }
                Err(error) => return Err(error.into()),
            }
        }

        let closed_early = match self.sink.flush() {
            Ok(()) => false,
            Err(SinkError::Closed) => true,
            Err(error) => return Err(error.into()),
        };

        Ok(DescribeRulesOutput {
            rules_written,
            closed_early,
            shadowed,
        })
    }
}
