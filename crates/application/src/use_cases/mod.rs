//! Application use cases (business logic orchestration).

mod describe_rules;
mod print_sequence;

pub use describe_rules::*;
pub use print_sequence::*;

use fizzbuzz_domain::{RuleSet, ShadowedRule};

/// Logs a warning for every rule masked by an earlier one and returns them.
fn warn_shadowed(rules: &RuleSet) -> Vec<ShadowedRule> {
    let shadowed = rules.shadowed();
    for entry in &shadowed {
        tracing::warn!(
            rule = %rules.rules()[entry.index],
            masked_by = %rules.rules()[entry.shadowed_by],
            "rule can never match"
        );
    }
    shadowed
}
