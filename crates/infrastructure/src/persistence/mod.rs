//! File-based persistence adapters.

mod rule_file;

pub use rule_file::{FileRuleSource, RuleFormat, parse_rule_set};
