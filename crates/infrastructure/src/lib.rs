//! FizzBuzz Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus environment-based settings.

pub mod adapters;
pub mod persistence;
pub mod settings;

pub use adapters::{LINE_ENDING, StdoutSink, WriterSink};
pub use persistence::{FileRuleSource, RuleFormat, parse_rule_set};
pub use settings::{ENV_MAX, ENV_RULES, Settings, SettingsError};
