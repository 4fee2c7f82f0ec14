//! FizzBuzz Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (interfaces for output sinks and rule sources)
//! - Use case orchestration
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{RuleSource, RuleSourceError, SinkError, TokenSink};
pub use use_cases::{
    DescribeRules, DescribeRulesOutput, PrintSequence, PrintSequenceInput, PrintSequenceOutput,
};
