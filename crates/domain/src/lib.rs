//! FizzBuzz Domain - Core business types
//!
//! This crate defines the rules and the generator that turns the integers
//! `1..=N` into tokens. All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod generator;
pub mod rule;
pub mod rule_set;
pub mod token;

pub use error::{DomainError, DomainResult};
pub use generator::{DEFAULT_MAX_NUMBER, Generator, validate_max_number};
pub use rule::Rule;
pub use rule_set::{RuleSet, ShadowedRule};
pub use token::Token;
