//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the application core and external systems.
//! Each port is a trait that can be implemented by adapters in the infrastructure layer.

mod rule_source;
mod token_sink;

pub use rule_source::{RuleSource, RuleSourceError};
pub use token_sink::{SinkError, TokenSink};
