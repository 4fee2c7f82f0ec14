//! Print sequence use case.

use fizzbuzz_domain::{DEFAULT_MAX_NUMBER, Generator, validate_max_number};

use crate::error::ApplicationResult;
use crate::ports::{SinkError, TokenSink};

/// Input for printing a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintSequenceInput {
    /// Last integer to print. Negative values are rejected.
    pub max_number: i64,
}

impl Default for PrintSequenceInput {
    fn default() -> Self {
        Self {
            max_number: DEFAULT_MAX_NUMBER,
        }
    }
}

/// Output from printing a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrintSequenceOutput {
    /// Number of lines accepted by the sink.
    pub lines_written: u64,
    /// True if the reader closed the output before the sequence ended.
    pub closed_early: bool,
}

/// Use case for writing the tokens for `1..=N` to a sink, one per line.
pub struct PrintSequence<S: TokenSink> {
    generator: Generator,
    sink: S,
}

impl<S: TokenSink> PrintSequence<S> {
    /// Creates a new `PrintSequence` use case.
    #[must_use]
    pub const fn new(generator: Generator, sink: S) -> Self {
        Self { generator, sink }
    }

    /// Consumes the use case and returns the sink.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Streams the sequence into the sink and flushes it.
    ///
    /// A closed reader ends the run without error; the output records how
    /// many lines made it out.
    ///
    /// # Errors
    /// - Returns a domain error if `max_number` is negative
    /// - Returns a sink error for write failures other than a closed reader
    pub fn execute(&mut self, input: PrintSequenceInput) -> ApplicationResult<PrintSequenceOutput> {
        let max_number = validate_max_number(input.max_number)?;

        super::warn_shadowed(self.generator.rules());

        let span = tracing::debug_span!("print_sequence", max_number);
        let _guard = span.enter();

        let mut lines_written = 0;
        for token in self.generator.tokens(max_number) {
            match self.sink.write_line(&token) {
                Ok(()) => lines_written += 1,
                Err(SinkError::Closed) => {
                    tracing::debug!(lines_written, "output closed early");
                    return Ok(PrintSequenceOutput {
                        lines_written,
                        closed_early: true,
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

        tracing::debug!(lines_written, "sequence written");
        Ok(PrintSequenceOutput {
            lines_written,
            closed_early,
        })
    }
}
