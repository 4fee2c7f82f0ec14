//! Token sink port
//!
//! Defines the interface for writing output lines.

use std::fmt;

/// Errors that can occur while writing output.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    /// The reader went away (for example a closed pipe).
    #[error("output closed by reader")]
    Closed,

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Destination for output, one line at a time.
///
/// Implementations own the line terminator; callers pass only the content.
pub trait TokenSink {
    /// Writes `line` followed by the sink's line terminator.
    ///
    /// # Errors
    /// Returns [`SinkError::Closed`] if the reader is gone, or
    /// [`SinkError::Io`] for any other write failure.
    fn write_line(&mut self, line: &dyn fmt::Display) -> Result<(), SinkError>;

    /// Flushes buffered output.
    ///
    /// # Errors
    /// Same as [`TokenSink::write_line`].
    fn flush(&mut self) -> Result<(), SinkError>;
}

impl<S: TokenSink + ?Sized> TokenSink for &mut S {
    fn write_line(&mut self, line: &dyn fmt::Display) -> Result<(), SinkError> {
        (**self).write_line(line)
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        (**self).flush()
    }
}
