//! `io::Write` sink adapter

use std::fmt;
use std::io::{self, BufWriter, StdoutLock, Write};

use fizzbuzz_application::ports::{SinkError, TokenSink};

/// Line terminator of the target platform.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";

/// Line terminator of the target platform.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Token sink writing lines to any [`Write`] implementation.
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    line_ending: &'static str,
}

/// Buffered sink over a locked standard output.
pub type StdoutSink = WriterSink<BufWriter<StdoutLock<'static>>>;

impl<W: Write> WriterSink<W> {
    /// Creates a sink that ends lines with [`LINE_ENDING`].
    pub const fn new(writer: W) -> Self {
        Self::with_line_ending(writer, LINE_ENDING)
    }

    /// Creates a sink with an explicit line terminator.
    pub const fn with_line_ending(writer: W, line_ending: &'static str) -> Self {
        Self {
            writer,
            line_ending,
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl StdoutSink {
    /// Locks standard output and wraps it in a buffer.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(BufWriter::new(io::stdout().lock()))
    }
}

impl<W: Write> TokenSink for WriterSink<W> {
    fn write_line(&mut self, line: &dyn fmt::Display) -> Result<(), SinkError> {
        write!(self.writer, "{line}{}", self.line_ending).map_err(to_sink_error)
    }

    fn flush(&mut self) -> Result<(), SinkError> {
        self.writer.flush().map_err(to_sink_error)
    }
}

fn to_sink_error(error: io::Error) -> SinkError {
    if error.kind() == io::ErrorKind::BrokenPipe {
        SinkError::Closed
    } else {
        SinkError::Io(error)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    struct FailingWriter(io::ErrorKind);

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(self.0, "write failed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writes_platform_line_ending() {
        let mut sink = WriterSink::new(Vec::new());
        sink.write_line(&"Fizz").unwrap();
        sink.write_line(&4).unwrap();

        let expected = format!("Fizz{LINE_ENDING}4{LINE_ENDING}");
        assert_eq!(String::from_utf8(sink.into_inner()).unwrap(), expected);
    }

    #[test]
    fn test_custom_line_ending() {
        let mut sink = WriterSink::with_line_ending(Vec::new(), "\r\n");
        sink.write_line(&"Buzz").unwrap();
        sink.flush().unwrap();
        assert_eq!(sink.into_inner(), b"Buzz\r\n");
    }

    #[test]
    fn test_broken_pipe_maps_to_closed() {
        let mut sink = WriterSink::new(FailingWriter(io::ErrorKind::BrokenPipe));
        assert!(matches!(sink.write_line(&"1"), Err(SinkError::Closed)));
    }

    #[test]
    fn test_other_errors_are_io() {
        let mut sink = WriterSink::new(FailingWriter(io::ErrorKind::PermissionDenied));
        assert!(matches!(sink.write_line(&"1"), Err(SinkError::Io(_))));
    }
}
