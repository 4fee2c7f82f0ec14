//! Port adapters.

mod writer_sink;

pub use writer_sink::{LINE_ENDING, StdoutSink, WriterSink};
