//! Adapter turning any `io::Write` into a sink

use std::io::{self, Write};

use parking_lot::Mutex;

use super::traits::Sink;

/// A sink wrapping an arbitrary writer
///
/// Useful for sockets, pipes or buffers the caller already owns.
///
/// # Example
///
/// ```
/// use levelog::sink::{Sink, WriterSink};
///
/// let sink = WriterSink::new(Vec::new());
/// sink.write_record(b"WARN: low disk\n").unwrap();
/// assert_eq!(sink.into_inner(), b"WARN: low disk\n".to_vec());
/// ```
pub struct WriterSink<W> {
    name: String,
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap a writer
    pub fn new(writer: W) -> Self {
        Self::named("writer", writer)
    }

    /// Wrap a writer under a custom name
    pub fn named(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: name.into(),
            writer: Mutex::new(writer),
        }
    }

    /// Unwrap the writer
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> Sink for WriterSink<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn write_record(&self, record: &[u8]) -> io::Result<()> {
        self.writer.lock().write_all(record)
    }

    fn flush(&self) -> io::Result<()> {
        self.writer.lock().flush()
    }
}

impl<W> std::fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriterSink").field("name", &self.name).finish()
    }
}
