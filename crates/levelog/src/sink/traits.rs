//! Sink trait definition

use std::io;
use std::sync::Arc;

/// Append-only destination for rendered log records
///
/// Each call to `write_record` carries exactly one complete record, line
/// terminator included. Implementations must append it as a unit: records
/// written concurrently from several threads may be ordered arbitrarily but
/// never interleave.
///
/// Implementations:
/// - `ConsoleSink`: stdout or stderr
/// - `FileSink`: a file opened for append
/// - `FanOutSink`: duplicates every record to several sinks
/// - `MemorySink`: in-memory capture for tests
/// - `WriterSink`: any `std::io::Write`
/// - `NoOpSink`: discards everything
pub trait Sink: Send + Sync {
    /// Human-readable name of this sink
    fn name(&self) -> &str;

    /// Append one complete record
    fn write_record(&self, record: &[u8]) -> io::Result<()>;

    /// Flush anything buffered below this sink
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Type alias for an Arc-wrapped sink
pub type SharedSink = Arc<dyn Sink>;
