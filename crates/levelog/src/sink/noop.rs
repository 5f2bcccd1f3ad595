//! No-op sink implementation

use std::io;

use super::traits::Sink;

/// A sink that discards everything
///
/// Useful for silencing a logger entirely.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpSink;

impl NoOpSink {
    /// Create a new no-op sink
    pub fn new() -> Self {
        Self
    }
}

impl Sink for NoOpSink {
    fn name(&self) -> &str {
        "noop"
    }

    fn write_record(&self, _record: &[u8]) -> io::Result<()> {
        Ok(())
    }
}
