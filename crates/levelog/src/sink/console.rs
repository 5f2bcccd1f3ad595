//! Console sink implementation

use std::io::{self, Write};

use super::traits::Sink;

/// Which standard stream a `ConsoleSink` writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleStream {
    #[default]
    Stdout,
    Stderr,
}

/// A sink that writes to the process's stdout or stderr
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink {
    stream: ConsoleStream,
}

impl ConsoleSink {
    /// Create a sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            stream: ConsoleStream::Stdout,
        }
    }

    /// Create a sink writing to stderr
    pub fn stderr() -> Self {
        Self {
            stream: ConsoleStream::Stderr,
        }
    }

    /// The stream this sink writes to
    pub fn stream(&self) -> ConsoleStream {
        self.stream
    }
}

impl Sink for ConsoleSink {
    fn name(&self) -> &str {
        match self.stream {
            ConsoleStream::Stdout => "stdout",
            ConsoleStream::Stderr => "stderr",
        }
    }

    fn write_record(&self, record: &[u8]) -> io::Result<()> {
        // Holding the stream lock for the whole record keeps lines whole.
        match self.stream {
            ConsoleStream::Stdout => io::stdout().lock().write_all(record),
            ConsoleStream::Stderr => io::stderr().lock().write_all(record),
        }
    }

    fn flush(&self) -> io::Result<()> {
        match self.stream {
            ConsoleStream::Stdout => io::stdout().lock().flush(),
            ConsoleStream::Stderr => io::stderr().lock().flush(),
        }
    }
}
