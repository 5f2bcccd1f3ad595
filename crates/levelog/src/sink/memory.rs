//! In-memory sink

use std::io;

use parking_lot::Mutex;

use super::traits::Sink;

/// In-memory sink for testing and capture
///
/// Records are appended to a byte buffer that can be inspected at any time.
///
/// # Thread Safety
///
/// The buffer is guarded by a mutex; each record is appended under one lock
/// acquisition.
///
/// # Example
///
/// ```
/// use levelog::sink::{MemorySink, Sink};
///
/// let sink = MemorySink::new();
/// sink.write_record(b"INFO: ready\n").unwrap();
/// assert_eq!(sink.lines(), vec!["INFO: ready".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemorySink {
    buffer: Mutex<Vec<u8>>,
}

impl MemorySink {
    /// Create a new empty memory sink
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the raw bytes written so far
    pub fn bytes(&self) -> Vec<u8> {
        self.buffer.lock().clone()
    }

    /// Everything written so far, as text
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Everything written so far, split into lines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    /// Number of bytes written
    pub fn len(&self) -> usize {
        self.buffer.lock().len()
    }

    /// Check if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take the buffered bytes, leaving the sink empty
    pub fn take(&self) -> Vec<u8> {
        std::mem::take(&mut *self.buffer.lock())
    }

    /// Discard everything written so far
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Sink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    fn write_record(&self, record: &[u8]) -> io::Result<()> {
        self.buffer.lock().extend_from_slice(record);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());

        sink.write_record(b"DEBUG: a\n").unwrap();
        sink.write_record(b"INFO: b\n").unwrap();

        assert_eq!(sink.len(), 17);
        assert_eq!(sink.lines(), vec!["DEBUG: a", "INFO: b"]);
    }

    #[test]
    fn test_memory_sink_take_and_clear() {
        let sink = MemorySink::new();
        sink.write_record(b"x\n").unwrap();

        assert_eq!(sink.take(), b"x\n".to_vec());
        assert!(sink.is_empty());

        sink.write_record(b"y\n").unwrap();
        sink.clear();
        assert!(sink.is_empty());
    }
}
