//! Fan-out sink duplicating records to several destinations

use std::io;

use parking_lot::Mutex;

use super::traits::{Sink, SharedSink};

/// A sink that forwards every record, in order, to each of its members
///
/// Records are forwarded one at a time: a second record is not started until
/// the first has been offered to every member, so all members see the same
/// order even under concurrent writers.
///
/// Writes are best-effort: a failing member does not stop the record from
/// reaching the members after it. Once every member has been tried, the first
/// error encountered (if any) is returned. `flush` follows the same policy.
///
/// # Example
///
/// ```
/// use levelog::sink::{FanOutSink, MemorySink, Sink};
/// use std::sync::Arc;
///
/// let console = Arc::new(MemorySink::new());
/// let file = Arc::new(MemorySink::new());
/// let both = FanOutSink::new(vec![console.clone(), file.clone()]);
///
/// both.write_record(b"INFO: hello\n").unwrap();
/// assert_eq!(console.contents(), file.contents());
/// ```
#[derive(Default)]
pub struct FanOutSink {
    sinks: Vec<SharedSink>,
    order: Mutex<()>,
}

impl FanOutSink {
    /// Create a fan-out over the given sinks
    ///
    /// An empty fan-out accepts and discards every record.
    pub fn new(sinks: Vec<SharedSink>) -> Self {
        Self {
            sinks,
            order: Mutex::new(()),
        }
    }

    /// Add another member
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Get the members of this fan-out
    pub fn sinks(&self) -> &[SharedSink] {
        &self.sinks
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    /// Check if there are no members
    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }

    fn for_each_member(&self, mut op: impl FnMut(&dyn Sink) -> io::Result<()>) -> io::Result<()> {
        let mut first_err = None;
        for sink in &self.sinks {
            if let Err(e) = op(sink.as_ref()) {
                first_err.get_or_insert(e);
            }
        }
        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Sink for FanOutSink {
    fn name(&self) -> &str {
        "fanout"
    }

    fn write_record(&self, record: &[u8]) -> io::Result<()> {
        let _order = self.order.lock();
        self.for_each_member(|sink| sink.write_record(record))
    }

    fn flush(&self) -> io::Result<()> {
        self.for_each_member(|sink| sink.flush())
    }
}

// Implement Debug manually since Arc<dyn Sink> doesn't implement Debug
impl std::fmt::Debug for FanOutSink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.sinks.iter().map(|s| s.name()).collect();
        f.debug_struct("FanOutSink").field("sinks", &names).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;
    use std::time::Duration;

    struct BrokenSink {
        attempts: AtomicUsize,
    }

    impl BrokenSink {
        fn new() -> Self {
            Self {
                attempts: AtomicUsize::new(0),
            }
        }
    }

    impl Sink for BrokenSink {
        fn name(&self) -> &str {
            "broken"
        }

        fn write_record(&self, _record: &[u8]) -> io::Result<()> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken sink"))
        }

        fn flush(&self) -> io::Result<()> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "broken flush"))
        }
    }

    #[test]
    fn test_fanout_duplicates_in_order() {
        let first = Arc::new(MemorySink::new());
        let second = Arc::new(MemorySink::new());
        let fanout = FanOutSink::new(vec![first.clone(), second.clone()]);

        fanout.write_record(b"INFO: one\n").unwrap();
        fanout.write_record(b"WARN: two\n").unwrap();

        assert_eq!(first.contents(), "INFO: one\nWARN: two\n");
        assert_eq!(first.bytes(), second.bytes());
    }

    #[test]
    fn test_fanout_best_effort_on_failure() {
        let broken = Arc::new(BrokenSink::new());
        let before = Arc::new(MemorySink::new());
        let after = Arc::new(MemorySink::new());
        let fanout = FanOutSink::new(vec![before.clone(), broken.clone(), after.clone()]);

        let err = fanout.write_record(b"ERROR: disk full\n").unwrap_err();

        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(broken.attempts.load(Ordering::SeqCst), 1);
        assert_eq!(before.contents(), "ERROR: disk full\n");
        assert_eq!(after.contents(), "ERROR: disk full\n");
    }

    /// Stalls after each write so a concurrent record can overtake it
    struct SlowSink {
        inner: MemorySink,
        delay: Duration,
    }

    impl Sink for SlowSink {
        fn name(&self) -> &str {
            "slow"
        }

        fn write_record(&self, record: &[u8]) -> io::Result<()> {
            self.inner.write_record(record)?;
            thread::sleep(self.delay);
            Ok(())
        }
    }

    #[test]
    fn test_fanout_same_order_under_concurrent_writers() {
        let slow = Arc::new(SlowSink {
            inner: MemorySink::new(),
            delay: Duration::from_millis(200),
        });
        let fast = Arc::new(MemorySink::new());
        let fanout = Arc::new(FanOutSink::new(vec![slow.clone(), fast.clone()]));

        let writer = {
            let fanout = fanout.clone();
            thread::spawn(move || fanout.write_record(b"A\n").unwrap())
        };
        thread::sleep(Duration::from_millis(50));
        fanout.write_record(b"B\n").unwrap();
        writer.join().unwrap();

        assert_eq!(slow.inner.bytes(), fast.bytes());
        assert_eq!(fast.lines().len(), 2);
    }

    #[test]
    fn test_fanout_flush_reports_failure() {
        let fanout = FanOutSink::new(vec![Arc::new(MemorySink::new()), Arc::new(BrokenSink::new())]);
        assert!(fanout.flush().is_err());
    }

    #[test]
    fn test_empty_fanout() {
        let fanout = FanOutSink::default();
        assert!(fanout.is_empty());
        fanout.write_record(b"dropped\n").unwrap();

        let fanout = fanout.with_sink(Arc::new(MemorySink::new()));
        assert_eq!(fanout.len(), 1);
        assert_eq!(format!("{:?}", fanout), "FanOutSink { sinks: [\"memory\"] }");
    }
}
