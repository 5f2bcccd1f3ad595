//! Logger configuration

use std::sync::Arc;

use crate::format::{DefaultFormatter, SharedFormatter};
use crate::level::Level;
use crate::sink::{ConsoleSink, SharedSink};

/// Everything a logger needs to decide whether and where to write
///
/// Cloning is cheap: the sink and formatter are shared handles.
///
/// # Example
///
/// ```
/// use levelog::{Level, LoggerConfig};
/// use levelog::sink::MemorySink;
/// use std::sync::Arc;
///
/// let config = LoggerConfig::default()
///     .with_threshold(Level::Warn)
///     .with_sink(Arc::new(MemorySink::new()))
///     .with_source_location(true);
/// assert_eq!(config.threshold, Level::Warn);
/// ```
#[derive(Clone)]
pub struct LoggerConfig {
    /// Minimum level that gets written
    pub threshold: Level,
    /// Where rendered lines go
    pub sink: SharedSink,
    /// Prefix lines with the calling file and line
    pub include_source_location: bool,
    /// Prefix lines with the local time
    pub include_timestamp: bool,
    /// Turns records into lines
    pub formatter: SharedFormatter,
}

impl Default for LoggerConfig {
    /// Debug threshold, stdout, timestamps on, source locations off
    fn default() -> Self {
        Self {
            threshold: Level::Debug,
            sink: Arc::new(ConsoleSink::stdout()),
            include_source_location: false,
            include_timestamp: true,
            formatter: Arc::new(DefaultFormatter::new()),
        }
    }
}

impl LoggerConfig {
    /// Create a config with the given threshold and sink, other fields default
    pub fn new(threshold: Level, sink: SharedSink) -> Self {
        Self {
            threshold,
            sink,
            ..Self::default()
        }
    }

    /// Set the minimum level that gets written
    pub fn with_threshold(mut self, threshold: Level) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set where rendered lines go
    pub fn with_sink(mut self, sink: SharedSink) -> Self {
        self.sink = sink;
        self
    }

    /// Prefix lines with the calling file and line
    pub fn with_source_location(mut self, include: bool) -> Self {
        self.include_source_location = include;
        self
    }

    /// Prefix lines with the local time
    pub fn with_timestamp(mut self, include: bool) -> Self {
        self.include_timestamp = include;
        self
    }

    /// Use a custom formatter
    pub fn with_formatter(mut self, formatter: SharedFormatter) -> Self {
        self.formatter = formatter;
        self
    }
}

// Implement Debug manually since the sink and formatter are trait objects
impl std::fmt::Debug for LoggerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoggerConfig")
            .field("threshold", &self.threshold)
            .field("sink", &self.sink.name())
            .field("include_source_location", &self.include_source_location)
            .field("include_timestamp", &self.include_timestamp)
            .finish()
    }
}
