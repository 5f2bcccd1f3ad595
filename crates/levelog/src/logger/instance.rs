//! Logger instances

use std::error::Error;
use std::fmt;
use std::panic::Location;

use chrono::Local;
use parking_lot::RwLock;

use super::config::LoggerConfig;
use crate::error::LogResult;
use crate::format::{Record, SharedFormatter};
use crate::level::Level;
use crate::sink::SharedSink;

/// A leveled logger with its own configuration
///
/// Every write call runs on the caller's thread: the level is compared to the
/// threshold, the record is rendered into a single line and that line is handed
/// to the sink in one append. The configuration sits behind a lock, so setters
/// can be called at any time; a change applies to writes that start after it.
///
/// Plain write calls (`info`, `warn_fmt`, ...) ignore sink errors. Use
/// `try_log` when the caller needs to know.
///
/// # Example
///
/// ```
/// use levelog::{Level, Logger, LoggerConfig};
/// use levelog::sink::MemorySink;
/// use std::sync::Arc;
///
/// let sink = Arc::new(MemorySink::new());
/// let logger = Logger::new(
///     LoggerConfig::new(Level::Info, sink.clone()).with_timestamp(false),
/// );
///
/// logger.debug("filtered out");
/// logger.info_fmt(format_args!("listening on {}", 8080));
///
/// assert_eq!(sink.contents(), "INFO: listening on 8080\n");
/// ```
pub struct Logger {
    config: RwLock<LoggerConfig>,
}

/// What a single write needs from the config, copied out under the read lock
struct WriteTarget {
    sink: SharedSink,
    formatter: SharedFormatter,
    include_source_location: bool,
    include_timestamp: bool,
}

impl Logger {
    /// Create a logger from a config
    ///
    /// Nothing is validated or opened here; the sink is used as given.
    pub fn new(config: LoggerConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    /// Create a logger writing everything to the given sink
    pub fn with_sink(sink: SharedSink) -> Self {
        Self::new(LoggerConfig::default().with_sink(sink))
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> LoggerConfig {
        self.config.read().clone()
    }

    /// Current threshold
    pub fn level(&self) -> Level {
        self.config.read().threshold
    }

    /// Whether a record at `level` would be written
    pub fn enabled(&self, level: Level) -> bool {
        level.allows(self.config.read().threshold)
    }

    /// Replace the whole configuration
    pub fn reconfigure(&self, config: LoggerConfig) {
        *self.config.write() = config;
    }

    /// Set the threshold for later writes
    pub fn set_level(&self, level: Level) {
        self.config.write().threshold = level;
    }

    /// Send later writes to another sink
    pub fn set_output(&self, sink: SharedSink) {
        self.config.write().sink = sink;
    }

    /// Turn call-site locations on or off
    pub fn set_include_source_location(&self, include: bool) {
        self.config.write().include_source_location = include;
    }

    /// Turn timestamps on or off
    pub fn set_include_timestamp(&self, include: bool) {
        self.config.write().include_timestamp = include;
    }

    /// Replace the formatter
    pub fn set_formatter(&self, formatter: SharedFormatter) {
        self.config.write().formatter = formatter;
    }

    /// Flush the current sink
    pub fn flush(&self) -> LogResult<()> {
        let sink = self.config.read().sink.clone();
        sink.flush()?;
        Ok(())
    }

    fn target(&self, level: Level, force: bool) -> Option<WriteTarget> {
        let config = self.config.read();
        if !force && !level.allows(config.threshold) {
            return None;
        }
        Some(WriteTarget {
            sink: config.sink.clone(),
            formatter: config.formatter.clone(),
            include_source_location: config.include_source_location,
            include_timestamp: config.include_timestamp,
        })
    }

    fn write_line(
        target: &WriteTarget,
        level: Level,
        args: fmt::Arguments<'_>,
        location: &'static Location<'static>,
    ) -> LogResult<()> {
        let record = Record {
            level,
            message: args,
            timestamp: target.include_timestamp.then(Local::now),
            location: target.include_source_location.then_some(location),
        };
        let mut line = target.formatter.format_record(&record);
        line.push('\n');

        target.sink.write_record(line.as_bytes())?;
        Ok(())
    }

    #[track_caller]
    fn emit(&self, level: Level, args: fmt::Arguments<'_>, force: bool) -> LogResult<bool> {
        let location = Location::caller();
        // The lock is released before rendering and writing.
        let Some(target) = self.target(level, force) else {
            return Ok(false);
        };

        Self::write_line(&target, level, args, location)?;
        Ok(true)
    }

    /// Write at Error level and flush the very sink that took the record
    #[track_caller]
    fn escalate(&self, args: fmt::Arguments<'_>) {
        let location = Location::caller();
        if let Some(target) = self.target(Level::Error, true) {
            let _ = Self::write_line(&target, Level::Error, args, location);
            let _ = target.sink.flush();
        }
    }

    /// Write a record if `level` passes the threshold, reporting the outcome
    ///
    /// Returns `Ok(false)` when the record was filtered out and `Ok(true)` when
    /// it reached the sink.
    #[track_caller]
    pub fn try_log(&self, level: Level, args: fmt::Arguments<'_>) -> LogResult<bool> {
        self.emit(level, args, false)
    }

    /// Log formatted arguments at the given level
    #[track_caller]
    pub fn log_fmt(&self, level: Level, args: fmt::Arguments<'_>) {
        let _ = self.emit(level, args, false);
    }

    /// Log a message at the given level
    #[track_caller]
    pub fn log(&self, level: Level, message: impl fmt::Display) {
        self.log_fmt(level, format_args!("{}", message));
    }

    /// Log a debug message
    #[track_caller]
    pub fn debug(&self, message: impl fmt::Display) {
        self.log_fmt(Level::Debug, format_args!("{}", message));
    }

    /// Log a debug message with format arguments
    #[track_caller]
    pub fn debug_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(Level::Debug, args);
    }

    /// Log an info message
    #[track_caller]
    pub fn info(&self, message: impl fmt::Display) {
        self.log_fmt(Level::Info, format_args!("{}", message));
    }

    /// Log an info message with format arguments
    #[track_caller]
    pub fn info_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(Level::Info, args);
    }

    /// Log a warning message
    #[track_caller]
    pub fn warn(&self, message: impl fmt::Display) {
        self.log_fmt(Level::Warn, format_args!("{}", message));
    }

    /// Log a warning message with format arguments
    #[track_caller]
    pub fn warn_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(Level::Warn, args);
    }

    /// Log an error message
    #[track_caller]
    pub fn error(&self, message: impl fmt::Display) {
        self.log_fmt(Level::Error, format_args!("{}", message));
    }

    /// Log an error message with format arguments
    #[track_caller]
    pub fn error_fmt(&self, args: fmt::Arguments<'_>) {
        self.log_fmt(Level::Error, args);
    }

    /// Log an error value's message at Error level
    #[track_caller]
    pub fn error_from(&self, err: &dyn Error) {
        self.log_fmt(Level::Error, format_args!("{}", err));
    }

    /// Write at Error level regardless of threshold, flush, then exit with status 1
    #[track_caller]
    pub fn fatal(&self, message: impl fmt::Display) -> ! {
        self.fatal_fmt(format_args!("{}", message))
    }

    /// Format, write at Error level, flush, then exit with status 1
    #[track_caller]
    pub fn fatal_fmt(&self, args: fmt::Arguments<'_>) -> ! {
        self.escalate(args);
        std::process::exit(1)
    }

    /// Write at Error level regardless of threshold, flush, then panic
    ///
    /// The panic payload is the rendered message as a `String`.
    #[track_caller]
    pub fn panic(&self, message: impl fmt::Display) -> ! {
        self.panic_fmt(format_args!("{}", message))
    }

    /// Format, write at Error level, flush, then panic with the message
    #[track_caller]
    pub fn panic_fmt(&self, args: fmt::Arguments<'_>) -> ! {
        let message = args.to_string();
        self.escalate(format_args!("{}", message));
        std::panic::panic_any(message)
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LoggerConfig::default())
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("config", &*self.config.read()).finish()
    }
}
