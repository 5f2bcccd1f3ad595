//! Process-wide default logger
//!
//! One `Logger` per process, created on first use with threshold Debug,
//! output stdout and source locations off. The free functions here read and
//! mutate that logger; its configuration is lock-guarded like any instance's,
//! so setters are safe to call while other threads are logging.

use std::error::Error;
use std::fmt;
use std::path::Path;
use std::sync::Arc;

use once_cell::sync::Lazy;

use super::config::LoggerConfig;
use super::instance::Logger;
use crate::error::LogResult;
use crate::format::SharedFormatter;
use crate::level::Level;
use crate::sink::{ConsoleSink, FanOutSink, FileSink, SharedSink};

/// Global logger instance
static DEFAULT: Lazy<Logger> = Lazy::new(Logger::default);

/// Get the process-wide default logger
pub fn default_logger() -> &'static Logger {
    &DEFAULT
}

/// Replace the default configuration wholesale
pub fn init(config: LoggerConfig) {
    DEFAULT.reconfigure(config);
}

/// Snapshot of the default configuration
pub fn config() -> LoggerConfig {
    DEFAULT.config()
}

/// Set the threshold for later writes
pub fn set_level(level: Level) {
    DEFAULT.set_level(level);
}

/// Current threshold
pub fn level() -> Level {
    DEFAULT.level()
}

/// Send later writes to another sink
pub fn set_output(sink: SharedSink) {
    DEFAULT.set_output(sink);
}

/// Turn call-site locations on or off
pub fn set_include_source_location(include: bool) {
    DEFAULT.set_include_source_location(include);
}

/// Turn timestamps on or off
pub fn set_include_timestamp(include: bool) {
    DEFAULT.set_include_timestamp(include);
}

/// Replace the formatter
pub fn set_formatter(formatter: SharedFormatter) {
    DEFAULT.set_formatter(formatter);
}

/// Build the sink used for file output
///
/// Opens `path` for append (creating it, ignoring a trailing `/`). With
/// `also_console` the file is paired with stdout in a `FanOutSink`, stdout
/// first.
pub fn file_output_sink(path: impl AsRef<Path>, also_console: bool) -> LogResult<SharedSink> {
    let file: SharedSink = Arc::new(FileSink::open(path)?);
    if also_console {
        Ok(Arc::new(FanOutSink::new(vec![Arc::new(ConsoleSink::stdout()), file])))
    } else {
        Ok(file)
    }
}

/// Send default output to a file, optionally mirrored to stdout
///
/// Returns `LogError::SinkUnavailable` if the file cannot be opened; the
/// current output is left untouched in that case.
pub fn try_set_file_output(path: impl AsRef<Path>, also_console: bool) -> LogResult<()> {
    let sink = file_output_sink(path, also_console)?;
    set_output(sink);
    Ok(())
}

/// Send default output to a file, optionally mirrored to stdout
///
/// Logging that cannot reach its configured file is treated as a startup
/// misconfiguration: the error is printed to stderr and the process exits
/// with status 1. Use `try_set_file_output` to handle the failure instead.
pub fn set_file_output(path: impl AsRef<Path>, also_console: bool) {
    if let Err(e) = try_set_file_output(path, also_console) {
        eprintln!("levelog: cannot set file output: {}", e);
        std::process::exit(1);
    }
}

/// Flush the default sink
pub fn flush() -> LogResult<()> {
    DEFAULT.flush()
}

/// Flush the default sink and fall back to stdout
///
/// Dropping the previous sink closes a file opened by `set_file_output`
/// unless something else still holds it. Any flush error is returned after
/// the swap.
pub fn shutdown() -> LogResult<()> {
    let flushed = DEFAULT.flush();
    DEFAULT.set_output(Arc::new(ConsoleSink::stdout()));
    flushed
}

/// Whether a record at `level` would be written
pub fn enabled(level: Level) -> bool {
    DEFAULT.enabled(level)
}

/// Log a message at the given level
#[track_caller]
pub fn log(level: Level, message: impl fmt::Display) {
    DEFAULT.log(level, message);
}

/// Log formatted arguments at the given level
#[track_caller]
pub fn log_fmt(level: Level, args: fmt::Arguments<'_>) {
    DEFAULT.log_fmt(level, args);
}

/// Log at the given level, reporting whether it was written and any sink error
#[track_caller]
pub fn try_log(level: Level, args: fmt::Arguments<'_>) -> LogResult<bool> {
    DEFAULT.try_log(level, args)
}

/// Log a debug message
#[track_caller]
pub fn debug(message: impl fmt::Display) {
    DEFAULT.debug(message);
}

/// Log a debug message with format arguments
#[track_caller]
pub fn debug_fmt(args: fmt::Arguments<'_>) {
    DEFAULT.debug_fmt(args);
}

/// Log an info message
#[track_caller]
pub fn info(message: impl fmt::Display) {
    DEFAULT.info(message);
}

/// Log an info message with format arguments
#[track_caller]
pub fn info_fmt(args: fmt::Arguments<'_>) {
    DEFAULT.info_fmt(args);
}

/// Log a warning message
#[track_caller]
pub fn warn(message: impl fmt::Display) {
    DEFAULT.warn(message);
}

/// Log a warning message with format arguments
#[track_caller]
pub fn warn_fmt(args: fmt::Arguments<'_>) {
    DEFAULT.warn_fmt(args);
}

/// Log an error message
#[track_caller]
pub fn error(message: impl fmt::Display) {
    DEFAULT.error(message);
}

/// Log an error message with format arguments
#[track_caller]
pub fn error_fmt(args: fmt::Arguments<'_>) {
    DEFAULT.error_fmt(args);
}

/// Log an error value's message at Error level
#[track_caller]
pub fn error_from(err: &dyn Error) {
    DEFAULT.error_from(err);
}

/// Write at Error level, flush, then exit with status 1
#[track_caller]
pub fn fatal(message: impl fmt::Display) -> ! {
    DEFAULT.fatal(message)
}

/// Format, write at Error level, flush, then exit with status 1
#[track_caller]
pub fn fatal_fmt(args: fmt::Arguments<'_>) -> ! {
    DEFAULT.fatal_fmt(args)
}

/// Write at Error level, flush, then panic with the message
#[track_caller]
pub fn panic(message: impl fmt::Display) -> ! {
    DEFAULT.panic(message)
}

/// Format, write at Error level, flush, then panic with the message
#[track_caller]
pub fn panic_fmt(args: fmt::Arguments<'_>) -> ! {
    DEFAULT.panic_fmt(args)
}

/// Serializes tests that touch the default logger
#[cfg(test)]
pub(crate) static TEST_LOCK: parking_lot::Mutex<()> = parking_lot::const_mutex(());
