//! levelog
//!
//! Leveled logging with a process-wide default logger and independently
//! configured logger instances.
//!
//! A record is written when its level is at or above the logger's threshold
//! (`Debug < Info < Warn < Error`). Rendered lines go to a `Sink`: the console,
//! a file, a fan-out of several, or anything implementing the trait.
//!
//! ```rust,no_run
//! use levelog::{Level, Logger, LoggerConfig};
//! use levelog::sink::FileSink;
//! use std::sync::Arc;
//!
//! // Process-wide default logger
//! levelog::set_level(Level::Info);
//! levelog::set_file_output("/var/log/myapp.log", true);
//! levelog::info("service starting");
//! levelog::info_log!("listening on {}", 8080);
//!
//! // Independent instance
//! let audit = Logger::new(LoggerConfig::new(
//!     Level::Warn,
//!     Arc::new(FileSink::open("/var/log/audit.log")?),
//! ));
//! levelog::log_warn!(audit, "user {} escalated privileges", "alice");
//!
//! levelog::shutdown()?;
//! # Ok::<(), levelog::LogError>(())
//! ```

pub mod error;
pub mod level;
pub mod sink;
pub mod format;
pub mod logger;
pub mod settings;
mod macros;

pub use error::{LogError, LogResult};
pub use level::Level;
pub use format::{DefaultFormatter, Formatter, Joined, Record};
pub use sink::{ConsoleSink, FanOutSink, FileSink, MemorySink, Sink, SharedSink};
pub use logger::{Logger, LoggerConfig};
pub use settings::LogSettings;

// Re-export the default logger functions for convenience
pub use logger::global::{
    default_logger, init, config, level, set_level, set_output,
    set_include_source_location, set_include_timestamp, set_formatter,
    set_file_output, try_set_file_output, file_output_sink, flush, shutdown,
    enabled, log, log_fmt, try_log,
    debug, debug_fmt, info, info_fmt, warn, warn_fmt,
    error, error_fmt, error_from, fatal, fatal_fmt, panic, panic_fmt,
};
