//! Default line layout

use std::fmt::Write;
use std::path::Path;

use super::traits::{Formatter, Record};

/// Timestamp layout used unless overridden
pub const DEFAULT_TIME_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Formatter producing `LEVEL: [timestamp ][file:line: ]message`
///
/// # Example
///
/// ```
/// use levelog::format::{DefaultFormatter, Formatter, Record};
/// use levelog::Level;
///
/// let usage = 91;
/// let line = DefaultFormatter::new().format_record(&Record {
///     level: Level::Warn,
///     message: format_args!("disk at {}%", usage),
///     timestamp: None,
///     location: None,
/// });
/// assert_eq!(line, "WARN: disk at 91%");
/// ```
#[derive(Debug, Clone)]
pub struct DefaultFormatter {
    time_format: String,
    short_file: bool,
}

impl Default for DefaultFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl DefaultFormatter {
    /// Create a formatter with the default timestamp layout and short file names
    pub fn new() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            short_file: true,
        }
    }

    /// Use a custom `chrono` strftime layout for timestamps
    pub fn with_time_format(mut self, time_format: impl Into<String>) -> Self {
        self.time_format = time_format.into();
        self
    }

    /// Print the full source path instead of just the file name
    pub fn with_full_path(mut self) -> Self {
        self.short_file = false;
        self
    }
}

impl Formatter for DefaultFormatter {
    fn format_record(&self, record: &Record<'_>) -> String {
        let mut line = String::with_capacity(64);
        // Writing into a String cannot fail.
        let _ = write!(line, "{}: ", record.level);

        if let Some(timestamp) = record.timestamp {
            let _ = write!(line, "{} ", timestamp.format(&self.time_format));
        }

        if let Some(location) = record.location {
            let file = if self.short_file {
                Path::new(location.file())
                    .file_name()
                    .and_then(|name| name.to_str())
                    .unwrap_or(location.file())
            } else {
                location.file()
            };
            let _ = write!(line, "{}:{}: ", file, location.line());
        }

        let _ = line.write_fmt(record.message);
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::Level;
    use chrono::{DateTime, Local, TimeZone};
    use std::fmt;
    use std::panic::Location;

    fn render(
        formatter: &DefaultFormatter,
        level: Level,
        timestamp: Option<DateTime<Local>>,
        location: Option<&'static Location<'static>>,
        message: fmt::Arguments<'_>,
    ) -> String {
        formatter.format_record(&Record {
            level,
            message,
            timestamp,
            location,
        })
    }

    #[test]
    fn test_plain_line() {
        let port = 8080;
        let line = render(
            &DefaultFormatter::new(),
            Level::Info,
            None,
            None,
            format_args!("server started on port {}", port),
        );
        assert_eq!(line, "INFO: server started on port 8080");
    }

    #[test]
    fn test_timestamp() {
        let timestamp = Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap();

        let line = render(&DefaultFormatter::new(), Level::Error, Some(timestamp), None, format_args!("boom"));
        assert_eq!(line, "ERROR: 2024/03/09 14:05:07 boom");

        let custom = DefaultFormatter::new().with_time_format("%H:%M");
        let line = render(&custom, Level::Error, Some(timestamp), None, format_args!("boom"));
        assert_eq!(line, "ERROR: 14:05 boom");
    }

    #[test]
    fn test_location() {
        let location = Location::caller();

        let short = render(&DefaultFormatter::new(), Level::Debug, None, Some(location), format_args!("here"));
        assert_eq!(short, format!("DEBUG: default_formatter.rs:{}: here", location.line()));

        let full_formatter = DefaultFormatter::new().with_full_path();
        let full = render(&full_formatter, Level::Debug, None, Some(location), format_args!("here"));
        assert_eq!(full, format!("DEBUG: {}:{}: here", location.file(), location.line()));
    }

    #[test]
    fn test_closure_formatter() {
        let formatter = |record: &Record<'_>| format!("[{}] {}", record.level, record.message);
        let line = formatter.format_record(&Record {
            level: Level::Warn,
            message: format_args!("careful"),
            timestamp: None,
            location: None,
        });
        assert_eq!(line, "[WARN] careful");
    }
}
