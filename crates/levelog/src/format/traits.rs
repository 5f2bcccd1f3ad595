//! Formatter trait and the record handed to it

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::level::Level;

/// A single log event, as seen by a formatter
///
/// `timestamp` and `location` are only present when the logger's
/// configuration asks for them.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    /// Severity of the event
    pub level: Level,
    /// The message, not yet rendered
    pub message: fmt::Arguments<'a>,
    /// When the event was logged
    pub timestamp: Option<DateTime<Local>>,
    /// Call site that logged the event
    pub location: Option<&'static Location<'static>>,
}

/// Renders records into lines of text
///
/// The returned line must not contain the trailing line terminator; the
/// logger appends it.
pub trait Formatter: Send + Sync {
    /// Render one record
    fn format_record(&self, record: &Record<'_>) -> String;
}

/// Type alias for an Arc-wrapped formatter
pub type SharedFormatter = Arc<dyn Formatter>;

impl<F> Formatter for F
where
    F: Fn(&Record<'_>) -> String + Send + Sync,
{
    fn format_record(&self, record: &Record<'_>) -> String {
        self(record)
    }
}
