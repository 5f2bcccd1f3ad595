//! Error types

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring or writing logs
#[derive(Error, Debug)]
pub enum LogError {
    /// A level name other than debug, info, warn or error
    #[error("Invalid log level name: {0:?} (expected debug, info, warn or error)")]
    InvalidLevelName(String),

    /// A file-backed sink could not be opened
    #[error("Log sink unavailable: {}: {source}", path.display())]
    SinkUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to or flushing a sink failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A settings file or value could not be parsed
    #[error("Settings error: {0}")]
    Settings(String),
}

impl LogError {
    /// Create an invalid level name error
    pub fn invalid_level(name: impl Into<String>) -> Self {
        Self::InvalidLevelName(name.into())
    }

    /// Create a sink unavailable error
    pub fn sink_unavailable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::SinkUnavailable {
            path: path.into(),
            source,
        }
    }

    /// Create a settings error
    pub fn settings(message: impl Into<String>) -> Self {
        Self::Settings(message.into())
    }
}

pub type LogResult<T> = Result<T, LogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_level_message() {
        let err = LogError::invalid_level("trace");
        assert_eq!(
            err.to_string(),
            "Invalid log level name: \"trace\" (expected debug, info, warn or error)"
        );
    }

    #[test]
    fn test_sink_unavailable_keeps_source() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err = LogError::sink_unavailable("/var/log/app.log", io_err);

        assert!(err.to_string().contains("/var/log/app.log"));
        assert!(err.to_string().contains("denied"));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "denied");
    }

    #[test]
    fn test_io_from() {
        let err: LogError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(matches!(err, LogError::Io(_)));
    }
}
