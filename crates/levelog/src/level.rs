//! Severity levels and the emission rule

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::{LogError, LogResult};

/// Log levels, ordered from least to most severe
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    #[default]
    Debug = 0,
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl Level {
    /// Every level, least severe first
    pub const ALL: [Level; 4] = [Level::Debug, Level::Info, Level::Warn, Level::Error];

    /// Canonical upper-case name, used as the line prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Whether a record at this level passes the given threshold
    ///
    /// Equality emits.
    pub fn allows(self, threshold: Level) -> bool {
        self >= threshold
    }

    /// Parse a level name case-insensitively
    ///
    /// # Example
    ///
    /// ```
    /// use levelog::Level;
    ///
    /// assert_eq!(Level::parse("Warn").unwrap(), Level::Warn);
    /// assert!(Level::parse("trace").is_err());
    /// ```
    pub fn parse(name: &str) -> LogResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            _ => Err(LogError::invalid_level(name)),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Level::parse(s)
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        Level::parse(&name).map_err(serde::de::Error::custom)
    }
}
