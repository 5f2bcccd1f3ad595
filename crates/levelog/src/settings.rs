//! Logging settings from YAML or environment variables
//!
//! ```yaml
//! level: info
//! file: /var/log/myapp.log
//! also_console: true
//! include_source_location: false
//! include_timestamp: true
//! ```
//!
//! Environment variables: `LEVELOG_LEVEL`, `LEVELOG_FILE`, `LEVELOG_CONSOLE`,
//! `LEVELOG_SOURCE`, `LEVELOG_TIMESTAMP`.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Deserialize;

use crate::error::{LogError, LogResult};
use crate::level::Level;
use crate::logger::{global, LoggerConfig};
use crate::sink::{ConsoleSink, SharedSink};

pub const ENV_LEVEL: &str = "LEVELOG_LEVEL";
pub const ENV_FILE: &str = "LEVELOG_FILE";
pub const ENV_CONSOLE: &str = "LEVELOG_CONSOLE";
pub const ENV_SOURCE: &str = "LEVELOG_SOURCE";
pub const ENV_TIMESTAMP: &str = "LEVELOG_TIMESTAMP";

/// Declarative logging setup
///
/// Missing fields take their defaults: level debug, no file, console on,
/// source locations off, timestamps on.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogSettings {
    /// Minimum level that gets written
    pub level: Level,
    /// Append to this file
    pub file: Option<PathBuf>,
    /// Also write to stdout when `file` is set
    pub also_console: bool,
    pub include_source_location: bool,
    pub include_timestamp: bool,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: Level::Debug,
            file: None,
            also_console: true,
            include_source_location: false,
            include_timestamp: true,
        }
    }
}

impl LogSettings {
    /// Parse settings from a YAML document
    pub fn from_yaml_str(content: &str) -> LogResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| LogError::settings(format!("Failed to parse YAML: {}", e)))
    }

    /// Load settings from a YAML file
    pub fn load(path: impl AsRef<Path>) -> LogResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Read settings from the process environment
    ///
    /// Unset variables keep their defaults. A set but unrecognized level name
    /// is an error rather than a silent fallback.
    pub fn from_env() -> LogResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> LogResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        if let Some(level) = lookup(ENV_LEVEL) {
            settings.level = Level::parse(&level)?;
        }
        if let Some(file) = lookup(ENV_FILE).filter(|f| !f.trim().is_empty()) {
            settings.file = Some(PathBuf::from(file));
        }
        if let Some(value) = lookup(ENV_CONSOLE) {
            settings.also_console = parse_flag(ENV_CONSOLE, &value)?;
        }
        if let Some(value) = lookup(ENV_SOURCE) {
            settings.include_source_location = parse_flag(ENV_SOURCE, &value)?;
        }
        if let Some(value) = lookup(ENV_TIMESTAMP) {
            settings.include_timestamp = parse_flag(ENV_TIMESTAMP, &value)?;
        }

        Ok(settings)
    }

    /// Build a logger config, opening the file sink if one is configured
    pub fn to_config(&self) -> LogResult<LoggerConfig> {
        let sink: SharedSink = match &self.file {
            Some(path) => global::file_output_sink(path, self.also_console)?,
            None => Arc::new(ConsoleSink::stdout()),
        };

        Ok(LoggerConfig::new(self.level, sink)
            .with_source_location(self.include_source_location)
            .with_timestamp(self.include_timestamp))
    }

    /// Install these settings as the default logger's configuration
    pub fn apply(&self) -> LogResult<()> {
        global::init(self.to_config()?);
        Ok(())
    }
}

fn parse_flag(key: &str, value: &str) -> LogResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(LogError::settings(format!(
            "{} must be a boolean, got {:?}",
            key, value
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use tempfile::tempdir;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let settings = LogSettings::from_yaml_str("{}").unwrap();
        assert_eq!(settings, LogSettings::default());
        assert_eq!(settings.level, Level::Debug);
        assert!(settings.also_console);
    }

    #[test]
    fn test_yaml_settings() {
        let yaml = r#"
level: WARN
file: /tmp/app.log
also_console: false
include_source_location: true
"#;
        let settings = LogSettings::from_yaml_str(yaml).unwrap();

        assert_eq!(settings.level, Level::Warn);
        assert_eq!(settings.file, Some(PathBuf::from("/tmp/app.log")));
        assert!(!settings.also_console);
        assert!(settings.include_source_location);
        assert!(settings.include_timestamp);
    }

    #[test]
    fn test_yaml_invalid_level() {
        let err = LogSettings::from_yaml_str("level: trace").unwrap_err();
        assert!(matches!(err, LogError::Settings(_)));
        assert!(err.to_string().contains("trace"));
    }

    #[test]
    fn test_yaml_unknown_field() {
        assert!(LogSettings::from_yaml_str("rotate: daily").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logging.yaml");
        fs::write(&path, "level: error\n").unwrap();

        let settings = LogSettings::load(&path).unwrap();
        assert_eq!(settings.level, Level::Error);

        let missing = LogSettings::load(dir.path().join("missing.yaml"));
        assert!(matches!(missing, Err(LogError::Io(_))));
    }

    #[test]
    fn test_env_settings() {
        let settings = LogSettings::from_lookup(lookup_from(&[
            (ENV_LEVEL, "Info"),
            (ENV_FILE, "/tmp/env.log"),
            (ENV_CONSOLE, "0"),
            (ENV_SOURCE, "true"),
            (ENV_TIMESTAMP, "off"),
        ]))
        .unwrap();

        assert_eq!(settings.level, Level::Info);
        assert_eq!(settings.file, Some(PathBuf::from("/tmp/env.log")));
        assert!(!settings.also_console);
        assert!(settings.include_source_location);
        assert!(!settings.include_timestamp);
    }

    #[test]
    fn test_env_invalid_level_is_error() {
        let result = LogSettings::from_lookup(lookup_from(&[(ENV_LEVEL, "verbose")]));
        assert!(matches!(result, Err(LogError::InvalidLevelName(name)) if name == "verbose"));
    }

    #[test]
    fn test_env_invalid_flag_is_error() {
        let result = LogSettings::from_lookup(lookup_from(&[(ENV_SOURCE, "maybe")]));
        assert!(matches!(result, Err(LogError::Settings(_))));
    }

    #[test]
    fn test_env_empty() {
        let settings = LogSettings::from_lookup(|_| None).unwrap();
        assert_eq!(settings, LogSettings::default());
    }

    #[test]
    fn test_to_config_console() {
        let config = LogSettings::default().to_config().unwrap();
        assert_eq!(config.sink.name(), "stdout");
        assert_eq!(config.threshold, Level::Debug);
    }

    #[test]
    fn test_to_config_file_missing_directory() {
        let dir = tempdir().unwrap();
        let settings = LogSettings {
            file: Some(dir.path().join("nope").join("app.log")),
            ..LogSettings::default()
        };
        assert!(matches!(settings.to_config(), Err(LogError::SinkUnavailable { .. })));
    }

    #[test]
    fn test_apply_installs_default_config() {
        let _guard = global::TEST_LOCK.lock();
        let dir = tempdir().unwrap();
        let path = dir.path().join("applied.log");
        let settings = LogSettings {
            level: Level::Warn,
            file: Some(path.clone()),
            also_console: false,
            include_timestamp: false,
            ..LogSettings::default()
        };

        settings.apply().unwrap();
        global::info("filtered");
        global::warn("kept");
        global::shutdown().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "WARN: kept\n");
        global::init(LoggerConfig::default());
    }
}
