// Wed Oct 14 2026 - Alex

use crate::logging::{self, LogLevel, Logger, LoggerError, Streams};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

pub const LEVEL_ENV: &str = "AME_LOG_LEVEL";
pub const NO_COLOR_ENV: &str = "NO_COLOR";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid log level in {var}: {value}")]
    InvalidLevel { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub color: bool,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: LogLevel::Debug,
            color: true,
        }
    }
}

impl LoggerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(LEVEL_ENV) {
            config.level = value.parse().map_err(|_| ConfigError::InvalidLevel {
                var: LEVEL_ENV,
                value,
            })?;
        }

        // no-color.org: any non-empty value disables color
        if lookup(NO_COLOR_ENV).is_some_and(|v| !v.is_empty()) {
            config.color = false;
        }

        Ok(config)
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn build(&self) -> Logger {
        self.build_with_streams(Streams::stderr())
    }

    pub fn build_with_streams(&self, streams: Streams) -> Logger {
        Logger::with_streams(streams)
            .with_level(self.level)
            .with_color(self.color)
    }

    /// Builds the logger and makes it the process-wide instance.
    pub fn init_global(&self) -> Result<&'static Logger, LoggerError> {
        logging::init(self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::BufferSink;
    use std::collections::HashMap;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, LoggerConfig::default());
        assert_eq!(config.level, LogLevel::Debug);
        assert!(config.color);
    }

    #[test]
    fn test_env_level_and_no_color() {
        let config = LoggerConfig::from_lookup(lookup_from(&[
            (LEVEL_ENV, "Warning"),
            (NO_COLOR_ENV, "1"),
        ]))
        .unwrap();
        assert_eq!(config.level, LogLevel::Warn);
        assert!(!config.color);
    }

    #[test]
    fn test_empty_no_color_keeps_color() {
        let config = LoggerConfig::from_lookup(lookup_from(&[(NO_COLOR_ENV, "")])).unwrap();
        assert!(config.color);
    }

    #[test]
    fn test_env_invalid_level() {
        let err = LoggerConfig::from_lookup(lookup_from(&[(LEVEL_ENV, "chatty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLevel { value, .. } if value == "chatty"));
    }

    #[test]
    fn test_from_env_reads_process_environment() {
        std::env::set_var(LEVEL_ENV, "error");
        let config = LoggerConfig::from_env();
        std::env::remove_var(LEVEL_ENV);

        assert_eq!(config.unwrap().level, LogLevel::Error);
    }

    #[test]
    fn test_json_accepts_trace_alias() {
        let config = LoggerConfig::from_json_str(r#"{"level": "trace"}"#).unwrap();
        assert_eq!(config.level, LogLevel::Debug);
        assert_eq!("trace".parse::<LogLevel>().unwrap(), config.level);
    }

    #[test]
    fn test_json() {
        let config = LoggerConfig::from_json_str(r#"{"level": "error", "color": false}"#).unwrap();
        assert_eq!(config, LoggerConfig::new().with_level(LogLevel::Error).with_color(false));

        let partial = LoggerConfig::from_json_str(r#"{"level": "off"}"#).unwrap();
        assert_eq!(partial.level, LogLevel::Silent);
        assert!(partial.color);

        assert!(matches!(
            LoggerConfig::from_json_str(r#"{"level": "loud"}"#),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn test_save_and_load() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("logger.json");

        let config = LoggerConfig::new().with_level(LogLevel::Info).with_color(false);
        config.save(&path)?;
        assert_eq!(LoggerConfig::load(&path)?, config);
        Ok(())
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            LoggerConfig::load("/nonexistent/ame/logger.json"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_build_applies_settings() {
        let diag = BufferSink::new();
        let err = BufferSink::new();
        let logger = LoggerConfig::new()
            .with_level(LogLevel::Info)
            .with_color(false)
            .build_with_streams(Streams::new(diag.boxed(), err.boxed()));

        assert_eq!(logger.level(), LogLevel::Info);
        crate::log_debug!(logger: &logger, "hidden");
        crate::log_info!(logger: &logger, "shown");

        let lines = diag.lines();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].ends_with("shown"));
        assert!(!lines[0].contains('\x1b'));
    }
}
