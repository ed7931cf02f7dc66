// Wed Oct 14 2026 - Alex

use crate::logging::LoggerError;
use colored::Color;
use log::{Level, LevelFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum LogLevel {
    #[default]
    #[serde(alias = "trace")]
    Debug = 0,
    Info = 1,
    #[serde(alias = "warning")]
    Warn = 2,
    Error = 3,
    /// Threshold only. Nothing is ever logged at this level.
    #[serde(alias = "off")]
    Silent = 4,
}

impl LogLevel {
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
        LogLevel::Silent,
    ];

    pub fn code(self) -> Option<char> {
        match self {
            LogLevel::Debug => Some('D'),
            LogLevel::Info => Some('I'),
            LogLevel::Warn => Some('W'),
            LogLevel::Error => Some('E'),
            LogLevel::Silent => None,
        }
    }

    pub fn color(self) -> Option<Color> {
        match self {
            LogLevel::Debug => Some(Color::Green),
            LogLevel::Warn => Some(Color::Yellow),
            LogLevel::Error => Some(Color::Red),
            LogLevel::Info | LogLevel::Silent => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
            LogLevel::Silent => "silent",
        }
    }

    pub(crate) fn from_u8(value: u8) -> LogLevel {
        match value {
            0 => LogLevel::Debug,
            1 => LogLevel::Info,
            2 => LogLevel::Warn,
            3 => LogLevel::Error,
            _ => LogLevel::Silent,
        }
    }

    pub fn from_verbosity(verbosity: usize) -> LogLevel {
        match verbosity {
            0 => LogLevel::Warn,
            1 => LogLevel::Info,
            _ => LogLevel::Debug,
        }
    }

    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Debug => LevelFilter::Trace,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Silent => LevelFilter::Off,
        }
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        match level {
            Level::Trace | Level::Debug => LogLevel::Debug,
            Level::Info => LogLevel::Info,
            Level::Warn => LogLevel::Warn,
            Level::Error => LogLevel::Error,
        }
    }
}

impl From<LevelFilter> for LogLevel {
    fn from(filter: LevelFilter) -> Self {
        match filter.to_level() {
            Some(level) => level.into(),
            None => LogLevel::Silent,
        }
    }
}

impl FromStr for LogLevel {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "debug" | "trace" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "silent" | "off" => Ok(LogLevel::Silent),
            _ => Err(LoggerError::InvalidLevel(s.to_string())),
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warn);
        assert!(LogLevel::Warn < LogLevel::Error);
        assert!(LogLevel::Error < LogLevel::Silent);
    }

    #[test]
    fn test_codes_and_colors() {
        assert_eq!(LogLevel::Debug.code(), Some('D'));
        assert_eq!(LogLevel::Info.code(), Some('I'));
        assert_eq!(LogLevel::Warn.code(), Some('W'));
        assert_eq!(LogLevel::Error.code(), Some('E'));
        assert_eq!(LogLevel::Silent.code(), None);

        assert_eq!(LogLevel::Debug.color(), Some(Color::Green));
        assert_eq!(LogLevel::Info.color(), None);
        assert_eq!(LogLevel::Warn.color(), Some(Color::Yellow));
        assert_eq!(LogLevel::Error.color(), Some(Color::Red));
    }

    #[test]
    fn test_u8_round_trip() {
        for level in LogLevel::ALL {
            assert_eq!(LogLevel::from_u8(level as u8), level);
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!("DEBUG".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!(" warning ".parse::<LogLevel>().unwrap(), LogLevel::Warn);
        assert_eq!("off".parse::<LogLevel>().unwrap(), LogLevel::Silent);
        assert!(matches!(
            "loud".parse::<LogLevel>(),
            Err(LoggerError::InvalidLevel(s)) if s == "loud"
        ));
    }

    #[test]
    fn test_log_crate_mapping() {
        assert_eq!(LogLevel::from(Level::Trace), LogLevel::Debug);
        assert_eq!(LogLevel::from(Level::Error), LogLevel::Error);
        assert_eq!(LogLevel::from(LevelFilter::Off), LogLevel::Silent);
        assert_eq!(LogLevel::Debug.to_level_filter(), LevelFilter::Trace);
        assert_eq!(LogLevel::Silent.to_level_filter(), LevelFilter::Off);
    }

    #[test]
    fn test_verbosity() {
        assert_eq!(LogLevel::from_verbosity(0), LogLevel::Warn);
        assert_eq!(LogLevel::from_verbosity(1), LogLevel::Info);
        assert_eq!(LogLevel::from_verbosity(7), LogLevel::Debug);
    }
}
