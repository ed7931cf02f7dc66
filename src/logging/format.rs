// Wed Oct 14 2026 - Alex

use crate::logging::LogLevel;
use chrono::{DateTime, Utc};
use std::fmt::{self, Write};

/// Restores the default foreground color.
pub const COLOR_RESET: &str = "\x1b[39m";

pub const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.6f";

/// One message on its way out. Lives only for the duration of a log call.
pub struct LogRecord<'a> {
    pub level: LogLevel,
    pub time: DateTime<Utc>,
    pub function: &'a str,
    pub args: fmt::Arguments<'a>,
}

pub fn color_start(level: LogLevel) -> String {
    match level.color() {
        Some(color) => format!("\x1b[{}m", color.to_fg_str()),
        None => String::new(),
    }
}

pub fn format_timestamp(time: &DateTime<Utc>) -> String {
    time.format(TIMESTAMP_FORMAT).to_string()
}

/// Renders the full line, trailing newline included.
pub fn format_line(record: &LogRecord<'_>, color: bool) -> String {
    let timestamp = format_timestamp(&record.time);
    let message = fmt::format(record.args);
    let code = record.level.code().unwrap_or('?');

    let mut line = String::with_capacity(message.len() + record.function.len() + 48);
    if color {
        line.push_str(&color_start(record.level));
    }
    let _ = write!(line, "[{}][{}] [{}] {}", timestamp, code, record.function, message);
    if color {
        line.push_str(COLOR_RESET);
    }
    line.push('\n');
    line
}
