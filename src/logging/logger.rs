// Wed Oct 14 2026 - Alex

use crate::logging::format::{format_line, LogRecord};
use crate::logging::sink::{Stream, Streams};
use crate::logging::LogLevel;
use chrono::Utc;
use log::{Log, Metadata, Record};
use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};

/// Where a log call came from. Build one with [`call_site!`](crate::call_site).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CallSite {
    function: &'static str,
    file: &'static str,
    line: u32,
}

impl CallSite {
    pub const fn new(function: &'static str, file: &'static str, line: u32) -> Self {
        Self { function, file, line }
    }

    pub fn function(&self) -> &'static str {
        self.function
    }

    pub fn file(&self) -> &'static str {
        self.file
    }

    pub fn line(&self) -> u32 {
        self.line
    }
}

/// Leveled logger writing one colored line per message.
///
/// Every emitted line is formatted and written under a single lock, so
/// concurrent callers never interleave partial lines.
pub struct Logger {
    level: AtomicU8,
    color: AtomicBool,
    facade: AtomicBool,
    streams: Mutex<Streams>,
}

impl Logger {
    pub fn new() -> Self {
        Self::with_streams(Streams::stderr())
    }

    pub fn with_streams(streams: Streams) -> Self {
        Self {
            level: AtomicU8::new(LogLevel::default() as u8),
            color: AtomicBool::new(true),
            facade: AtomicBool::new(false),
            streams: Mutex::new(streams),
        }
    }

    pub fn with_level(self, level: LogLevel) -> Self {
        self.set_level(level);
        self
    }

    pub fn with_color(self, color: bool) -> Self {
        self.set_color(color);
        self
    }

    pub fn level(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::Relaxed))
    }

    pub fn set_level(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::Relaxed);
        if self.facade.load(Ordering::Relaxed) {
            log::set_max_level(level.to_level_filter());
        }
    }

    pub fn color(&self) -> bool {
        self.color.load(Ordering::Relaxed)
    }

    pub fn set_color(&self, color: bool) {
        self.color.store(color, Ordering::Relaxed);
    }

    pub fn enabled(&self, level: LogLevel) -> bool {
        level != LogLevel::Silent && level >= self.level()
    }

    pub fn log(&self, site: &CallSite, level: LogLevel, args: fmt::Arguments<'_>) {
        self.emit(site.function(), level, args);
    }

    fn emit(&self, function: &str, level: LogLevel, args: fmt::Arguments<'_>) {
        if !self.enabled(level) {
            return;
        }

        let mut streams = self.streams.lock();
        let record = LogRecord {
            level,
            time: Utc::now(),
            function,
            args,
        };
        let line = format_line(&record, self.color());

        let out = streams.get(Stream::for_level(level));
        let _ = out.write_all(line.as_bytes());
        let _ = out.flush();
    }

    pub(crate) fn mark_facade(&self) {
        self.facade.store(true, Ordering::Relaxed);
        log::set_max_level(self.level().to_level_filter());
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("color", &self.color())
            .finish_non_exhaustive()
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        Logger::enabled(self, metadata.level().into())
    }

    fn log(&self, record: &Record) {
        let function = record.module_path().unwrap_or_else(|| record.target());
        self.emit(function, record.level().into(), *record.args());
    }

    fn flush(&self) {
        let _ = self.streams.lock().flush();
    }
}
