// Wed Oct 14 2026 - Alex

use crate::logging::LogLevel;
use parking_lot::Mutex;
use std::io::{self, Write};
use std::sync::Arc;

pub type LogSink = Box<dyn Write + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Diagnostic,
    Error,
}

impl Stream {
    pub fn for_level(level: LogLevel) -> Stream {
        if level < LogLevel::Error {
            Stream::Diagnostic
        } else {
            Stream::Error
        }
    }
}

/// The pair of destinations a logger writes to.
pub struct Streams {
    diagnostic: LogSink,
    error: LogSink,
}

impl Streams {
    pub fn new(diagnostic: LogSink, error: LogSink) -> Self {
        Self { diagnostic, error }
    }

    pub fn stderr() -> Self {
        Self::new(Box::new(io::stderr()), Box::new(io::stderr()))
    }

    pub fn get(&mut self, stream: Stream) -> &mut dyn Write {
        match stream {
            Stream::Diagnostic => self.diagnostic.as_mut(),
            Stream::Error => self.error.as_mut(),
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.diagnostic.flush()?;
        self.error.flush()
    }
}

impl Default for Streams {
    fn default() -> Self {
        Self::stderr()
    }
}

/// In-memory sink. Clones share the same buffer.
#[derive(Clone, Default)]
pub struct BufferSink {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl BufferSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock()).into_owned()
    }

    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(str::to_string).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.lock().is_empty()
    }

    pub fn clear(&self) {
        self.buf.lock().clear();
    }

    pub fn boxed(&self) -> LogSink {
        Box::new(self.clone())
    }
}

impl Write for BufferSink {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.lock().extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
