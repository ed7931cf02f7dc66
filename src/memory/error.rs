// Wed Oct 14 2026 - Alex

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("memory file is not open")]
    NotOpen,
    #[error("{op} failed at offset {offset:#x}: {source}")]
    Io {
        op: &'static str,
        offset: u64,
        #[source]
        source: io::Error,
    },
    #[error("offset {0:#x} exceeds the addressable range")]
    InvalidOffset(u64),
    #[error("short {op} at offset {offset:#x}: expected {expected} bytes, got {actual}")]
    ShortTransfer {
        op: &'static str,
        offset: u64,
        expected: usize,
        actual: usize,
    },
}

impl MemoryError {
    /// OS error code behind an I/O failure, if there is one.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            MemoryError::Io { source, .. } => source.raw_os_error(),
            _ => None,
        }
    }

    pub fn kind(&self) -> Option<io::ErrorKind> {
        match self {
            MemoryError::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
