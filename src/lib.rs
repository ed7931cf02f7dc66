// Wed Oct 14 2026 - Alex

pub mod config;
pub mod logging;
pub mod memory;

pub use config::LoggerConfig;
pub use logging::{CallSite, LogLevel, Logger};
pub use memory::{MemoryError, MemoryFile, MemoryReader, MemoryWriter, OpenFlags};
