// Wed Oct 14 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("global logger is already initialized")]
    AlreadyInitialized,
    #[error("failed to install log facade: {0}")]
    SetLogger(log::SetLoggerError),
    #[error("invalid log level: {0}")]
    InvalidLevel(String),
}
