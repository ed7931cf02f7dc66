// Wed Oct 14 2026 - Alex

pub mod error;
pub mod format;
pub mod level;
pub mod logger;
pub mod macros;
pub mod sink;

pub use error::LoggerError;
pub use format::LogRecord;
pub use level::LogLevel;
pub use logger::{CallSite, Logger};
pub use sink::{BufferSink, LogSink, Stream, Streams};

use once_cell::sync::OnceCell;

static GLOBAL: OnceCell<Logger> = OnceCell::new();

/// Sets the process-wide logger. Fails if one already exists, including
/// one created implicitly by [`global`].
pub fn init(logger: Logger) -> Result<&'static Logger, LoggerError> {
    GLOBAL.set(logger).map_err(|_| LoggerError::AlreadyInitialized)?;
    Ok(global())
}

/// The process-wide logger, created with defaults on first use.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(Logger::new)
}

/// Routes the `log` crate's macros through the global logger.
pub fn install() -> Result<&'static Logger, LoggerError> {
    let logger = global();
    log::set_logger(logger).map_err(LoggerError::SetLogger)?;
    logger.mark_facade();
    Ok(logger)
}

#[cfg(test)]
mod tests {
    use super::*;

    // The only test in the crate that touches the global logger.
    #[test]
    fn test_global_lifecycle() {
        let diag = BufferSink::new();
        let err = BufferSink::new();
        let custom = Logger::with_streams(Streams::new(diag.boxed(), err.boxed())).with_color(false);

        let logger = init(custom).unwrap();
        assert!(std::ptr::eq(logger, global()));
        assert!(matches!(init(Logger::new()), Err(LoggerError::AlreadyInitialized)));

        crate::log_info!("via global {}", 1);
        assert_eq!(diag.lines().len(), 1);
        assert!(diag.lines()[0].ends_with("[ame_core::logging::tests::test_global_lifecycle] via global 1"));

        install().unwrap();
        assert_eq!(log::max_level(), log::LevelFilter::Trace);
        log::error!("from facade");
        assert_eq!(err.lines().len(), 1);
        assert!(err.lines()[0].contains("[E] [ame_core::logging::tests] from facade"));

        logger.set_level(LogLevel::Error);
        assert_eq!(log::max_level(), log::LevelFilter::Error);
        log::warn!("dropped");
        crate::log_warn!("dropped too");
        assert_eq!(diag.lines().len(), 1);

        let err = install().unwrap_err();
        assert!(matches!(err, LoggerError::SetLogger(_)));
        assert!(err.to_string().starts_with("failed to install log facade: "));

        assert!(matches!(
            crate::LoggerConfig::new().init_global(),
            Err(LoggerError::AlreadyInitialized)
        ));
    }
}
