// Wed Oct 14 2026 - Alex

/// Path of the enclosing function, e.g. `my_crate::scanner::step`.
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __here() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let mut name = __type_name_of(__here);
        name = name.strip_suffix("::__here").unwrap_or(name);
        while let Some(outer) = name.strip_suffix("::{{closure}}") {
            name = outer;
        }
        name
    }};
}

#[macro_export]
macro_rules! call_site {
    () => {
        $crate::logging::CallSite::new($crate::function_name!(), file!(), line!())
    };
}

/// Logs through `$logger` at `$level`. Arguments are only evaluated when
/// the level passes the threshold.
#[macro_export]
macro_rules! log_at {
    ($logger:expr, $level:expr, $($arg:tt)+) => {{
        let logger: &$crate::logging::Logger = $logger;
        let level: $crate::logging::LogLevel = $level;
        if logger.enabled(level) {
            logger.log(&$crate::call_site!(), level, format_args!($($arg)+));
        }
    }};
}

#[macro_export]
macro_rules! log_debug {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::logging::LogLevel::Debug, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::logging::global(), $crate::logging::LogLevel::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_info {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::logging::LogLevel::Info, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::logging::global(), $crate::logging::LogLevel::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_warn {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::logging::LogLevel::Warn, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::logging::global(), $crate::logging::LogLevel::Warn, $($arg)+)
    };
}

#[macro_export]
macro_rules! log_error {
    (logger: $logger:expr, $($arg:tt)+) => {
        $crate::log_at!($logger, $crate::logging::LogLevel::Error, $($arg)+)
    };
    ($($arg:tt)+) => {
        $crate::log_at!($crate::logging::global(), $crate::logging::LogLevel::Error, $($arg)+)
    };
}
