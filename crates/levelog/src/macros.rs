//! Convenience macros for logging with format arguments
//!
//! `log_*!` take a logger as their first argument; `*_log!` write through
//! the process-wide default logger. Both record the macro's call site.

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)*) => {
        $logger.debug_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)*) => {
        $logger.info_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)*) => {
        $logger.warn_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)*) => {
        $logger.error_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_fatal {
    ($logger:expr, $($arg:tt)*) => {
        $logger.fatal_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_panic {
    ($logger:expr, $($arg:tt)*) => {
        $logger.panic_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        $crate::debug_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        $crate::info_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        $crate::warn_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! error_log {
    ($($arg:tt)*) => {
        $crate::error_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! fatal_log {
    ($($arg:tt)*) => {
        $crate::fatal_fmt(format_args!($($arg)*))
    };
}

#[macro_export]
macro_rules! panic_log {
    ($($arg:tt)*) => {
        $crate::panic_fmt(format_args!($($arg)*))
    };
}
