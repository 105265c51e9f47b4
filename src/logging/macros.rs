/// Emit a record through `$logger` at `$level`, capturing the caller
/// location so the detailed template has something to print.
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log(
            $level,
            ::core::format_args!($($arg)+),
            $crate::logging::Caller {
                module: ::core::module_path!(),
                file: ::core::file!(),
                line: ::core::line!(),
            },
        )
    };
}

#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::logging::Level::Debug, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::logging::Level::Info, $($arg)+)
    };
}

#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::logging::Level::Warning, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::logging::Level::Error, $($arg)+)
    };
}

#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::logging::Level::Critical, $($arg)+)
    };
}

/// Fetch a logger named after the calling crate, the way module-derived
/// logger names usually work.
#[macro_export]
macro_rules! get_logger {
    ($registry:expr) => {
        $registry.get_logger(
            $crate::logging::root_module(::core::module_path!()),
            $crate::logging::LoggerOptions::new(),
        )
    };
    ($registry:expr, $options:expr) => {
        $registry.get_logger(
            $crate::logging::root_module(::core::module_path!()),
            $options,
        )
    };
}

#[cfg(test)]
mod tests {
    use crate::logging::{Level, LoggerRegistry};

    #[test]
    fn get_logger_macro_uses_crate_name() {
        let registry = LoggerRegistry::with_default_level(Level::Info);
        let logger = crate::get_logger!(registry).unwrap();
        assert_eq!(logger.name(), "devkit");
    }

    #[test]
    fn level_macros_respect_logger_threshold() {
        let registry = LoggerRegistry::with_default_level(Level::Critical);
        let logger = crate::get_logger!(registry).unwrap();

        // Filtered out before any sink is touched.
        crate::debug!(logger, "invisible {}", 1);
        crate::critical!(logger, "visible");
        assert_eq!(logger.level(), Level::Critical);
    }
}
