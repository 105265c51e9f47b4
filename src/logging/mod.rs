mod formatters;
mod logger;
mod macros;
mod registry;
mod sinks;

use core::fmt;

pub use logger::{Logger, LoggerOptions, SinkInfo};
pub use registry::LoggerRegistry;

/// Environment variable consulted for the registry's default verbosity.
pub const LEVEL_ENV_VAR: &str = "LOG_LEVEL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    Debug,
    Info,
    Warning,
    Error,
    Critical,
}

impl Level {
    /// Default level for a fresh registry: `LOG_LEVEL=DEBUG` selects debug,
    /// anything else (including unset) selects info.
    pub fn from_env() -> Self {
        Self::from_env_value(std::env::var(LEVEL_ENV_VAR).ok().as_deref())
    }

    pub(crate) fn from_env_value(value: Option<&str>) -> Self {
        match value {
            Some("DEBUG") => Level::Debug,
            _ => Level::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warning => "WARNING",
            Level::Error => "ERROR",
            Level::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Write mode for file sinks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FileMode {
    #[default]
    Overwrite,
    Append,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SinkKind {
    Console,
    File,
}

/// The two fixed line layouts. The choice is a pure function of the level
/// being applied to a sink, never a per-sink knob.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    Simple,
    Detailed,
}

impl Template {
    pub fn for_level(level: Level) -> Self {
        if level == Level::Debug {
            Template::Detailed
        } else {
            Template::Simple
        }
    }
}

/// Call-site location captured by the logging macros.
#[derive(Debug, Clone, Copy)]
pub struct Caller {
    pub module: &'static str,
    pub file: &'static str,
    pub line: u32,
}

/// A single log event on its way to the sinks.
pub struct Record<'a> {
    pub name: &'a str,
    pub level: Level,
    pub args: fmt::Arguments<'a>,
    pub caller: Caller,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub datetime_format: String,
    pub use_ansi: bool,
}

impl Config {
    pub fn new() -> Self {
        Self {
            datetime_format: "%Y-%m-%d %H:%M:%S".to_string(),
            use_ansi: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

pub trait LogFormatter: Sync + Send {
    fn template(&self) -> Template;
    fn format(&self, record: &Record) -> String;
}

pub trait LogSink: Sync + Send {
    fn kind(&self) -> SinkKind;
    fn threshold(&self) -> Level;
    fn template(&self) -> Template;
    fn write_log(&self, record: &Record) -> eyre::Result<()>;
    fn flush(&self) -> eyre::Result<()>;
    fn reconfigure(&self, level: Level, formatter: Box<dyn LogFormatter>);
}

/// Root segment of a `module_path!()`, used by `get_logger!` to derive the
/// logical name from the calling crate.
pub fn root_module(module_path: &str) -> &str {
    module_path.split("::").next().unwrap_or(module_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_by_severity() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warning);
        assert!(Level::Warning < Level::Error);
        assert!(Level::Error < Level::Critical);
    }

    #[test]
    fn env_value_selects_default_level() {
        assert_eq!(Level::from_env_value(None), Level::Info);
        assert_eq!(Level::from_env_value(Some("DEBUG")), Level::Debug);
        assert_eq!(Level::from_env_value(Some("TRACE")), Level::Info);
        assert_eq!(Level::from_env_value(Some("debug")), Level::Info);
    }

    #[test]
    fn template_tier_follows_level() {
        assert_eq!(Template::for_level(Level::Debug), Template::Detailed);
        assert_eq!(Template::for_level(Level::Info), Template::Simple);
        assert_eq!(Template::for_level(Level::Critical), Template::Simple);
    }

    #[test]
    fn root_module_takes_crate_segment() {
        assert_eq!(root_module("devkit::logging::registry"), "devkit");
        assert_eq!(root_module("devkit"), "devkit");
    }
}
