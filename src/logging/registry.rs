use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex},
};

use super::{
    formatters,
    sinks::ConsoleSink,
    Config, Level, Logger, LoggerOptions, SinkKind,
};

/// Process-wide mapping from logical name to its shared logger.
///
/// Explicitly constructed and passed by reference; there is no hidden
/// module-level instance. Presence in the map is the "initialized" marker,
/// and entries live as long as the registry does.
pub struct LoggerRegistry {
    default_level: Level,
    config: Config,
    loggers: Mutex<HashMap<String, Arc<Logger>>>,
}

impl LoggerRegistry {
    /// Registry whose default level comes from `LOG_LEVEL` (see
    /// [`Level::from_env`]).
    pub fn new() -> Self {
        Self::with_default_level(Level::from_env())
    }

    pub fn with_default_level(default_level: Level) -> Self {
        Self::with_config(default_level, Config::new())
    }

    pub fn with_config(default_level: Level, config: Config) -> Self {
        Self {
            default_level,
            config,
            loggers: Mutex::new(HashMap::new()),
        }
    }

    pub fn default_level(&self) -> Level {
        self.default_level
    }

    /// Get the logger for `name`, creating and configuring it on first use.
    ///
    /// A fresh logger gets a console sink and, when `options.file_path` is
    /// set, a file sink; both carry the requested level and the formatter
    /// tier it selects (detailed for debug, simple otherwise).
    ///
    /// An already-initialized name is returned unchanged unless
    /// `options.force` is set, in which case the level and formatter of
    /// every existing sink are updated and a file sink is attached if a path
    /// was given and none exists yet. The non-forced no-op stays silent.
    pub fn get_logger(&self, name: &str, options: LoggerOptions) -> eyre::Result<Arc<Logger>> {
        let mut loggers = self
            .loggers
            .lock()
            .map_err(|e| eyre::eyre!(e.to_string()))?;
        let level = options.level.unwrap_or(self.default_level);

        if let Some(logger) = loggers.get(name) {
            if !options.force {
                tracing::debug!(
                    target: "devkit",
                    "logger {} already initialized, request ignored",
                    name
                );
                return Ok(logger.clone());
            }

            logger.retier(level, &self.config);
            if let Some(path) = &options.file_path {
                logger.attach_file_if_missing(path, options.file_mode, level, &self.config)?;
            }
            return Ok(logger.clone());
        }

        let logger = Logger::new(name, level);
        logger.add_sink(Box::new(ConsoleSink::new(
            level,
            formatters::for_sink(SinkKind::Console, level, &self.config),
        )));
        if let Some(path) = &options.file_path {
            logger.attach_file_if_missing(path, options.file_mode, level, &self.config)?;
        }

        let logger = Arc::new(logger);
        loggers.insert(name.to_string(), logger.clone());
        Ok(logger)
    }

    /// Convenience wrapper: force-attach/update a file sink at the default
    /// level, then force everything to debug when asked. The debug override
    /// runs last, so it wins even when only the file changed.
    pub fn configure_logging(
        &self,
        name: &str,
        debug: bool,
        file_path: Option<&Path>,
    ) -> eyre::Result<()> {
        if let Some(path) = file_path {
            self.get_logger(name, LoggerOptions::new().with_file(path).force())?;
        }
        if debug {
            self.get_logger(name, LoggerOptions::new().with_level(Level::Debug).force())?;
        }
        Ok(())
    }
}

impl Default for LoggerRegistry {
    fn default() -> Self {
        Self::new()
    }
}
