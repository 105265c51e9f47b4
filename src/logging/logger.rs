use core::fmt;
use std::{
    path::{Path, PathBuf},
    sync::RwLock,
};

use super::{
    formatters,
    sinks::FileSink,
    Caller, Config, FileMode, Level, LogSink, Record, SinkKind, Template,
};

/// Requested configuration for [`LoggerRegistry::get_logger`].
///
/// [`LoggerRegistry::get_logger`]: super::LoggerRegistry::get_logger
#[derive(Debug, Clone, Default)]
pub struct LoggerOptions {
    pub file_path: Option<PathBuf>,
    pub level: Option<Level>,
    pub file_mode: FileMode,
    pub force: bool,
}

impl LoggerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>) -> Self {
        Self {
            file_path: Some(path.into()),
            ..self
        }
    }

    pub fn with_level(self, level: Level) -> Self {
        Self {
            level: Some(level),
            ..self
        }
    }

    pub fn with_file_mode(self, file_mode: FileMode) -> Self {
        Self { file_mode, ..self }
    }

    pub fn force(self) -> Self {
        Self {
            force: true,
            ..self
        }
    }
}

/// Observable state of one sink, mostly useful for assertions and debugging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SinkInfo {
    pub kind: SinkKind,
    pub threshold: Level,
    pub template: Template,
}

/// A named sink aggregator. Shared per logical name; the registry mutates it
/// in place on forced reconfiguration, so all internals sit behind locks.
pub struct Logger {
    name: String,
    level: RwLock<Level>,
    sinks: RwLock<Vec<Box<dyn LogSink>>>,
}

impl Logger {
    pub(crate) fn new(name: impl Into<String>, level: Level) -> Self {
        Self {
            name: name.into(),
            level: RwLock::new(level),
            sinks: RwLock::new(Vec::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> Level {
        *self.level.read().unwrap()
    }

    pub fn enabled(&self, level: Level) -> bool {
        level >= self.level()
    }

    /// Emit a record to every sink whose threshold admits it. Prefer the
    /// `log!`/`debug!`/`info!` macros, which fill in the caller location.
    ///
    /// A sink that fails to take the record drops it; emission never panics
    /// in the caller.
    pub fn log(&self, level: Level, args: fmt::Arguments<'_>, caller: Caller) {
        if !self.enabled(level) {
            return;
        }

        let record = Record {
            name: &self.name,
            level,
            args,
            caller,
        };

        let sinks = self.sinks.read().unwrap();
        for sink in sinks.iter() {
            if level >= sink.threshold() {
                let _ = sink.write_log(&record);
            }
        }
    }

    pub fn flush(&self) -> eyre::Result<()> {
        let sinks = self.sinks.read().map_err(|e| eyre::eyre!(e.to_string()))?;
        for sink in sinks.iter() {
            sink.flush()?;
        }
        Ok(())
    }

    pub fn sink_info(&self) -> Vec<SinkInfo> {
        self.sinks
            .read()
            .unwrap()
            .iter()
            .map(|sink| SinkInfo {
                kind: sink.kind(),
                threshold: sink.threshold(),
                template: sink.template(),
            })
            .collect()
    }

    pub(crate) fn add_sink(&self, sink: Box<dyn LogSink>) {
        self.sinks.write().unwrap().push(sink);
    }

    pub(crate) fn has_sink(&self, kind: SinkKind) -> bool {
        self.sinks
            .read()
            .unwrap()
            .iter()
            .any(|sink| sink.kind() == kind)
    }

    /// Set the logger level and retier every existing sink's threshold and
    /// formatter to match.
    pub(crate) fn retier(&self, level: Level, config: &Config) {
        *self.level.write().unwrap() = level;
        let sinks = self.sinks.read().unwrap();
        for sink in sinks.iter() {
            sink.reconfigure(level, formatters::for_sink(sink.kind(), level, config));
        }
    }

    /// Attach a file sink unless one already exists. At most one file sink
    /// per logger, ever.
    pub(crate) fn attach_file_if_missing(
        &self,
        path: &Path,
        mode: FileMode,
        level: Level,
        config: &Config,
    ) -> eyre::Result<()> {
        if self.has_sink(SinkKind::File) {
            return Ok(());
        }

        let sink = FileSink::new(
            path,
            mode,
            level,
            formatters::for_sink(SinkKind::File, level, config),
        )?;
        self.add_sink(Box::new(sink));
        Ok(())
    }
}
