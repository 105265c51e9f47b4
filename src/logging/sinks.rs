use std::{
    fs::{File, OpenOptions},
    io::{LineWriter, Stderr, Write},
    path::Path,
    sync::{Mutex, RwLock},
};

use eyre::Context;

use super::{FileMode, Level, LogFormatter, LogSink, Record, SinkKind, Template};

struct SinkConfig {
    level: Level,
    formatter: Box<dyn LogFormatter>,
}

pub struct ConsoleSink {
    handle: Stderr,
    config: RwLock<SinkConfig>,
}

impl ConsoleSink {
    pub fn new(level: Level, formatter: Box<dyn LogFormatter>) -> Self {
        Self {
            handle: std::io::stderr(),
            config: RwLock::new(SinkConfig { level, formatter }),
        }
    }
}

impl LogSink for ConsoleSink {
    fn kind(&self) -> SinkKind {
        SinkKind::Console
    }

    fn threshold(&self) -> Level {
        self.config.read().unwrap().level
    }

    fn template(&self) -> Template {
        self.config.read().unwrap().formatter.template()
    }

    fn write_log(&self, record: &Record) -> eyre::Result<()> {
        let line = {
            let config = self
                .config
                .read()
                .map_err(|e| eyre::eyre!(e.to_string()))?;
            config.formatter.format(record)
        };

        let mut writer = self.handle.lock();
        writeln!(writer, "{}", line)?;
        writer.flush().context("Can't flush stderr")
    }

    fn flush(&self) -> eyre::Result<()> {
        self.handle.lock().flush().context("Can't flush stderr")
    }

    fn reconfigure(&self, level: Level, formatter: Box<dyn LogFormatter>) {
        let mut config = self.config.write().unwrap();
        config.level = level;
        config.formatter = formatter;
    }
}

pub struct FileSink {
    file: Mutex<LineWriter<File>>,
    config: RwLock<SinkConfig>,
}

impl FileSink {
    pub fn new(
        path: &Path,
        mode: FileMode,
        level: Level,
        formatter: Box<dyn LogFormatter>,
    ) -> eyre::Result<Self> {
        let mut options = OpenOptions::new();
        options.create(true).write(true);
        match mode {
            FileMode::Overwrite => options.truncate(true),
            FileMode::Append => options.append(true),
        };

        let file = options
            .open(path)
            .with_context(|| format!("Failed opening or creating log file {}", path.display()))?;

        Ok(Self {
            file: Mutex::new(LineWriter::new(file)),
            config: RwLock::new(SinkConfig { level, formatter }),
        })
    }
}

impl LogSink for FileSink {
    fn kind(&self) -> SinkKind {
        SinkKind::File
    }

    fn threshold(&self) -> Level {
        self.config.read().unwrap().level
    }

    fn template(&self) -> Template {
        self.config.read().unwrap().formatter.template()
    }

    fn write_log(&self, record: &Record) -> eyre::Result<()> {
        let line = {
            let config = self
                .config
                .read()
                .map_err(|e| eyre::eyre!(e.to_string()))?;
            config.formatter.format(record)
        };

        let mut file = self.file.lock().map_err(|e| eyre::eyre!(e.to_string()))?;
        writeln!(file, "{}", line)?;
        file.flush().context("Can't flush file")
    }

    fn flush(&self) -> eyre::Result<()> {
        let mut file = self.file.lock().map_err(|e| eyre::eyre!(e.to_string()))?;
        file.flush().context("Can't flush file")
    }

    fn reconfigure(&self, level: Level, formatter: Box<dyn LogFormatter>) {
        let mut config = self.config.write().unwrap();
        config.level = level;
        config.formatter = formatter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::{formatters, Caller, Config};

    fn formatter(level: Level) -> Box<dyn LogFormatter> {
        formatters::for_sink(SinkKind::File, level, &Config::new())
    }

    fn record<'a>(args: std::fmt::Arguments<'a>) -> Record<'a> {
        Record {
            name: "app",
            level: Level::Info,
            args,
            caller: Caller {
                module: "app",
                file: "src/lib.rs",
                line: 1,
            },
        }
    }

    #[test]
    fn overwrite_mode_truncates_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");
        std::fs::write(&path, "stale line\n").unwrap();

        let sink = FileSink::new(&path, FileMode::Overwrite, Level::Info, formatter(Level::Info))
            .unwrap();
        sink.write_log(&record(format_args!("fresh"))).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(!content.contains("stale line"));
        assert!(content.contains("fresh"));
    }

    #[test]
    fn append_mode_keeps_existing_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");
        std::fs::write(&path, "old line\n").unwrap();

        let sink =
            FileSink::new(&path, FileMode::Append, Level::Info, formatter(Level::Info)).unwrap();
        sink.write_log(&record(format_args!("new line"))).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("old line"));
        assert!(content.contains("new line"));
    }

    #[test]
    fn missing_parent_directory_propagates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("out.log");

        let result = FileSink::new(&path, FileMode::Overwrite, Level::Info, formatter(Level::Info));
        assert!(result.is_err());
    }

    #[test]
    fn reconfigure_swaps_threshold_and_template() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");

        let sink = FileSink::new(&path, FileMode::Overwrite, Level::Info, formatter(Level::Info))
            .unwrap();
        assert_eq!(sink.threshold(), Level::Info);
        assert_eq!(sink.template(), Template::Simple);

        sink.reconfigure(Level::Debug, formatter(Level::Debug));
        assert_eq!(sink.threshold(), Level::Debug);
        assert_eq!(sink.template(), Template::Detailed);
    }
}
