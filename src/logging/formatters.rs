use super::{Config, Level, LogFormatter, Record, SinkKind, Template};

/// `timestamp - name - LEVEL - message`
pub struct SimpleFormatter {
    config: Config,
}

/// `timestamp - name - file - module - line - LEVEL - message`
pub struct DetailedFormatter {
    config: Config,
}

impl SimpleFormatter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl DetailedFormatter {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

/// Formatter tier for the level being applied: debug gets the detailed
/// layout, everything else the simple one.
pub fn for_level(level: Level, config: Config) -> Box<dyn LogFormatter> {
    match Template::for_level(level) {
        Template::Detailed => Box::new(DetailedFormatter::new(config)),
        Template::Simple => Box::new(SimpleFormatter::new(config)),
    }
}

/// Same as [`for_level`], but file sinks never carry ANSI escapes.
pub(crate) fn for_sink(kind: SinkKind, level: Level, config: &Config) -> Box<dyn LogFormatter> {
    let mut config = config.clone();
    if kind == SinkKind::File {
        config.use_ansi = false;
    }
    for_level(level, config)
}

fn timestamp(config: &Config) -> String {
    chrono::Local::now()
        .format(&config.datetime_format)
        .to_string()
}

fn level_tag(config: &Config, level: Level) -> String {
    if !config.use_ansi {
        return level.to_string();
    }

    let color = match level {
        Level::Debug => "\x1b[0;34m",
        Level::Info => "\x1b[0;32m",
        Level::Warning => "\x1b[0;33m",
        Level::Error => "\x1b[0;31m",
        Level::Critical => "\x1b[1;31m",
    };

    format!("{}{}{}", color, level, "\x1b[0m")
}

impl LogFormatter for SimpleFormatter {
    fn template(&self) -> Template {
        Template::Simple
    }

    fn format(&self, record: &Record) -> String {
        format!(
            "{} - {} - {} - {}",
            timestamp(&self.config),
            record.name,
            level_tag(&self.config, record.level),
            record.args,
        )
    }
}

impl LogFormatter for DetailedFormatter {
    fn template(&self) -> Template {
        Template::Detailed
    }

    fn format(&self, record: &Record) -> String {
        format!(
            "{} - {} - {} - {} - {} - {} - {}",
            timestamp(&self.config),
            record.name,
            record.caller.file,
            record.caller.module,
            record.caller.line,
            level_tag(&self.config, record.level),
            record.args,
        )
    }
}
