use log::{Level, LevelFilter, Log, Metadata, Record};

pub fn log_error(msg: &str) {
    eprintln!("Error: {}", msg);
}

pub fn log_hint(msg: &str) {
    eprintln!("Hint: {}", msg);
}

/// `log` backend for the binary.
///
/// Debug and info records are printed only when verbose mode is on;
/// warnings and errors always reach stderr.
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn max_level(&self) -> LevelFilter {
        if self.enabled {
            LevelFilter::Debug
        } else {
            LevelFilter::Warn
        }
    }

    /// Install as the global logger. Only the first call takes effect.
    pub fn init(verbose: bool) {
        let logger = Self::new(verbose);
        let level = logger.max_level();
        if log::set_boxed_logger(Box::new(logger)).is_ok() {
            log::set_max_level(level);
        }
    }

    fn format(record: &Record) -> String {
        match record.level() {
            Level::Error => format!("Error: {}", record.args()),
            Level::Warn => format!("Warning: {}", record.args()),
            _ => format!("Verbose: {}", record.args()),
        }
    }
}

impl Log for VerboseLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", Self::format(record));
        }
    }

    fn flush(&self) {}
}
