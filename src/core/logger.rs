//! Named logger writing to a fixed set of sinks

use super::{
    error::Result,
    log_level::LogLevel,
    record::LogRecord,
    sink::SinkRef,
    source::SourceLocation,
    styled::{Style, StyledText},
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// Shared handle to a logger. Every holder sees the same level.
pub type LoggerHandle = Arc<Logger>;

pub struct Logger {
    name: Arc<str>,
    level: RwLock<LogLevel>,
    flush_level: RwLock<LogLevel>,
    sinks: Vec<SinkRef>,
}

impl Logger {
    #[must_use]
    pub fn new(name: impl Into<Arc<str>>, sink: SinkRef) -> Self {
        Self::with_sinks(name, vec![sink])
    }

    #[must_use]
    pub fn with_sinks(name: impl Into<Arc<str>>, sinks: Vec<SinkRef>) -> Self {
        Self {
            name: name.into(),
            level: RwLock::new(LogLevel::Info),
            flush_level: RwLock::new(LogLevel::Off),
            sinks,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sinks(&self) -> &[SinkRef] {
        &self.sinks
    }

    pub fn level(&self) -> LogLevel {
        *self.level.read()
    }

    pub fn set_level(&self, level: LogLevel) {
        *self.level.write() = level;
    }

    pub fn flush_level(&self) -> LogLevel {
        *self.flush_level.read()
    }

    /// Records at or above `level` flush every sink right after being written
    pub fn set_flush_level(&self, level: LogLevel) {
        *self.flush_level.write() = level;
    }

    #[inline]
    pub fn should_log(&self, level: LogLevel) -> bool {
        level.passes(self.level())
    }

    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        if !self.should_log(level) {
            return;
        }
        let record = LogRecord::new(Arc::clone(&self.name), level, message.into());
        self.sink_it(&record);
    }

    /// Format and emit `args` only if `level` is active
    pub fn log_at(&self, level: LogLevel, location: SourceLocation, args: fmt::Arguments<'_>) {
        if !self.should_log(level) {
            return;
        }
        let message = crate::core::format::format(args);
        let record = LogRecord::new(Arc::clone(&self.name), level, message).with_location(location);
        self.sink_it(&record);
    }

    /// Like [`log_at`](Self::log_at) with the message wrapped in `style`
    pub fn log_styled(
        &self,
        level: LogLevel,
        location: SourceLocation,
        style: &Style,
        args: fmt::Arguments<'_>,
    ) {
        if !self.should_log(level) {
            return;
        }
        let message = StyledText::new(style, args).to_string();
        let record = LogRecord::new(Arc::clone(&self.name), level, message).with_location(location);
        self.sink_it(&record);
    }

    /// Emit a prebuilt record, still subject to this logger's level
    pub fn log_record(&self, record: &LogRecord) {
        if self.should_log(record.level) {
            self.sink_it(record);
        }
    }

    fn sink_it(&self, record: &LogRecord) {
        for sink in &self.sinks {
            if let Err(e) = sink.log(record) {
                eprintln!(
                    "[LOGGER ERROR] Sink '{}' failed for category '{}': {}",
                    sink.name(),
                    self.name,
                    e
                );
            }
        }

        if record.level.passes(self.flush_level()) {
            if let Err(e) = self.flush() {
                eprintln!("[LOGGER ERROR] Flush failed for category '{}': {}", self.name, e);
            }
        }
    }

    pub fn flush(&self) -> Result<()> {
        for sink in &self.sinks {
            sink.flush()?;
        }
        Ok(())
    }

    #[inline]
    pub fn trace(&self, message: impl Into<String>) {
        self.log(LogLevel::Trace, message);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    #[inline]
    pub fn fatal(&self, message: impl Into<String>) {
        self.log(LogLevel::Fatal, message);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &self.level())
            .field("sinks", &self.sinks.len())
            .finish()
    }
}
