//! Colorized console sink

use crate::core::{LogLevel, LogRecord, RecordFormatter, Result, SinkBackend};
use std::io::Write;

/// Which standard stream a [`ConsoleSink`] writes to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleTarget {
    #[default]
    Stdout,
    Stderr,
    /// Error and Fatal to stderr, everything else to stdout
    Split,
}

pub struct ConsoleSink {
    use_colors: bool,
    target: ConsoleTarget,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self {
            use_colors: true,
            target: ConsoleTarget::Stdout,
        }
    }

    pub fn stderr() -> Self {
        Self::new().with_target(ConsoleTarget::Stderr)
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[must_use]
    pub fn with_target(mut self, target: ConsoleTarget) -> Self {
        self.target = target;
        self
    }

    pub fn target(&self) -> ConsoleTarget {
        self.target
    }

    fn goes_to_stderr(&self, level: LogLevel) -> bool {
        match self.target {
            ConsoleTarget::Stdout => false,
            ConsoleTarget::Stderr => true,
            ConsoleTarget::Split => matches!(level, LogLevel::Error | LogLevel::Fatal),
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl SinkBackend for ConsoleSink {
    fn sink_record(&mut self, record: &LogRecord, formatter: &RecordFormatter) -> Result<()> {
        let line = formatter.format(record);
        if self.goes_to_stderr(record.level) {
            writeln!(std::io::stderr().lock(), "{}", line)?;
        } else {
            writeln!(std::io::stdout().lock(), "{}", line)?;
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        // Flush both stdout and stderr since we may write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &'static str {
        "console"
    }

    fn is_colored(&self) -> bool {
        self.use_colors
    }
}
