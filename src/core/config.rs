//! Declarative logging setup
//!
//! A [`LoggingConfig`] describes the default level, the record layout and the
//! sinks to attach; [`CategoryRegistry::from_config`](crate::CategoryRegistry::from_config)
//! turns it into a ready registry.
//!
//! ```
//! use category_logger::{LoggingConfig, LogLevel};
//!
//! let config = LoggingConfig::from_json_str(r#"{
//!     "default_level": "debug",
//!     "format": "text",
//!     "sinks": [{ "kind": "console", "target": "stderr", "colors": false }]
//! }"#).unwrap();
//!
//! assert_eq!(config.default_level, LogLevel::Debug);
//! assert_eq!(config.sinks.len(), 1);
//! ```

use super::{
    error::{LoggerError, Result},
    formatter::{OutputFormat, RecordFormatter},
    log_level::LogLevel,
    sink::SinkRef,
    timestamp::TimestampFormat,
};
use crate::core::BaseSink;
use crate::sinks::{ConsoleSink, ConsoleTarget, FileSink};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Kinds of sink a config can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkType {
    /// Console output; target `stdout` (default), `stderr` or `split`
    Console,
    /// Append to the file named by target
    File,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinkConfig {
    pub kind: SinkType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Console only; defaults to colored
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<bool>,
}

impl SinkConfig {
    pub fn console() -> Self {
        Self {
            kind: SinkType::Console,
            target: None,
            colors: None,
        }
    }

    pub fn file(path: impl Into<String>) -> Self {
        Self {
            kind: SinkType::File,
            target: Some(path.into()),
            colors: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub default_level: LogLevel,
    pub format: OutputFormat,
    pub timestamp: TimestampFormat,
    pub show_source: bool,
    pub source_roots: Vec<String>,
    pub sinks: Vec<SinkConfig>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            default_level: LogLevel::Info,
            format: OutputFormat::Text,
            timestamp: TimestampFormat::default(),
            show_source: true,
            source_roots: Vec::new(),
            sinks: Vec::new(),
        }
    }
}

impl LoggingConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logging config",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&raw)
    }

    /// Formatter template for sinks attached under this config
    pub fn formatter(&self) -> RecordFormatter {
        let formatter = RecordFormatter::new()
            .with_output_format(self.format.clone())
            .with_timestamp_format(self.timestamp.clone())
            .with_source(self.show_source);
        if self.source_roots.is_empty() {
            formatter
        } else {
            formatter.with_source_roots(self.source_roots.iter().cloned())
        }
    }
}

/// Build the sink a [`SinkConfig`] describes
pub fn make_sink(config: &SinkConfig) -> Result<SinkRef> {
    match config.kind {
        SinkType::Console => {
            let target = match config.target.as_deref() {
                None | Some("stdout") => ConsoleTarget::Stdout,
                Some("stderr") => ConsoleTarget::Stderr,
                Some("split") => ConsoleTarget::Split,
                Some(other) => {
                    return Err(LoggerError::config(
                        "ConsoleSink",
                        format!("unknown console target '{}'", other),
                    ))
                }
            };
            let sink = ConsoleSink::new()
                .with_target(target)
                .with_colors(config.colors.unwrap_or(true));
            Ok(BaseSink::shared(sink))
        }
        SinkType::File => {
            let path = config
                .target
                .as_deref()
                .filter(|p| !p.is_empty())
                .ok_or_else(|| LoggerError::config("FileSink", "a file sink needs a target path"))?;
            Ok(BaseSink::shared(FileSink::new(path)?))
        }
    }
}
