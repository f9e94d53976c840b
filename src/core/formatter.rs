//! Rendering of records into text
//!
//! Provides the layouts a sink can render with:
//! - Text: `[ts] [category] [LEVEL] [file:line] message` (default)
//! - Message: the message alone
//! - Json: one object per record

use super::record::LogRecord;
use super::source::{compiled_source_roots, trim_source_path};
use super::timestamp::TimestampFormat;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Record layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Example: `[2025-01-08 10:30:45.123] [net] [INFO] [conn.rs:42] connected`
    #[default]
    Text,

    /// Example: `connected`
    Message,

    /// Example: `{"timestamp":"...","level":"INFO","category":"net","message":"connected"}`
    Json,
}

/// Formatter owned by every sink; rendered output never ends in a newline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFormatter {
    pub output_format: OutputFormat,
    pub timestamp_format: TimestampFormat,
    pub show_source: bool,
    pub use_colors: bool,
    pub source_roots: Vec<String>,
}

impl Default for RecordFormatter {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            timestamp_format: TimestampFormat::default(),
            show_source: true,
            use_colors: false,
            source_roots: compiled_source_roots().to_vec(),
        }
    }
}

impl RecordFormatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Formatter that renders only the record message
    #[must_use]
    pub fn message_only() -> Self {
        Self::default().with_output_format(OutputFormat::Message)
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    #[must_use]
    pub fn with_source(mut self, show_source: bool) -> Self {
        self.show_source = show_source;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[must_use]
    pub fn with_source_roots<I, S>(mut self, roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.source_roots = roots.into_iter().map(Into::into).collect();
        self
    }

    pub fn format(&self, record: &LogRecord) -> String {
        match self.output_format {
            OutputFormat::Text => self.format_text(record),
            OutputFormat::Message => record.message.clone(),
            OutputFormat::Json => self.format_json(record),
        }
    }

    fn format_text(&self, record: &LogRecord) -> String {
        let level = if self.use_colors {
            record
                .level
                .to_str()
                .color(record.level.color_code())
                .to_string()
        } else {
            record.level.to_str().to_string()
        };

        let mut out = format!(
            "[{}] [{}] [{}] ",
            self.timestamp_format.format(&record.timestamp),
            record.logger_name,
            level
        );

        if self.show_source {
            if let Some(loc) = record.location {
                let _ = write!(
                    out,
                    "[{}:{}] ",
                    trim_source_path(loc.file, &self.source_roots),
                    loc.line
                );
            }
        }

        out.push_str(&record.message);
        out
    }

    fn format_json(&self, record: &LogRecord) -> String {
        let mut obj = serde_json::Map::new();
        obj.insert(
            "timestamp".to_string(),
            self.timestamp_format.to_json_value(&record.timestamp),
        );
        obj.insert("level".to_string(), record.level.to_str().into());
        obj.insert(
            "category".to_string(),
            serde_json::Value::from(&*record.logger_name),
        );
        obj.insert("message".to_string(), record.message.as_str().into());
        obj.insert("thread".to_string(), record.thread_label().into());

        if self.show_source {
            if let Some(loc) = record.location {
                obj.insert(
                    "file".to_string(),
                    trim_source_path(loc.file, &self.source_roots).into(),
                );
                obj.insert("line".to_string(), loc.line.into());
            }
        }

        serde_json::Value::Object(obj).to_string()
    }
}
