//! Core logger types and traits

pub mod config;
pub mod error;
pub mod format;
pub mod formatter;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod registry;
pub mod sink;
pub mod source;
pub mod styled;
pub mod timestamp;

pub use config::{make_sink, LoggingConfig, SinkConfig, SinkType};
pub use error::{LoggerError, Result};
pub use formatter::{OutputFormat, RecordFormatter};
pub use log_level::LogLevel;
pub use logger::{Logger, LoggerHandle};
pub use metrics::SinkMetrics;
pub use record::LogRecord;
pub use registry::{global, CategoryLogger, CategoryRegistry, RegistryBuilder};
pub use sink::{BaseSink, Sink, SinkBackend, SinkRef};
pub use source::{compiled_source_roots, trim_source_path, SourceLocation};
pub use styled::{Style, StyledText};
pub use timestamp::TimestampFormat;
