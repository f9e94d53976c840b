//! # Category Logger
//!
//! Named ("category") loggers sharing one fan-out sink, with formatting
//! helpers and a few adapter sinks.
//!
//! ## Features
//!
//! - **Category Registry**: one logger per name, created on first request
//! - **Shared Output**: sinks attach once to the master sink and reach every category
//! - **Lazy Formatting**: filtered statements never format their arguments
//! - **Adapter Sinks**: colorized console, file, and formatted callback sinks
//!
//! ```
//! use category_logger::prelude::*;
//! use category_logger::{info, warn};
//!
//! let registry = CategoryRegistry::builder()
//!     .default_level(LogLevel::Debug)
//!     .sink(BaseSink::shared(ConsoleSink::new()))
//!     .build();
//!
//! let net = registry.get_or_create("net");
//! info!(net, "listening on port {}", 8080);
//!
//! let alert = Style::new().bold();
//! warn!(net, style: &alert; "{} peers unreachable", 3);
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        global, BaseSink, CategoryLogger, CategoryRegistry, LogLevel, LogRecord, Logger,
        LoggerError, LoggerHandle, LoggingConfig, OutputFormat, RecordFormatter, Result, Sink,
        SinkBackend, SinkRef, SourceLocation, Style, StyledText, TimestampFormat,
    };
    pub use crate::sinks::{ConsoleSink, DistSink, FileSink, FormattedCallbackSink};
}

pub use crate::core::{
    global, make_sink, BaseSink, CategoryLogger, CategoryRegistry, LogLevel, LogRecord, Logger,
    LoggerError, LoggerHandle, LoggingConfig, OutputFormat, RecordFormatter, RegistryBuilder,
    Result, Sink, SinkBackend, SinkConfig, SinkMetrics, SinkRef, SinkType, SourceLocation, Style,
    StyledText, TimestampFormat,
};
pub use crate::sinks::{ConsoleSink, ConsoleTarget, DistSink, FileSink, FormattedCallbackSink};
