//! Sink implementations

pub mod callback;
pub mod console;
pub mod dist;
pub mod file;

pub use callback::{FormattedCallback, FormattedCallbackSink};
pub use console::{ConsoleSink, ConsoleTarget};
pub use dist::DistSink;
pub use file::FileSink;

// Re-export traits for convenience
pub use crate::core::{BaseSink, Sink, SinkBackend, SinkRef};
