//! Sink handing formatted records to a user callback

use crate::core::{LogLevel, LogRecord, RecordFormatter, Result, SinkBackend};

/// `(rendered text, category name, level)`
pub type FormattedCallback = Box<dyn FnMut(&str, &str, LogLevel) + Send>;

/// Invokes a callback with each record rendered by the sink's formatter.
///
/// The callback runs synchronously under the sink lock, so there is nothing
/// to flush.
///
/// # Example
///
/// ```
/// use category_logger::prelude::*;
/// use category_logger::sinks::FormattedCallbackSink;
/// use std::sync::{Arc, Mutex};
///
/// let seen = Arc::new(Mutex::new(Vec::new()));
/// let sink_seen = Arc::clone(&seen);
/// let registry = CategoryRegistry::new();
/// registry.add_sink(BaseSink::shared(FormattedCallbackSink::new(move |msg, cat, level| {
///     sink_seen.lock().unwrap().push(format!("{cat}/{level}: {msg}"));
/// })));
/// registry.set_formatter(RecordFormatter::message_only());
///
/// registry.get_or_create("net").warn("hello");
/// assert_eq!(seen.lock().unwrap()[0], "net/WARN: hello");
/// ```
pub struct FormattedCallbackSink {
    callback: FormattedCallback,
}

impl FormattedCallbackSink {
    pub fn new<F>(callback: F) -> Self
    where
        F: FnMut(&str, &str, LogLevel) + Send + 'static,
    {
        Self {
            callback: Box::new(callback),
        }
    }

    /// Callback that only wants the rendered text
    pub fn message_only<F>(mut callback: F) -> Self
    where
        F: FnMut(&str) + Send + 'static,
    {
        Self::new(move |msg, _category, _level| callback(msg))
    }
}

impl SinkBackend for FormattedCallbackSink {
    fn sink_record(&mut self, record: &LogRecord, formatter: &RecordFormatter) -> Result<()> {
        let rendered = formatter.format(record);
        (self.callback)(rendered.as_str(), &*record.logger_name, record.level);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &'static str {
        "callback"
    }
}
