//! Sink traits for record output destinations

use super::{error::Result, formatter::RecordFormatter, record::LogRecord};
use parking_lot::Mutex;
use std::sync::Arc;

/// A shareable output destination.
///
/// Loggers and the fan-out sink only ever see this trait; implementations
/// do their own locking.
pub trait Sink: Send + Sync {
    fn log(&self, record: &LogRecord) -> Result<()>;
    fn flush(&self) -> Result<()>;
    fn set_formatter(&self, formatter: RecordFormatter);
    fn name(&self) -> &str;

    /// Whether this sink renders ANSI colors
    fn is_colored(&self) -> bool {
        false
    }
}

pub type SinkRef = Arc<dyn Sink>;

/// Extension point for concrete sinks.
///
/// A backend only has to turn one record into output; [`BaseSink`] supplies
/// the lock and the formatter.
pub trait SinkBackend: Send {
    fn sink_record(&mut self, record: &LogRecord, formatter: &RecordFormatter) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &'static str;

    fn is_colored(&self) -> bool {
        false
    }
}

struct Inner<B> {
    backend: B,
    formatter: RecordFormatter,
}

/// Mutex-guarded backend plus its formatter.
pub struct BaseSink<B: SinkBackend> {
    name: &'static str,
    colored: bool,
    inner: Mutex<Inner<B>>,
}

impl<B: SinkBackend> BaseSink<B> {
    pub fn new(backend: B) -> Self {
        Self::with_formatter(backend, RecordFormatter::default())
    }

    pub fn with_formatter(backend: B, formatter: RecordFormatter) -> Self {
        Self {
            name: backend.name(),
            colored: backend.is_colored(),
            inner: Mutex::new(Inner { backend, formatter }),
        }
    }

    /// Wrap `backend` and hand it out as a [`SinkRef`]
    pub fn shared(backend: B) -> SinkRef
    where
        B: 'static,
    {
        Arc::new(Self::new(backend))
    }

    pub fn formatter(&self) -> RecordFormatter {
        self.inner.lock().formatter.clone()
    }

    /// Run `f` with exclusive access to the backend
    pub fn with_backend<R>(&self, f: impl FnOnce(&mut B) -> R) -> R {
        f(&mut self.inner.lock().backend)
    }
}

impl<B: SinkBackend> Sink for BaseSink<B> {
    fn log(&self, record: &LogRecord) -> Result<()> {
        let mut inner = self.inner.lock();
        let Inner { backend, formatter } = &mut *inner;
        backend.sink_record(record, formatter)
    }

    fn flush(&self) -> Result<()> {
        self.inner.lock().backend.flush()
    }

    fn set_formatter(&self, formatter: RecordFormatter) {
        self.inner.lock().formatter = formatter;
    }

    fn name(&self) -> &str {
        self.name
    }

    fn is_colored(&self) -> bool {
        self.colored
    }
}
