//! Log record structure handed to sinks

use super::log_level::LogLevel;
use super::source::SourceLocation;
use chrono::{DateTime, Utc};
use std::cell::RefCell;
use std::sync::Arc;

// Thread-local caches for thread information to avoid repeated allocations
thread_local! {
    static THREAD_ID_CACHE: RefCell<Option<Arc<str>>> = const { RefCell::new(None) };
    static THREAD_NAME_CACHE: RefCell<Option<Option<Arc<str>>>> = const { RefCell::new(None) };
}

fn current_thread_id() -> Arc<str> {
    THREAD_ID_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| format!("{:?}", std::thread::current().id()).into())
            .clone()
    })
}

fn current_thread_name() -> Option<Arc<str>> {
    THREAD_NAME_CACHE.with(|cache| {
        cache
            .borrow_mut()
            .get_or_insert_with(|| std::thread::current().name().map(Arc::from))
            .clone()
    })
}

/// One emitted record: severity, rendered message, the category it came
/// from and where and when it happened.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: LogLevel,
    pub message: String,
    pub logger_name: Arc<str>,
    pub timestamp: DateTime<Utc>,
    pub location: Option<SourceLocation>,
    pub thread_id: Arc<str>,
    pub thread_name: Option<Arc<str>>,
}

impl LogRecord {
    pub fn new(logger_name: Arc<str>, level: LogLevel, message: String) -> Self {
        Self {
            level,
            message,
            logger_name,
            timestamp: Utc::now(),
            location: None,
            thread_id: current_thread_id(),
            thread_name: current_thread_name(),
        }
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Thread name when the thread has one, its id otherwise
    pub fn thread_label(&self) -> &str {
        self.thread_name.as_deref().unwrap_or(&self.thread_id)
    }
}
