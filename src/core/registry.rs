//! Category logger registry
//!
//! A [`CategoryRegistry`] hands out one [`Logger`] per category name. Every
//! logger it creates writes to the same fan-out [`DistSink`], so a sink
//! attached to the registry reaches every category, past and future.
//!
//! ```
//! use category_logger::prelude::*;
//! use std::sync::Arc;
//!
//! let registry = CategoryRegistry::new();
//! registry.set_default_level(LogLevel::Debug);
//!
//! let a = registry.get_or_create("net");
//! let b = registry.get_or_create("net");
//! assert!(Arc::ptr_eq(&a, &b));
//! assert_eq!(a.level(), LogLevel::Debug);
//! ```

use super::{
    config::{make_sink, LoggingConfig},
    error::Result,
    formatter::RecordFormatter,
    log_level::LogLevel,
    logger::{Logger, LoggerHandle},
    sink::{Sink, SinkRef},
};
use crate::sinks::DistSink;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::sync::{Arc, OnceLock};

struct RegistryState {
    loggers: HashMap<String, LoggerHandle>,
    default_level: LogLevel,
    formatter: RecordFormatter,
}

/// Lazily populated map from category name to logger.
///
/// One mutex covers lookup, creation, iteration and the default level.
/// Records logged through an obtained handle never take it.
pub struct CategoryRegistry {
    state: Mutex<RegistryState>,
    master: Arc<DistSink>,
}

impl CategoryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(LogLevel::Info, RecordFormatter::default())
    }

    fn with_parts(default_level: LogLevel, formatter: RecordFormatter) -> Self {
        Self {
            state: Mutex::new(RegistryState {
                loggers: HashMap::new(),
                default_level,
                formatter,
            }),
            master: Arc::new(DistSink::new()),
        }
    }

    #[must_use]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Build a registry with the level, layout and sinks `config` describes
    pub fn from_config(config: &LoggingConfig) -> Result<Self> {
        let mut builder = Self::builder()
            .default_level(config.default_level)
            .formatter(config.formatter());
        for sink in &config.sinks {
            builder = builder.sink(make_sink(sink)?);
        }
        Ok(builder.build())
    }

    /// Return the logger for `name`, creating it on first request.
    ///
    /// A new logger writes only to the master sink and starts at the current
    /// default level. Repeated calls return the same logger.
    pub fn get_or_create(&self, name: &str) -> LoggerHandle {
        let mut state = self.state.lock();
        if let Some(logger) = state.loggers.get(name) {
            return Arc::clone(logger);
        }

        let master: SinkRef = self.master.clone();
        let logger = Arc::new(Logger::new(name, master));
        logger.set_level(state.default_level);
        state.loggers.insert(name.to_owned(), Arc::clone(&logger));
        logger
    }

    /// Look up an existing logger without creating one
    pub fn get(&self, name: &str) -> Option<LoggerHandle> {
        self.state.lock().loggers.get(name).cloned()
    }

    /// Level given to loggers created from now on; existing loggers keep theirs
    pub fn set_default_level(&self, level: LogLevel) {
        self.state.lock().default_level = level;
    }

    pub fn default_level(&self) -> LogLevel {
        self.state.lock().default_level
    }

    /// Visit every registered logger, then run `completion`, all under the
    /// registry lock.
    ///
    /// No logger can be created while this runs. Order is unspecified.
    /// `visitor` and `completion` must not call back into this registry.
    pub fn for_each<V, C>(&self, mut visitor: V, completion: C)
    where
        V: FnMut(&str, &LoggerHandle),
        C: FnOnce(),
    {
        let state = self.state.lock();
        for (name, logger) in &state.loggers {
            visitor(name, logger);
        }
        completion();
    }

    /// Set every existing logger and the default to `level` in one step
    pub fn set_level_all(&self, level: LogLevel) {
        let mut state = self.state.lock();
        for logger in state.loggers.values() {
            logger.set_level(level);
        }
        state.default_level = level;
    }

    /// Set the level of one category, creating it if needed
    pub fn set_level_for(&self, name: &str, level: LogLevel) -> LoggerHandle {
        let logger = self.get_or_create(name);
        logger.set_level(level);
        logger
    }

    pub fn len(&self) -> usize {
        self.state.lock().loggers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().loggers.is_empty()
    }

    pub fn category_names(&self) -> Vec<String> {
        self.state.lock().loggers.keys().cloned().collect()
    }

    /// The fan-out sink every logger of this registry writes to
    pub fn master_sink(&self) -> &Arc<DistSink> {
        &self.master
    }

    /// Attach `sink` to the master sink.
    ///
    /// The sink gets the registry's formatter, with colors turned on only if
    /// the sink reports that it renders them.
    pub fn add_sink(&self, sink: SinkRef) {
        // Held until attached so a concurrent set_formatter cannot be missed
        let state = self.state.lock();
        sink.set_formatter(state.formatter.clone().with_colors(sink.is_colored()));
        self.master.add_sink(sink);
    }

    pub fn remove_sink(&self, sink: &SinkRef) -> bool {
        self.master.remove_sink(sink)
    }

    pub fn clear_sinks(&self) {
        self.master.clear();
    }

    /// Replace the formatter template and apply it to every attached sink
    pub fn set_formatter(&self, formatter: RecordFormatter) {
        let mut state = self.state.lock();
        self.master.set_formatter(formatter.clone());
        state.formatter = formatter;
    }

    pub fn formatter(&self) -> RecordFormatter {
        self.state.lock().formatter.clone()
    }

    pub fn flush(&self) -> Result<()> {
        self.master.flush()
    }
}

impl Default for CategoryRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CategoryRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("CategoryRegistry")
            .field("categories", &state.loggers.len())
            .field("default_level", &state.default_level)
            .field("sinks", &self.master.len())
            .finish()
    }
}

/// Builder for constructing a [`CategoryRegistry`] with a fluent API
///
/// # Example
/// ```
/// use category_logger::prelude::*;
///
/// let registry = CategoryRegistry::builder()
///     .default_level(LogLevel::Warn)
///     .formatter(RecordFormatter::new().with_source(false))
///     .sink(BaseSink::shared(ConsoleSink::new()))
///     .build();
///
/// assert_eq!(registry.master_sink().len(), 1);
/// ```
pub struct RegistryBuilder {
    default_level: LogLevel,
    formatter: RecordFormatter,
    sinks: Vec<SinkRef>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            default_level: LogLevel::Info,
            formatter: RecordFormatter::default(),
            sinks: Vec::new(),
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn default_level(mut self, level: LogLevel) -> Self {
        self.default_level = level;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn formatter(mut self, formatter: RecordFormatter) -> Self {
        self.formatter = formatter;
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn sink(mut self, sink: SinkRef) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn build(self) -> CategoryRegistry {
        let registry = CategoryRegistry::with_parts(self.default_level, self.formatter);
        for sink in self.sinks {
            registry.add_sink(sink);
        }
        registry
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The process-wide registry, created on first use
pub fn global() -> &'static CategoryRegistry {
    static GLOBAL: OnceLock<CategoryRegistry> = OnceLock::new();
    GLOBAL.get_or_init(CategoryRegistry::new)
}

/// Static handle to a category of the [`global`] registry.
///
/// The logger is resolved on first use and cached in the handle.
///
/// ```
/// use category_logger::{CategoryLogger, LogLevel};
///
/// static STORAGE: CategoryLogger = CategoryLogger::new("doc-storage");
///
/// STORAGE.set_level(LogLevel::Warn);
/// assert_eq!(category_logger::global().get_or_create("doc-storage").level(), LogLevel::Warn);
/// ```
pub struct CategoryLogger {
    name: &'static str,
    logger: OnceLock<LoggerHandle>,
}

impl CategoryLogger {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            logger: OnceLock::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn handle(&self) -> &LoggerHandle {
        self.logger.get_or_init(|| global().get_or_create(self.name))
    }
}

impl Deref for CategoryLogger {
    type Target = Logger;

    fn deref(&self) -> &Logger {
        self.handle()
    }
}
