//! Fan-out sink forwarding every record to a dynamic set of children

use crate::core::{LogRecord, RecordFormatter, Result, Sink, SinkMetrics, SinkRef};
use parking_lot::RwLock;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::Arc;

/// Distributes records to its children.
///
/// Children can be attached and detached while loggers keep writing; a
/// record sees the set of children present when it arrives.
///
/// **Per-Child Panic Isolation**: every child call is wrapped in
/// `catch_unwind`, so one failing child never keeps a record from the
/// others.
#[derive(Default)]
pub struct DistSink {
    sinks: RwLock<Vec<SinkRef>>,
    metrics: SinkMetrics,
}

impl DistSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_sinks(sinks: Vec<SinkRef>) -> Self {
        Self {
            sinks: RwLock::new(sinks),
            metrics: SinkMetrics::new(),
        }
    }

    pub fn add_sink(&self, sink: SinkRef) {
        self.sinks.write().push(sink);
    }

    /// Detach `sink` (matched by identity); returns whether it was attached
    pub fn remove_sink(&self, sink: &SinkRef) -> bool {
        let mut sinks = self.sinks.write();
        let before = sinks.len();
        sinks.retain(|s| !Arc::ptr_eq(s, sink));
        sinks.len() != before
    }

    pub fn set_sinks(&self, sinks: Vec<SinkRef>) {
        *self.sinks.write() = sinks;
    }

    pub fn clear(&self) {
        self.sinks.write().clear();
    }

    pub fn sinks(&self) -> Vec<SinkRef> {
        self.sinks.read().clone()
    }

    pub fn len(&self) -> usize {
        self.sinks.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.read().is_empty()
    }

    pub fn metrics(&self) -> &SinkMetrics {
        &self.metrics
    }
}

fn panic_message(panic_info: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl Sink for DistSink {
    fn log(&self, record: &LogRecord) -> Result<()> {
        let sinks = self.sinks.read();
        let mut has_error = false;

        for sink in sinks.iter() {
            match catch_unwind(AssertUnwindSafe(|| sink.log(record))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Sink '{}' failed: {}", sink.name(), e);
                    self.metrics.record_failure();
                    has_error = true;
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Sink '{}' panicked: {}. \
                         Other sinks continue to function.",
                        sink.name(),
                        panic_message(&*panic_info)
                    );
                    self.metrics.record_panic();
                    has_error = true;
                }
            }
        }

        if !has_error {
            self.metrics.record_delivered();
        }
        Ok(())
    }

    fn flush(&self) -> Result<()> {
        let sinks = self.sinks.read();
        let mut first_error = None;

        for sink in sinks.iter() {
            match catch_unwind(AssertUnwindSafe(|| sink.flush())) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Sink '{}' flush failed: {}", sink.name(), e);
                    first_error.get_or_insert(e);
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Sink '{}' panicked during flush: {}. \
                         Other sinks continue to function.",
                        sink.name(),
                        panic_message(&*panic_info)
                    );
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn set_formatter(&self, formatter: RecordFormatter) {
        for sink in self.sinks.read().iter() {
            let colored = formatter.clone().with_colors(sink.is_colored());
            sink.set_formatter(colored);
        }
    }

    fn name(&self) -> &str {
        "dist"
    }
}
