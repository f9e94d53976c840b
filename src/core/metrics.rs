//! Delivery counters for the fan-out sink
//!
//! Tracks how many records reached every child sink and how many deliveries
//! failed, either with an error or a panic.

use std::sync::atomic::{AtomicU64, Ordering};

/// # Example
///
/// ```
/// use category_logger::SinkMetrics;
///
/// let metrics = SinkMetrics::new();
/// metrics.record_delivered();
/// metrics.record_failure();
///
/// assert_eq!(metrics.delivered(), 1);
/// assert_eq!(metrics.failures(), 1);
/// ```
#[derive(Debug)]
pub struct SinkMetrics {
    /// Records every child accepted
    delivered: AtomicU64,

    /// Child deliveries that returned an error
    failures: AtomicU64,

    /// Child deliveries that panicked
    panics: AtomicU64,
}

impl SinkMetrics {
    pub const fn new() -> Self {
        Self {
            delivered: AtomicU64::new(0),
            failures: AtomicU64::new(0),
            panics: AtomicU64::new(0),
        }
    }

    #[inline]
    pub fn delivered(&self) -> u64 {
        self.delivered.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn failures(&self) -> u64 {
        self.failures.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn panics(&self) -> u64 {
        self.panics.load(Ordering::Relaxed)
    }

    #[inline]
    pub fn record_delivered(&self) -> u64 {
        self.delivered.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_failure(&self) -> u64 {
        self.failures.fetch_add(1, Ordering::Relaxed)
    }

    #[inline]
    pub fn record_panic(&self) -> u64 {
        self.panics.fetch_add(1, Ordering::Relaxed)
    }
}

impl Default for SinkMetrics {
    fn default() -> Self {
        Self::new()
    }
}
