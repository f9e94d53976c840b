//! Integration tests for the category registry
//!
//! These tests verify:
//! - Logger identity per category name
//! - Default level semantics
//! - Single-flight creation under concurrency
//! - Atomic iteration with concurrent creators
//! - Sinks attached once reach every category

use category_logger::prelude::*;
use category_logger::{info, CategoryLogger};
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Barrier, Mutex};
use std::thread;
use std::time::Duration;

fn capturing_sink() -> (SinkRef, Arc<Mutex<Vec<(String, String, LogLevel)>>>) {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let sink_calls = Arc::clone(&calls);
    let sink = BaseSink::shared(FormattedCallbackSink::new(move |msg, cat, level| {
        sink_calls
            .lock()
            .unwrap()
            .push((msg.to_string(), cat.to_string(), level));
    }));
    (sink, calls)
}

#[test]
fn test_level_change_visible_through_every_handle() {
    let registry = CategoryRegistry::new();
    let first = registry.get_or_create("net");
    let second = registry.get_or_create("net");

    first.set_level(LogLevel::Fatal);
    assert_eq!(second.level(), LogLevel::Fatal);
    second.set_level(LogLevel::Trace);
    assert_eq!(first.level(), LogLevel::Trace);
}

#[test]
fn test_concurrent_creation_yields_one_logger() {
    const THREADS: usize = 16;

    let registry = Arc::new(CategoryRegistry::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.get_or_create("contended")
            })
        })
        .collect();

    let loggers: Vec<LoggerHandle> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert_eq!(registry.len(), 1);
    for logger in &loggers {
        assert!(Arc::ptr_eq(logger, &loggers[0]));
    }
    // Registry map + one clone per thread
    assert_eq!(Arc::strong_count(&loggers[0]), THREADS + 1);
}

#[test]
fn test_for_each_is_atomic_with_concurrent_creation() {
    let registry = Arc::new(CategoryRegistry::new());
    for i in 0..10 {
        registry.get_or_create(&format!("seed-{i}"));
    }

    let created = Arc::new(AtomicUsize::new(0));
    let stop = Arc::new(AtomicBool::new(false));
    let creator = {
        let registry = Arc::clone(&registry);
        let created = Arc::clone(&created);
        let stop = Arc::clone(&stop);
        thread::spawn(move || {
            let mut i = 0;
            while !stop.load(Ordering::Relaxed) {
                registry.get_or_create(&format!("late-{i}"));
                created.fetch_add(1, Ordering::SeqCst);
                i += 1;
            }
        })
    };

    for _ in 0..20 {
        let mut first_seen = None;
        let mut visits = 0;
        let mut at_completion = 0;
        registry.for_each(
            |_, _| {
                first_seen.get_or_insert(created.load(Ordering::SeqCst));
                visits += 1;
                // Give the creator time to contend for the lock mid-iteration
                thread::sleep(Duration::from_micros(20));
            },
            || at_completion = created.load(Ordering::SeqCst),
        );

        // The creator may finish at most the one insert that preceded the lock
        let first_seen = first_seen.unwrap();
        assert!(at_completion - first_seen <= 1);
        assert!(visits >= 10);
    }

    stop.store(true, Ordering::Relaxed);
    creator.join().unwrap();

    let mut names = HashSet::new();
    registry.for_each(|name, _| assert!(names.insert(name.to_string())), || {});
    assert_eq!(names.len(), registry.len());
    assert_eq!(registry.len(), 10 + created.load(Ordering::SeqCst));
}

#[test]
fn test_for_each_then_bulk_level_change() {
    let registry = CategoryRegistry::new();
    for name in ["a", "b", "c"] {
        registry.get_or_create(name);
    }

    let mut visited = HashSet::new();
    registry.for_each(
        |name, logger| {
            assert!(visited.insert(name.to_string()), "{name} visited twice");
            logger.set_level(LogLevel::Error);
        },
        || {},
    );

    let expected: HashSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
    assert_eq!(visited, expected);
    for name in ["a", "b", "c"] {
        assert_eq!(registry.get(name).unwrap().level(), LogLevel::Error);
    }
}

#[test]
fn test_sink_attached_later_reaches_existing_categories() {
    let registry = CategoryRegistry::new();
    let early = registry.get_or_create("early");

    let (sink, calls) = capturing_sink();
    registry.add_sink(sink);
    registry.set_formatter(RecordFormatter::message_only());

    let late = registry.get_or_create("late");
    early.warn("from early");
    late.info("from late");

    assert_eq!(
        *calls.lock().unwrap(),
        vec![
            ("from early".to_string(), "early".to_string(), LogLevel::Warn),
            ("from late".to_string(), "late".to_string(), LogLevel::Info),
        ]
    );
}

#[test]
fn test_callback_sink_receives_text_category_and_level() {
    let (sink, calls) = capturing_sink();
    let registry = CategoryRegistry::builder()
        .formatter(RecordFormatter::message_only())
        .sink(sink)
        .build();

    registry.get_or_create("net").warn("hello");

    assert_eq!(
        *calls.lock().unwrap(),
        vec![("hello".to_string(), "net".to_string(), LogLevel::Warn)]
    );
}

#[test]
fn test_removed_sink_stops_receiving() {
    let (sink, calls) = capturing_sink();
    let registry = CategoryRegistry::new();
    registry.add_sink(sink.clone());

    let logger = registry.get_or_create("net");
    logger.info("one");
    assert!(registry.remove_sink(&sink));
    logger.info("two");

    assert_eq!(calls.lock().unwrap().len(), 1);
}

#[test]
fn test_colored_sink_detected_on_attach() {
    let registry = CategoryRegistry::new();
    let colored = Arc::new(BaseSink::new(ConsoleSink::new()));
    let plain = Arc::new(BaseSink::new(ConsoleSink::new().with_colors(false)));

    registry.add_sink(colored.clone());
    registry.add_sink(plain.clone());

    assert!(colored.formatter().use_colors);
    assert!(!plain.formatter().use_colors);
    assert_eq!(registry.master_sink().len(), 2);

    // A new template keeps each sink's color choice
    registry.set_formatter(RecordFormatter::message_only());
    assert!(colored.formatter().use_colors);
    assert!(!plain.formatter().use_colors);
}

#[test]
fn test_from_config_builds_sinks_and_level() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("app.log");
    let config = LoggingConfig {
        default_level: LogLevel::Debug,
        format: OutputFormat::Message,
        sinks: vec![category_logger::SinkConfig::file(path.to_str().unwrap())],
        ..LoggingConfig::default()
    };

    let registry = CategoryRegistry::from_config(&config).unwrap();
    let logger = registry.get_or_create("cfg");
    assert_eq!(logger.level(), LogLevel::Debug);

    info!(logger, "configured {}", 1);
    logger.debug("debug visible");
    registry.flush().unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert_eq!(content, "configured 1\ndebug visible\n");
}

static STORAGE: CategoryLogger = CategoryLogger::new("registry-tests-storage");

#[test]
fn test_static_category_logger_uses_global_registry() {
    STORAGE.set_level(LogLevel::Debug);
    let from_global = category_logger::global().get_or_create("registry-tests-storage");
    assert!(Arc::ptr_eq(STORAGE.handle(), &from_global));
    assert_eq!(from_global.level(), LogLevel::Debug);
    assert_eq!(STORAGE.name(), "registry-tests-storage");
}

#[test]
fn test_set_level_for_creates_missing_category() {
    let registry = CategoryRegistry::new();
    assert!(registry.get("cache").is_none());

    let cache = registry.set_level_for("cache", LogLevel::Trace);
    assert_eq!(cache.level(), LogLevel::Trace);
    assert!(Arc::ptr_eq(&cache, &registry.get("cache").unwrap()));

    // Existing categories and the default are left alone
    let other = registry.get_or_create("other");
    assert_eq!(other.level(), LogLevel::Info);
    assert_eq!(registry.default_level(), LogLevel::Info);
}

#[test]
fn test_clear_sinks_detaches_everything() {
    let (sink, calls) = capturing_sink();
    let registry = CategoryRegistry::builder()
        .formatter(RecordFormatter::message_only())
        .sink(sink)
        .build();

    let logger = registry.get_or_create("net");
    logger.info("before");
    registry.clear_sinks();
    logger.info("after");

    assert!(registry.master_sink().is_empty());
    assert_eq!(calls.lock().unwrap().len(), 1);
    assert_eq!(calls.lock().unwrap()[0].0, "before");
}

#[test]
fn test_category_names_lists_every_category() {
    let registry = CategoryRegistry::new();
    assert!(registry.category_names().is_empty());

    for name in ["net", "db", "net", "cache"] {
        registry.get_or_create(name);
    }

    let mut names = registry.category_names();
    names.sort();
    assert_eq!(names, vec!["cache", "db", "net"]);
}

#[test]
fn test_master_sink_set_sinks_replaces_children() {
    let (first, first_calls) = capturing_sink();
    let (second, second_calls) = capturing_sink();
    let registry = CategoryRegistry::new();
    registry.add_sink(first);

    let logger = registry.get_or_create("net");
    logger.info("one");
    registry.master_sink().set_sinks(vec![second.clone()]);
    logger.info("two");

    assert_eq!(registry.master_sink().len(), 1);
    assert!(Arc::ptr_eq(&registry.master_sink().sinks()[0], &second));
    assert_eq!(first_calls.lock().unwrap().len(), 1);
    assert_eq!(second_calls.lock().unwrap().len(), 1);
}

#[test]
fn test_config_from_file() {
    let dir = tempfile::TempDir::new().unwrap();
    let log_path = dir.path().join("app.log");
    let config_path = dir.path().join("logging.json");
    let json = serde_json::json!({
        "default_level": "warn",
        "format": "message",
        "sinks": [{ "kind": "file", "target": log_path.to_str().unwrap() }]
    });
    std::fs::write(&config_path, json.to_string()).unwrap();

    let config = LoggingConfig::from_file(&config_path).unwrap();
    assert_eq!(config.default_level, LogLevel::Warn);

    let registry = CategoryRegistry::from_config(&config).unwrap();
    let logger = registry.get_or_create("cfg");
    logger.info("hidden");
    logger.warn("shown");
    registry.flush().unwrap();

    assert_eq!(std::fs::read_to_string(&log_path).unwrap(), "shown\n");
}

#[test]
fn test_config_from_missing_file_is_io_error() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = LoggingConfig::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, LoggerError::IoOperation { .. }));
    assert!(err.to_string().contains("absent.json"));
}

/// Sink whose first `set_formatter` stalls, widening the window between
/// reading the template and attaching the sink
struct SlowAttach {
    entered: Mutex<Option<std::sync::mpsc::Sender<()>>>,
    formatter: Mutex<Option<RecordFormatter>>,
}

impl Sink for SlowAttach {
    fn log(&self, _record: &LogRecord) -> Result<()> {
        Ok(())
    }
    fn flush(&self) -> Result<()> {
        Ok(())
    }
    fn set_formatter(&self, formatter: RecordFormatter) {
        if let Some(tx) = self.entered.lock().unwrap().take() {
            tx.send(()).unwrap();
            thread::sleep(Duration::from_millis(50));
        }
        *self.formatter.lock().unwrap() = Some(formatter);
    }
    fn name(&self) -> &str {
        "slow-attach"
    }
}

#[test]
fn test_formatter_change_during_attach_reaches_new_sink() {
    let registry = Arc::new(CategoryRegistry::new());
    let (tx, rx) = std::sync::mpsc::channel();
    let slow = Arc::new(SlowAttach {
        entered: Mutex::new(Some(tx)),
        formatter: Mutex::new(None),
    });

    let attach = {
        let registry = Arc::clone(&registry);
        let sink: SinkRef = slow.clone();
        thread::spawn(move || registry.add_sink(sink))
    };

    rx.recv().unwrap();
    let replacement = RecordFormatter::new().with_output_format(OutputFormat::Json);
    registry.set_formatter(replacement.clone());
    attach.join().unwrap();

    assert_eq!(slow.formatter.lock().unwrap().as_ref(), Some(&replacement));
    assert_eq!(registry.formatter(), replacement);
}
