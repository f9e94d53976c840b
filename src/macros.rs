//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Arguments are only
//! formatted when the logger's level lets the record through, and every
//! record carries the source location of the macro call.
//!
//! Any expression that derefs to a [`Logger`](crate::Logger) works as the
//! first argument: a `LoggerHandle`, a `&Logger` or a static
//! [`CategoryLogger`](crate::CategoryLogger).
//!
//! # Examples
//!
//! ```
//! use category_logger::prelude::*;
//! use category_logger::{debug, info};
//!
//! let registry = CategoryRegistry::new();
//! let db = registry.get_or_create("db");
//!
//! info!(db, "Connection pool ready");
//!
//! let size = 16;
//! info!(db, "Pool size: {}", size);
//!
//! // Filtered out at the default Info level, nothing is formatted
//! debug!(db, "Expensive dump: {:?}", vec![1, 2, 3]);
//!
//! // Styled message
//! let highlight = Style::new().underline();
//! info!(db, style: &highlight; "Replica {} promoted", "db-2");
//! ```

/// Capture the current [`SourceLocation`](crate::SourceLocation).
#[macro_export]
macro_rules! source_location {
    () => {
        $crate::SourceLocation::new(file!(), line!(), module_path!())
    };
}

/// Format into a new `String`.
///
/// ```
/// assert_eq!(category_logger::formatted!("xyz {}", 42), "xyz 42");
/// ```
#[macro_export]
macro_rules! formatted {
    ($($arg:tt)+) => {
        $crate::core::format::format(format_args!($($arg)+))
    };
}

/// Append formatted text to anything implementing `fmt::Write`.
///
/// ```
/// let mut s = String::from("xyz ");
/// category_logger::format_append!(s, "{}", 42).unwrap();
/// assert_eq!(s, "xyz 42");
/// ```
#[macro_export]
macro_rules! format_append {
    ($out:expr, $($arg:tt)+) => {
        $crate::core::format::format_to(&mut $out, format_args!($($arg)+))
    };
}

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use category_logger::prelude::*;
/// # let logger = CategoryRegistry::new().get_or_create("doc");
/// use category_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, style: $style:expr; $($arg:tt)+) => {
        $logger.log_styled($level, $crate::source_location!(), $style, format_args!($($arg)+))
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at($level, $crate::source_location!(), format_args!($($arg)+))
    };
}

/// Log a trace-level message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Trace, $($arg)+)
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use category_logger::prelude::*;
/// # let logger = CategoryRegistry::new().get_or_create("doc");
/// use category_logger::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message.
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Fatal, $($arg)+)
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{BaseSink, CategoryRegistry, LogLevel, RecordFormatter, Style};
    use crate::sinks::FormattedCallbackSink;
    use std::cell::Cell;
    use std::fmt;
    use std::sync::{Arc, Mutex};

    fn capture_registry() -> (CategoryRegistry, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink_lines = Arc::clone(&lines);
        let registry = CategoryRegistry::builder()
            .formatter(RecordFormatter::message_only())
            .sink(BaseSink::shared(FormattedCallbackSink::message_only(move |msg| {
                sink_lines.lock().unwrap().push(msg.to_string());
            })))
            .build();
        (registry, lines)
    }

    #[test]
    fn test_level_macros() {
        let (registry, lines) = capture_registry();
        let logger = registry.get_or_create("macros");
        logger.set_level(LogLevel::Trace);

        trace!(logger, "t {}", 0);
        debug!(logger, "d {}", 1);
        info!(logger, "i {}", 2);
        warn!(logger, "w {}", 3);
        error!(logger, "e {}", 4);
        fatal!(logger, "f {}", 5);
        log!(logger, LogLevel::Info, "plain");

        assert_eq!(
            *lines.lock().unwrap(),
            vec!["t 0", "d 1", "i 2", "w 3", "e 4", "f 5", "plain"]
        );
    }

    #[test]
    fn test_filtered_macro_skips_formatting() {
        struct Expensive<'a>(&'a Cell<u32>);
        impl fmt::Display for Expensive<'_> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.set(self.0.get() + 1);
                f.write_str("expensive")
            }
        }

        let (registry, lines) = capture_registry();
        let logger = registry.get_or_create("lazy");
        let hits = Cell::new(0);

        debug!(logger, "{}", Expensive(&hits));
        debug!(logger, style: &Style::new().bold(); "{}", Expensive(&hits));
        assert_eq!(hits.get(), 0);
        assert!(lines.lock().unwrap().is_empty());

        info!(logger, "{}", Expensive(&hits));
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn test_styled_macro_matches_style_format() {
        let (registry, lines) = capture_registry();
        let logger = registry.get_or_create("styled");
        let style = Style::new().fg(colored::Color::Green);

        info!(logger, style: &style; "{} ok", "sync");
        assert_eq!(lines.lock().unwrap()[0], style.format(format_args!("{} ok", "sync")));
    }

    #[test]
    fn test_source_location_macro() {
        let loc = source_location!();
        assert!(loc.file.ends_with("macros.rs"));
        assert_eq!(loc.module_path, module_path!());
    }
}
