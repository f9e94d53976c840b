//! Category logging example
//!
//! Demonstrates named loggers sharing one set of sinks, bulk level changes,
//! styled messages and a callback sink.
//!
//! Run with: cargo run --example category_logging

use category_logger::prelude::*;
use category_logger::{debug, info, warn, CategoryLogger};
use colored::Color;

static STARTUP: CategoryLogger = CategoryLogger::new("startup");

fn main() -> Result<()> {
    println!("=== Category Logger - Category Logging Example ===\n");

    // The global registry prints to stdout with colors
    let registry = global();
    registry.add_sink(BaseSink::shared(ConsoleSink::new()));

    println!("1. One logger per category:");
    let net = registry.get_or_create("net");
    let db = registry.get_or_create("db");
    info!(net, "listening on port {}", 8080);
    info!(db, "pool ready with {} connections", 16);
    STARTUP.info("static category logger resolved on first use");

    println!("\n2. Raising verbosity for one category:");
    registry.set_level_for("db", LogLevel::Debug);
    debug!(db, "debug visible for db");
    debug!(net, "debug hidden for net");

    println!("\n3. Silencing everything through for_each:");
    let mut silenced = 0;
    registry.for_each(
        |_, logger| {
            logger.set_level(LogLevel::Error);
            silenced += 1;
        },
        || println!("   categories set to ERROR"),
    );
    println!("   {silenced} in total");
    warn!(net, "hidden");

    println!("\n4. Styled messages:");
    registry.set_level_all(LogLevel::Info);
    let alert = Style::new().fg(Color::Red).bold();
    warn!(net, style: &alert; "{} peers unreachable", 3);

    println!("\n5. Callback sink:");
    registry.add_sink(BaseSink::shared(FormattedCallbackSink::new(
        |msg, category, level| println!("   callback got [{category}/{level}] {msg}"),
    )));
    info!(db, "checkpoint complete");

    registry.flush()?;
    println!("\n=== Example completed successfully! ===");

    Ok(())
}
