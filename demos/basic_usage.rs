//! Basic logger usage example
//!
//! Demonstrates the console engine: levels, context, children, call shapes
//! and stack traces.
//!
//! Run with: cargo run --example basic_usage

use rust_logger_facade::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    println!("=== Rust Logger Facade - Basic Usage Example ===\n");

    let logger = ConsoleLogger::builder()
        .level(LogLevel::Debug)
        .context_field("app", "demo")
        .build();

    println!("1. Leveled logging:");
    logger
        .error("Something failed")
        .warn("Disk usage at 91%")
        .info("Server started")
        .http("GET /health 200")
        .debug("Cache warmed");
    logger.silly("Filtered out at debug level");

    println!("\n2. Meta values and structured messages:");
    logger.info_with("User logged in", &[json!({"userId": 123})]);
    logger.log_at(LogLevel::Info, json!({"name": "x", "value": 1}), &[]);
    logger.log_entry(json!({"level": "warn", "message": "Quota low", "remaining": 4}));

    println!("\n3. Child loggers:");
    let db = logger.child(LogContext::new().with_field("component", "db"));
    db.info("Connected");
    db.set_level(LogLevel::Error);
    db.info("Hidden: child level is error");
    logger.info("Parent keeps its own level");

    println!("\n4. Stack traces:");
    logger.enable_stack_trace(Some(3));
    logger.error("Traced failure");
    logger.disable_stack_trace();

    println!("\n5. Level checks:");
    println!("   verbose enabled: {}", logger.is_verbose_enabled());
    logger.set_level_name("warn")?;
    println!("   debug enabled after set_level_name(\"warn\"): {}", logger.is_debug_enabled());

    match logger.start_timer() {
        Ok(_) => println!("   timer started"),
        Err(e) => println!("   {}", e),
    }

    logger.flush()?;
    println!("\n=== Example completed successfully ===");
    Ok(())
}
