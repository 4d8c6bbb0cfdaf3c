//! Request logging example
//!
//! Demonstrates the factory, the application logger slot, the server
//! backend and the request/response hooks.
//!
//! Run with: LOGGER_BACKEND=server LOGGER_MODE=production cargo run --example request_logging

use rust_logger_facade::host::{self, RequestContext, RequestInfo, RequestLogger};
use rust_logger_facade::prelude::*;
use std::sync::Arc;

fn handle(path: &str) -> u16 {
    match path {
        "/" | "/health" => 200,
        "/admin" => 403,
        _ => 404,
    }
}

fn main() -> Result<()> {
    println!("=== Rust Logger Facade - Request Logging Example ===\n");

    let app_logger = host::install(None)?;
    println!("Backend: {}", app_logger.backend());

    let logger = host::use_logger()?;
    logger.info("Application ready");

    let requests = RequestLogger::new(true);
    for path in ["/", "/admin", "/missing"] {
        let context = RequestContext::with_logger(Arc::clone(&logger));
        let request_logger = context.logger()?;
        let info = RequestInfo::new("GET", path)
            .with_remote_address("127.0.0.1")
            .with_user_agent("demo/1.0");

        let status = requests.observe(request_logger.as_ref(), &info, || handle(path));
        println!("   {} -> {}", path, status);
    }

    if let Ok(timer) = logger.start_timer() {
        timer.done("Requests replayed", None);
    }

    println!("\n=== Example completed successfully ===");
    Ok(())
}
