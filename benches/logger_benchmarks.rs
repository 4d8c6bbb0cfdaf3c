//! Criterion benchmarks for rust_logger_facade

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use rust_logger_facade::prelude::*;
use serde_json::json;
use std::sync::Arc;

/// Appender that discards entries, so benchmarks measure the engine only
struct NullAppender;

impl Appender for NullAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        black_box(entry);
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "null"
    }
}

fn null_logger(level: LogLevel) -> ConsoleLogger {
    ConsoleLogger::builder()
        .level(level)
        .appender(NullAppender)
        .build()
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("logging");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger(LogLevel::Silly);
    logger.add_context(LogContext::new().with_field("service", "bench"));

    group.bench_function("info", |b| {
        b.iter(|| {
            logger.info(black_box("Info message"));
        });
    });

    group.bench_function("info_with_meta", |b| {
        let meta = [json!({"userId": 123, "action": "login"})];
        b.iter(|| {
            logger.info_with(black_box("Info message"), &meta);
        });
    });

    group.bench_function("structured_message", |b| {
        let message = json!({"name": "x", "value": 1});
        b.iter(|| {
            logger.log_at(LogLevel::Debug, black_box(message.clone()), &[]);
        });
    });

    group.bench_function("entry_object", |b| {
        b.iter(|| {
            logger.log_entry(black_box(json!({"level": "error", "message": "m", "userId": 456})));
        });
    });

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = null_logger(LogLevel::Warn);

    group.bench_function("below_threshold", |b| {
        b.iter(|| {
            logger.debug(black_box("This should be filtered"));
        });
    });

    group.bench_function("above_threshold", |b| {
        b.iter(|| {
            logger.error(black_box("This should be logged"));
        });
    });

    group.bench_function("is_level_enabled", |b| {
        b.iter(|| black_box(logger.is_level_enabled(black_box("verbose"))));
    });

    group.finish();
}

// ============================================================================
// Stack Trace Benchmarks
// ============================================================================

fn bench_stack_trace(c: &mut Criterion) {
    let mut group = c.benchmark_group("stack_trace");
    group.throughput(Throughput::Elements(1));

    let traced = ConsoleLogger::builder()
        .include_stack_trace(true)
        .stack_trace_limit(10)
        .appender(NullAppender)
        .build();
    let untraced = null_logger(LogLevel::Info);

    group.bench_function("with_trace", |b| {
        b.iter(|| {
            traced.info(black_box("traced"));
        });
    });

    group.bench_function("without_trace", |b| {
        b.iter(|| {
            untraced.info(black_box("untraced"));
        });
    });

    group.finish();
}

// ============================================================================
// Factory Benchmarks
// ============================================================================

fn bench_factory(c: &mut Criterion) {
    let mut group = c.benchmark_group("factory");
    group.throughput(Throughput::Elements(1));

    let factory = Arc::new(LoggerFactory::default());
    factory.get_logger(Some("cached"));

    group.bench_function("cached_lookup", |b| {
        b.iter(|| black_box(factory.get_logger(black_box(Some("cached")))));
    });

    group.bench_function("child_logger", |b| {
        let logger = null_logger(LogLevel::Info);
        b.iter(|| black_box(logger.child(LogContext::new().with_field("component", "db"))));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_logging,
    bench_level_filtering,
    bench_stack_trace,
    bench_factory
);
criterion_main!(benches);
