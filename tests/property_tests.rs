//! Property-based tests for rust_logger_facade using proptest

use proptest::prelude::*;
use rust_logger_facade::appenders::MemoryAppender;
use rust_logger_facade::prelude::*;
use rust_logger_facade::{is_enabled_for, priority_of};
use serde_json::{json, Value};

fn any_level() -> impl Strategy<Value = LogLevel> {
    proptest::sample::select(LogLevel::ALL.to_vec())
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Test that level names roundtrip in any letter case
    #[test]
    fn test_log_level_name_roundtrip(level in any_level(), upper in any::<bool>()) {
        let name = if upper { level.to_str().to_string() } else { level.name().to_string() };
        let parsed: LogLevel = name.parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Test that a level is enabled exactly when its priority is not above the threshold
    #[test]
    fn test_enabled_iff_priority_within_threshold(called in any_level(), configured in any_level()) {
        let expected = called.priority() <= configured.priority();
        prop_assert_eq!(called.is_enabled_at(configured), expected);
        prop_assert_eq!(is_enabled_for(called.name(), configured), expected);
        prop_assert_eq!(called <= configured, expected);
    }

    /// Test that unknown names have no priority and are never enabled
    #[test]
    fn test_unknown_names_never_enabled(name in "[a-z]{1,12}", configured in any_level()) {
        prop_assume!(LogLevel::ALL.iter().all(|l| l.name() != name) && name != "warning");
        prop_assert!(priority_of(&name).is_none());
        prop_assert!(!is_enabled_for(&name, configured));
    }

    /// Test that serde uses lowercase level names
    #[test]
    fn test_log_level_json_serialization(level in any_level()) {
        let json = serde_json::to_value(level).unwrap();
        prop_assert_eq!(json, Value::String(level.name().to_string()));
    }
}

// ============================================================================
// Engine Tests
// ============================================================================

proptest! {
    /// Test that exactly the enabled calls reach the appender
    #[test]
    fn test_appender_sees_enabled_calls_only(
        configured in any_level(),
        calls in proptest::collection::vec(any_level(), 0..32),
    ) {
        let memory = MemoryAppender::new();
        let handle = memory.handle();
        let logger = ConsoleLogger::builder().level(configured).appender(memory).build();

        for level in &calls {
            logger.log_at(*level, "m", &[]);
        }

        let expected = calls.iter().filter(|l| l.is_enabled_at(configured)).count();
        prop_assert_eq!(handle.len(), expected);
    }

    /// Test that later meta objects win over earlier ones and over the default context
    #[test]
    fn test_meta_merge_last_wins(base in any::<i64>(), first in any::<i64>(), second in any::<i64>()) {
        let memory = MemoryAppender::new();
        let handle = memory.handle();
        let logger = ConsoleLogger::builder()
            .context_field("k", base)
            .appender(memory)
            .build();

        logger.info_with("m", &[json!({"k": first}), json!({"k": second})]);

        let context = handle.last().unwrap().context.unwrap();
        prop_assert_eq!(context.get("k"), Some(&json!(second)));
    }

    /// Test that logging arbitrary text never panics and keeps the message
    #[test]
    fn test_arbitrary_messages(message in ".*") {
        let memory = MemoryAppender::new();
        let handle = memory.handle();
        let logger = ConsoleLogger::builder().appender(memory).build();

        logger.warn(message.as_str());
        prop_assert_eq!(handle.last().unwrap().message, message);
    }
}
