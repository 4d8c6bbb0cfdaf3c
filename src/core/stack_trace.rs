//! Call-site stack trace capture
//!
//! Traces are captured with [`std::backtrace::Backtrace`], rendered, split
//! into frames and stripped of the leading frames that belong to the
//! backtrace machinery and to this crate's logging path, so that the first
//! frame is the code that called the logger. Capture is best effort: when
//! backtraces are unsupported, or anything goes wrong, no trace is returned.

use std::backtrace::{Backtrace, BacktraceStatus};

/// Context key holding the captured trace
pub const STACK_TRACE_KEY: &str = "stackTrace";

/// Frame prefixes skipped at the top of every trace
const LEADING_FRAMES: &[&str] = &[
    "std::",
    "<std::",
    "core::",
    "<core::",
    "backtrace::",
    "__rust",
    concat!(env!("CARGO_CRATE_NAME"), "::core::stack_trace::capture"),
    concat!(env!("CARGO_CRATE_NAME"), "::core::logger::ConsoleLogger::"),
    concat!(env!("CARGO_CRATE_NAME"), "::core::facade::LoggerExt::"),
    concat!("<", env!("CARGO_CRATE_NAME"), "::core::logger::ConsoleLogger as "),
];

/// Trait impl frames of the logging path, matched anywhere in the symbol
const LOGGING_IMPLS: &[&str] = &[
    concat!(" as ", env!("CARGO_CRATE_NAME"), "::core::facade::Logger>::"),
    concat!(" as ", env!("CARGO_CRATE_NAME"), "::core::facade::LoggerExt>::"),
];

/// Capture at most `limit` caller frames joined by newlines
pub fn capture(limit: usize) -> Option<String> {
    if limit == 0 {
        return None;
    }
    std::panic::catch_unwind(|| capture_frames(limit))
        .ok()
        .flatten()
}

fn capture_frames(limit: usize) -> Option<String> {
    let backtrace = Backtrace::force_capture();
    if backtrace.status() != BacktraceStatus::Captured {
        return None;
    }

    let rendered = backtrace.to_string();
    let frames: Vec<String> = parse_frames(&rendered)
        .into_iter()
        .skip_while(|frame| is_leading_frame(frame))
        .take(limit)
        .collect();

    if frames.is_empty() {
        None
    } else {
        Some(frames.join("\n"))
    }
}

fn is_leading_frame(frame: &str) -> bool {
    LEADING_FRAMES.iter().any(|prefix| frame.starts_with(prefix))
        || LOGGING_IMPLS.iter().any(|marker| frame.contains(marker))
}

/// Split a rendered backtrace into one trimmed line per frame
///
/// A frame starts with `N: symbol`; an indented `at file:line:col` line
/// that follows is appended to it.
pub(crate) fn parse_frames(rendered: &str) -> Vec<String> {
    let mut frames: Vec<String> = Vec::new();

    for line in rendered.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if let Some(symbol) = frame_symbol(line) {
            frames.push(symbol.to_string());
        } else if let Some(frame) = frames.last_mut() {
            frame.push(' ');
            frame.push_str(line);
        }
    }

    frames
}

fn frame_symbol(line: &str) -> Option<&str> {
    let (index, symbol) = line.split_once(": ")?;
    if !index.is_empty() && index.bytes().all(|b| b.is_ascii_digit()) {
        Some(symbol.trim())
    } else {
        None
    }
}
