//! Server backend
//!
//! [`ServerLogger`] implements the [`Logger`](crate::Logger) interface on
//! top of `tracing`; [`init_subscriber`] installs the process-wide
//! `tracing-subscriber` output for production (JSON lines) or development
//! (compact text).

pub mod logger;
pub mod subscriber;

pub use logger::{tracing_level, ServerLogger, TARGET};
pub use subscriber::{default_filter, init_subscriber};
