#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! lapse-log is a small timing logger.
//!
//! Every message is prefixed with the calling thread's name and two
//! millisecond deltas, `"(<thread>) [<elapsed>,<total>] <message>"`, where
//! `elapsed` is measured from the previous log call and `total` from the last
//! checkpoint. The formatted text is then forwarded, with a severity, a tag
//! and an optional cause, to a pluggable sink.
//!
//! ```
//! use lapse_log::{MemorySink, Severity, TimingLogger};
//!
//! let logger = TimingLogger::with_sink(MemorySink::new());
//! logger.checkpoint("Boot", "start");
//! logger.emit(Severity::Warn, "Boot", "config missing, using defaults", None);
//! assert_eq!(logger.sink().len(), 2);
//! ```

// Module for shared value types (Severity, Receipt, LogRecord).
pub mod types;

// Module for setup error types.
pub mod error;

// Module for logger configuration and the debug gate.
pub mod config;

// Module for clock sources and the elapsed/total tracker.
pub mod time;

// Module for sink abstraction and the bundled sinks.
pub mod sink;

// Module for the logger itself.
pub mod logger;

// Optional tracing-subscriber installation.
#[cfg(feature = "subscriber")]
pub mod subscriber;

// Re-export the everyday surface at the crate root.
pub use config::{DebugGate, LoggerConfig};
pub use error::{ConfigError, SubscriberError};
pub use logger::{current_thread_name, TaggedLogger, TimingLogger};
pub use sink::{CapturedRecord, ConsoleSink, LogSink, MemorySink, TracingSink, WriterSink};
pub use time::{Clock, MonotonicClock, Stamp, SystemClock, TimingTracker};
pub use types::{LogRecord, Receipt, Severity};

#[cfg(any(test, feature = "test-utils"))]
pub use time::ManualClock;
