//!
//! Log sink abstraction.
//!
//! A sink is the transport that actually writes a formatted record somewhere.
//! The logger treats every sink call as fire-and-forget: whatever a sink does
//! on failure stays inside the sink, and the logger only passes back the
//! `Receipt` it returns.

use std::error::Error;
use std::sync::Arc;

use crate::types::{LogRecord, Receipt};

/// Trait implemented by log transports.
pub trait LogSink: Send + Sync {
    /// Writes one record. Must not panic on transport failure; return
    /// `Receipt::NONE` instead.
    fn write(&self, record: &LogRecord<'_>) -> Receipt;
}

impl<S: LogSink + ?Sized> LogSink for &S {
    fn write(&self, record: &LogRecord<'_>) -> Receipt {
        (**self).write(record)
    }
}

impl<S: LogSink + ?Sized> LogSink for Arc<S> {
    fn write(&self, record: &LogRecord<'_>) -> Receipt {
        (**self).write(record)
    }
}

impl<S: LogSink + ?Sized> LogSink for Box<S> {
    fn write(&self, record: &LogRecord<'_>) -> Receipt {
        (**self).write(record)
    }
}

// Module for the tracing-backed default sink
pub mod trace_sink;
pub use trace_sink::{level_for, TracingSink};

// Module for line-oriented writer sinks (any io::Write, stdout/stderr)
pub mod writer;
pub use writer::{ConsoleSink, WriterSink};

// Module for the capturing sink used in assertions
pub mod memory;
pub use memory::{CapturedRecord, MemorySink};

/// Renders an error and its `source()` chain, one `Caused by:` line per link.
pub fn render_cause(err: &(dyn Error + 'static)) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(inner) = source {
        out.push_str("\nCaused by: ");
        out.push_str(&inner.to_string());
        source = inner.source();
    }
    out
}

/// Message text with the rendered cause appended on the following lines.
pub(crate) fn message_with_cause(record: &LogRecord<'_>) -> String {
    match record.cause {
        Some(cause) => format!("{}\n{}", record.message, render_cause(cause)),
        None => record.message.to_string(),
    }
}
