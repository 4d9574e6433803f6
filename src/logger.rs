//!
//! The timing logger: prefixes every message with the calling thread's name
//! and the elapsed/total milliseconds, then hands it to a sink.
//!
//! A logger is an ordinary value. Share it across threads with `Arc` (or a
//! `static` built once by the application) instead of reaching for global
//! state; every holder of the `Arc` sees the same checkpoint baseline.

use std::error::Error;
use std::fmt;
use std::thread;

use crate::config::{DebugGate, LoggerConfig};
use crate::sink::{LogSink, TracingSink};
use crate::time::{Clock, MonotonicClock, Stamp, TimingTracker};
use crate::types::{LogRecord, Receipt, Severity};

/// Rendered in place of the name for threads spawned without one.
pub const UNNAMED_THREAD: &str = "unnamed";

/// Name of the calling thread, or [`UNNAMED_THREAD`].
pub fn current_thread_name() -> String {
    thread::current().name().unwrap_or(UNNAMED_THREAD).to_string()
}

/// Timing-prefixing logger over a clock `C` and a sink `S`.
#[derive(Debug)]
pub struct TimingLogger<C: Clock = MonotonicClock, S: LogSink = TracingSink> {
    tracker: TimingTracker<C>,
    sink: S,
    debug_gate: DebugGate,
}

impl Default for TimingLogger {
    fn default() -> Self {
        TimingLogger::new(MonotonicClock::new(), TracingSink, LoggerConfig::default())
    }
}

impl<S: LogSink> TimingLogger<MonotonicClock, S> {
    /// Monotonic clock, default config.
    pub fn with_sink(sink: S) -> Self {
        TimingLogger::new(MonotonicClock::new(), sink, LoggerConfig::default())
    }
}

impl<C: Clock, S: LogSink> TimingLogger<C, S> {
    pub fn new(clock: C, sink: S, config: LoggerConfig) -> Self {
        TimingLogger {
            tracker: TimingTracker::new(clock),
            sink,
            debug_gate: DebugGate::from(&config),
        }
    }

    pub fn tracker(&self) -> &TimingTracker<C> {
        &self.tracker
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn debug_gate(&self) -> &DebugGate {
        &self.debug_gate
    }

    /// Resets the timing baseline for every caller, then logs `message` at Info.
    ///
    /// The Info record is stamped by the reset itself, so it reads `[0,0]`
    /// even when other threads are logging concurrently.
    pub fn checkpoint(&self, tag: &str, message: &str) -> Receipt {
        let stamp = self.tracker.checkpoint();
        let formatted = stamp.prefix(&current_thread_name(), message);
        self.sink.write(&LogRecord::new(Severity::Info, tag, &formatted))
    }

    /// Stamps the message: `"(<thread>) [<elapsed>,<total>] <message>"`.
    /// Advances the elapsed baseline.
    pub fn format(&self, message: &str) -> String {
        self.format_stamped(message).1
    }

    fn format_stamped(&self, message: &str) -> (Stamp, String) {
        let stamp = self.tracker.stamp();
        let formatted = stamp.prefix(&current_thread_name(), message);
        (stamp, formatted)
    }

    /// Formats `message` and forwards it, with the optional cause, to the sink.
    pub fn emit(
        &self,
        severity: Severity,
        tag: &str,
        message: &str,
        cause: Option<&(dyn Error + 'static)>,
    ) -> Receipt {
        let formatted = self.format(message);
        let record = LogRecord { severity, tag, message: &formatted, cause };
        self.sink.write(&record)
    }

    /// Debug record gated by this logger's [`DebugGate`].
    pub fn debug(&self, tag: &str, message: &str) -> Receipt {
        self.debug_if(tag, message, self.debug_gate.is_open())
    }

    /// Debug record gated by an explicit flag. A closed gate touches neither
    /// the clock state nor the sink and returns `Receipt::NONE`.
    pub fn debug_if(&self, tag: &str, message: &str, gate: bool) -> Receipt {
        if !gate {
            return Receipt::NONE;
        }
        self.emit(Severity::Debug, tag, message, None)
    }

    /// Handle bound to `tag` that follows this logger's debug gate.
    pub fn tagged<'a>(&'a self, tag: &'a str) -> TaggedLogger<'a, C, S> {
        TaggedLogger { logger: self, tag, debug: None }
    }

    /// Handle bound to `tag` with its own fixed debug flag.
    pub fn tagged_with_debug<'a>(&'a self, tag: &'a str, debug: bool) -> TaggedLogger<'a, C, S> {
        TaggedLogger { logger: self, tag, debug: Some(debug) }
    }
}

/// A logger handle with a fixed tag.
#[derive(Debug)]
pub struct TaggedLogger<'a, C: Clock = MonotonicClock, S: LogSink = TracingSink> {
    logger: &'a TimingLogger<C, S>,
    tag: &'a str,
    debug: Option<bool>,
}

impl<C: Clock, S: LogSink> Clone for TaggedLogger<'_, C, S> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C: Clock, S: LogSink> Copy for TaggedLogger<'_, C, S> {}

impl<'a, C: Clock, S: LogSink> TaggedLogger<'a, C, S> {
    pub fn tag(&self) -> &'a str {
        self.tag
    }

    /// Whether debug output from this handle currently passes.
    pub fn debug_enabled(&self) -> bool {
        self.debug.unwrap_or_else(|| self.logger.debug_gate.is_open())
    }

    pub fn emit(&self, severity: Severity, message: &str, cause: Option<&(dyn Error + 'static)>) -> Receipt {
        self.logger.emit(severity, self.tag, message, cause)
    }

    pub fn debug(&self, message: &str) -> Receipt {
        self.logger.debug_if(self.tag, message, self.debug_enabled())
    }

    /// `debug(format!(..))` that skips formatting when the gate is closed.
    pub fn debug_fmt(&self, args: fmt::Arguments<'_>) -> Receipt {
        if !self.debug_enabled() {
            return Receipt::NONE;
        }
        self.logger.emit(Severity::Debug, self.tag, &args.to_string(), None)
    }

    pub fn checkpoint(&self, message: &str) -> Receipt {
        self.logger.checkpoint(self.tag, message)
    }
}
