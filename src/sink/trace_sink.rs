//! Default sink: forwards records to the `tracing` dispatcher.

use tracing::Level;

use super::{message_with_cause, LogSink};
use crate::types::{LogRecord, Receipt, Severity};

/// Level a severity is reported at by [`TracingSink`].
pub fn level_for(severity: Severity) -> Level {
    match severity {
        Severity::Verbose => Level::TRACE,
        Severity::Debug => Level::DEBUG,
        Severity::Info => Level::INFO,
        Severity::Warn => Level::WARN,
        Severity::Error => Level::ERROR,
    }
}

/// Forwards every record as a `tracing` event with a `tag` field.
///
/// Severity mapping: Verbose→TRACE, Debug→DEBUG, Info→INFO, Warn→WARN,
/// Error→ERROR. The receipt is the size of the equivalent logcat entry
/// (priority byte, tag, NUL, message, NUL), so it depends on both tag and
/// content.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl TracingSink {
    pub fn entry_len(tag: &str, message: &str) -> u64 {
        (1 + tag.len() + 1 + message.len() + 1) as u64
    }
}

impl LogSink for TracingSink {
    fn write(&self, record: &LogRecord<'_>) -> Receipt {
        let message = message_with_cause(record);
        let tag = record.tag;
        // tracing callsites need a constant level.
        match level_for(record.severity) {
            Level::ERROR => tracing::error!(tag, "{}", message),
            Level::WARN => tracing::warn!(tag, "{}", message),
            Level::INFO => tracing::info!(tag, "{}", message),
            Level::DEBUG => tracing::debug!(tag, "{}", message),
            _ => tracing::trace!(tag, "{}", message),
        }
        Receipt(Self::entry_len(tag, &message))
    }
}
