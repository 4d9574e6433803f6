//! In-memory sink that keeps every record it receives.

use parking_lot::Mutex;

use super::{render_cause, LogSink};
use crate::types::{LogRecord, Receipt, Severity};

/// Owned copy of a record, cause rendered to text.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CapturedRecord {
    pub severity: Severity,
    pub tag: String,
    pub message: String,
    pub cause: Option<String>,
}

/// Captures records for later inspection. Receipts count up from 1 in
/// arrival order.
#[derive(Debug, Default)]
pub struct MemorySink {
    records: Mutex<Vec<CapturedRecord>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<CapturedRecord> {
        self.records.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    pub fn last(&self) -> Option<CapturedRecord> {
        self.records.lock().last().cloned()
    }

    /// Empties the buffer and returns what it held. Receipts restart at 1.
    pub fn drain(&self) -> Vec<CapturedRecord> {
        std::mem::take(&mut *self.records.lock())
    }
}

impl LogSink for MemorySink {
    fn write(&self, record: &LogRecord<'_>) -> Receipt {
        let captured = CapturedRecord {
            severity: record.severity,
            tag: record.tag.to_string(),
            message: record.message.to_string(),
            cause: record.cause.map(render_cause),
        };
        let mut records = self.records.lock();
        records.push(captured);
        Receipt(records.len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::test_errors::Layered;

    #[test]
    fn test_captures_in_order() {
        let sink = MemorySink::new();
        assert!(sink.is_empty());
        assert_eq!(sink.write(&LogRecord::new(Severity::Info, "A", "first")), Receipt(1));
        assert_eq!(sink.write(&LogRecord::new(Severity::Warn, "B", "second")), Receipt(2));
        let records = sink.records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].tag, "A");
        assert_eq!(records[1].severity, Severity::Warn);
        assert_eq!(sink.last().map(|r| r.message), Some("second".to_string()));
    }

    #[test]
    fn test_cause_is_kept_separately() {
        let sink = MemorySink::new();
        let err = Layered::chain(&["outer", "inner"]);
        sink.write(&LogRecord::new(Severity::Error, "T", "msg").with_cause(Some(&err)));
        let record = sink.last().unwrap();
        assert_eq!(record.message, "msg");
        assert_eq!(record.cause.as_deref(), Some("outer\nCaused by: inner"));
    }

    #[test]
    fn test_drain_resets() {
        let sink = MemorySink::new();
        sink.write(&LogRecord::new(Severity::Info, "T", "a"));
        assert_eq!(sink.drain().len(), 1);
        assert!(sink.is_empty());
        assert_eq!(sink.write(&LogRecord::new(Severity::Info, "T", "b")), Receipt(1));
    }
}
