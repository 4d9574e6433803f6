//! Line-oriented sinks in logcat layout: `<L>/<tag>: <message>`.

use std::io::{self, Write};

use parking_lot::Mutex;

use super::{message_with_cause, LogSink};
use crate::types::{LogRecord, Receipt, Severity};

/// Renders a record as logcat-style text, one line per message line.
pub fn render_line(record: &LogRecord<'_>) -> String {
    let body = message_with_cause(record);
    let mut out = String::with_capacity(body.len() + record.tag.len() + 8);
    for line in body.split('\n') {
        out.push(record.severity.letter());
        out.push('/');
        out.push_str(record.tag);
        out.push_str(": ");
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn write_line<W: Write + ?Sized>(out: &mut W, line: &str) -> io::Result<()> {
    out.write_all(line.as_bytes())?;
    out.flush()
}

/// Writes records to any `io::Write`. The receipt is the number of bytes
/// written; an I/O failure is reported through `tracing` and yields
/// `Receipt::NONE`.
#[derive(Debug)]
pub struct WriterSink<W: Write + Send> {
    out: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    pub fn new(out: W) -> Self {
        WriterSink { out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }
}

impl<W: Write + Send> LogSink for WriterSink<W> {
    fn write(&self, record: &LogRecord<'_>) -> Receipt {
        let line = render_line(record);
        let mut out = self.out.lock();
        match write_line(&mut *out, &line) {
            Ok(()) => Receipt(line.len() as u64),
            Err(e) => {
                tracing::warn!("WriterSink dropped a record for tag {:?}: {}", record.tag, e);
                Receipt::NONE
            }
        }
    }
}

/// Verbose, Debug and Info go to stdout; Warn and Error go to stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn uses_stderr(severity: Severity) -> bool {
        severity >= Severity::Warn
    }
}

impl LogSink for ConsoleSink {
    fn write(&self, record: &LogRecord<'_>) -> Receipt {
        let line = render_line(record);
        let result = if Self::uses_stderr(record.severity) {
            write_line(&mut io::stderr().lock(), &line)
        } else {
            write_line(&mut io::stdout().lock(), &line)
        };
        match result {
            Ok(()) => Receipt(line.len() as u64),
            Err(_) => Receipt::NONE,
        }
    }
}
