//! Shared value types: severities, sink receipts and the per-call log record.

use std::error::Error;
use std::fmt;
use std::str::FromStr;

/// Severity of a log record.
/// The discriminants mirror the platform log priorities (VERBOSE=2 .. ERROR=6),
/// so `Severity as u8` can be handed to a priority-keyed transport unchanged.
#[repr(u8)]
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Chatty tracing output.
    Verbose = 2,
    /// Diagnostic output, subject to the debug gate on the gated paths.
    Debug = 3,
    /// Normal operational messages. Checkpoints are logged at this level.
    Info = 4,
    /// Something unexpected that does not stop the caller.
    Warn = 5,
    /// A failure the caller is reporting.
    Error = 6,
}

impl Severity {
    /// All severities, lowest first.
    pub const ALL: [Severity; 5] = [
        Severity::Verbose,
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    /// Single-letter logcat code (`V`, `D`, `I`, `W`, `E`).
    pub fn letter(self) -> char {
        match self {
            Severity::Verbose => 'V',
            Severity::Debug => 'D',
            Severity::Info => 'I',
            Severity::Warn => 'W',
            Severity::Error => 'E',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Verbose => "verbose",
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
        }
    }
}

impl TryFrom<u8> for Severity {
    type Error = String; // Using String for a simple error message

    fn try_from(value: u8) -> Result<Self, String> {
        match value {
            2 => Ok(Severity::Verbose),
            3 => Ok(Severity::Debug),
            4 => Ok(Severity::Info),
            5 => Ok(Severity::Warn),
            6 => Ok(Severity::Error),
            _ => Err(format!("Invalid Severity priority: {}", value)),
        }
    }
}

impl FromStr for Severity {
    type Err = String;

    /// Accepts full names or logcat letters, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "verbose" | "v" => Ok(Severity::Verbose),
            "debug" | "d" => Ok(Severity::Debug),
            "info" | "i" => Ok(Severity::Info),
            "warn" | "warning" | "w" => Ok(Severity::Warn),
            "error" | "e" => Ok(Severity::Error),
            other => Err(format!("Unknown severity: {:?}", other)),
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque identifier handed back by a sink for each written record.
///
/// Only equality and ordering are meaningful; callers may use it for change
/// detection but must not read anything else into the value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct Receipt(pub u64);

impl Receipt {
    /// Returned when nothing was written (suppressed debug output, failed transport).
    pub const NONE: Receipt = Receipt(0);

    pub fn is_none(self) -> bool {
        self == Receipt::NONE
    }
}

/// One log call on its way to a sink. Built per call and dropped right after.
#[derive(Debug, Clone, Copy)]
pub struct LogRecord<'a> {
    pub severity: Severity,
    pub tag: &'a str,
    /// Fully formatted message, timing prefix included.
    pub message: &'a str,
    /// Optional cause, forwarded untouched.
    pub cause: Option<&'a (dyn Error + 'static)>,
}

impl<'a> LogRecord<'a> {
    pub fn new(severity: Severity, tag: &'a str, message: &'a str) -> Self {
        LogRecord { severity, tag, message, cause: None }
    }

    pub fn with_cause(mut self, cause: Option<&'a (dyn Error + 'static)>) -> Self {
        self.cause = cause;
        self
    }
}
