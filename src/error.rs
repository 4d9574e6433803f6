//!
//! Error types for lapse-log.
//!
//! Logging calls themselves never fail; these cover the setup paths only.

/// Errors raised while building a `LoggerConfig`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment flag held something other than a recognised boolean.
    #[error("Invalid value {value:?} for {var}: expected 1/0, true/false, yes/no or on/off")]
    InvalidFlag { var: String, value: String },
    /// The JSON document could not be parsed into a config.
    #[error("Malformed logger config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors raised while installing the global tracing subscriber.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubscriberError {
    /// A global subscriber was already set by someone else.
    #[error("Failed to install tracing subscriber: {0}")]
    Install(String),
}
