//! One-call installation of a `tracing-subscriber` fmt subscriber, so the
//! default `TracingSink` has somewhere to write.

use crate::error::SubscriberError;
use crate::sink::trace_sink::level_for;
use crate::types::Severity;

/// Installs a global fmt subscriber that lets through `min_severity` and above.
pub fn init_subscriber(min_severity: Severity) -> Result<(), SubscriberError> {
    tracing_subscriber::fmt()
        .with_max_level(level_for(min_severity))
        .with_target(false)
        .try_init()
        .map_err(|e| SubscriberError::Install(e.to_string()))
}
