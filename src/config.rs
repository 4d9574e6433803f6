//! Logger configuration and the debug gate.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::ConfigError;

/// Environment variable read by [`LoggerConfig::from_env`].
pub const DEBUG_ENV_VAR: &str = "LAPSE_LOG_DEBUG";

/// Settings for a `TimingLogger`.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    /// Initial state of the debug gate. Closed by default.
    pub debug: bool,
}

impl LoggerConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads `LAPSE_LOG_DEBUG`. An unset variable leaves the defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with an injectable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = LoggerConfig::default();
        if let Some(raw) = lookup(DEBUG_ENV_VAR) {
            config.debug = parse_flag(DEBUG_ENV_VAR, &raw)?;
        }
        Ok(config)
    }
}

fn parse_flag(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidFlag { var: var.to_string(), value: raw.to_string() }),
    }
}

/// Process-wide switch for debug output. When closed, gated debug calls are
/// dropped before they reach the clock or the sink.
#[derive(Debug, Default)]
pub struct DebugGate(AtomicBool);

impl DebugGate {
    pub fn new(open: bool) -> Self {
        DebugGate(AtomicBool::new(open))
    }

    pub fn is_open(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    pub fn set(&self, open: bool) {
        self.0.store(open, Ordering::Release);
    }

    pub fn open(&self) {
        self.set(true);
    }

    pub fn close(&self) {
        self.set(false);
    }
}

impl From<&LoggerConfig> for DebugGate {
    fn from(config: &LoggerConfig) -> Self {
        DebugGate::new(config.debug)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_keeps_gate_closed() {
        assert!(!LoggerConfig::default().debug);
        assert!(!DebugGate::from(&LoggerConfig::default()).is_open());
    }

    #[test]
    fn test_from_json() {
        let config = LoggerConfig::from_json(r#"{"debug": true}"#).unwrap();
        assert!(config.debug);
        // Missing fields fall back to defaults.
        assert_eq!(LoggerConfig::from_json("{}").unwrap(), LoggerConfig::default());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let err = LoggerConfig::from_json(r#"{"debug": "maybe"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
    }

    #[test]
    fn test_from_lookup_flags() {
        for (raw, expected) in [("1", true), ("TRUE", true), (" on ", true), ("no", false), ("0", false)] {
            let config = LoggerConfig::from_lookup(|_| Some(raw.to_string())).unwrap();
            assert_eq!(config.debug, expected, "flag {:?}", raw);
        }
        assert!(!LoggerConfig::from_lookup(|_| None).unwrap().debug);
    }

    #[test]
    fn test_from_lookup_invalid_flag() {
        let err = LoggerConfig::from_lookup(|_| Some("sometimes".to_string())).unwrap_err();
        match err {
            ConfigError::InvalidFlag { var, value } => {
                assert_eq!(var, DEBUG_ENV_VAR);
                assert_eq!(value, "sometimes");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_gate_toggles() {
        let gate = DebugGate::new(false);
        gate.open();
        assert!(gate.is_open());
        gate.close();
        assert!(!gate.is_open());
    }
}
