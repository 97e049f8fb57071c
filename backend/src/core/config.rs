//! Dispatcher configuration
//!
//! A single recognized option, `avg_service_time`, fixed when the dispatcher
//! is built. Loading it from a file is the caller's job; this module parses
//! and validates the JSON form.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes per patient used when no value is configured
pub const DEFAULT_AVG_SERVICE_TIME: u32 = 10;

/// Errors raised while building a dispatcher configuration
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("avg_service_time must be a positive number of minutes, got {0}")]
    NonPositiveServiceTime(u32),

    #[error("Failed to parse config: {message}")]
    Parse { message: String },

    #[error("Failed to read config file {path}: {message}")]
    Io { path: String, message: String },
}

/// Dispatcher configuration
///
/// # Example
/// ```
/// use clinic_queue_core::DispatcherConfig;
///
/// let config = DispatcherConfig::from_json_str(r#"{ "avg_service_time": 15 }"#).unwrap();
/// assert_eq!(config.avg_service_time, 15);
///
/// assert_eq!(DispatcherConfig::default().avg_service_time, 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DispatcherConfig {
    /// Average minutes spent serving one patient (must be > 0)
    #[serde(default = "default_avg_service_time")]
    pub avg_service_time: u32,
}

fn default_avg_service_time() -> u32 {
    DEFAULT_AVG_SERVICE_TIME
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            avg_service_time: DEFAULT_AVG_SERVICE_TIME,
        }
    }
}

impl DispatcherConfig {
    /// Create a validated configuration
    pub fn new(avg_service_time: u32) -> Result<Self, ConfigError> {
        let config = Self { avg_service_time };
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every field is in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.avg_service_time == 0 {
            return Err(ConfigError::NonPositiveServiceTime(self.avg_service_time));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_service_time_rejected() {
        assert_eq!(
            DispatcherConfig::new(0),
            Err(ConfigError::NonPositiveServiceTime(0))
        );
    }

    #[test]
    fn test_missing_field_uses_default() {
        let config = DispatcherConfig::from_json_str("{}").unwrap();
        assert_eq!(config, DispatcherConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = DispatcherConfig::from_json_str(r#"{ "avg_service_tme": 5 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
