//! Correlation configuration
//!
//! An immutable value object supplied once when a correlator is built.
//! Validation happens at construction time so a misconfigured consumer
//! fails fast instead of misbehaving on the hot path.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Correlation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrelationConfig {
    /// Maximum operations tracked while awaiting completion
    pub max_in_flight: usize,

    /// Emit the overflow diagnostic once per this many rejected starts.
    /// Any value below 1 disables the diagnostic entirely.
    pub overflow_signal_interval: i32,

    /// Context substituted when a completion has no stored entry
    pub fallback_context: String,
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            max_in_flight: 1000,
            overflow_signal_interval: 100,
            fallback_context: "unknown".to_string(),
        }
    }
}

impl CorrelationConfig {
    /// Check the constraints the type system cannot express
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_in_flight == 0 {
            return Err(ConfigError::ValidationError(
                "max_in_flight must be a positive value".to_string(),
            ));
        }
        Ok(())
    }

    /// Whether the overflow diagnostic is enabled
    pub fn overflow_signal_enabled(&self) -> bool {
        self.overflow_signal_interval >= 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CorrelationConfig::default();
        assert_eq!(config.max_in_flight, 1000);
        assert_eq!(config.overflow_signal_interval, 100);
        assert_eq!(config.fallback_context, "unknown");
        assert!(config.validate().is_ok());
        assert!(config.overflow_signal_enabled());
    }

    #[test]
    fn test_zero_max_in_flight_rejected() {
        let config = CorrelationConfig {
            max_in_flight: 0,
            ..Default::default()
        };

        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("max_in_flight"));
    }

    #[test]
    fn test_zero_and_negative_interval_disable_signal() {
        let mut config = CorrelationConfig {
            overflow_signal_interval: 0,
            ..Default::default()
        };
        assert!(!config.overflow_signal_enabled());
        // Negative values mean "disabled" too, not a distinct mode
        config.overflow_signal_interval = -5;
        assert!(!config.overflow_signal_enabled());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_deserialization_fills_defaults() {
        let config: CorrelationConfig =
            serde_json::from_str(r#"{"max_in_flight": 50}"#).unwrap();
        assert_eq!(config.max_in_flight, 50);
        assert_eq!(config.overflow_signal_interval, 100);
        assert_eq!(config.fallback_context, "unknown");
    }
}
