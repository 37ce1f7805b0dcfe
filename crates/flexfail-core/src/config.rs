//! Collector configuration.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::strategy::Strategy;

/// Errors produced while building a [`CollectorConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A strategy name other than `skip`, `fail_fast` or `try_all`.
    #[error("unknown strategy: {0} (expected skip, fail_fast or try_all)")]
    UnknownStrategy(String),
    /// The JSON input could not be parsed into a configuration.
    #[error("invalid collector config: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for an [`ErrorCollector`](crate::ErrorCollector).
///
/// ```rust
/// use flexfail_core::{CollectorConfig, Strategy};
/// let config = CollectorConfig::from_json(r#"{ "strategy": "try_all" }"#).unwrap();
/// assert_eq!(config.strategy, Strategy::TryAll);
/// assert!(config.autowrap);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectorConfig {
    /// What to do with a collectable failure.
    pub strategy: Strategy,
    /// Wrap foreign errors into collectable failures instead of propagating them.
    #[serde(default = "default_autowrap")]
    pub autowrap: bool,
}

fn default_autowrap() -> bool {
    true
}

impl CollectorConfig {
    /// Create a configuration for the given strategy, with autowrap enabled.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            autowrap: default_autowrap(),
        }
    }

    /// Enable or disable autowrapping of foreign errors.
    pub fn with_autowrap(mut self, autowrap: bool) -> Self {
        self.autowrap = autowrap;
        self
    }

    /// Parse a configuration from JSON.
    pub fn from_json(input: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(input)?)
    }
}
