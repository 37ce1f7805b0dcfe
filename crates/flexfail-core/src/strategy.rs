use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// How a collector reacts to a collectable failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Discard the failure and keep going. Nothing is recorded.
    Skip,
    /// Record the failure, then stop the caller with a [`FailFast`](crate::FailFast) signal.
    FailFast,
    /// Record the failure and keep going.
    TryAll,
}

impl Strategy {
    /// Name used in configuration and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Skip => "skip",
            Strategy::FailFast => "fail_fast",
            Strategy::TryAll => "try_all",
        }
    }

    /// Whether failures handled under this strategy end up in the error list.
    pub fn records(&self) -> bool {
        !matches!(self, Strategy::Skip)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skip" => Ok(Strategy::Skip),
            "fail_fast" => Ok(Strategy::FailFast),
            "try_all" => Ok(Strategy::TryAll),
            other => Err(ConfigError::UnknownStrategy(other.to_string())),
        }
    }
}
