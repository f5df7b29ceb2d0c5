//! Evaluator configuration.

use crate::error::{EvalError, EvalResult};
use serde::{Deserialize, Serialize};

/// Callback invocations allowed per evaluator when nothing else is set.
pub const DEFAULT_GAS_LIMIT: u64 = 1_000_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Maximum number of callback invocations.
    pub gas_limit: u64,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            gas_limit: DEFAULT_GAS_LIMIT,
        }
    }
}

impl EvalConfig {
    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(source: &str) -> EvalResult<Self> {
        serde_json::from_str(source).map_err(|e| EvalError::Config(e.to_string()))
    }
}
