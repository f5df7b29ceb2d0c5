//! Runtime error types for the evaluator.

use seqops_types::SeqError;
use thiserror::Error;

/// Evaluation error: operation failures, dispatch failures, gas exhaustion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Failure from a sequence operation or a callback, passed through as-is.
    #[error(transparent)]
    Seq(#[from] SeqError),
    /// Unknown module or function
    #[error("unknown function: {0}")]
    UnknownFunction(String),
    /// Callback budget exceeded
    #[error("gas exhausted")]
    GasExhausted,
    /// Configuration could not be parsed
    #[error("invalid config: {0}")]
    Config(String),
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, EvalError>;
