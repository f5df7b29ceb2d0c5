//! Shared types for SeqOps.
//!
//! This crate defines the dynamic [`Value`] model, first-class [`Callable`]
//! functions, the [`Truthy`] conversion rule and the [`SeqError`] type used
//! by both the typed sequence operations and the dynamic evaluator.

mod error;
mod truthy;
pub mod value;

pub use error::SeqError;
pub use truthy::Truthy;
pub use value::{Callable, Value};

/// Result type used throughout SeqOps.
pub type Result<T> = std::result::Result<T, SeqError>;
