//! SeqOps dynamic evaluator.
//!
//! Runs `list.map`, `list.filter` and `list.reduce` over [`Value`]s with
//! [`Callable`] callbacks, binding an optional context as the callback's
//! receiver. Each callback invocation consumes one unit of gas.
//!
//! ```
//! use seqops_eval::{Callable, Evaluator, Value};
//!
//! let mut eval = Evaluator::default();
//! let square = Callable::from_fn(|args| {
//!     let v = args[0].expect_number()?;
//!     Ok(Value::Number(v * v))
//! });
//! let out = eval
//!     .call("list", "map", &[Value::list([1, 2, 3]), square.into()])
//!     .unwrap();
//! assert_eq!(out, Value::list([1, 4, 9]));
//! ```

pub mod config;
mod error;
pub mod evaluator;
mod list;
pub mod prelude;

pub use config::{EvalConfig, DEFAULT_GAS_LIMIT};
pub use error::{EvalError, EvalResult};
pub use evaluator::Evaluator;
pub use seqops_types::{Callable, SeqError, Truthy, Value};
