//! Small callbacks shaped to be passed directly (point-free) to the
//! sequence operations.
//!
//! ```
//! use seqops_core::fold_seq;
//! use seqops_core::helpers::plus;
//!
//! assert_eq!(fold_seq(&[1, 2, 3, 4, 5], 0, plus), 15);
//! ```

use std::any::Any;
use std::ops::{Add, Mul};

/// Predicate: the value is present.
pub fn exists<T>(value: &Option<T>, _index: usize) -> bool {
    value.is_some()
}

/// Predicate: the value is present and is not the boolean `false`.
///
/// Only `None` and `Some(false)` are rejected; zero and empty strings
/// pass. For loose truthiness return the value itself from the callback.
pub fn truthy<T: Any>(value: &Option<T>, _index: usize) -> bool {
    match value {
        None => false,
        Some(v) => (v as &dyn Any).downcast_ref::<bool>() != Some(&false),
    }
}

/// Accumulator: `acc + value`.
pub fn plus<T>(acc: T, value: &T, _index: usize) -> T
where
    T: Add<Output = T> + Clone,
{
    acc + value.clone()
}

/// Accumulator: `acc * value`.
pub fn times<T>(acc: T, value: &T, _index: usize) -> T
where
    T: Mul<Output = T> + Clone,
{
    acc * value.clone()
}
