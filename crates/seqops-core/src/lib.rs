//! SequenceOps: `map`, `filter` and `reduce` (fold-left) over in-memory
//! sequences.
//!
//! Every operation walks its input once, in ascending index order, and
//! passes the zero-based source index to the callback. Inputs are borrowed
//! and never mutated; results are freshly allocated.
//!
//! ```
//! use seqops_core::{filter_seq, map_seq, reduce_seq};
//!
//! assert_eq!(map_seq(&[1, 2, 3], |v, _| v * v), vec![1, 4, 9]);
//! assert_eq!(filter_seq(&[1, 2, 3, 4, 5], |_, i| i % 2 == 0), vec![1, 3, 5]);
//! assert_eq!(reduce_seq(&[1, 2, 3, 4], |acc, v, _| acc + v, Some(0)), Ok(10));
//! ```

mod ext;
mod fallible;
pub mod helpers;
mod ops;

pub use ext::SeqExt;
pub use fallible::{try_filter_seq, try_fold_seq, try_map_seq, try_reduce_seq};
pub use ops::{
    filter_seq, filter_seq_with, fold_seq, fold_seq_with, map_seq, map_seq_with, reduce_seq,
};
pub use seqops_types::{Result, SeqError, Truthy};
