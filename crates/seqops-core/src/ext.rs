use crate::ops;
use seqops_types::{Result, Truthy};

/// Method-call form of the sequence operations.
///
/// Implemented for slices, so `Vec<T>` and arrays get it through deref.
///
/// ```
/// use seqops_core::SeqExt;
///
/// let words = vec!["test", "kim", "winning", "lol"];
/// let longest = words.reduce_seq(|a, b, _| if a.len() > b.len() { a } else { *b }, None);
/// assert_eq!(longest, Ok("winning"));
/// ```
pub trait SeqExt<T> {
    fn map_seq<R, F>(&self, f: F) -> Vec<R>
    where
        F: FnMut(&T, usize) -> R;

    fn filter_seq<P, F>(&self, f: F) -> Vec<T>
    where
        T: Clone,
        P: Truthy,
        F: FnMut(&T, usize) -> P;

    fn reduce_seq<F>(&self, f: F, initial: Option<T>) -> Result<T>
    where
        T: Clone,
        F: FnMut(T, &T, usize) -> T;

    fn fold_seq<R, F>(&self, initial: R, f: F) -> R
    where
        F: FnMut(R, &T, usize) -> R;
}

impl<T> SeqExt<T> for [T] {
    fn map_seq<R, F>(&self, f: F) -> Vec<R>
    where
        F: FnMut(&T, usize) -> R,
    {
        ops::map_seq(self, f)
    }

    fn filter_seq<P, F>(&self, f: F) -> Vec<T>
    where
        T: Clone,
        P: Truthy,
        F: FnMut(&T, usize) -> P,
    {
        ops::filter_seq(self, f)
    }

    fn reduce_seq<F>(&self, f: F, initial: Option<T>) -> Result<T>
    where
        T: Clone,
        F: FnMut(T, &T, usize) -> T,
    {
        ops::reduce_seq(self, f, initial)
    }

    fn fold_seq<R, F>(&self, initial: R, f: F) -> R
    where
        F: FnMut(R, &T, usize) -> R,
    {
        ops::fold_seq(self, initial, f)
    }
}
