//! Variants whose callbacks can fail.
//!
//! Iteration stops at the first `Err`, which is returned as-is. No partial
//! output is exposed.

use seqops_types::{SeqError, Truthy};

pub fn try_map_seq<T, R, E, F>(seq: &[T], mut f: F) -> Result<Vec<R>, E>
where
    F: FnMut(&T, usize) -> Result<R, E>,
{
    let mut out = Vec::with_capacity(seq.len());
    for (i, item) in seq.iter().enumerate() {
        out.push(f(item, i)?);
    }
    Ok(out)
}

pub fn try_filter_seq<T, P, E, F>(seq: &[T], mut f: F) -> Result<Vec<T>, E>
where
    T: Clone,
    P: Truthy,
    F: FnMut(&T, usize) -> Result<P, E>,
{
    let mut out = Vec::new();
    for (i, item) in seq.iter().enumerate() {
        if f(item, i)?.is_truthy() {
            out.push(item.clone());
        }
    }
    Ok(out)
}

pub fn try_fold_seq<T, R, E, F>(seq: &[T], initial: R, mut f: F) -> Result<R, E>
where
    F: FnMut(R, &T, usize) -> Result<R, E>,
{
    let mut acc = initial;
    for (i, item) in seq.iter().enumerate() {
        acc = f(acc, item, i)?;
    }
    Ok(acc)
}

/// Fallible [`reduce_seq`](crate::reduce_seq). The error type must be able
/// to carry [`SeqError::EmptySequence`].
pub fn try_reduce_seq<T, E, F>(seq: &[T], mut f: F, initial: Option<T>) -> Result<T, E>
where
    T: Clone,
    E: From<SeqError>,
    F: FnMut(T, &T, usize) -> Result<T, E>,
{
    let (start, mut acc) = match initial {
        Some(initial) => (0, initial),
        None => (1, seq.first().ok_or(SeqError::EmptySequence)?.clone()),
    };
    for (i, item) in seq.iter().enumerate().skip(start) {
        acc = f(acc, item, i)?;
    }
    Ok(acc)
}
