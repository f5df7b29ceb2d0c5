use seqops_types::{Result, SeqError, Truthy};

/// Apply `f(value, index)` to every element, collecting the results.
///
/// The output has the same length as `seq`; element `i` is the value
/// returned by the `i`-th call.
pub fn map_seq<T, R, F>(seq: &[T], mut f: F) -> Vec<R>
where
    F: FnMut(&T, usize) -> R,
{
    let mut out = Vec::with_capacity(seq.len());
    for (i, item) in seq.iter().enumerate() {
        out.push(f(item, i));
    }
    out
}

/// [`map_seq`] with an explicit call context passed to every invocation.
pub fn map_seq_with<C, T, R, F>(seq: &[T], mut f: F, context: &C) -> Vec<R>
where
    C: ?Sized,
    F: FnMut(&C, &T, usize) -> R,
{
    map_seq(seq, |item, i| f(context, item, i))
}

/// Keep the elements for which `f(value, index)` is truthy.
///
/// Relative order is preserved. The callback may return anything
/// implementing [`Truthy`], so `Option`, numbers and strings work as
/// predicates too.
pub fn filter_seq<T, P, F>(seq: &[T], mut f: F) -> Vec<T>
where
    T: Clone,
    P: Truthy,
    F: FnMut(&T, usize) -> P,
{
    let mut out = Vec::new();
    for (i, item) in seq.iter().enumerate() {
        if f(item, i).is_truthy() {
            out.push(item.clone());
        }
    }
    out
}

/// [`filter_seq`] with an explicit call context passed to every invocation.
pub fn filter_seq_with<C, T, P, F>(seq: &[T], mut f: F, context: &C) -> Vec<T>
where
    C: ?Sized,
    T: Clone,
    P: Truthy,
    F: FnMut(&C, &T, usize) -> P,
{
    filter_seq(seq, |item, i| f(context, item, i))
}

/// Left fold where the accumulator has the element type.
///
/// With `Some(initial)` every element is folded into `initial`. With `None`
/// the first element seeds the accumulator and folding starts at index 1;
/// an empty sequence then fails with [`SeqError::EmptySequence`].
pub fn reduce_seq<T, F>(seq: &[T], f: F, initial: Option<T>) -> Result<T>
where
    T: Clone,
    F: FnMut(T, &T, usize) -> T,
{
    match initial {
        Some(initial) => Ok(fold_from(seq, 0, initial, f)),
        None => {
            let first = seq.first().ok_or(SeqError::EmptySequence)?;
            Ok(fold_from(seq, 1, first.clone(), f))
        }
    }
}

/// Seeded left fold. The accumulator type may differ from the element type.
pub fn fold_seq<T, R, F>(seq: &[T], initial: R, f: F) -> R
where
    F: FnMut(R, &T, usize) -> R,
{
    fold_from(seq, 0, initial, f)
}

/// [`fold_seq`] with an explicit call context passed to every invocation.
pub fn fold_seq_with<C, T, R, F>(seq: &[T], initial: R, mut f: F, context: &C) -> R
where
    C: ?Sized,
    F: FnMut(&C, R, &T, usize) -> R,
{
    fold_from(seq, 0, initial, |acc, item, i| f(context, acc, item, i))
}

fn fold_from<T, R, F>(seq: &[T], start: usize, initial: R, mut f: F) -> R
where
    F: FnMut(R, &T, usize) -> R,
{
    let mut acc = initial;
    for (i, item) in seq.iter().enumerate().skip(start) {
        acc = f(acc, item, i);
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_from_skips_prefix_but_keeps_source_indices() {
        let mut seen = Vec::new();
        let total = fold_from(&[10, 20, 30], 1, 0, |acc, v, i| {
            seen.push(i);
            acc + v
        });
        assert_eq!(total, 50);
        assert_eq!(seen, vec![1, 2]);
    }

    #[test]
    fn reduce_single_element_without_initial_skips_callback() {
        let mut calls = 0;
        let out = reduce_seq(
            &["a"],
            |acc, _, _| {
                calls += 1;
                acc
            },
            None,
        );
        assert_eq!(out, Ok("a"));
        assert_eq!(calls, 0);
    }
}
