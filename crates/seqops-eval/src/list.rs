//! `list` module: map, filter, reduce and length over dynamic lists.
//!
//! Callbacks receive `[value, index]` (map, filter) or
//! `[acc, value, index]` (reduce). The optional context becomes the
//! callback's receiver; without one the receiver is `nil`.

use crate::error::EvalResult;
use crate::evaluator::{check_arity, Evaluator};
use seqops_core::{try_filter_seq, try_map_seq, try_reduce_seq};
use seqops_types::{Callable, Value};

static NIL: Value = Value::Nil;

fn index(i: usize) -> Value {
    Value::Number(i as f64)
}

/// Split `(list, fn[, context])`.
fn callback_args<'a>(
    function: &str,
    args: &'a [Value],
) -> EvalResult<(&'a [Value], &'a Callable, &'a Value)> {
    check_arity(function, args, 2, 3)?;
    let items = args[0].expect_list()?;
    let func = args[1].expect_function()?;
    let receiver = args.get(2).unwrap_or(&NIL);
    Ok((items, func, receiver))
}

impl Evaluator {
    /// `list.map(list, fn[, context])`
    pub(crate) fn list_map(&mut self, args: &[Value]) -> EvalResult<Value> {
        let (items, func, receiver) = callback_args("list.map", args)?;
        let out = try_map_seq(items, |item, i| {
            self.invoke(func, receiver, &[item.clone(), index(i)])
        })?;
        Ok(Value::List(out))
    }

    /// `list.filter(list, fn[, context])`
    pub(crate) fn list_filter(&mut self, args: &[Value]) -> EvalResult<Value> {
        let (items, func, receiver) = callback_args("list.filter", args)?;
        let out = try_filter_seq(items, |item, i| {
            self.invoke(func, receiver, &[item.clone(), index(i)])
        })?;
        Ok(Value::List(out))
    }

    /// `list.reduce(list, fn[, initial[, context]])`
    ///
    /// The argument count decides whether an initial value was supplied,
    /// so an explicit `nil` is a real seed.
    pub(crate) fn list_reduce(&mut self, args: &[Value]) -> EvalResult<Value> {
        check_arity("list.reduce", args, 2, 4)?;
        let items = args[0].expect_list()?;
        let func = args[1].expect_function()?;
        let initial = args.get(2).cloned();
        let receiver = args.get(3).unwrap_or(&NIL);
        try_reduce_seq(
            items,
            |acc, item, i| self.invoke(func, receiver, &[acc, item.clone(), index(i)]),
            initial,
        )
    }

    /// `list.length(list)`
    pub(crate) fn list_length(&mut self, args: &[Value]) -> EvalResult<Value> {
        check_arity("list.length", args, 1, 1)?;
        Ok(Value::Number(args[0].expect_list()?.len() as f64))
    }
}
