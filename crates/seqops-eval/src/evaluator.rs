//! Module dispatch and metered callback invocation.

use crate::config::{EvalConfig, DEFAULT_GAS_LIMIT};
use crate::error::{EvalError, EvalResult};
use crate::prelude;
use seqops_types::{Callable, SeqError, Value};
use tracing::{debug, trace};

/// The evaluator: dispatches module calls and meters callbacks.
#[derive(Debug, Clone)]
pub struct Evaluator {
    /// Callback invocations performed so far.
    pub gas: u64,
    /// Gas limit.
    pub gas_limit: u64,
}

impl Evaluator {
    /// Create a new evaluator with the given gas limit.
    pub fn new(gas_limit: u64) -> Self {
        Self { gas: 0, gas_limit }
    }

    pub fn from_config(config: &EvalConfig) -> Self {
        Self::new(config.gas_limit)
    }

    /// Consume one unit of gas. Returns error if exhausted.
    fn tick(&mut self) -> EvalResult<()> {
        self.gas += 1;
        if self.gas > self.gas_limit {
            Err(EvalError::GasExhausted)
        } else {
            Ok(())
        }
    }

    /// Invoke a callback with `this` bound to `receiver`.
    ///
    /// Errors returned by the callback are passed through unchanged.
    pub fn invoke(
        &mut self,
        func: &Callable,
        receiver: &Value,
        args: &[Value],
    ) -> EvalResult<Value> {
        self.tick()?;
        trace!(
            function = func.name().unwrap_or("<anonymous>"),
            argc = args.len(),
            gas = self.gas,
            "invoke callback"
        );
        Ok(func.call(receiver, args)?)
    }

    // ══════════════════════════════════════════════════════════════════════
    // Dispatch
    // ══════════════════════════════════════════════════════════════════════

    /// Call a built-in function by module and function name.
    pub fn call(&mut self, module: &str, function: &str, args: &[Value]) -> EvalResult<Value> {
        debug!(module, function, argc = args.len(), "call");
        match (module, function) {
            ("list", "map") => self.list_map(args),
            ("list", "filter") => self.list_filter(args),
            ("list", "reduce") => self.list_reduce(args),
            ("list", "length") => self.list_length(args),
            _ => {
                let func = lookup(module, function)?;
                Ok(func.call(&Value::Nil, args)?)
            }
        }
    }

    /// Fetch a built-in as a function value, for passing point-free.
    pub fn function(&self, module: &str, function: &str) -> EvalResult<Value> {
        lookup(module, function).map(Value::Function)
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(DEFAULT_GAS_LIMIT)
    }
}

fn lookup(module: &str, function: &str) -> EvalResult<Callable> {
    prelude::lookup(module, function)
        .ok_or_else(|| EvalError::UnknownFunction(format!("{module}.{function}")))
}

/// Fail with [`SeqError::WrongArgCount`] unless `min <= args.len() <= max`.
pub(crate) fn check_arity(
    function: &str,
    args: &[Value],
    min: usize,
    max: usize,
) -> Result<(), SeqError> {
    if (min..=max).contains(&args.len()) {
        return Ok(());
    }
    let expected = if min == max {
        min.to_string()
    } else {
        format!("{min} to {max}")
    };
    Err(SeqError::wrong_arg_count(function, expected, args.len()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gas_is_counted_per_invocation() {
        let mut eval = Evaluator::new(2);
        let f = Callable::from_fn(|_| Ok(Value::Nil));
        assert!(eval.invoke(&f, &Value::Nil, &[]).is_ok());
        assert!(eval.invoke(&f, &Value::Nil, &[]).is_ok());
        assert_eq!(eval.invoke(&f, &Value::Nil, &[]), Err(EvalError::GasExhausted));
        assert_eq!(eval.gas, 3);
    }

    #[test]
    fn unknown_function() {
        let mut eval = Evaluator::default();
        assert_eq!(
            eval.call("list", "shuffle", &[]),
            Err(EvalError::UnknownFunction("list.shuffle".into()))
        );
        assert!(eval.function("nope", "x").is_err());
    }

    #[test]
    fn arity_messages() {
        let args = [Value::Nil];
        assert!(check_arity("f", &args, 1, 1).is_ok());
        assert_eq!(
            check_arity("f", &args, 2, 3),
            Err(SeqError::wrong_arg_count("f", "2 to 3", 1))
        );
        assert_eq!(
            check_arity("f", &args, 2, 2),
            Err(SeqError::wrong_arg_count("f", "2", 1))
        );
    }

    #[test]
    fn from_config_uses_limit() {
        let eval = Evaluator::from_config(&EvalConfig { gas_limit: 7 });
        assert_eq!(eval.gas_limit, 7);
        assert_eq!(eval.gas, 0);
    }
}
