//! Built-in functions usable as callbacks.
//!
//! Each constructor returns a [`Callable`] so it can be handed straight to
//! `list.filter` or `list.reduce` without a wrapping closure. Extra
//! positional arguments (such as the index) are ignored.
//!
//! | name          | result |
//! |---------------|--------|
//! | `core.exists` | `true` unless the argument is `nil` |
//! | `core.truthy` | `true` unless the argument is `nil` or `false` |
//! | `math.plus`   | sum of numbers, or concatenation if either side is a string |
//! | `math.times`  | product of numbers |

use seqops_types::{Callable, SeqError, Value};

/// Resolve a built-in by module and function name.
pub fn lookup(module: &str, function: &str) -> Option<Callable> {
    match (module, function) {
        ("core", "exists") => Some(exists()),
        ("core", "truthy") => Some(truthy()),
        ("math", "plus") => Some(plus()),
        ("math", "times") => Some(times()),
        _ => None,
    }
}

pub fn exists() -> Callable {
    Callable::named("core.exists", |_, args| {
        Ok(Value::Bool(args.first().is_some_and(|v| !v.is_nil())))
    })
}

pub fn truthy() -> Callable {
    Callable::named("core.truthy", |_, args| {
        Ok(Value::Bool(
            args.first()
                .is_some_and(|v| !matches!(v, Value::Nil | Value::Bool(false))),
        ))
    })
}

pub fn plus() -> Callable {
    Callable::named("math.plus", |_, args| {
        let (a, b) = binary("math.plus", args)?;
        match (a, b) {
            (Value::Number(x), Value::Number(y)) => Ok(Value::Number(x + y)),
            (Value::String(_), _) | (_, Value::String(_)) => Ok(Value::String(format!("{a}{b}"))),
            (Value::Number(_), other) | (other, _) => {
                Err(SeqError::type_mismatch("number or string", other.type_name()))
            }
        }
    })
}

pub fn times() -> Callable {
    Callable::named("math.times", |_, args| {
        let (a, b) = binary("math.times", args)?;
        Ok(Value::Number(a.expect_number()? * b.expect_number()?))
    })
}

fn binary<'a>(name: &str, args: &'a [Value]) -> Result<(&'a Value, &'a Value), SeqError> {
    match args {
        [a, b, ..] => Ok((a, b)),
        _ => Err(SeqError::wrong_arg_count(name, "at least 2", args.len())),
    }
}
