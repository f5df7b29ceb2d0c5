use thiserror::Error;

/// Failure of a sequence operation or of a callback it invoked.
///
/// Callback failures are carried through untouched: an operation that
/// receives an `Err` from its callback returns that exact error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeqError {
    /// `reduce` with no initial value over a sequence with no elements.
    #[error("reduce of empty sequence with no initial value")]
    EmptySequence,

    /// An argument had the wrong dynamic type.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch { expected: String, found: String },

    /// A function was called with an unsupported number of arguments.
    #[error("{function} expects {expected} argument(s), found {found}")]
    WrongArgCount {
        function: String,
        expected: String,
        found: usize,
    },

    /// Error raised by user code inside a callback.
    #[error("callback failed: {0}")]
    Callback(String),
}

impl SeqError {
    /// Build a [`SeqError::TypeMismatch`].
    pub fn type_mismatch(expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self::TypeMismatch {
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Build a [`SeqError::WrongArgCount`].
    pub fn wrong_arg_count(
        function: impl Into<String>,
        expected: impl Into<String>,
        found: usize,
    ) -> Self {
        Self::WrongArgCount {
            function: function.into(),
            expected: expected.into(),
            found,
        }
    }

    /// Build a [`SeqError::Callback`].
    pub fn callback(message: impl Into<String>) -> Self {
        Self::Callback(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            SeqError::EmptySequence.to_string(),
            "reduce of empty sequence with no initial value"
        );
        assert_eq!(
            SeqError::type_mismatch("list", "number").to_string(),
            "type mismatch: expected list, found number"
        );
        assert_eq!(
            SeqError::wrong_arg_count("list.map", "2 or 3", 1).to_string(),
            "list.map expects 2 or 3 argument(s), found 1"
        );
        assert_eq!(
            SeqError::callback("boom").to_string(),
            "callback failed: boom"
        );
    }
}
