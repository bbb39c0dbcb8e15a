use crate::runner::RunnerError;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or serializing a script
///
/// All of them but [Error::Io] and [Error::Runner] are contract violations
/// from the caller. They are raised where the violation happens and leave
/// the [Stack](crate::Stack) untouched.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("set-logic has already been set")]
    DuplicateLogic,
    #[error("`{name}` expects {expected} argument(s), got {got}")]
    Arity {
        name: String,
        expected: usize,
        got: usize,
    },
    #[error("an expression can hold a single term")]
    OverfullExpression,
    #[error("an expression must hold exactly one term to be serialized")]
    EmptyExpression,
    #[error("a logic stub has no name and can't be serialized")]
    UnnamedForm,

    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Runner(#[from] RunnerError),
}

impl Error {
    pub fn arity(name: impl Into<String>, expected: usize, got: usize) -> Self {
        Self::Arity {
            name: name.into(),
            expected,
            got,
        }
    }
}
