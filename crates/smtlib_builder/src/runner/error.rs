use std::{path::PathBuf, time::Duration};

use super::config::SolverConfigBuilderError;

/// Errors related to the interaction with a solver
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("couldn't find the solver {0:?}")]
    NotFound(PathBuf, #[source] which::Error),
    #[error(transparent)]
    Config(#[from] SolverConfigBuilderError),

    #[error("{0:?} is not a file")]
    NotAFile(PathBuf),
    #[error("couldn't build the stdout handle of {0}")]
    NoStdout(String),

    #[error("{tool} ran out of time ({timeout:?})")]
    Timeout { tool: String, timeout: Duration },
    #[error("{tool} terminated by signal.\nstdout:\n{stdout}")]
    Signal { tool: String, stdout: String },
    #[error("unexpected behaviour while running {tool}:\nreturn code: {return_code}\nstdout:\n{stdout}")]
    UnexpectedResult {
        tool: String,
        return_code: i32,
        stdout: String,
    },
}
