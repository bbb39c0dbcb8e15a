//! Run an smt solver on a script.
//!
//! A 'runner' is anything that can take a serialized script, put it in a
//! file and launch a solver on that file. The builder itself never needs
//! one; this is only here to close the loop from a [Stack](crate::Stack) to
//! a solver's answer.
//!
//! There is no retry: the solver is launched once and its standard output is
//! returned as is. A non-zero return code, a signal or an expired timeout is
//! reported as a [RunnerError].

mod config;
mod error;
#[allow(clippy::module_inception)]
mod runner;
mod runner_helper;
mod solver;

pub use config::{SolverConfig, SolverConfigBuilder, SolverConfigBuilderError};
pub use error::RunnerError;
pub use runner::Runner;
pub(crate) use runner_helper::*;
pub use solver::SolverExec;
