use std::{path::PathBuf, time::Duration};

use derive_builder::Builder;

/// How to call a solver on a script
///
/// ```
/// # use smtlib_builder::runner::SolverConfigBuilder;
/// # use std::time::Duration;
/// let config = SolverConfigBuilder::default()
///     .executable("cvc5")
///     .extra_args(vec!["--produce-models".into()])
///     .timeout(Duration::from_secs(10))
///     .build()
///     .unwrap();
/// assert_eq!(config.output_file, None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Name or path of the solver, looked up in `PATH` if needed
    #[builder(setter(into))]
    pub executable: PathBuf,
    /// Where the script is written. A temporary file is used if unset.
    #[builder(setter(into, strip_option))]
    pub output_file: Option<PathBuf>,
    /// Passed to the solver before the script's path
    pub extra_args: Vec<String>,
    /// The solver gets killed once this is elapsed
    #[builder(setter(strip_option))]
    pub timeout: Option<Duration>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            executable: "z3".into(),
            output_file: None,
            extra_args: Vec::new(),
            timeout: None,
        }
    }
}
