use std::{
    path::{Path, PathBuf},
    process::Command,
};

use log::debug;

use super::{exec_cmd, RetCodeAndStdout, Runner, RunnerError, SolverConfig};

/// A solver executable found on the system, along with how to call it
#[derive(Debug, Clone)]
pub struct SolverExec {
    pub location: PathBuf,
    pub config: SolverConfig,
}

impl TryFrom<SolverConfig> for SolverExec {
    type Error = RunnerError;

    fn try_from(config: SolverConfig) -> Result<Self, Self::Error> {
        let location = which::which(&config.executable)
            .map_err(|e| RunnerError::NotFound(config.executable.clone(), e))?;
        debug!("using {location:?} as solver");
        Ok(Self { location, config })
    }
}

impl Runner for SolverExec {
    fn name(&self) -> String {
        self.location
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "solver".into())
    }

    fn output_file(&self) -> Option<&Path> {
        self.config.output_file.as_deref()
    }

    fn run(&self, pbl_file: &Path) -> crate::Result<String> {
        if !pbl_file.is_file() {
            return Err(RunnerError::NotAFile(pbl_file.to_path_buf()).into());
        }
        let mut cmd = Command::new(&self.location);
        cmd.args(&self.config.extra_args).arg(pbl_file);
        debug!("running {} with {cmd:?}", self.name());

        match exec_cmd(&self.name(), &mut cmd, self.config.timeout)? {
            RetCodeAndStdout {
                stdout,
                return_code: 0,
            } => Ok(stdout),
            RetCodeAndStdout {
                stdout,
                return_code,
            } => Err(RunnerError::UnexpectedResult {
                tool: self.name(),
                return_code,
                stdout,
            }
            .into()),
        }
    }
}

#[cfg(all(test, unix))]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::{runner::SolverConfigBuilder, sort::BOOL, Error, Stack};

    fn exec(config: &mut SolverConfigBuilder) -> SolverExec {
        config.build().unwrap().try_into().unwrap()
    }

    fn script() -> Stack {
        let mut stack = Stack::new();
        let p = stack.declare_const("p", BOOL);
        stack.assert(p);
        stack.check_sat();
        stack
    }

    #[test]
    fn missing_solver() {
        let config = SolverConfigBuilder::default()
            .executable("surely-not-an-smt-solver-on-this-machine")
            .build()
            .unwrap();
        assert!(matches!(
            SolverExec::try_from(config),
            Err(RunnerError::NotFound(..))
        ));
    }

    #[test]
    fn runs_on_a_temporary_file() {
        let cat = exec(SolverConfigBuilder::default().executable("cat"));
        assert_eq!(cat.name(), "cat");
        let stack = script();
        assert_eq!(cat.run_stack(&stack).unwrap(), stack.serialize().unwrap());
    }

    #[test]
    fn runs_on_the_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("problem.smt2");
        let cat = exec(
            SolverConfigBuilder::default()
                .executable("cat")
                .output_file(path.clone()),
        );
        let stack = script();
        let out = cat.run_stack(&stack).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), out);
    }

    #[test]
    fn missing_problem_file() {
        let cat = exec(SolverConfigBuilder::default().executable("cat"));
        assert!(matches!(
            cat.run(Path::new("/surely/not/a/problem.smt2")),
            Err(Error::Runner(RunnerError::NotAFile(_)))
        ));
    }

    #[test]
    fn non_zero_exit_code() {
        let sh = exec(
            SolverConfigBuilder::default()
                .executable("sh")
                .extra_args(vec!["-c".into(), "echo unknown; exit 3".into()]),
        );
        match sh.run_script("(check-sat)\n") {
            Err(Error::Runner(RunnerError::UnexpectedResult {
                return_code,
                stdout,
                ..
            })) => {
                assert_eq!(return_code, 3);
                assert_eq!(stdout, "unknown\n");
            }
            r => panic!("unexpected {r:?}"),
        }
    }

    #[test]
    fn timeout_kills_the_solver() {
        let sh = exec(
            SolverConfigBuilder::default()
                .executable("sh")
                .extra_args(vec!["-c".into(), "exec sleep 10".into()])
                .timeout(Duration::from_millis(200)),
        );
        assert!(matches!(
            sh.run_script("(check-sat)\n"),
            Err(Error::Runner(RunnerError::Timeout { .. }))
        ));
    }

    #[test]
    fn non_utf8_output_still_times_out() {
        let dir = tempfile::tempdir().unwrap();
        let marker = dir.path().join("marker");
        let sh = exec(
            SolverConfigBuilder::default()
                .executable("sh")
                .extra_args(vec![
                    "-c".into(),
                    format!("printf '\\377'; exec 1>&-; sleep 1; touch {}", marker.display()),
                ])
                .timeout(Duration::from_millis(100)),
        );
        assert!(matches!(
            sh.run_script("(check-sat)\n"),
            Err(Error::Runner(RunnerError::Timeout { .. }))
        ));
        std::thread::sleep(Duration::from_millis(1500));
        assert!(!marker.exists());
    }

    #[test]
    fn non_utf8_output_is_replaced() {
        let sh = exec(
            SolverConfigBuilder::default()
                .executable("sh")
                .extra_args(vec!["-c".into(), "printf 'sat\\377\\n'".into()]),
        );
        assert_eq!(sh.run_script("(check-sat)\n").unwrap(), "sat\u{FFFD}\n");
    }

    #[test]
    fn fast_solver_beats_the_timeout() {
        let cat = exec(
            SolverConfigBuilder::default()
                .executable("cat")
                .timeout(Duration::from_secs(30)),
        );
        assert_eq!(cat.run_script("(exit)\n").unwrap(), "(exit)\n");
    }
}
