use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::{info, trace};
use tempfile::Builder;

use crate::Stack;

/// Something that can feed a script to an smt solver
pub trait Runner {
    /// A name for debug purposes
    fn name(&self) -> String;

    /// Where scripts are saved, a temporary file is used when `None`
    fn output_file(&self) -> Option<&Path>;

    /// Run the solver on `pbl_file` and return its standard output
    fn run(&self, pbl_file: &Path) -> crate::Result<String>;

    /// The file extension for the temporary file, defaults to `".smt2"`
    fn get_file_suffix(&self) -> &str {
        ".smt2"
    }

    /// Write `script` to [Runner::output_file] (or a temporary file) and run
    /// the solver on it
    fn run_script(&self, script: &str) -> crate::Result<String> {
        trace!("start {}", self.name());
        match self.output_file() {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?
                }
                info!("writing the script to {path:?}");
                let file = File::options()
                    .write(true) // write mode
                    .truncate(true) // overwrite
                    .create(true) // create if necessary
                    .open(path)?;
                let mut file = BufWriter::new(file);
                file.write_all(script.as_bytes())?;
                file.flush()?;
                self.run(path)
            }
            None => {
                let prefix = format!("smtlib-{}-", self.name());
                let mut file = Builder::new()
                    .prefix(&prefix)
                    .suffix(self.get_file_suffix())
                    .tempfile()?;
                file.write_all(script.as_bytes())?;
                file.flush()?;
                // `file` lives until the solver is done with it
                self.run(file.path())
            }
        }
    }

    fn run_stack(&self, stack: &Stack) -> crate::Result<String> {
        self.run_script(&stack.serialize()?)
    }
}
