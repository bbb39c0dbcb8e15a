use std::{
    io::Read,
    process::{Command, Stdio},
    sync::{
        mpsc::{channel, RecvTimeoutError},
        Arc,
    },
    thread,
    time::Duration,
};

use log::{debug, trace};
use shared_child::SharedChild;

use super::RunnerError;

#[derive(Debug)]
pub struct RetCodeAndStdout {
    pub stdout: String,
    pub return_code: i32,
}

/// Spawns `cmd`, reads its stdout till EOF and waits for it
///
/// With a `timeout`, a watchdog thread kills the process once it expires.
/// Bytes that aren't valid UTF-8 are replaced by U+FFFD in the returned
/// output. If the output can't be read, the process is killed and reaped
/// before the error is returned.
pub fn exec_cmd(
    tool: &str,
    cmd: &mut Command,
    timeout: Option<Duration>,
) -> crate::Result<RetCodeAndStdout> {
    cmd.stdout(Stdio::piped());
    let child = Arc::new(SharedChild::spawn(cmd)?);
    trace!("process spawned ({cmd:?})");

    let (done, is_done) = channel::<()>();
    let watchdog = timeout.map(|timeout| {
        let child = Arc::clone(&child);
        thread::spawn(move || match is_done.recv_timeout(timeout) {
            Err(RecvTimeoutError::Timeout) => {
                debug!("timeout reached, killing the solver");
                child.kill().is_ok()
            }
            _ => false,
        })
    });

    trace!("reading the output till EOF");
    let mut stdout = Vec::new();
    let read = match child.take_stdout() {
        Some(mut out) => out.read_to_end(&mut stdout).map_err(crate::Error::from),
        None => Err(RunnerError::NoStdout(tool.to_string()).into()),
    };
    if let Err(err) = read {
        debug!("couldn't read the output of {tool}, killing it");
        let _ = child.kill();
        let _ = child.wait();
        let _ = done.send(());
        if let Some(watchdog) = watchdog {
            let _ = watchdog.join();
        }
        return Err(err);
    }

    trace!("waiting for {cmd:?}");
    let exit_status = child.wait()?;
    // the watchdog might be gone already
    let _ = done.send(());
    let killed = watchdog
        .map(|watchdog| watchdog.join().unwrap_or(false))
        .unwrap_or(false);
    trace!("done waiting for {cmd:?}");
    let stdout = String::from_utf8_lossy(&stdout).into_owned();

    match (exit_status.code(), timeout) {
        (None, Some(timeout)) if killed => Err(RunnerError::Timeout {
            tool: tool.to_string(),
            timeout,
        }
        .into()),
        (Some(return_code), _) => Ok(RetCodeAndStdout {
            stdout,
            return_code,
        }),
        (None, _) => Err(RunnerError::Signal {
            tool: tool.to_string(),
            stdout,
        }
        .into()),
    }
}
