//! System command runner
//!
//! Runs provider commands with `std::process::Command` and resolves programs
//! with `which`.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Child, Command, ExitStatus, Stdio};

use crate::domain::ports::{CapturedOutput, CommandRunner, CommandStatus, Invocation, RunError};

/// Runs commands on the host.
///
/// In JSON mode the child's stdout is sent to our stderr so stdout carries
/// only NDJSON events.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner {
    json: bool,
}

impl SystemRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json(json: bool) -> Self {
        Self { json }
    }

    fn command(&self, invocation: &Invocation) -> Command {
        let mut cmd = Command::new(&invocation.program);
        cmd.args(&invocation.args);
        if invocation.stdin.is_some() {
            cmd.stdin(Stdio::piped());
        }
        cmd
    }

    fn spawn(&self, invocation: &Invocation, mut cmd: Command) -> Result<Child, RunError> {
        let mut child = cmd.spawn().map_err(|e| spawn_error(invocation, e))?;

        if let Some(payload) = &invocation.stdin {
            // Dropping the handle closes the pipe so the child sees EOF.
            if let Some(mut stdin) = child.stdin.take() {
                // A child that exits without reading its input still has an
                // exit status to report; wait for it either way.
                if let Err(err) = stdin.write_all(payload.expose().as_bytes()) {
                    tracing::debug!(
                        program = %invocation.program,
                        error = %err,
                        "child closed stdin before reading it"
                    );
                }
            }
        }

        Ok(child)
    }
}

impl CommandRunner for SystemRunner {
    fn locate(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }

    fn run(&self, invocation: &Invocation) -> Result<CommandStatus, RunError> {
        let mut cmd = self.command(invocation);
        if self.json {
            cmd.stdout(io::stderr()).stderr(Stdio::inherit());
        } else {
            cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
        }

        let mut child = self.spawn(invocation, cmd)?;
        let status = child.wait().map_err(|e| spawn_error(invocation, e))?;
        Ok(to_status(status))
    }

    fn capture(&self, invocation: &Invocation) -> Result<CapturedOutput, RunError> {
        let mut cmd = self.command(invocation);
        cmd.stdout(Stdio::piped()).stderr(Stdio::piped());
        if invocation.stdin.is_none() {
            cmd.stdin(Stdio::null());
        }

        let child = self.spawn(invocation, cmd)?;
        let output = child
            .wait_with_output()
            .map_err(|e| spawn_error(invocation, e))?;

        Ok(CapturedOutput {
            status: to_status(output.status),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

fn spawn_error(invocation: &Invocation, err: io::Error) -> RunError {
    RunError::Spawn {
        program: invocation.program.clone(),
        message: err.to_string(),
    }
}

/// Exit code of a finished child; killed by a signal maps to 128 + signal.
fn to_status(status: ExitStatus) -> CommandStatus {
    if let Some(code) = status.code() {
        return CommandStatus::from_code(code);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return CommandStatus::from_code(128 + signal);
        }
    }

    CommandStatus::from_code(1)
}
