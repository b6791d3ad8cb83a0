//! Helpers for running child processes and capturing their output.

use std::process::{Command, Stdio};

use tracing::{debug, error, instrument};

use crate::core::types::StepResult;

/// Run `cmd` to completion and capture stdout/stderr.
///
/// Never fails: a non-zero exit is reported through the returned
/// [`StepResult`], and a spawn failure becomes [`StepResult::LaunchFailed`].
/// There is no timeout; a hung child blocks the caller.
#[instrument(skip_all, fields(program = %cmd.get_program().to_string_lossy()))]
pub fn run_command(mut cmd: Command) -> StepResult {
    cmd.stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    debug!("spawning child process");
    let output = match cmd.output() {
        Ok(output) => output,
        Err(e) => {
            error!(err = %e, "failed to spawn command");
            return StepResult::LaunchFailed {
                program: cmd.get_program().to_string_lossy().into_owned(),
                error: e.to_string(),
            };
        }
    };

    debug!(exit_code = ?output.status.code(), "command finished");
    StepResult::Completed {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    }
}
