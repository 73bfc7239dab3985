// src/exec/runner.rs

//! The execution core: start the child, drain both pipes, wait, classify.
//!
//! Nothing here looks at `ensure_success`; the outcome is reported as an
//! [`Execution`] and [`crate::exec::policy`] decides whether it is an error.

use std::process::Stdio;

use anyhow::Context;
use tokio::process::{Child, Command};
use tokio::task::JoinHandle;
use tracing::{debug, error, warn};

use crate::errors::{ExtprocError, Result};
use crate::exec::drain::{join_lines, spawn_drain};
use crate::exec::output::{
    Execution, Failure, NO_EXIT_CODE, ProcessOutput, START_FAILURE_EXIT_CODE,
};
use crate::exec::request::InvocationRequest;

/// Run `request` to completion and report what happened.
///
/// Only an unusable child handle or an OS error while waiting are returned
/// as `Err`; start failures and non-zero exits are folded into the
/// [`Execution`].
pub async fn execute(request: &InvocationRequest) -> Result<Execution> {
    let command_line = request.command_line();

    debug!(
        "In path {}, running command: {}",
        request.working_dir().display(),
        command_line
    );

    let mut child = match build_command(request).and_then(|mut cmd| cmd.spawn()) {
        Ok(child) => child,
        Err(e) => return Ok(start_failure(request, &command_line, e)),
    };

    let (Some(stdout), Some(stderr)) = (child.stdout.take(), child.stderr.take()) else {
        if let Err(e) = child.start_kill() {
            warn!(command = %command_line, error = %e, "failed to kill child without output pipes");
        }
        return Err(ExtprocError::NoProcessHandle {
            command: request.command.clone(),
        });
    };

    let stdout_task = spawn_drain(stdout, "stdout");
    let stderr_task = spawn_drain(stderr, "stderr");

    let status = match child.wait().await {
        Ok(status) => status,
        Err(e) => {
            warn!(command = %command_line, error = %e, "waiting for external process failed");
            abandon_child(&mut child, stdout_task, stderr_task).await;
            return Err(e.into());
        }
    };
    let exit_code = status.code().unwrap_or(NO_EXIT_CODE);

    // Pipes can still hold trailing output after exit; join the readers
    // before building the text values.
    let stdout_lines = stdout_task
        .await
        .with_context(|| format!("joining stdout reader for '{command_line}'"))?;
    let stderr_lines = stderr_task
        .await
        .with_context(|| format!("joining stderr reader for '{command_line}'"))?;

    let output = ProcessOutput::new(
        join_lines(&stdout_lines),
        join_lines(&stderr_lines),
        exit_code,
    );

    debug!(
        command = %command_line,
        exit_code,
        stdout_lines = stdout_lines.len(),
        stderr_lines = stderr_lines.len(),
        "external process exited"
    );

    if exit_code == 0 {
        return Ok(Execution::succeeded(&request.command, output));
    }

    let message = output.failure_message(&command_line);
    debug!("{}", message);

    Ok(Execution::failed(
        &request.command,
        output,
        Failure::NonZeroExit { message },
    ))
}

/// Kill `child`, let both readers hit EOF and reap the child.
///
/// Used when the run cannot be completed normally; nothing it does is
/// reported, the caller already has the error to return.
pub async fn abandon_child(
    child: &mut Child,
    stdout_task: JoinHandle<Vec<String>>,
    stderr_task: JoinHandle<Vec<String>>,
) {
    if let Err(e) = child.start_kill() {
        debug!(error = %e, "start_kill on abandoned child failed");
    }
    let _ = stdout_task.await;
    let _ = stderr_task.await;
    if let Err(e) = child.wait().await {
        debug!(error = %e, "abandoned child could not be reaped");
    }
}

fn build_command(request: &InvocationRequest) -> std::io::Result<Command> {
    let mut cmd = Command::new(&request.command);

    #[cfg(windows)]
    {
        const CREATE_NO_WINDOW: u32 = 0x0800_0000;
        if !request.arguments.is_empty() {
            cmd.raw_arg(&request.arguments);
        }
        cmd.creation_flags(CREATE_NO_WINDOW);
    }
    #[cfg(not(windows))]
    {
        let argv = request.argv().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("cannot split arguments '{}': {}", request.arguments, e),
            )
        })?;
        cmd.args(argv);
    }

    cmd.current_dir(request.working_dir())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true);

    Ok(cmd)
}

fn start_failure(
    request: &InvocationRequest,
    command_line: &str,
    error: std::io::Error,
) -> Execution {
    error!(
        dir = %request.working_dir().display(),
        error = %error,
        "External command failed: {}",
        command_line
    );

    let message = format!(
        "Error starting external process for {}: {:?} {}",
        request.command,
        error.kind(),
        error
    );

    Execution::failed(
        &request.command,
        ProcessOutput::new(String::new(), message, START_FAILURE_EXIT_CODE),
        Failure::Start { error },
    )
}
