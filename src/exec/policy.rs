// src/exec/policy.rs

//! Strictness policy applied on top of the execution core.

use crate::errors::{ExtprocError, Result};
use crate::exec::output::{Execution, Failure, ProcessOutput};

/// Convert an [`Execution`] into the caller-facing result.
///
/// - `strict = true`: a start failure or non-zero exit becomes an error.
/// - `strict = false`: the output is returned as-is, exit code included.
pub fn ensure_success(execution: Execution, strict: bool) -> Result<ProcessOutput> {
    let Execution {
        command,
        output,
        failure,
    } = execution;

    match failure {
        Some(Failure::Start { error }) if strict => Err(ExtprocError::StartFailed {
            command,
            source: error,
        }),
        Some(Failure::NonZeroExit { message }) if strict => Err(ExtprocError::ExecutionFailed {
            exit_code: output.exit_code(),
            message,
        }),
        _ => Ok(output),
    }
}
