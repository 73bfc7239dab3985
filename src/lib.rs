// src/lib.rs

pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;

use std::io::Write;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::{load_optional, resolve_request};
use crate::exec::{ExternalProcess, InvocationRequest, ProcessOutput, TokioProcess};

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - settings file loading
/// - settings resolution into an `InvocationRequest`
/// - the process backend
/// - echoing the captured output
///
/// Returns the exit code the binary should exit with.
pub async fn run(args: CliArgs) -> Result<i32> {
    let config = load_optional(args.config.as_deref())?;
    let request = resolve_request(&args, config.as_ref())?;

    if args.dry_run {
        print_dry_run(&request);
        return Ok(0);
    }

    let process = TokioProcess::new();
    let output = run_invocation(&process, &request).await?;

    emit_output(&output).context("writing captured output")?;

    Ok(output.exit_code())
}

/// Execute one request through the given backend.
pub async fn run_invocation(
    process: &dyn ExternalProcess,
    request: &InvocationRequest,
) -> errors::Result<ProcessOutput> {
    info!(
        command = %request.command_line(),
        dir = %request.working_dir().display(),
        ensure_success = request.ensure_success,
        "running external command"
    );

    let output = process.run(request).await?;

    info!(
        command = %request.command,
        exit_code = output.exit_code(),
        success = output.success(),
        "external command finished"
    );

    Ok(output)
}

fn emit_output(output: &ProcessOutput) -> std::io::Result<()> {
    if !output.stdout().is_empty() {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", output.stdout())?;
        out.flush()?;
    }
    if !output.stderr().is_empty() {
        let mut err = std::io::stderr().lock();
        writeln!(err, "{}", output.stderr())?;
    }
    Ok(())
}

/// Simple dry-run output: print the resolved invocation.
fn print_dry_run(request: &InvocationRequest) {
    println!("extproc dry-run");
    println!("  dir: {}", request.working_dir().display());
    println!("  command: {}", request.command);
    if !request.arguments.is_empty() {
        println!("  args: {}", request.arguments);
    }
    println!("  ensure_success: {}", request.ensure_success);

    debug!("dry-run complete (no execution)");
}
