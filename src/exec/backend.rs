// src/exec/backend.rs

//! Pluggable external-process backend.
//!
//! Callers talk to an `ExternalProcess` instead of calling the runner
//! directly, so a fake can stand in for real processes in tests.
//!
//! - `TokioProcess` is the production implementation. It dispatches the
//!   whole invocation onto its own Tokio task, awaits it, and then applies the
//!   request's `ensure_success` policy.
//! - Tests can provide their own `ExternalProcess` that, for example, records
//!   requests and returns canned outputs.

use std::future::Future;
use std::pin::Pin;

use anyhow::Context;

use crate::errors::Result;
use crate::exec::output::ProcessOutput;
use crate::exec::policy::ensure_success;
use crate::exec::request::InvocationRequest;
use crate::exec::runner::execute;

/// Trait abstracting how a single invocation is executed.
pub trait ExternalProcess: Send + Sync {
    /// Run the request to completion.
    ///
    /// Implementations must honour `request.ensure_success`: with it set, a
    /// start failure or non-zero exit is an `Err`; without it, both are
    /// reported through the returned [`ProcessOutput`].
    fn run<'a>(
        &'a self,
        request: &'a InvocationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessOutput>> + Send + 'a>>;
}

/// Real backend spawning OS processes through `tokio::process`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioProcess;

impl TokioProcess {
    pub fn new() -> Self {
        Self
    }
}

impl ExternalProcess for TokioProcess {
    fn run<'a>(
        &'a self,
        request: &'a InvocationRequest,
    ) -> Pin<Box<dyn Future<Output = Result<ProcessOutput>> + Send + 'a>> {
        // The spawned task must own its request.
        let owned = request.clone();

        Box::pin(async move {
            let execution = tokio::spawn(async move { execute(&owned).await })
                .await
                .with_context(|| format!("invocation task for '{}'", request.command))??;

            ensure_success(execution, request.ensure_success)
        })
    }
}
