// src/exec/mod.rs

//! Process execution layer.
//!
//! This module runs one external command per invocation using
//! `tokio::process::Command` and hands back its captured output.
//!
//! - [`request`] holds the read-only `InvocationRequest`.
//! - [`output`] holds the `ProcessOutput` result and the internal `Execution`
//!   record (output plus an optional failure indicator).
//! - [`drain`] reads one child pipe into an exclusively-owned line buffer.
//! - [`runner`] is the execution core: spawn, drain, wait, classify.
//! - [`policy`] turns an `Execution` into `Ok`/`Err` according to
//!   `ensure_success`.
//! - [`backend`] provides the `ExternalProcess` trait and the concrete
//!   `TokioProcess` used in production, which tests can replace with a fake.

pub mod backend;
pub mod drain;
pub mod output;
pub mod policy;
pub mod request;
pub mod runner;

pub use backend::{ExternalProcess, TokioProcess};
pub use output::{Execution, Failure, ProcessOutput, START_FAILURE_EXIT_CODE};
pub use policy::ensure_success;
pub use request::InvocationRequest;
pub use runner::execute;
