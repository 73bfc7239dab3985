// src/errors.rs

//! Crate-wide error aliases and helpers.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtprocError {
    /// The OS refused to create the child process (missing binary, bad
    /// working directory, permission denied, ...).
    #[error("could not start external process for {command}: {source}")]
    StartFailed {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The child was created but its output pipes are unusable.
    ///
    /// Never downgraded by `ensure_success = false`.
    #[error("Could not start external process for {command}")]
    NoProcessHandle { command: String },

    /// The child ran and exited non-zero.
    #[error("{message}")]
    ExecutionFailed { exit_code: i32, message: String },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ExtprocError>;
