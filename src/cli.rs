// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `extproc`.
#[derive(Debug, Clone, Default, Parser)]
#[command(
    name = "extproc",
    version,
    about = "Run one external command, capture its output and classify the exit.",
    long_about = None
)]
pub struct CliArgs {
    /// Executable name or path to run.
    ///
    /// May be omitted when `--preset` supplies it.
    #[arg(value_name = "COMMAND")]
    pub command: Option<String>,

    /// Argument string for the command (space-delimited; double quotes group
    /// words, no shell expansion).
    #[arg(long, value_name = "ARGS", allow_hyphen_values = true)]
    pub args: Option<String>,

    /// Working directory for the child process.
    #[arg(long, value_name = "PATH")]
    pub dir: Option<String>,

    /// Name of a `[command.<name>]` preset from the config file.
    #[arg(long, value_name = "NAME")]
    pub preset: Option<String>,

    /// Fail (exit 1) when the command cannot start or exits non-zero.
    #[arg(long, conflicts_with = "allow_failure")]
    pub ensure_success: bool,

    /// Report start failures and non-zero exits as ordinary results.
    #[arg(long)]
    pub allow_failure: bool,

    /// Path to the settings file (TOML).
    ///
    /// Default: `Extproc.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `EXTPROC_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Resolve settings and print the invocation, but don't run anything.
    #[arg(long)]
    pub dry_run: bool,
}

impl CliArgs {
    /// Strictness requested on the command line, if any.
    pub fn ensure_success_flag(&self) -> Option<bool> {
        if self.ensure_success {
            Some(true)
        } else if self.allow_failure {
            Some(false)
        } else {
            None
        }
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
