// src/exec/request.rs

use std::path::{Path, PathBuf};

/// One request to execute a single external command to completion.
///
/// Built by settings resolution (or directly by library callers) and only
/// ever read by the runner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvocationRequest {
    pub working_dir: PathBuf,
    pub command: String,
    /// Space-delimited argument string, passed through without quoting or
    /// escaping. The caller is responsible for argument safety.
    pub arguments: String,
    pub ensure_success: bool,
}

impl InvocationRequest {
    /// Strict request with no arguments.
    pub fn new(working_dir: impl Into<PathBuf>, command: impl Into<String>) -> Self {
        Self {
            working_dir: working_dir.into(),
            command: command.into(),
            arguments: String::new(),
            ensure_success: true,
        }
    }

    pub fn arguments(mut self, arguments: impl Into<String>) -> Self {
        self.arguments = arguments.into();
        self
    }

    pub fn ensure_success(mut self, ensure_success: bool) -> Self {
        self.ensure_success = ensure_success;
        self
    }

    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// `command arguments`, as used in log lines and failure messages.
    pub fn command_line(&self) -> String {
        format!("{} {}", self.command, self.arguments)
            .trim_end()
            .to_string()
    }

    /// Argument string split into argv elements.
    ///
    /// Double-quoted runs stay one element (`"My Project.csproj"`), so
    /// quoted paths with spaces survive. No variable or glob expansion
    /// happens. Unbalanced quotes are an error.
    pub fn argv(&self) -> Result<Vec<String>, shell_words::ParseError> {
        shell_words::split(&self.arguments)
    }
}
