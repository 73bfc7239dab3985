// src/exec/output.rs

/// Exit code reported when the process could not be started at all.
///
/// This is indistinguishable from a child that genuinely exits with 1.
pub const START_FAILURE_EXIT_CODE: i32 = 1;

/// Exit code reported when the OS gives no code (e.g. killed by a signal).
pub const NO_EXIT_CODE: i32 = -1;

/// Captured result of one invocation, owned by the caller once returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    stdout: String,
    stderr: String,
    exit_code: i32,
}

impl ProcessOutput {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>, exit_code: i32) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code,
        }
    }

    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    pub fn exit_code(&self) -> i32 {
        self.exit_code
    }

    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Diagnostic text for a non-zero exit: command line, exit code and both
    /// captured outputs.
    pub fn failure_message(&self, command_line: &str) -> String {
        format!(
            "Command {} failed with exit code: {}\n\n{}\n\n{}",
            command_line, self.exit_code, self.stdout, self.stderr
        )
    }
}

/// Why an invocation did not succeed.
#[derive(Debug)]
pub enum Failure {
    /// The process never started.
    Start { error: std::io::Error },
    /// The process ran and exited non-zero. `message` carries the command
    /// line, exit code and both captured outputs.
    NonZeroExit { message: String },
}

/// Outcome of the execution core, before any strictness policy is applied.
#[derive(Debug)]
pub struct Execution {
    pub command: String,
    pub output: ProcessOutput,
    pub failure: Option<Failure>,
}

impl Execution {
    pub fn succeeded(command: impl Into<String>, output: ProcessOutput) -> Self {
        Self {
            command: command.into(),
            output,
            failure: None,
        }
    }

    pub fn failed(command: impl Into<String>, output: ProcessOutput, failure: Failure) -> Self {
        Self {
            command: command.into(),
            output,
            failure: Some(failure),
        }
    }
}
