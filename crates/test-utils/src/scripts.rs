use std::fs;
use std::path::Path;

use extproc::exec::InvocationRequest;
use tempfile::TempDir;

/// A temporary directory holding small `sh` scripts used as child processes.
///
/// The scripts are run as `sh <name>` with the directory as working dir, so
/// the whitespace-split argument string stays a single word.
pub struct ScriptDir {
    dir: TempDir,
}

impl ScriptDir {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("creating temp dir for scripts"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `body` to `name` inside the directory and return `name`.
    pub fn script(&self, name: &str, body: &str) -> String {
        fs::write(self.dir.path().join(name), body).expect("writing test script");
        name.to_string()
    }

    /// Strict request running `sh <script>` inside this directory.
    pub fn request(&self, script: &str) -> InvocationRequest {
        InvocationRequest::new(self.path(), "sh").arguments(script)
    }
}

impl Default for ScriptDir {
    fn default() -> Self {
        Self::new()
    }
}
