//! Process-spawning seam
//!
//! The executor never calls `std::process` directly; it goes through
//! [`ProcessRunner`] so tests can substitute a spy and assert that an
//! unknown step spawns nothing.

use std::path::Path;
use std::process::{Command, Stdio};

/// Raw outcome of a spawned vendor script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutput {
    /// Exit code; a script killed by a signal maps to -1.
    pub exit_code: i32,
    /// Combined stdout and stderr, lossily decoded as UTF-8.
    pub output: String,
}

/// Spawns vendor scripts on behalf of the executor.
pub trait ProcessRunner: Send + Sync {
    /// Run `script` as a child process with no arguments and no stdin,
    /// blocking until it exits.
    ///
    /// # Errors
    /// Returns the OS error when the script cannot be spawned (missing
    /// file, not executable). A script that runs and exits nonzero is
    /// *not* an error at this layer; the exit code is reported in
    /// [`ProcessOutput`].
    fn run(&self, script: &Path) -> std::io::Result<ProcessOutput>;
}

/// Production runner backed by `std::process::Command`.
///
/// Each call spawns an independent child with piped stdio and no shared
/// handles, so concurrent invocations for different nodes need no
/// coordination at this layer.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcessRunner;

impl SystemProcessRunner {
    /// Create a new system runner
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ProcessRunner for SystemProcessRunner {
    fn run(&self, script: &Path) -> std::io::Result<ProcessOutput> {
        let output = Command::new(script)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(ProcessOutput {
            exit_code: output.status.code().unwrap_or(-1),
            output: combined,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_script_is_a_spawn_error() {
        let runner = SystemProcessRunner::new();
        let result = runner.run(Path::new("/nonexistent/dir/flash_bios.sh"));
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn runner_captures_exit_code_and_output() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("stub.sh");
        fs::write(&script, "#!/bin/sh\necho out\necho err >&2\nexit 3\n").unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let result = SystemProcessRunner::new().run(&script).unwrap();
        assert_eq!(result.exit_code, 3);
        assert!(result.output.contains("out"));
        assert!(result.output.contains("err"));
    }
}
