//! Testing utilities for the F03B workspace
//!
//! Shared fixtures: stub vendor scripts on disk and a spy process runner.

#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use f03b_steps::registry::StepRegistry;
use f03b_steps::runner::{ProcessOutput, ProcessRunner};
use tempfile::TempDir;

/// Write a stub vendor script that prints `output` and exits `exit_code`.
///
/// # Panics
/// Panics on IO failure; fixtures are test-only.
pub fn write_stub_script(dir: &Path, name: &str, exit_code: i32, output: &str) -> PathBuf {
    let path = dir.join(name);
    let body = format!("#!/bin/sh\nprintf '%s' '{output}'\nexit {exit_code}\n");
    fs::write(&path, body).unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    path
}

/// Create a temporary base directory holding a stub for every registered
/// vendor script, each exiting `exit_code` with `output`.
#[must_use]
pub fn stub_bios_dir(exit_code: i32, output: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    for step in StepRegistry::new().list_steps() {
        write_stub_script(dir.path(), step.script, exit_code, output);
    }
    dir
}

/// A [`ProcessRunner`] that records every requested script and returns a
/// canned result instead of spawning anything.
#[derive(Debug)]
pub struct SpyRunner {
    calls: Mutex<Vec<PathBuf>>,
    exit_code: i32,
    output: String,
}

impl SpyRunner {
    /// Spy whose canned result is a clean exit.
    #[must_use]
    pub fn succeeding() -> Self {
        Self::exiting(0, "")
    }

    /// Spy whose canned result exits `exit_code` with `output`.
    #[must_use]
    pub fn exiting(exit_code: i32, output: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            exit_code,
            output: output.to_string(),
        }
    }

    /// Scripts requested so far, in call order.
    #[must_use]
    pub fn calls(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of scripts requested so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl ProcessRunner for SpyRunner {
    fn run(&self, script: &Path) -> std::io::Result<ProcessOutput> {
        self.calls.lock().unwrap().push(script.to_path_buf());
        Ok(ProcessOutput {
            exit_code: self.exit_code,
            output: self.output.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spy_records_calls_in_order() {
        let spy = SpyRunner::exiting(2, "boom");

        let first = spy.run(Path::new("/bios/a.sh")).unwrap();
        let _ = spy.run(Path::new("/bios/b.sh")).unwrap();

        assert_eq!(first.exit_code, 2);
        assert_eq!(first.output, "boom");
        assert_eq!(
            spy.calls(),
            vec![PathBuf::from("/bios/a.sh"), PathBuf::from("/bios/b.sh")]
        );
        assert_eq!(spy.call_count(), 2);
    }

    #[cfg(unix)]
    #[test]
    fn stub_bios_dir_covers_every_registered_script() {
        let dir = stub_bios_dir(0, "ok");
        for step in StepRegistry::new().list_steps() {
            assert!(dir.path().join(step.script).exists());
        }
    }
}
