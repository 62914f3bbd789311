//! Step Executor
//!
//! Resolves a clean step by name, invokes its vendor script, and enforces
//! the exit-code-0 contract.
//!
//! # Critical Invariant
//!
//! Exactly one child process is spawned per call, and only after the step
//! name has resolved against the registry. The executor performs no
//! retries, no rollback, and tracks no state across invocations: the BIOS
//! changes underneath it, but each call is independent.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use crate::context::ExecutionContext;
use crate::error::StepError;
use crate::metrics::{MetricsSink, NoopMetrics};
use crate::registry::StepRegistry;
use crate::runner::{ProcessRunner, SystemProcessRunner};

/// Default location of the vendor BIOS utilities on a booted F03B node.
pub const DEFAULT_BIOS_DIR: &str = "/mnt/f03b_bios/quanta_A14";

/// Result of a successful step invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// Always true on the `Ok` path; failures are [`StepError`]s.
    pub success: bool,
    /// The vendor script's exit code (0 on this path).
    pub exit_code: i32,
    /// Combined stdout and stderr of the vendor script.
    pub output: String,
}

/// Runs registered clean steps by invoking their vendor scripts.
///
/// The call blocks until the vendor script exits; no timeout is enforced.
/// A host that needs to bound or cancel a run must terminate the child's
/// process group itself.
pub struct StepExecutor {
    registry: StepRegistry,
    base_dir: PathBuf,
    runner: Arc<dyn ProcessRunner>,
    metrics: Arc<dyn MetricsSink>,
}

impl StepExecutor {
    /// Create an executor resolving scripts under `base_dir`
    #[must_use]
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            registry: StepRegistry::new(),
            base_dir: base_dir.into(),
            runner: Arc::new(SystemProcessRunner::new()),
            metrics: Arc::new(NoopMetrics),
        }
    }

    /// Replace the process runner (tests use a spy here)
    #[must_use]
    pub fn with_runner(mut self, runner: Arc<dyn ProcessRunner>) -> Self {
        self.runner = runner;
        self
    }

    /// Replace the metrics sink
    #[must_use]
    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsSink>) -> Self {
        self.metrics = metrics;
        self
    }

    /// The registry this executor resolves step names against
    #[inline]
    #[must_use]
    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    /// Directory the vendor scripts are resolved under
    #[inline]
    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Run a single clean step by name.
    ///
    /// `context` is the host-supplied node/port metadata; it is logged
    /// (the node's `driver_info` only) and otherwise passed through unused.
    ///
    /// # Errors
    /// - [`StepError::UnknownStep`] when `name` is not registered; no
    ///   process is spawned in this case.
    /// - [`StepError::ScriptFailed`] when the script exits nonzero,
    ///   carrying the exact exit code and combined output.
    /// - [`StepError::SpawnFailed`] when the script is missing or cannot
    ///   be executed.
    pub fn run_step(
        &self,
        name: &str,
        context: &ExecutionContext,
    ) -> Result<ExecutionResult, StepError> {
        let step = self
            .registry
            .lookup(name)
            .ok_or_else(|| StepError::UnknownStep(name.to_string()))?;

        tracing::info!(
            step = step.name,
            driver_info = ?context.driver_info(),
            "running clean step"
        );

        let script = self.base_dir.join(step.script);
        let started = Instant::now();
        let outcome = self.runner.run(&script);
        let elapsed = started.elapsed();

        match outcome {
            Ok(raw) if raw.exit_code == 0 => {
                self.metrics.observe(step.name, elapsed, true);
                Ok(ExecutionResult {
                    success: true,
                    exit_code: 0,
                    output: raw.output,
                })
            }
            Ok(raw) => {
                self.metrics.observe(step.name, elapsed, false);
                tracing::warn!(
                    step = step.name,
                    exit_code = raw.exit_code,
                    "clean step script exited nonzero"
                );
                Err(StepError::ScriptFailed {
                    script,
                    exit_code: raw.exit_code,
                    output: raw.output,
                })
            }
            Err(source) => {
                self.metrics.observe(step.name, elapsed, false);
                tracing::error!(
                    step = step.name,
                    script = %script.display(),
                    "clean step script could not be spawned"
                );
                Err(StepError::SpawnFailed { script, source })
            }
        }
    }
}

impl Default for StepExecutor {
    fn default() -> Self {
        Self::new(DEFAULT_BIOS_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests that substitute a SpyRunner from f03b-test-utils live in
    // tests/executor_tests.rs: linking test-utils from a unit test would
    // pull in a second build of this crate and split the ProcessRunner
    // trait's identity.

    #[test]
    fn default_executor_uses_vendor_bios_dir() {
        let executor = StepExecutor::default();
        assert_eq!(executor.base_dir(), Path::new(DEFAULT_BIOS_DIR));
    }
}
