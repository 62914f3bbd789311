//! Error types for the step executor
//!
//! Three failure kinds, mapping one-to-one onto the ways a clean step can
//! go wrong:
//! - The caller asked for a step that does not exist
//! - The vendor script ran and exited nonzero
//! - The vendor script could not be spawned at all
//!
//! No failure is retried here; remediation of a failed BIOS operation is an
//! operational decision made outside this plugin.

use std::path::PathBuf;

/// Failure of a single clean-step invocation
#[derive(Debug, thiserror::Error)]
pub enum StepError {
    /// Requested step name is not registered. Caller error; never retried.
    #[error("unknown clean step: {0}")]
    UnknownStep(String),

    /// Vendor script exited nonzero. The exit code and combined output are
    /// surfaced verbatim so operators can diagnose the script itself.
    #[error("script {} failed with exit code {exit_code}", .script.display())]
    ScriptFailed {
        /// Resolved path of the script that failed.
        script: PathBuf,
        /// The script's exit code (killed-by-signal maps to -1).
        exit_code: i32,
        /// Combined stdout and stderr, verbatim.
        output: String,
    },

    /// Vendor script could not be spawned (missing or not executable).
    /// Environment error; surfaced immediately.
    #[error("failed to spawn {}: {source}", .script.display())]
    SpawnFailed {
        /// Resolved path of the script that could not be spawned.
        script: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },
}

impl StepError {
    /// Check if the failure is the caller's fault rather than the node's
    #[inline]
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        matches!(self, Self::UnknownStep(_))
    }

    /// The failing script's exit code, when one exists
    #[inline]
    #[must_use]
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::ScriptFailed { exit_code, .. } => Some(*exit_code),
            _ => None,
        }
    }

    /// The failing script's captured output, when one exists
    #[inline]
    #[must_use]
    pub fn output(&self) -> Option<&str> {
        match self {
            Self::ScriptFailed { output, .. } => Some(output),
            _ => None,
        }
    }
}
