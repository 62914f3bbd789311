//! Per-step metrics seam
//!
//! The sink is injected into the executor at construction time; there is no
//! process-global metrics state. One observation is recorded per step
//! invocation, successful or not.

use std::time::Duration;

/// Receives one observation per completed step invocation.
pub trait MetricsSink: Send + Sync {
    /// Record a completed invocation of `step` with its wall time and
    /// outcome. `success` is false for nonzero exits and spawn failures.
    fn observe(&self, step: &str, elapsed: Duration, success: bool);
}

/// Sink that drops all observations. The default.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopMetrics;

impl MetricsSink for NoopMetrics {
    fn observe(&self, _step: &str, _elapsed: Duration, _success: bool) {}
}

/// Sink that emits each observation as a `tracing` event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingMetrics;

impl MetricsSink for TracingMetrics {
    fn observe(&self, step: &str, elapsed: Duration, success: bool) {
        tracing::info!(
            step,
            elapsed_ms = elapsed.as_millis() as u64,
            success,
            "clean step finished"
        );
    }
}
