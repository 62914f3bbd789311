//! F03B clean steps (f03b-steps)
//!
//! Freestanding library implementing the clean-step contract for Quanta F03B
//! hardware. Two pieces:
//!
//! 1. **Step Registry**: static, ordered metadata for the three BIOS
//!    cleaning steps (firmware upgrade, decommission settings, customer
//!    settings).
//! 2. **Step Executor**: resolves a step by name, invokes its vendor script
//!    under a base directory, and enforces the exit-code-0 contract.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use f03b_steps::prelude::*;
//!
//! let executor = StepExecutor::new("/mnt/f03b_bios/quanta_A14");
//! let context = ExecutionContext::default();
//!
//! for step in executor.registry().list_steps() {
//!     let result = executor.run_step(step.name, &context)?;
//!     assert_eq!(result.exit_code, 0);
//! }
//! ```

pub mod context;
pub mod error;
pub mod executor;
pub mod metrics;
pub mod registry;
pub mod runner;

// Re-exports
pub use context::ExecutionContext;
pub use error::StepError;
pub use executor::{ExecutionResult, StepExecutor, DEFAULT_BIOS_DIR};
pub use registry::{InterfaceCategory, StepDescriptor, StepRegistry};

/// Re-export the full surface for convenience
pub mod prelude {
    pub use crate::context::ExecutionContext;
    pub use crate::error::StepError;
    pub use crate::executor::{ExecutionResult, StepExecutor, DEFAULT_BIOS_DIR};
    pub use crate::metrics::{MetricsSink, NoopMetrics, TracingMetrics};
    pub use crate::registry::{InterfaceCategory, StepDescriptor, StepRegistry};
    pub use crate::runner::{ProcessOutput, ProcessRunner, SystemProcessRunner};
}

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
