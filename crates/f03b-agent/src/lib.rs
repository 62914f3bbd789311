//! F03B host-agent adapter (f03b-agent)
//!
//! Thin layer between the freestanding step library and the provisioning
//! host: the hardware-applicability probe, the manager version the host
//! pins during a clean, and the registration tuples the host's step
//! registry consumes.

pub mod registration;
pub mod support;

pub use registration::{clean_step_registrations, CleanStepRegistration};
pub use support::{evaluate_hardware_support, HardwareSupport, HARDWARE_MANAGER_VERSION};
