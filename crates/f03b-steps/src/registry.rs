//! Step Registry
//!
//! Static, ordered metadata for the three F03B BIOS cleaning steps. The
//! registry is fixed at compile time and read-only for the life of the
//! process: higher priority runs first, and every step requests a reboot
//! once it completes.

use serde::Serialize;

/// Host-agent interface a clean step is routed through.
///
/// The F03B plugin only registers steps on the deploy interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceCategory {
    /// Routed via the host agent's deploy interface.
    Deploy,
}

/// Immutable descriptor for a single clean step.
///
/// Constructed once in the registry's static table; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StepDescriptor {
    /// Step name the host agent selects by. Unique within the registry.
    pub name: &'static str,
    /// Execution priority; higher runs first.
    pub priority: u32,
    /// Whether the agent should reboot the node after the step completes.
    pub requires_reboot: bool,
    /// Interface the host routes the step through.
    pub interface: InterfaceCategory,
    /// Vendor script filename, resolved against the executor's base
    /// directory.
    pub script: &'static str,
}

/// The F03B clean steps, highest priority first.
///
/// Order here is the order [`StepRegistry::list_steps`] returns; the host
/// agent's scheduler uses the priorities, the list order is advisory only.
const STEPS: &[StepDescriptor] = &[
    StepDescriptor {
        name: "upgrade_bios",
        priority: 90,
        requires_reboot: true,
        interface: InterfaceCategory::Deploy,
        script: "flash_bios.sh",
    },
    StepDescriptor {
        name: "decom_bios_settings",
        priority: 80,
        requires_reboot: true,
        interface: InterfaceCategory::Deploy,
        script: "write_bios_settings_decom.sh",
    },
    StepDescriptor {
        name: "customer_bios_settings",
        priority: 30,
        requires_reboot: true,
        interface: InterfaceCategory::Deploy,
        script: "write_bios_settings_customer.sh",
    },
];

/// Registry of the clean steps this plugin provides.
///
/// Pure and infallible: listing and lookup never touch the filesystem and
/// cannot fail. The registry holds no mutable state, so it is trivially
/// shareable across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct StepRegistry;

impl StepRegistry {
    /// Create the registry
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// All registered steps, in fixed priority order.
    #[inline]
    #[must_use]
    pub fn list_steps(&self) -> &'static [StepDescriptor] {
        STEPS
    }

    /// Resolve a step by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&'static StepDescriptor> {
        STEPS.iter().find(|step| step.name == name)
    }

    /// Check if a step name is registered
    #[inline]
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Number of registered steps
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        STEPS.len()
    }

    /// Whether the registry is empty (it never is)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        STEPS.is_empty()
    }
}
