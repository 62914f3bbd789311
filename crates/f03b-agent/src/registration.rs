//! Clean-step registration
//!
//! Converts the registry's descriptors into the tuples the host agent's
//! step-registration mechanism consumes. The vendor script filename stays
//! private to the executor; the host only sees scheduling metadata.

use f03b_steps::registry::{InterfaceCategory, StepRegistry};
use serde::Serialize;

/// Registration payload for one clean step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CleanStepRegistration {
    /// Registered step name.
    pub step: &'static str,
    /// Interface the host routes the step through.
    pub interface: InterfaceCategory,
    /// Scheduling priority; higher runs first.
    pub priority: u32,
    /// Whether the agent should reboot the node after the step.
    pub reboot_requested: bool,
}

/// Registration tuples for every step this plugin provides, in fixed
/// priority order.
#[must_use]
pub fn clean_step_registrations() -> Vec<CleanStepRegistration> {
    StepRegistry::new()
        .list_steps()
        .iter()
        .map(|step| CleanStepRegistration {
            step: step.name,
            interface: step.interface,
            priority: step.priority,
            reboot_requested: step.requires_reboot,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn registrations_match_registry_metadata() {
        let registrations = clean_step_registrations();

        assert_eq!(
            registrations,
            vec![
                CleanStepRegistration {
                    step: "upgrade_bios",
                    interface: InterfaceCategory::Deploy,
                    priority: 90,
                    reboot_requested: true,
                },
                CleanStepRegistration {
                    step: "decom_bios_settings",
                    interface: InterfaceCategory::Deploy,
                    priority: 80,
                    reboot_requested: true,
                },
                CleanStepRegistration {
                    step: "customer_bios_settings",
                    interface: InterfaceCategory::Deploy,
                    priority: 30,
                    reboot_requested: true,
                },
            ]
        );
    }

    #[test]
    fn registrations_serialize_for_the_host() {
        let json = serde_json::to_value(clean_step_registrations()).unwrap();
        assert_eq!(json[0]["step"], "upgrade_bios");
        assert_eq!(json[0]["interface"], "deploy");
        assert_eq!(json[0]["priority"], 90);
        assert_eq!(json[0]["reboot_requested"], true);
    }
}
