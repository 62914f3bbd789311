//! Hardware applicability
//!
//! The host agent probes every loaded manager and picks the one reporting
//! the highest support level for the node it is cleaning.

use serde::Serialize;

/// Manager version reported to the host agent.
///
/// Incremented at every upgrade so the agent does not switch hardware
/// managers while a clean is in flight.
pub const HARDWARE_MANAGER_VERSION: &str = "1";

/// Coarse support level a manager reports for the current hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HardwareSupport {
    /// Manager cannot service this hardware.
    None = 0,
    /// Generic fallback support.
    Generic = 1,
    /// Mainline support.
    Mainline = 2,
    /// Vendor/service-provider specific support; wins over all others.
    ServiceProvider = 3,
}

/// Report this manager's support level for the running node.
///
/// Constant [`HardwareSupport::ServiceProvider`]: the plugin ships only on
/// F03B images, so no hardware introspection is performed.
#[inline]
#[must_use]
pub fn evaluate_hardware_support() -> HardwareSupport {
    HardwareSupport::ServiceProvider
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn support_level_is_service_provider() {
        assert_eq!(evaluate_hardware_support(), HardwareSupport::ServiceProvider);
    }

    #[test]
    fn service_provider_outranks_other_levels() {
        assert!(HardwareSupport::ServiceProvider > HardwareSupport::Mainline);
        assert!(HardwareSupport::Mainline > HardwareSupport::Generic);
        assert!(HardwareSupport::Generic > HardwareSupport::None);
    }

    #[test]
    fn manager_version_is_stable() {
        assert_eq!(HARDWARE_MANAGER_VERSION, "1");
    }
}
