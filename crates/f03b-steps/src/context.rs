//! Execution context
//!
//! Opaque node/port metadata the host agent supplies with every step
//! request. The executor passes it through untouched; the only read is the
//! node's `driver_info` key, which is logged for operators and never
//! validated or interpreted.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Node and port documents as received from the host agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExecutionContext {
    /// Node document. Opaque to this plugin.
    #[serde(default)]
    pub node: Value,
    /// Port documents. Opaque to this plugin.
    #[serde(default)]
    pub ports: Vec<Value>,
}

impl ExecutionContext {
    /// Create a context from host-supplied node and port documents
    #[inline]
    #[must_use]
    pub fn new(node: Value, ports: Vec<Value>) -> Self {
        Self { node, ports }
    }

    /// The node's `driver_info` map, if the host supplied one.
    ///
    /// Logged per invocation; never inspected beyond that.
    #[must_use]
    pub fn driver_info(&self) -> Option<&Value> {
        self.node.get("driver_info")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn driver_info_present() {
        let context = ExecutionContext::new(
            json!({"uuid": "abc", "driver_info": {"ipmi_address": "10.0.0.1"}}),
            vec![json!({"address": "aa:bb:cc:dd:ee:ff"})],
        );

        assert_eq!(
            context.driver_info(),
            Some(&json!({"ipmi_address": "10.0.0.1"}))
        );
    }

    #[test]
    fn driver_info_absent() {
        let context = ExecutionContext::default();
        assert!(context.driver_info().is_none());
    }

    #[test]
    fn context_round_trips_through_json() {
        let context = ExecutionContext::new(json!({"uuid": "abc"}), vec![]);
        let encoded = serde_json::to_string(&context).unwrap();
        let decoded: ExecutionContext = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, context);
    }
}
