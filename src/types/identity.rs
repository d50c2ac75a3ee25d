//! Metric identity: namespace, subsystem, and base name.

use serde::{Deserialize, Serialize};

/// The declared identity of a metric.
///
/// `namespace` and `subsystem` may each be empty; [`fully_qualified`]
/// joins only the non-empty parts. Identities are fixed at declaration
/// time and never change afterwards.
///
/// [`fully_qualified`]: MetricIdentity::fully_qualified
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricIdentity {
    pub namespace: String,
    pub subsystem: String,
    pub name: String,
}

impl MetricIdentity {
    pub fn new(
        namespace: impl Into<String>,
        subsystem: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            namespace: namespace.into(),
            subsystem: subsystem.into(),
            name: name.into(),
        }
    }

    /// The dotted join of the non-empty parts, in
    /// (namespace, subsystem, name) order.
    ///
    /// Never fails; an all-empty identity yields the empty string.
    pub fn fully_qualified(&self) -> String {
        let parts: Vec<&str> = [
            self.namespace.as_str(),
            self.subsystem.as_str(),
            self.name.as_str(),
        ]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect();
        parts.join(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_qualified_all_parts() {
        let id = MetricIdentity::new("namespace", "subsystem", "name");
        assert_eq!(id.fully_qualified(), "namespace.subsystem.name");
    }

    #[test]
    fn fully_qualified_without_subsystem() {
        let id = MetricIdentity::new("namespace", "", "name");
        assert_eq!(id.fully_qualified(), "namespace.name");
    }

    #[test]
    fn fully_qualified_without_namespace() {
        let id = MetricIdentity::new("", "subsystem", "name");
        assert_eq!(id.fully_qualified(), "subsystem.name");
    }

    #[test]
    fn fully_qualified_bare_name() {
        let id = MetricIdentity::new("", "", "name");
        assert_eq!(id.fully_qualified(), "name");
    }

    #[test]
    fn fully_qualified_empty_identity() {
        assert_eq!(MetricIdentity::default().fully_qualified(), "");
    }
}
