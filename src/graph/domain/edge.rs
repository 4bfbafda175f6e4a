use super::version_constraint::VersionConstraint;
use serde::{Deserialize, Serialize};

/// A directed graph edge between two vertex names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    #[serde(flatten)]
    pub kind: EdgeKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EdgeKind {
    /// `from` depends on `to`; `version` is the constraint key, empty when unconstrained
    Dependency {
        #[serde(default)]
        version: String,
    },
    /// `from` is affected by the CVE `to`
    Vulnerability {
        #[serde(default)]
        affected_version: String,
    },
}

impl Edge {
    pub fn dependency(
        from: impl Into<String>,
        to: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: EdgeKind::Dependency {
                version: version.into(),
            },
        }
    }

    pub fn vulnerability(
        from: impl Into<String>,
        to: impl Into<String>,
        affected_version: impl Into<String>,
    ) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            kind: EdgeKind::Vulnerability {
                affected_version: affected_version.into(),
            },
        }
    }

    /// Parsed version constraint of a dependency edge
    pub fn version_constraint(&self) -> Option<VersionConstraint> {
        match &self.kind {
            EdgeKind::Dependency { version } => Some(VersionConstraint::parse(version)),
            EdgeKind::Vulnerability { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_dependency_edge() {
        let edge: Edge = serde_json::from_str(
            r#"{"from": "repo", "to": "requests", "type": "dependency", "version": ">=:2.0"}"#,
        )
        .unwrap();
        assert_eq!(edge, Edge::dependency("repo", "requests", ">=:2.0"));
        assert_eq!(edge.version_constraint().unwrap().clauses().len(), 1);
    }

    #[test]
    fn test_deserialize_dependency_edge_without_version() {
        let edge: Edge =
            serde_json::from_str(r#"{"from": "a", "to": "b", "type": "dependency"}"#).unwrap();
        assert!(edge.version_constraint().unwrap().is_unconstrained());
    }

    #[test]
    fn test_deserialize_vulnerability_edge() {
        let edge: Edge = serde_json::from_str(
            r#"{"from": "requests", "to": "CVE-2018-18074", "type": "vulnerability", "affected_version": "<:2.20.0"}"#,
        )
        .unwrap();
        assert_eq!(
            edge,
            Edge::vulnerability("requests", "CVE-2018-18074", "<:2.20.0")
        );
        assert!(edge.version_constraint().is_none());
    }

    #[test]
    fn test_serialize_keeps_wire_shape() {
        let edge = Edge::vulnerability("pkgA", "CVE-2020-1", "<2.0");
        let value = serde_json::to_value(&edge).unwrap();
        assert_eq!(value["type"], "vulnerability");
        assert_eq!(value["from"], "pkgA");
        assert_eq!(value["affected_version"], "<2.0");
    }
}
