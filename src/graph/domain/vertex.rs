use super::severity::{deserialize_optional_score, CvssScore, SeverityTier};
use serde::{Deserialize, Serialize};

/// Known package kinds and their display labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageKind {
    PythonPackage,
    Repository,
}

impl PackageKind {
    /// Text shown for a package type key missing from the enumeration
    pub const UNDEFINED_LABEL: &'static str = "undefined";

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "python-package" => Some(PackageKind::PythonPackage),
            "repository" => Some(PackageKind::Repository),
            _ => None,
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            PackageKind::PythonPackage => "python-package",
            PackageKind::Repository => "repository",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PackageKind::PythonPackage => "Python package",
            PackageKind::Repository => "Repository",
        }
    }
}

/// A graph vertex: a package/repository or a CVE.
///
/// `name` is unique within a report and is the join key for edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    pub name: String,
    #[serde(flatten)]
    pub kind: VertexKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum VertexKind {
    #[serde(rename = "package")]
    Package {
        #[serde(default)]
        package_type: Option<String>,
    },
    #[serde(rename = "CVE")]
    Cve {
        #[serde(default)]
        description: Option<String>,
        #[serde(default, deserialize_with = "deserialize_optional_score")]
        cvss_v2_score: Option<CvssScore>,
        #[serde(default, deserialize_with = "deserialize_optional_score")]
        cvss_v3_score: Option<CvssScore>,
        #[serde(default)]
        publish_date: Option<String>,
    },
}

impl Vertex {
    pub fn package(name: impl Into<String>, package_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: VertexKind::Package {
                package_type: Some(package_type.into()),
            },
        }
    }

    pub fn cve(
        name: impl Into<String>,
        description: Option<&str>,
        cvss_v2_score: Option<&str>,
        cvss_v3_score: Option<&str>,
        publish_date: Option<&str>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: VertexKind::Cve {
                description: description.map(str::to_string),
                cvss_v2_score: cvss_v2_score.map(CvssScore::new),
                cvss_v3_score: cvss_v3_score.map(CvssScore::new),
                publish_date: publish_date.map(str::to_string),
            },
        }
    }

    pub fn is_cve(&self) -> bool {
        matches!(self.kind, VertexKind::Cve { .. })
    }

    /// Known package kind, `None` for CVEs and unknown type keys
    pub fn package_kind(&self) -> Option<PackageKind> {
        match &self.kind {
            VertexKind::Package { package_type } => {
                package_type.as_deref().and_then(PackageKind::from_key)
            }
            VertexKind::Cve { .. } => None,
        }
    }

    /// Severity tier of a CVE vertex, `None` for packages
    pub fn severity_tier(&self) -> Option<SeverityTier> {
        match &self.kind {
            VertexKind::Cve {
                cvss_v2_score,
                cvss_v3_score,
                ..
            } => Some(SeverityTier::from_scores(
                cvss_v3_score.as_ref(),
                cvss_v2_score.as_ref(),
            )),
            VertexKind::Package { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_package_vertex() {
        let vertex: Vertex = serde_json::from_str(
            r#"{"name": "requests", "type": "package", "package_type": "python-package"}"#,
        )
        .unwrap();
        assert_eq!(vertex.name, "requests");
        assert!(!vertex.is_cve());
        assert_eq!(vertex.package_kind(), Some(PackageKind::PythonPackage));
        assert_eq!(vertex.severity_tier(), None);
    }

    #[test]
    fn test_deserialize_cve_vertex_with_float_scores() {
        let vertex: Vertex = serde_json::from_str(
            r#"{
                "name": "CVE-2018-18074",
                "type": "CVE",
                "description": "Requests sends Authorization headers on redirect",
                "cvss_v2_score": 5.0,
                "cvss_v3_score": 9.8,
                "publish_date": "2018-10-09"
            }"#,
        )
        .unwrap();
        assert!(vertex.is_cve());
        match &vertex.kind {
            VertexKind::Cve {
                cvss_v3_score,
                publish_date,
                ..
            } => {
                assert_eq!(cvss_v3_score.as_ref().unwrap().as_str(), "9.8");
                assert_eq!(publish_date.as_deref(), Some("2018-10-09"));
            }
            _ => panic!("expected CVE vertex"),
        }
        assert_eq!(vertex.severity_tier(), Some(SeverityTier::Critical));
    }

    #[test]
    fn test_deserialize_cve_vertex_with_missing_fields() {
        let vertex: Vertex =
            serde_json::from_str(r#"{"name": "CVE-2020-1", "type": "CVE", "cvss_v2_score": "3.0"}"#)
                .unwrap();
        assert_eq!(vertex.severity_tier(), Some(SeverityTier::Low));
    }

    #[test]
    fn test_unknown_package_type_has_no_kind() {
        let vertex = Vertex::package("leftpad", "npm-package");
        assert_eq!(vertex.package_kind(), None);

        let untyped: Vertex =
            serde_json::from_str(r#"{"name": "x", "type": "package"}"#).unwrap();
        assert_eq!(untyped.package_kind(), None);
    }

    #[test]
    fn test_unknown_vertex_type_is_rejected() {
        let result = serde_json::from_str::<Vertex>(r#"{"name": "x", "type": "license"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_package_kind_labels() {
        assert_eq!(PackageKind::PythonPackage.label(), "Python package");
        assert_eq!(PackageKind::Repository.label(), "Repository");
        assert_eq!(
            PackageKind::from_key(PackageKind::Repository.key()),
            Some(PackageKind::Repository)
        );
    }
}
