use super::edge::Edge;
use super::vertex::Vertex;
use serde::{Deserialize, Serialize};

/// Precomputed graph report for one query
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
    pub meta: ReportMeta,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Generation timestamp as formatted by the server
    pub created: String,
}

/// Body of the `/get_repo_insights` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightsResponse {
    pub found: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<Report>,
}

impl InsightsResponse {
    pub fn found(report: Report) -> Self {
        Self {
            found: true,
            report: Some(report),
        }
    }

    pub fn not_found() -> Self {
        Self {
            found: false,
            report: None,
        }
    }
}
