use crate::graph::domain::{
    CvssScore, Edge, EdgeKind, PackageKind, SeverityTier, Vertex, VertexKind,
};
use crate::graph::policies::NodeStyle;
use crate::shared::html::escape_html;
use serde::Serialize;

/// Colour of dependency edges
pub const DEPENDENCY_EDGE_COLOR: &str = "#fff";

/// Colour of vulnerability edges
pub const VULNERABILITY_EDGE_COLOR: &str = "#f00";

/// Placeholder for CVE fields the report leaves empty
const UNKNOWN: &str = "unknown";

/// vis-network node derived from a report vertex
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayNode {
    pub id: String,
    pub label: String,
    #[serde(flatten)]
    pub style: NodeStyle,
}

/// vis-network edge derived from a report edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayEdge {
    pub from: String,
    pub to: String,
    pub color: String,
    /// HTML tooltip
    pub title: String,
}

/// GraphTransformer - maps report records onto the vis-network schema
///
/// Every report-supplied string interpolated into a label or tooltip is
/// HTML-escaped. Node ids and edge endpoints stay raw since vis-network
/// treats them as identifiers, not markup.
pub struct GraphTransformer;

impl GraphTransformer {
    pub fn nodes(vertices: &[Vertex]) -> Vec<DisplayNode> {
        vertices.iter().map(Self::node).collect()
    }

    pub fn edges(edges: &[Edge]) -> Vec<DisplayEdge> {
        edges.iter().map(Self::edge).collect()
    }

    pub fn node(vertex: &Vertex) -> DisplayNode {
        let mut label = format!("<b>{}</b>\n", escape_html(&vertex.name));

        let style = match &vertex.kind {
            VertexKind::Package { .. } => {
                let kind_label = vertex
                    .package_kind()
                    .map(|kind| kind.label())
                    .unwrap_or(PackageKind::UNDEFINED_LABEL);
                label.push_str(&format!("<i>{}</i>", kind_label));
                NodeStyle::package()
            }
            VertexKind::Cve {
                description,
                cvss_v2_score,
                cvss_v3_score,
                publish_date,
            } => {
                label.push_str(&format!(
                    "<i>{}</i>\n\nCVSS v2 score: {}\nCVSS v3 score: {}\nPublished: {}\n",
                    escape_html(description.as_deref().unwrap_or(UNKNOWN)),
                    score_text(cvss_v2_score.as_ref()),
                    score_text(cvss_v3_score.as_ref()),
                    escape_html(publish_date.as_deref().unwrap_or(UNKNOWN)),
                ));
                NodeStyle::for_cve(SeverityTier::from_scores(
                    cvss_v3_score.as_ref(),
                    cvss_v2_score.as_ref(),
                ))
            }
        };

        DisplayNode {
            id: vertex.name.clone(),
            label,
            style,
        }
    }

    pub fn edge(edge: &Edge) -> DisplayEdge {
        let (color, title) = match &edge.kind {
            EdgeKind::Dependency { .. } => {
                let mut title = format!(
                    "{} &rarr; {}<br><br>",
                    escape_html(&edge.from),
                    escape_html(&edge.to)
                );
                match edge.version_constraint() {
                    Some(constraint) if !constraint.is_unconstrained() => {
                        let clauses: Vec<String> = constraint
                            .clauses()
                            .iter()
                            .map(|clause| escape_html(&clause.display_text()))
                            .collect();
                        title.push_str(&format!(
                            "<span class=\"version\">Version constraint:<br>{}</span>",
                            clauses.join("<br>")
                        ));
                    }
                    _ => title.push_str("<span class=\"version\">Version unconstrained</span>"),
                }
                (DEPENDENCY_EDGE_COLOR, title)
            }
            EdgeKind::Vulnerability { affected_version } => (
                VULNERABILITY_EDGE_COLOR,
                format!(
                    "Vulnerability<br>Affected versions: {}",
                    escape_html(affected_version)
                ),
            ),
        };

        DisplayEdge {
            from: edge.from.clone(),
            to: edge.to.clone(),
            color: color.to_string(),
            title,
        }
    }
}

fn score_text(score: Option<&CvssScore>) -> String {
    match score {
        Some(score) if !score.as_str().trim().is_empty() => escape_html(score.as_str()),
        _ => UNKNOWN.to_string(),
    }
}
