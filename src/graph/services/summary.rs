use crate::graph::domain::{Edge, ReportMeta, SeverityTier, Vertex};
use crate::shared::html::escape_html;
use serde::Serialize;
use std::collections::HashSet;

/// Base URL of the NVD detail page for a CVE id
pub const NVD_DETAIL_URL: &str = "https://nvd.nist.gov/vuln/detail/";

/// A CVE listed in the summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CveReference {
    pub id: String,
    pub tier: SeverityTier,
}

impl CveReference {
    pub fn detail_url(&self) -> String {
        format!("{}{}", NVD_DETAIL_URL, urlencoding::encode(&self.id))
    }
}

/// Textual description of a rendered graph
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphSummary {
    pub query: String,
    /// Unique CVEs in first-seen order
    pub vulnerabilities: Vec<CveReference>,
    pub vertex_count: usize,
    pub edge_count: usize,
    pub created: String,
    pub pruned: bool,
}

/// SummaryRenderer - builds the summary panel for a (possibly pruned) graph
pub struct SummaryRenderer;

impl SummaryRenderer {
    pub fn summarize(
        query: &str,
        vertices: &[Vertex],
        edges: &[Edge],
        meta: &ReportMeta,
        pruned: bool,
    ) -> GraphSummary {
        let mut seen = HashSet::new();
        let mut vulnerabilities = Vec::new();
        for vertex in vertices {
            if let Some(tier) = vertex.severity_tier() {
                if seen.insert(vertex.name.as_str()) {
                    vulnerabilities.push(CveReference {
                        id: vertex.name.clone(),
                        tier,
                    });
                }
            }
        }

        GraphSummary {
            query: query.to_string(),
            vulnerabilities,
            vertex_count: vertices.len(),
            edge_count: edges.len(),
            created: meta.created.clone(),
            pruned,
        }
    }
}

impl GraphSummary {
    /// Plain-text one-liner, e.g. `Found 2 vulnerabilities: CVE-1, CVE-2`
    pub fn headline(&self) -> String {
        if self.vulnerabilities.is_empty() {
            return "No vulnerabilities found!".to_string();
        }
        let ids: Vec<&str> = self.vulnerabilities.iter().map(|c| c.id.as_str()).collect();
        format!(
            "Found {} vulnerabilities: {}",
            self.vulnerabilities.len(),
            ids.join(", ")
        )
    }

    /// Link that re-renders the same query without pruning
    pub fn full_graph_link(&self) -> String {
        format!("?query={}&skip_prune=1", urlencoding::encode(&self.query))
    }

    /// Link that re-renders the same query with pruning
    pub fn pruned_graph_link(&self) -> String {
        format!("?query={}", urlencoding::encode(&self.query))
    }

    /// Link to the search page, prefilled with the query
    pub fn search_link(&self) -> String {
        format!("/?query={}", urlencoding::encode(&self.query))
    }

    /// HTML for the `summary` panel
    pub fn to_html(&self) -> String {
        let mut html = format!("<h1>Graph for {}</h1>", escape_html(&self.query));

        if self.vulnerabilities.is_empty() {
            html.push_str("<p class='no-vulnerabilities'>No vulnerabilities found!</p>");
        } else {
            let links: Vec<String> = self
                .vulnerabilities
                .iter()
                .map(|cve| {
                    format!(
                        "<a href=\"{}\" target=\"_blank\">{}</a>",
                        escape_html(&cve.detail_url()),
                        escape_html(&cve.id)
                    )
                })
                .collect();
            html.push_str(&format!(
                "<p class='vulnerabilities'>Found {} vulnerabilities: {}</p>",
                self.vulnerabilities.len(),
                links.join(", ")
            ));
        }

        html.push_str(&format!(
            "<p class='meta'>{} vertices, {} edges<br>Generated on {}<br></p>",
            self.vertex_count,
            self.edge_count,
            escape_html(&self.created)
        ));

        let search = escape_html(&self.search_link());
        if self.pruned {
            html.push_str(&format!(
                "<p class='meta'>This graph has been pruned of dependencies with no found vulnerabilities. \
                 <a href=\"{}\">Click here</a> to display the entire graph or \
                 <a href=\"{}\">check another repository</a> for common vulnerabilities or exploits.</p>",
                escape_html(&self.full_graph_link()),
                search
            ));
        } else {
            html.push_str(&format!(
                "<p class='meta'><a href=\"{}\">Click here</a> to prune dependencies with no found vulnerabilities or \
                 <a href=\"{}\">check another repository</a> for common vulnerabilities or exploits.</p>",
                escape_html(&self.pruned_graph_link()),
                search
            ));
        }

        html
    }
}
