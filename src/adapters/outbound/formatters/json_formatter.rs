use crate::application::read_models::GraphOutcome;
use crate::ports::outbound::GraphFormatter;
use crate::shared::Result;
use chrono::Utc;
use serde_json::json;

/// JsonFormatter adapter emitting the graph data for external consumers
///
/// A rendered graph becomes
/// `{query, pruned, nodes, edges, options, summary, generated_at}`; a
/// redirect becomes `{redirect}`.
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphFormatter for JsonFormatter {
    fn format(&self, outcome: &GraphOutcome) -> Result<String> {
        let document = match outcome {
            GraphOutcome::Rendered(view) => json!({
                "query": view.summary.query,
                "pruned": view.summary.pruned,
                "nodes": view.nodes,
                "edges": view.edges,
                "options": view.options,
                "summary": {
                    "headline": view.summary.headline(),
                    "vulnerabilities": view.summary.vulnerabilities,
                    "vertex_count": view.summary.vertex_count,
                    "edge_count": view.summary.edge_count,
                    "created": view.summary.created,
                    "html": view.summary.to_html(),
                },
                "generated_at": Utc::now().to_rfc3339(),
            }),
            GraphOutcome::Redirect { location } => json!({ "redirect": location }),
        };

        Ok(serde_json::to_string_pretty(&document)?)
    }
}
