use crate::graph::services::{DisplayEdge, DisplayNode, GraphSummary};
use serde::Serialize;

/// Edge arrow placement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EdgeOptions {
    pub arrows: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepulsionOptions {
    pub spring_length: u32,
    pub node_distance: u32,
    pub damping: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhysicsOptions {
    pub solver: String,
    pub repulsion: RepulsionOptions,
}

/// vis-network `Network` options
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphViewOptions {
    pub edges: EdgeOptions,
    pub physics: PhysicsOptions,
}

impl Default for GraphViewOptions {
    fn default() -> Self {
        Self {
            edges: EdgeOptions {
                arrows: "middle".to_string(),
            },
            physics: PhysicsOptions {
                solver: "repulsion".to_string(),
                repulsion: RepulsionOptions {
                    spring_length: 200,
                    node_distance: 600,
                    damping: 0.09,
                },
            },
        }
    }
}

/// Everything needed to draw one graph page
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphView {
    pub nodes: Vec<DisplayNode>,
    pub edges: Vec<DisplayEdge>,
    pub options: GraphViewOptions,
    pub summary: GraphSummary,
}

/// Result of the render pipeline
#[derive(Debug, Clone, PartialEq)]
pub enum GraphOutcome {
    /// The report was found and rendered
    Rendered(GraphView),
    /// No report exists; the page should navigate to `location`
    Redirect { location: String },
}

impl GraphOutcome {
    /// Redirect to the search page carrying `query`
    pub fn redirect_to_search(query: &str) -> Self {
        GraphOutcome::Redirect {
            location: format!("/?query={}", urlencoding::encode(query)),
        }
    }

    pub fn is_redirect(&self) -> bool {
        matches!(self, GraphOutcome::Redirect { .. })
    }
}
