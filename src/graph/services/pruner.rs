use crate::graph::domain::{Edge, Vertex};
use std::collections::HashSet;
use tracing::debug;

/// Result of pruning a graph to its fixed point
#[derive(Debug, Clone, PartialEq)]
pub struct PrunedGraph {
    pub vertices: Vec<Vertex>,
    pub edges: Vec<Edge>,
    /// Number of passes that removed at least one vertex
    pub reductions: usize,
}

/// GraphPruner - removes packages that take part in no edge
///
/// A vertex is kept when it is an endpoint of some current edge or when it
/// is a CVE. An edge is kept when both of its endpoints are kept. Removing
/// vertices can orphan further vertices, so passes repeat until the vertex
/// set stops shrinking. CVE vertices are never removed, even when orphaned.
///
/// Edges naming a vertex absent from the graph are dropped before each
/// pass, so a package whose only edges dangle is removed as well.
pub struct GraphPruner;

impl GraphPruner {
    pub fn prune(vertices: Vec<Vertex>, edges: Vec<Edge>) -> PrunedGraph {
        let mut vertices = vertices;
        let mut edges = edges;
        let mut reductions = 0;

        loop {
            let edges_before = edges.len();
            edges = drop_dangling_edges(&vertices, edges);

            let surviving: Vec<usize> = {
                let keep: HashSet<&str> = edges
                    .iter()
                    .flat_map(|e| [e.from.as_str(), e.to.as_str()])
                    .collect();

                vertices
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| v.is_cve() || keep.contains(v.name.as_str()))
                    .map(|(i, _)| i)
                    .collect()
            };

            if surviving.len() == vertices.len() {
                break;
            }

            reductions += 1;
            debug!(
                pass = reductions,
                vertices_before = vertices.len(),
                vertices_after = surviving.len(),
                edges_before,
                edges_after = edges.len(),
                "Pruning pass"
            );

            vertices = retain_indices(vertices, &surviving);
        }

        PrunedGraph {
            vertices,
            edges,
            reductions,
        }
    }
}

/// Keeps the edges whose endpoints are both present in `vertices`
fn drop_dangling_edges(vertices: &[Vertex], edges: Vec<Edge>) -> Vec<Edge> {
    let names: HashSet<&str> = vertices.iter().map(|v| v.name.as_str()).collect();
    edges
        .into_iter()
        .filter(|e| names.contains(e.from.as_str()) && names.contains(e.to.as_str()))
        .collect()
}

/// Keeps the items at `indices` (ascending), preserving order
fn retain_indices<T>(items: Vec<T>, indices: &[usize]) -> Vec<T> {
    let wanted: HashSet<usize> = indices.iter().copied().collect();
    items
        .into_iter()
        .enumerate()
        .filter(|(i, _)| wanted.contains(i))
        .map(|(_, item)| item)
        .collect()
}
