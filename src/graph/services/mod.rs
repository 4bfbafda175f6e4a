/// Graph services: pruning, transformation and summarizing
pub mod pruner;
pub mod summary;
pub mod transformer;

pub use pruner::{GraphPruner, PrunedGraph};
pub use summary::{CveReference, GraphSummary, SummaryRenderer, NVD_DETAIL_URL};
pub use transformer::{DisplayEdge, DisplayNode, GraphTransformer};
