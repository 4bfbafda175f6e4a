/// Graph domain layer
///
/// Report records, the pruning fixed point, and the mapping of report
/// records onto vis-network nodes, edges and the summary panel. Nothing in
/// this layer performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
