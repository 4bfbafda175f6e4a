//! Read models handed from the use case to the formatters

pub mod graph_view;

pub use graph_view::{GraphOutcome, GraphView, GraphViewOptions};
