//! vulngraph - dependency/vulnerability graph renderer
//!
//! Fetches a precomputed graph report for a repository or package from an
//! insights server, prunes packages that take part in no edge, and renders
//! the result as a standalone vis-network page with a summary panel.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`graph`): report records, severity tiers, node styles,
//!   pruning and transformation
//! - **Application Layer** (`application`): the render use case, request
//!   resolution and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use vulngraph::prelude::*;
//! use std::time::Duration;
//!
//! # async fn example() -> Result<()> {
//! let client = InsightsClient::new("http://localhost:5000", Duration::from_secs(30))?;
//! let use_case = RenderGraphUseCase::new(client, StderrProgressReporter::new());
//!
//! let request = GraphRequest::new("github.com/pallets/flask", true);
//! let outcome = use_case.execute(request).await?;
//!
//! let page = HtmlFormatter::default().format(&outcome)?;
//! println!("{}", page);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod graph;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileReportReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{HtmlFormatter, JsonFormatter};
    pub use crate::adapters::outbound::network::InsightsClient;
    pub use crate::application::dto::{GraphRequest, OutputFormat};
    pub use crate::application::read_models::{GraphOutcome, GraphView};
    pub use crate::application::services::QueryResolver;
    pub use crate::application::use_cases::RenderGraphUseCase;
    pub use crate::graph::domain::{
        Edge, EdgeKind, InsightsResponse, Report, ReportMeta, SeverityTier, Vertex, VertexKind,
    };
    pub use crate::graph::services::{GraphPruner, GraphTransformer, SummaryRenderer};
    pub use crate::ports::outbound::{
        GraphFormatter, OutputPresenter, ProgressReporter, ReportRepository,
    };
    pub use crate::shared::Result;
}
