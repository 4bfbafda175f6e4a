use crate::application::dto::GraphRequest;
use crate::application::read_models::{GraphOutcome, GraphView, GraphViewOptions};
use crate::graph::domain::Report;
use crate::graph::services::{GraphPruner, GraphTransformer, SummaryRenderer};
use crate::ports::outbound::{ProgressReporter, ReportRepository};
use crate::shared::error::GraphError;
use crate::shared::Result;
use tracing::{debug, info};

/// RenderGraphUseCase - fetches a report and turns it into a graph view
///
/// Flow: fetch the insights response, redirect to the search page when
/// nothing was found, otherwise prune (unless the request opts out),
/// transform to vis-network records and build the summary.
///
/// # Type Parameters
/// * `REPO` - ReportRepository implementation
/// * `PR` - ProgressReporter implementation
pub struct RenderGraphUseCase<REPO, PR> {
    report_repository: REPO,
    progress_reporter: PR,
}

impl<REPO, PR> RenderGraphUseCase<REPO, PR>
where
    REPO: ReportRepository,
    PR: ProgressReporter,
{
    /// Creates a new RenderGraphUseCase with injected dependencies
    pub fn new(report_repository: REPO, progress_reporter: PR) -> Self {
        Self {
            report_repository,
            progress_reporter,
        }
    }

    /// Executes the render pipeline for one request
    ///
    /// # Returns
    /// `GraphOutcome::Redirect` when the server has no report for the
    /// query, `GraphOutcome::Rendered` otherwise
    ///
    /// # Errors
    /// Returns an error if the report cannot be fetched or decoded, or if
    /// the response claims a report was found but carries none
    pub async fn execute(&self, request: GraphRequest) -> Result<GraphOutcome> {
        self.progress_reporter
            .report_waiting(&format!("🔍 Fetching report for: {}", request.query));
        info!(query = %request.query, prune = request.prune, "Fetching insights");

        let response = match self.report_repository.fetch_insights(&request.query).await {
            Ok(response) => response,
            Err(e) => {
                self.progress_reporter
                    .report_error("❌ Failed to fetch the report");
                return Err(e);
            }
        };

        if !response.found {
            self.progress_reporter.report_error(&format!(
                "⚠️  No report found for '{}', redirecting to search",
                request.query
            ));
            return Ok(GraphOutcome::redirect_to_search(&request.query));
        }

        let report = response.report.ok_or_else(|| GraphError::MissingReport {
            query: request.query.clone(),
        })?;

        self.progress_reporter.report(&format!(
            "✅ Report loaded: {} vertices, {} edges",
            report.vertices.len(),
            report.edges.len()
        ));

        let view = self.build_view(&request, report);

        self.progress_reporter
            .report_completion(&format!("📊 {}", view.summary.headline()));
        Ok(GraphOutcome::Rendered(view))
    }

    fn build_view(&self, request: &GraphRequest, report: Report) -> GraphView {
        let Report {
            vertices,
            edges,
            meta,
        } = report;

        let (vertices, edges) = if request.prune {
            let before = (vertices.len(), edges.len());
            let pruned = GraphPruner::prune(vertices, edges);
            debug!(
                passes = pruned.reductions,
                vertices_removed = before.0 - pruned.vertices.len(),
                edges_removed = before.1 - pruned.edges.len(),
                "Pruned graph"
            );
            self.progress_reporter.report(&format!(
                "✂️  Pruned graph to {} vertices, {} edges",
                pruned.vertices.len(),
                pruned.edges.len()
            ));
            (pruned.vertices, pruned.edges)
        } else {
            (vertices, edges)
        };

        let summary =
            SummaryRenderer::summarize(&request.query, &vertices, &edges, &meta, request.prune);

        GraphView {
            nodes: GraphTransformer::nodes(&vertices),
            edges: GraphTransformer::edges(&edges),
            options: GraphViewOptions::default(),
            summary,
        }
    }
}
