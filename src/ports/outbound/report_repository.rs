use crate::graph::domain::InsightsResponse;
use crate::shared::Result;
use async_trait::async_trait;

/// ReportRepository port for fetching precomputed graph reports
///
/// This port abstracts where reports come from (the insights server, a
/// saved response on disk, a test double).
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Fetches the insights response for a query
    ///
    /// # Arguments
    /// * `query` - Repository/package identifier, passed through unvalidated
    ///
    /// # Returns
    /// The parsed response; `found == false` is a normal result, not an error
    ///
    /// # Errors
    /// Returns an error if:
    /// - The request cannot be sent or the server answers with an error status
    /// - The body is not a valid insights response
    async fn fetch_insights(&self, query: &str) -> Result<InsightsResponse>;
}
