use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use vulngraph::prelude::*;

/// Mock ReportRepository serving canned responses per query
///
/// Unknown queries answer `found: false`, like the real server.
#[derive(Default, Clone)]
pub struct MockReportRepository {
    pub reports: HashMap<String, InsightsResponse>,
    pub should_fail: bool,
    pub requested: Arc<Mutex<Vec<String>>>,
}

impl MockReportRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_report(mut self, query: &str, report: Report) -> Self {
        self.reports
            .insert(query.to_string(), InsightsResponse::found(report));
        self
    }

    pub fn with_response(mut self, query: &str, response: InsightsResponse) -> Self {
        self.reports.insert(query.to_string(), response);
        self
    }

    pub fn with_failure() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn requested_queries(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportRepository for MockReportRepository {
    async fn fetch_insights(&self, query: &str) -> Result<InsightsResponse> {
        self.requested.lock().unwrap().push(query.to_string());

        if self.should_fail {
            anyhow::bail!("Mock report repository failure");
        }

        Ok(self
            .reports
            .get(query)
            .cloned()
            .unwrap_or_else(InsightsResponse::not_found))
    }
}
