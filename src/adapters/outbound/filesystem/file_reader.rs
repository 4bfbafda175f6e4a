use crate::graph::domain::{InsightsResponse, Report};
use crate::ports::outbound::ReportRepository;
use crate::shared::error::GraphError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_REPORT_FILE_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Either a full insights response or the report it would carry
#[derive(Deserialize)]
#[serde(untagged)]
enum SavedReport {
    Response(InsightsResponse),
    Bare(Report),
}

/// FileReportReader adapter serving a saved insights response from disk
///
/// The query passed to `fetch_insights` is ignored; the file is the answer
/// to whatever was asked. A bare report (no `found` wrapper) counts as found.
pub struct FileReportReader {
    path: PathBuf,
}

impl FileReportReader {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_checked(path: &Path) -> Result<String> {
        validate_regular_file(path, "Report file")?;

        let metadata = fs::metadata(path).map_err(|e| GraphError::FileReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;
        validate_file_size(metadata.len(), path, MAX_REPORT_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| {
            GraphError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }

    /// Parses a saved response, accepting the bare report shape too
    pub fn parse(content: &str, source_name: &str) -> Result<InsightsResponse> {
        let saved: SavedReport =
            serde_json::from_str(content).map_err(|e| GraphError::ReportParseError {
                source_name: source_name.to_string(),
                details: e.to_string(),
            })?;

        Ok(match saved {
            SavedReport::Response(response) => response,
            SavedReport::Bare(report) => InsightsResponse::found(report),
        })
    }
}

#[async_trait]
impl ReportRepository for FileReportReader {
    async fn fetch_insights(&self, query: &str) -> Result<InsightsResponse> {
        debug!(path = %self.path.display(), query, "Reading saved report");
        let content = Self::read_checked(&self.path)?;
        Self::parse(&content, &self.path.display().to_string())
    }
}
