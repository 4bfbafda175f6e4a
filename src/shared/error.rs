use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts tell a missing report apart from a real failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the graph page was rendered
    Success = 0,
    /// The server has no report for the query; a redirect page was emitted
    ReportNotFound = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (network error, malformed report, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ReportNotFound => write!(f, "Report Not Found (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for graph rendering.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Failed to fetch graph report for '{query}'\nDetails: {details}\n\n💡 Hint: Check that the insights server is running and reachable")]
    ReportFetchError { query: String, details: String },

    #[error("Failed to parse graph report from {source_name}\nDetails: {details}\n\n💡 Hint: The response must be JSON shaped like {{\"found\": true, \"report\": {{...}}}}")]
    ReportParseError { source_name: String, details: String },

    #[error("Server reported a graph for '{query}' but sent no report body")]
    MissingReport { query: String },

    #[error("Invalid page URL: {url}\nReason: {reason}\n\n💡 Hint: Pass an absolute URL such as http://localhost:5000/graph?query=owner/repo")]
    InvalidPageUrl { url: String, reason: String },

    #[error("Invalid server URL: {url}\nReason: {reason}\n\n💡 Hint: Use an absolute http(s) URL such as http://localhost:5000")]
    InvalidServerUrl { url: String, reason: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },
}
