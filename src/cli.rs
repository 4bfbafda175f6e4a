use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::application::dto::{GraphRequest, OutputFormat};
use crate::application::services::QueryResolver;
use crate::shared::Result;

/// Render the dependency/vulnerability graph of a repository
#[derive(Parser, Debug)]
#[command(name = "vulngraph")]
#[command(version)]
#[command(
    about = "Render the dependency/vulnerability graph of a repository as a vis-network page",
    long_about = None
)]
#[command(group(ArgGroup::new("target").required(true).args(["query", "url"])))]
pub struct Args {
    /// Repository or package identifier, e.g. github.com/pallets/flask
    #[arg(short, long)]
    pub query: Option<String>,

    /// Graph page URL to take `query` and `skip_prune` from
    #[arg(short, long, value_name = "PAGE_URL")]
    pub url: Option<String>,

    /// Show the full graph instead of pruning packages with no edges
    #[arg(long)]
    pub skip_prune: bool,

    /// Insights server base URL [default: http://localhost:5000]
    #[arg(short, long, value_name = "URL")]
    pub server: Option<String>,

    /// Read the insights response from a file instead of the server
    #[arg(short, long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// Output format: html or json [default: html]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Path to a config file (defaults to ./vulngraph.config.yml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Builds the render request from `--query`/`--url` and `--skip-prune`
    ///
    /// A page URL brings its own `skip_prune` state; `default_skip_prune`
    /// (from the config file) only applies to `--query`. `--skip-prune`
    /// always wins.
    pub fn graph_request(&self, default_skip_prune: bool) -> Result<GraphRequest> {
        let mut request = match (&self.url, &self.query) {
            (Some(page_url), _) => QueryResolver::from_page_url(page_url)?,
            (None, Some(query)) => GraphRequest::new(query.clone(), !default_skip_prune),
            (None, None) => GraphRequest::new("", !default_skip_prune),
        };
        if self.skip_prune {
            request.prune = false;
        }
        Ok(request)
    }
}
