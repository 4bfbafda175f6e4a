//! Configuration file support for vulngraph.
//!
//! Provides YAML-based configuration through `vulngraph.config.yml` files,
//! and the merge of file values with command-line flags.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

use crate::adapters::outbound::formatters::DEFAULT_VIS_NETWORK_SRC;
use crate::adapters::outbound::network::InsightsClient;
use crate::application::dto::{GraphRequest, OutputFormat};
use crate::cli::Args;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "vulngraph.config.yml";

/// Insights server used when neither flag nor config names one
pub const DEFAULT_SERVER_URL: &str = "http://localhost:5000";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub server_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub skip_prune: Option<bool>,
    pub format: Option<String>,
    pub vis_network_src: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    load_config_from_path(&config_path).map(Some)
}

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref server_url) = config.server_url {
        InsightsClient::validate_server_url(server_url)
            .context("Invalid config: server_url")?;
    }

    if config.timeout_secs == Some(0) {
        bail!(
            "Invalid config: timeout_secs must be greater than 0.\n\n\
             💡 Hint: Use a number of seconds such as 30."
        );
    }

    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!("Invalid config: {}", e);
        }
    }

    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        debug!(field = %key, "Unknown config field");
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective settings for one run: flags first, then config, then defaults
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub request: GraphRequest,
    pub server_url: String,
    pub timeout: Duration,
    pub report_path: Option<PathBuf>,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub vis_network_src: String,
}

impl Settings {
    pub fn resolve(args: &Args, config: ConfigFile) -> Result<Self> {
        let request = args.graph_request(config.skip_prune.unwrap_or(false))?;

        let format = match (args.format, config.format.as_deref()) {
            (Some(format), _) => format,
            (None, Some(format)) => format.parse().map_err(anyhow::Error::msg)?,
            (None, None) => OutputFormat::default(),
        };

        let server_url = args
            .server
            .clone()
            .or(config.server_url)
            .unwrap_or_else(|| DEFAULT_SERVER_URL.to_string());

        Ok(Self {
            request,
            server_url,
            timeout: Duration::from_secs(
                config
                    .timeout_secs
                    .unwrap_or(InsightsClient::DEFAULT_TIMEOUT_SECS),
            ),
            report_path: args.report.clone(),
            format,
            output: args.output.clone(),
            vis_network_src: config
                .vis_network_src
                .unwrap_or_else(|| DEFAULT_VIS_NETWORK_SRC.to_string()),
        })
    }
}
