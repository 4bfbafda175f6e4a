use crate::graph::domain::InsightsResponse;
use crate::ports::outbound::ReportRepository;
use crate::shared::error::GraphError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};
use url::Url;

/// InsightsClient adapter fetching reports from the insights server
///
/// Issues a single `GET {server}/get_repo_insights?query=...` per render.
/// A failed request is not retried.
pub struct InsightsClient {
    client: reqwest::Client,
    base_url: String,
}

impl InsightsClient {
    const INSIGHTS_PATH: &'static str = "/get_repo_insights";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

    /// Creates a client for `server_url` with the given request timeout
    ///
    /// # Errors
    /// Returns an error if `server_url` is not an absolute http(s) URL or
    /// the HTTP client cannot be built
    pub fn new(server_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Self::validate_server_url(server_url)?;

        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("vulngraph/{}", version);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, base_url })
    }

    /// Checks the scheme and host, returning the URL without a trailing slash
    pub fn validate_server_url(server_url: &str) -> Result<String> {
        let invalid = |reason: String| GraphError::InvalidServerUrl {
            url: server_url.to_string(),
            reason,
        };

        let url = Url::parse(server_url).map_err(|e| invalid(e.to_string()))?;
        match url.scheme() {
            "http" | "https" => {}
            other => return Err(invalid(format!("Unsupported scheme '{}'", other)).into()),
        }
        if url.host_str().is_none() {
            return Err(invalid("URL has no host".to_string()).into());
        }

        Ok(server_url.trim_end_matches('/').to_string())
    }

    /// Full request URL for a query
    pub fn endpoint_url(&self, query: &str) -> String {
        format!(
            "{}{}?query={}",
            self.base_url,
            Self::INSIGHTS_PATH,
            urlencoding::encode(query)
        )
    }
}

#[async_trait]
impl ReportRepository for InsightsClient {
    async fn fetch_insights(&self, query: &str) -> Result<InsightsResponse> {
        let url = self.endpoint_url(query);
        info!(%url, "Requesting report");

        let fetch_error = |details: String| GraphError::ReportFetchError {
            query: query.to_string(),
            details,
        };

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(fetch_error(format!("Server returned status code {}", status)).into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| fetch_error(e.to_string()))?;
        debug!(bytes = body.len(), "Received report body");

        serde_json::from_str(&body).map_err(|e| {
            GraphError::ReportParseError {
                source_name: url.clone(),
                details: e.to_string(),
            }
            .into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(server: &str) -> InsightsClient {
        InsightsClient::new(server, Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn test_endpoint_url_encodes_query() {
        let client = client("http://localhost:5000");
        assert_eq!(
            client.endpoint_url("github.com/psf/requests"),
            "http://localhost:5000/get_repo_insights?query=github.com%2Fpsf%2Frequests"
        );
    }

    #[test]
    fn test_endpoint_url_strips_trailing_slash() {
        let client = client("https://insights.example.com/");
        assert_eq!(
            client.endpoint_url("a&b"),
            "https://insights.example.com/get_repo_insights?query=a%26b"
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let result = InsightsClient::new("ftp://localhost", Duration::from_secs(5));
        let err = result.err().unwrap();
        assert!(err.to_string().contains("Unsupported scheme 'ftp'"));
    }

    #[test]
    fn test_rejects_relative_url() {
        let err = InsightsClient::validate_server_url("localhost:5000/api").unwrap_err();
        assert!(err.to_string().contains("Invalid server URL"));
    }

    #[tokio::test]
    async fn test_unreachable_server_is_fetch_error() {
        // Port 9 (discard) on localhost is expected to refuse connections
        let client = client("http://127.0.0.1:9");
        let err = client.fetch_insights("flask").await.unwrap_err();
        assert!(err.to_string().contains("Failed to fetch graph report for 'flask'"));
    }
}
