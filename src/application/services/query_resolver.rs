use crate::application::dto::GraphRequest;
use crate::shared::error::GraphError;
use crate::shared::Result;
use url::Url;

/// Page URL parameter holding the repository/package identifier
pub const QUERY_PARAM: &str = "query";

/// Page URL parameter whose presence disables pruning
pub const SKIP_PRUNE_PARAM: &str = "skip_prune";

/// QueryResolver - derives a [`GraphRequest`] from a graph page URL
///
/// `query` is taken as-is (no validation; a missing parameter yields an
/// empty query). Any occurrence of `skip_prune`, whatever its value,
/// switches pruning off.
pub struct QueryResolver;

impl QueryResolver {
    pub fn from_page_url(page_url: &str) -> Result<GraphRequest> {
        let url = Url::parse(page_url).map_err(|e| GraphError::InvalidPageUrl {
            url: page_url.to_string(),
            reason: e.to_string(),
        })?;

        Ok(Self::from_url(&url))
    }

    pub fn from_url(url: &Url) -> GraphRequest {
        let mut query = None;
        let mut skip_prune = false;

        for (key, value) in url.query_pairs() {
            if key == QUERY_PARAM && query.is_none() {
                query = Some(value.into_owned());
            } else if key == SKIP_PRUNE_PARAM {
                skip_prune = true;
            }
        }

        GraphRequest::new(query.unwrap_or_default(), !skip_prune)
    }
}
