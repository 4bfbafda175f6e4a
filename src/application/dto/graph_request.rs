/// GraphRequest - what to render, resolved once at startup
///
/// Carries the query and the prune flag through the fetch/render pipeline
/// instead of ambient globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphRequest {
    /// Repository/package identifier to graph (empty when none was given)
    pub query: String,
    /// Whether uninteresting packages are pruned before rendering
    pub prune: bool,
}

impl GraphRequest {
    pub fn new(query: impl Into<String>, prune: bool) -> Self {
        Self {
            query: query.into(),
            prune,
        }
    }
}
