/// Application services that sit in front of the use case
mod query_resolver;

pub use query_resolver::{QueryResolver, QUERY_PARAM, SKIP_PRUNE_PARAM};
