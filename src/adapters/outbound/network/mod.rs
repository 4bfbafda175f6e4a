/// Network adapters for the insights server
mod insights_client;

pub use insights_client::InsightsClient;
