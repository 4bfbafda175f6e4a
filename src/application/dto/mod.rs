/// Data Transfer Objects for application layer
///
/// DTOs carry data between the adapters and the use case, keeping the
/// graph domain isolated from the CLI.
mod graph_request;
mod output_format;

pub use graph_request::GraphRequest;
pub use output_format::OutputFormat;
