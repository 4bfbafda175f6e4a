/// Formatter adapters for the graph output formats
mod html_formatter;
mod json_formatter;

pub use html_formatter::{HtmlFormatter, DEFAULT_VIS_NETWORK_SRC};
pub use json_formatter::JsonFormatter;
