use crate::adapters::outbound::formatters::{HtmlFormatter, JsonFormatter};
use crate::application::dto::OutputFormat;
use crate::ports::outbound::GraphFormatter;

/// Factory for creating graph formatters
///
/// Selects the formatter adapter for an output format. The vis-network
/// script location only matters to the HTML page.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output format
    ///
    /// # Arguments
    /// * `format` - The output format to create a formatter for
    /// * `vis_network_src` - URL of the vis-network standalone bundle
    ///
    /// # Examples
    /// ```
    /// use vulngraph::application::dto::OutputFormat;
    /// use vulngraph::application::factories::FormatterFactory;
    ///
    /// let formatter = FormatterFactory::create(OutputFormat::Html, "vis-network.min.js");
    /// ```
    pub fn create(format: OutputFormat, vis_network_src: &str) -> Box<dyn GraphFormatter> {
        match format {
            OutputFormat::Html => Box::new(HtmlFormatter::new(vis_network_src)),
            OutputFormat::Json => Box::new(JsonFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output format
    ///
    /// # Examples
    /// ```
    /// use vulngraph::application::dto::OutputFormat;
    /// use vulngraph::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputFormat::Html);
    /// assert_eq!(message, "📝 Rendering HTML graph page...");
    /// ```
    pub fn progress_message(format: OutputFormat) -> &'static str {
        match format {
            OutputFormat::Html => "📝 Rendering HTML graph page...",
            OutputFormat::Json => "📝 Rendering JSON graph data...",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::read_models::GraphOutcome;

    #[test]
    fn test_html_formatter_renders_redirect_page() {
        let formatter = FormatterFactory::create(OutputFormat::Html, "vis.js");
        let output = formatter
            .format(&GraphOutcome::redirect_to_search("flask"))
            .unwrap();
        assert!(output.contains("<!DOCTYPE html>"));
    }

    #[test]
    fn test_json_formatter_renders_redirect_object() {
        let formatter = FormatterFactory::create(OutputFormat::Json, "vis.js");
        let output = formatter
            .format(&GraphOutcome::redirect_to_search("flask"))
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["redirect"], "/?query=flask");
    }

    #[test]
    fn test_progress_messages() {
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Json),
            "📝 Rendering JSON graph data..."
        );
        assert_eq!(
            FormatterFactory::progress_message(OutputFormat::Html),
            "📝 Rendering HTML graph page..."
        );
    }
}
