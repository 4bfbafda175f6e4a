use crate::application::read_models::GraphOutcome;
use crate::shared::Result;

/// GraphFormatter port for turning a render outcome into output text
pub trait GraphFormatter {
    /// Formats a rendered graph, or the redirect that replaces it
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, outcome: &GraphOutcome) -> Result<String>;
}
