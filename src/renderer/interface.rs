use crate::error::Result;

/// Textual substitution capability.
///
/// Implementations must be strict: a placeholder naming a key that is absent
/// from `context` fails with [`crate::error::Error::MissingKey`] instead of
/// rendering as an empty string.
pub trait TemplateRenderer {
    /// Renders a template string with the given context.
    ///
    /// # Arguments
    /// * `template` - Template source text
    /// * `context` - Metadata to substitute
    /// * `template_name` - Name reported in errors, normally the template path
    ///
    /// # Returns
    /// * `Result<String>` - Rendered text
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: &str,
    ) -> Result<String>;
}
