use std::fs;
use std::time::Duration;

use crate::error::{Error, Result};
use crate::ext::PathExt;
use crate::renderer::{render_executable, TemplateRenderer};

use super::locator::TemplateRef;

/// Renders single templates against one metadata context.
pub struct TemplateProcessor<'a> {
    /// Dependencies
    engine: &'a dyn TemplateRenderer,

    /// Other
    context: &'a serde_json::Value,
    timeout: Option<Duration>,
}

impl<'a> TemplateProcessor<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        context: &'a serde_json::Value,
        timeout: Option<Duration>,
    ) -> Self {
        Self { engine, context, timeout }
    }

    /// Renders a template and returns the content of its output file.
    ///
    /// Executable files are run and their stdout becomes the content; every
    /// other file is read as text and substituted by the engine.
    ///
    /// # Arguments
    /// * `template` - The template to render
    ///
    /// # Returns
    /// * `Result<Vec<u8>>` - The rendered content or a classified error
    ///
    pub fn process(&self, template: &TemplateRef) -> Result<Vec<u8>> {
        let source = template.source.as_path();

        if source.is_executable() {
            log::debug!("Rendering {} as executable template", source.display());
            return render_executable(source, self.context, self.timeout);
        }

        log::debug!("Rendering {} as text template", source.display());
        let template_name = source.display().to_string();
        let text = fs::read(source)?;
        let text = String::from_utf8(text).map_err(|e| Error::RenderFailure {
            template: template_name.clone(),
            source: minijinja::Error::new(
                minijinja::ErrorKind::InvalidOperation,
                format!("template is not valid UTF-8: {e}"),
            ),
        })?;

        let content = self.engine.render(&text, self.context, &template_name)?;
        Ok(content.into_bytes())
    }
}
