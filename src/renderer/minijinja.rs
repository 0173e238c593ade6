use super::filters::*;
use crate::{
    constants::ENGINE_GLOBALS,
    error::{Error, Result},
    renderer::interface::TemplateRenderer,
};
use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior};
use std::collections::{BTreeSet, HashSet};

/// MiniJinja-based substitution engine running in strict mode.
///
/// Output is never HTML-escaped and the final newline of a template is kept,
/// since the results are configuration files rather than web pages.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with the strict environment.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        env.add_filter("camel_case", to_camel_case);
        env.add_filter("kebab_case", to_kebab_case);
        env.add_filter("screaming_snake_case", to_screaming_snake_case);
        env.add_filter("snake_case", to_snake_case);
        env.add_filter("regex", regex_filter);

        Self { env }
    }

    /// Turns an engine error into a classified one.
    ///
    /// Undefined-value errors are reported as a missing metadata key when the
    /// offending key can be identified from the template's free variables.
    fn classify(
        &self,
        err: minijinja::Error,
        template: &str,
        undeclared: HashSet<String>,
        context: &serde_json::Value,
        template_name: &str,
    ) -> Error {
        if err.kind() == ErrorKind::UndefinedError {
            let failing_line =
                err.line().and_then(|line| template.lines().nth(line.saturating_sub(1)));
            if let Some(key) = find_missing_key(undeclared, context, failing_line) {
                return Error::MissingKey { key, template: template_name.to_string() };
            }
        }
        Error::RenderFailure { template: template_name.to_string(), source: err }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: &str,
    ) -> Result<String> {
        let mut env = self.env.clone();
        env.add_template(template_name, template).map_err(|source| {
            Error::RenderFailure { template: template_name.to_string(), source }
        })?;

        let tmpl = env.get_template(template_name).map_err(|source| {
            Error::RenderFailure { template: template_name.to_string(), source }
        })?;

        tmpl.render(context).map_err(|err| {
            self.classify(
                err,
                template,
                tmpl.undeclared_variables(true),
                context,
                template_name,
            )
        })
    }
}

/// Picks the first free variable of a template that does not resolve in `context`.
///
/// Variables mentioned on `failing_line` win over the rest so the reported key
/// is the one that actually stopped the render. The result is the dotted path
/// up to and including the first segment that is absent.
fn find_missing_key(
    undeclared: HashSet<String>,
    context: &serde_json::Value,
    failing_line: Option<&str>,
) -> Option<String> {
    let candidates: BTreeSet<String> = undeclared
        .into_iter()
        .filter(|var| {
            let root = var.split('.').next().unwrap_or_default();
            !ENGINE_GLOBALS.contains(&root)
        })
        .collect();

    let missing: Vec<String> =
        candidates.iter().filter_map(|var| unresolved_path(var, context)).collect();

    if let Some(line) = failing_line {
        if let Some(key) = missing.iter().find(|key| line.contains(key.as_str())) {
            return Some(key.clone());
        }
    }
    missing.into_iter().next()
}

fn unresolved_path(var: &str, context: &serde_json::Value) -> Option<String> {
    let mut current = context;
    let mut resolved = Vec::new();
    for segment in var.split('.') {
        resolved.push(segment);
        match current.get(segment) {
            Some(next) => current = next,
            None => return Some(resolved.join(".")),
        }
    }
    None
}
