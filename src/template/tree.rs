use indexmap::IndexMap;
use std::collections::HashMap;
use std::path::Path;

use crate::error::{Error, Result};

use super::locator::TemplateRef;
use super::processor::TemplateProcessor;

/// What to do when two templates render to the same destination.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// The template rendered last replaces the earlier content.
    #[default]
    Overwrite,
    /// Fail the build with [`Error::DestinationCollision`].
    Reject,
}

/// Rendered content keyed by destination path relative to the output root.
///
/// Iteration follows the order in which destinations were first inserted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputTree {
    entries: IndexMap<String, Vec<u8>>,
}

impl OutputTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `content` under `destination`, returning the content it replaced.
    pub fn insert(&mut self, destination: String, content: Vec<u8>) -> Option<Vec<u8>> {
        self.entries.insert(destination, content)
    }

    pub fn get(&self, destination: &str) -> Option<&[u8]> {
        self.entries.get(destination).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[u8])> {
        self.entries.iter().map(|(path, content)| (path.as_str(), content.as_slice()))
    }
}

/// Renders every template and collects the results.
///
/// Templates are rendered in the given order and the first failure aborts the
/// build; later templates are never rendered.
///
/// # Arguments
/// * `templates` - Templates in locator order
/// * `processor` - Renders a single template
/// * `policy` - How destination collisions are handled
///
/// # Returns
/// * `Result<OutputTree>` - The complete tree or the first classified error
pub fn build_tree(
    templates: &[TemplateRef],
    processor: &TemplateProcessor<'_>,
    policy: CollisionPolicy,
) -> Result<OutputTree> {
    let mut tree = OutputTree::new();
    let mut sources: HashMap<&str, &Path> = HashMap::new();

    for template in templates {
        if policy == CollisionPolicy::Reject {
            if let Some(first) = sources.get(template.destination.as_str()) {
                return Err(Error::DestinationCollision {
                    destination: template.destination.clone(),
                    first: first.display().to_string(),
                    second: template.source.display().to_string(),
                });
            }
        }

        let content = processor.process(template)?;
        sources.insert(template.destination.as_str(), template.source.as_path());

        if tree.insert(template.destination.clone(), content).is_some() {
            log::debug!(
                "Destination {} overwritten by {}",
                template.destination,
                template.source.display()
            );
        }
    }

    Ok(tree)
}
