//! Entry points of the apply pipeline.
//!
//! Metadata is loaded once, every template below the template root is
//! rendered into an [`OutputTree`], and only then is anything written. A render
//! failure therefore never leaves a half-written tree behind.

use std::path::Path;
use std::time::Duration;

use crate::error::Result;
use crate::ioutils::materialize;
use crate::logger::Logger;
use crate::metadata::load_metadata;
use crate::renderer::MiniJinjaRenderer;
use crate::template::{build_tree, locate, CollisionPolicy, OutputTree, TemplateProcessor};

/// Knobs shared by both entry points.
#[derive(Debug, Clone, Default)]
pub struct ApplyOptions {
    pub collision_policy: CollisionPolicy,
    /// Upper bound for each executable template; `None` waits forever.
    pub timeout: Option<Duration>,
}

/// Renders the whole template tree without writing anything.
pub fn build_only<M, T>(
    metadata_path: M,
    template_root: T,
    options: &ApplyOptions,
    logger: &dyn Logger,
) -> Result<OutputTree>
where
    M: AsRef<Path>,
    T: AsRef<Path>,
{
    render_tree(metadata_path.as_ref(), template_root.as_ref(), options, logger)
}

/// Renders the whole template tree and writes it below `output_root`.
///
/// Returns the tree that was written.
pub fn build_and_write<M, T, O>(
    metadata_path: M,
    template_root: T,
    output_root: O,
    options: &ApplyOptions,
    logger: &dyn Logger,
) -> Result<OutputTree>
where
    M: AsRef<Path>,
    T: AsRef<Path>,
    O: AsRef<Path>,
{
    install_config(metadata_path, template_root, output_root, false, options, logger)
}

/// Renders the template tree and writes it unless `validate` is set.
pub fn install_config<M, T, O>(
    metadata_path: M,
    template_root: T,
    output_root: O,
    validate: bool,
    options: &ApplyOptions,
    logger: &dyn Logger,
) -> Result<OutputTree>
where
    M: AsRef<Path>,
    T: AsRef<Path>,
    O: AsRef<Path>,
{
    let tree = render_tree(metadata_path.as_ref(), template_root.as_ref(), options, logger)?;
    materialize(&tree, output_root, validate, logger)?;
    Ok(tree)
}

fn render_tree(
    metadata_path: &Path,
    template_root: &Path,
    options: &ApplyOptions,
    logger: &dyn Logger,
) -> Result<OutputTree> {
    let context = load_metadata(metadata_path)?;
    let templates = locate(template_root)?;
    logger.debug(&format!(
        "Rendering {} template(s) from {}",
        templates.len(),
        template_root.display()
    ));

    let engine = MiniJinjaRenderer::new();
    let processor = TemplateProcessor::new(&engine, &context, options.timeout);
    build_tree(&templates, &processor, options.collision_policy)
}
