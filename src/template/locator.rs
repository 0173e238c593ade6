use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::Result;
use crate::ext::PathExt;

/// A template file and the path its output lands at, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRef {
    pub source: PathBuf,
    pub destination: String,
}

/// Lists every regular file below `root` as a template.
///
/// Entries come depth-first with siblings sorted by file name. Symbolic
/// links to files are templates like any other file; links to directories
/// are not descended into. Nothing else is filtered out.
///
/// # Arguments
/// * `root` - The template root directory
///
/// # Returns
/// * `Result<Vec<TemplateRef>>` - One reference per file, or the first walk error
pub fn locate<P: AsRef<Path>>(root: P) -> Result<Vec<TemplateRef>> {
    let root = root.as_ref();
    let mut templates = Vec::new();

    for dir_entry in WalkDir::new(root).sort_by_file_name() {
        let dir_entry = dir_entry?;
        if !is_template_file(&dir_entry) {
            continue;
        }

        let source = dir_entry.into_path();
        let destination = destination_for(root, &source)?;
        log::trace!("Found template {} -> {destination}", source.display());
        templates.push(TemplateRef { source, destination });
    }

    Ok(templates)
}

fn is_template_file(dir_entry: &DirEntry) -> bool {
    let file_type = dir_entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && dir_entry.path().is_file())
}

/// Strips `root` from `source`; a source outside `root` is kept as is.
fn destination_for(root: &Path, source: &Path) -> Result<String> {
    let relative = source.strip_prefix(root).unwrap_or(source);
    Ok(relative.to_str_checked()?.to_string())
}
