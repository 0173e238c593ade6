use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use crate::error::{Error, Result};
use crate::logger::Logger;
use crate::template::OutputTree;

/// Fails unless the current process may write into `output_root`.
///
/// Only permissions are checked; nothing is created below the root.
pub fn ensure_writable<P: AsRef<Path>>(output_root: P) -> Result<()> {
    let output_root = output_root.as_ref();
    check_write_access(output_root).map_err(|e| {
        log::debug!("Write access check on {} failed: {e}", output_root.display());
        Error::OutputNotWritable { path: output_root.display().to_string() }
    })
}

#[cfg(unix)]
fn check_write_access(path: &Path) -> std::io::Result<()> {
    use rustix::fs::{access, Access};

    access(path, Access::WRITE_OK).map_err(std::io::Error::from)
}

#[cfg(not(unix))]
fn check_write_access(path: &Path) -> std::io::Result<()> {
    let meta = std::fs::metadata(path)?;
    if meta.permissions().readonly() {
        return Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"));
    }
    Ok(())
}

/// Where a destination of the output tree lands below `output_root`.
///
/// A single leading separator is dropped so `/etc/app.conf` and
/// `etc/app.conf` both end up under the output root.
pub fn output_path<P: AsRef<Path>>(output_root: P, destination: &str) -> PathBuf {
    let relative = destination
        .strip_prefix(MAIN_SEPARATOR)
        .or_else(|| destination.strip_prefix('/'))
        .unwrap_or(destination);
    output_root.as_ref().join(relative)
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    std::fs::create_dir_all(dest_path).map_err(|source| Error::WriteFailure {
        path: dest_path.display().to_string(),
        source,
    })
}

/// Writes `content` to `dest_path`, creating parent directories and
/// truncating any existing file.
pub fn write_file<P: AsRef<Path>>(content: &[u8], dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(|source| Error::WriteFailure {
        path: dest_path.display().to_string(),
        source,
    })
}

/// Writes the output tree below `output_root`.
///
/// With `validate` set nothing touches the filesystem. Otherwise every entry
/// is written in tree order and logged just before the write. Files are
/// written one by one, so a failure can leave earlier files updated.
pub fn materialize<P: AsRef<Path>>(
    tree: &OutputTree,
    output_root: P,
    validate: bool,
    logger: &dyn Logger,
) -> Result<()> {
    if validate {
        logger.debug(&format!("Validate mode: skipping {} file(s)", tree.len()));
        return Ok(());
    }

    for (destination, content) in tree.iter() {
        let path = output_path(&output_root, destination);
        logger.info(&format!("writing {}", path.display()));
        write_file(content, &path)?;
    }
    Ok(())
}
