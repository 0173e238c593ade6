#![allow(dead_code)]

use log::debug;
use os_config_applier::applier::{build_and_write, ApplyOptions};
use os_config_applier::logger::MemoryLogger;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Prints a diff of files and their contents between two directories.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files = |dir: &Path| -> std::collections::BTreeSet<PathBuf> {
        WalkDir::new(dir)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
            .collect()
    };
    let files1 = files(dir1);
    let files2 = files(dir2);

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    for file in files1.difference(&files2) {
        println!("  + {:?} (only in actual)", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?} (only in expected)", file);
    }
    for file in files1.intersection(&files2) {
        let content1 = fs::read(dir1.join(file)).unwrap();
        let content2 = fs::read(dir2.join(file)).unwrap();
        if content1 != content2 {
            println!("\n  File: {:?}", file);
            println!("  --- Actual content:\n{}", String::from_utf8_lossy(&content1));
            println!("  --- Expected content:\n{}", String::from_utf8_lossy(&content2));
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Applies `template_dir` with `metadata` into a fresh directory and asserts the
/// result is identical to `expected_dir`.
pub fn apply_and_assert(template_dir: &str, metadata: &str, expected_dir: &str) {
    let tmp_dir = TempDir::new().unwrap();
    build_and_write(
        metadata,
        template_dir,
        tmp_dir.path(),
        &ApplyOptions::default(),
        &MemoryLogger::new(),
    )
    .unwrap();

    match dir_diff::is_different(tmp_dir.path(), expected_dir) {
        Ok(true) => {
            print_dir_diff(tmp_dir.path(), expected_dir.as_ref());
            panic!("Directories differ. See above for details.");
        }
        Ok(false) => {}
        Err(e) => debug!("Error comparing directories: {e:?}"),
    }
    assert!(!dir_diff::is_different(tmp_dir.path(), expected_dir).unwrap());
}

/// A throwaway metadata file, template root and output root.
pub struct Workspace {
    pub dir: TempDir,
    pub metadata: PathBuf,
    pub templates: PathBuf,
    pub output: PathBuf,
}

impl Workspace {
    pub fn new(metadata: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let metadata_path = dir.path().join("metadata.json");
        fs::write(&metadata_path, metadata).unwrap();
        let templates = dir.path().join("templates");
        let output = dir.path().join("output");
        fs::create_dir_all(&templates).unwrap();
        fs::create_dir_all(&output).unwrap();
        Self { dir, metadata: metadata_path, templates, output }
    }

    /// Adds a plain text template at `relative` below the template root.
    pub fn template(&self, relative: &str, body: &str) -> PathBuf {
        let path = self.templates.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, body).unwrap();
        path
    }

    /// Adds an executable template at `relative` below the template root.
    #[cfg(unix)]
    pub fn executable(&self, relative: &str, body: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.template(relative, body);
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    pub fn output_files(&self) -> Vec<PathBuf> {
        WalkDir::new(&self.output)
            .sort_by_file_name()
            .into_iter()
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().strip_prefix(&self.output).unwrap().to_path_buf())
            .collect()
    }
}
