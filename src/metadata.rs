use std::path::Path;

use crate::error::{Error, Result};

/// Resolved metadata every template is rendered against.
///
/// Always a JSON object once [`load_metadata`] has accepted it.
pub type Context = serde_json::Value;

/// Reads and parses the metadata document at `path`.
///
/// Any failure (unreadable file, malformed JSON, a top level that is not an
/// object) is reported as [`Error::InvalidMetadata`].
pub fn load_metadata<P: AsRef<Path>>(path: P) -> Result<Context> {
    let path = path.as_ref();
    let invalid = || Error::InvalidMetadata { path: path.display().to_string() };

    let content = std::fs::read_to_string(path).map_err(|e| {
        log::debug!("Failed to read metadata {}: {e}", path.display());
        invalid()
    })?;

    parse_metadata(&content).ok_or_else(invalid)
}

fn parse_metadata(content: &str) -> Option<Context> {
    match serde_json::from_str::<Context>(content) {
        Ok(value) if value.is_object() => Some(value),
        Ok(other) => {
            log::debug!("Metadata top level is not an object: {other}");
            None
        }
        Err(e) => {
            log::debug!("Metadata is not valid JSON: {e}");
            None
        }
    }
}
