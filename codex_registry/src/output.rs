//! Serialization of the compiled registry to disk.

use std::fs;
use std::path::Path;

use crate::card::CardRecord;
use crate::error::{Error, Result};

/// Write the records as a pretty-printed JSON array.
///
/// Missing ancestor directories of `path` are created first. The file is
/// fully overwritten; serialization happens before the write, so a failed
/// run never leaves a partial artifact behind.
///
/// # Errors
/// Returns an error if directory creation or the write fails.
pub fn write_registry(path: &Path, cards: &[CardRecord]) -> Result<()> {
    let json = serde_json::to_string_pretty(cards).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source: source.into(),
    })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|source| Error::WriteOutput {
            path: path.to_path_buf(),
            source,
        })?;
    }

    fs::write(path, json).map_err(|source| Error::WriteOutput {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a source document.
///
/// # Errors
/// Returns an error if the file is missing or unreadable.
pub fn read_source(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| Error::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}
