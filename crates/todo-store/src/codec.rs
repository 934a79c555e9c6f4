//! JSON codec for the data file.
//!
//! These are the only functions that touch disk. The file is a pretty-printed
//! JSON array (two-space indent). A missing file and an empty file both mean
//! "no items yet".
//!
//! Writes go to a temp file in the target directory which is then renamed over
//! the target, so a concurrent reader sees either the old document or the new
//! one, never a partial write.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use todo_core::Item;

use crate::error::StoreError;

/// Serialize `items` as an indented JSON array. An empty list encodes as `[]`.
///
/// # Errors
///
/// Returns `StoreError::Encode` if serialization fails.
pub fn encode(items: &[Item]) -> Result<Vec<u8>, StoreError> {
    serde_json::to_vec_pretty(items).map_err(StoreError::Encode)
}

/// Parse a JSON array of items. Empty or whitespace-only input is an empty list.
///
/// # Errors
///
/// Returns the `serde_json` error for malformed input; [`load`] wraps it with
/// the file path.
pub fn decode(bytes: &[u8]) -> Result<Vec<Item>, serde_json::Error> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(Vec::new());
    }
    serde_json::from_slice(bytes)
}

/// Read the list stored at `path`.
///
/// # Errors
///
/// Returns `StoreError::Io` if the file exists but cannot be read, or
/// `StoreError::Decode` if its content is not a JSON array of items.
pub fn load(path: &Path) -> Result<Vec<Item>, StoreError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "data file missing; starting with empty list");
            return Ok(Vec::new());
        }
        Err(error) => {
            tracing::error!(%error, path = %path.display(), "failed to read data file");
            return Err(StoreError::io(path, error));
        }
    };

    decode(&bytes).map_err(|source| {
        tracing::error!(error = %source, path = %path.display(), "failed to decode data file");
        StoreError::Decode {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Write `items` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns `StoreError::Encode` if serialization fails or `StoreError::Io` if
/// the directory, temp file, or final rename fails.
pub fn save(path: &Path, items: &[Item]) -> Result<(), StoreError> {
    let data = encode(items)?;
    write_atomic(path, &data).inspect_err(|error| {
        tracing::error!(%error, path = %path.display(), "failed to save todos");
    })?;
    tracing::info!(path = %path.display(), count = items.len(), "todos saved");
    Ok(())
}

fn write_atomic(path: &Path, data: &[u8]) -> Result<(), StoreError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| StoreError::io(dir, e))?;

    let mut temp = NamedTempFile::new_in(dir).map_err(|e| StoreError::io(dir, e))?;
    temp.write_all(data).map_err(|e| StoreError::io(temp.path(), e))?;
    temp.as_file()
        .sync_all()
        .map_err(|e| StoreError::io(temp.path(), e))?;
    temp.persist(path).map_err(|e| StoreError::io(path, e.error))?;
    Ok(())
}
