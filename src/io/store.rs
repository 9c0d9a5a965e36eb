use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::model::Item;

/// File holding the persisted snapshot, inside the fade directory
pub const ITEMS_FILE: &str = "items.json";

/// Error type for snapshot load/save
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub fn items_path(fade_dir: &Path) -> PathBuf {
    fade_dir.join(ITEMS_FILE)
}

/// Read the persisted snapshot. An absent file is an empty list; anything
/// unreadable or unparsable is an error for the caller to surface (the
/// list then starts empty; partial data is never recovered).
pub fn load_items(fade_dir: &Path) -> Result<Vec<Item>, StoreError> {
    let path = items_path(fade_dir);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(StoreError::Read { path, source: e }),
    };
    serde_json::from_str(&text).map_err(|e| StoreError::Malformed { path, source: e })
}

/// Overwrite the snapshot wholesale. Writes a temp file in the fade
/// directory and renames it over the target, so readers never observe a
/// partial snapshot.
pub fn save_items(fade_dir: &Path, items: &[Item]) -> Result<(), StoreError> {
    let path = items_path(fade_dir);
    fs::create_dir_all(fade_dir).map_err(|e| StoreError::Write {
        path: path.clone(),
        source: e,
    })?;

    let json = serde_json::to_string_pretty(items).map_err(|e| StoreError::Write {
        path: path.clone(),
        source: e.into(),
    })?;

    let mut tmp = tempfile::NamedTempFile::new_in(fade_dir).map_err(|e| StoreError::Write {
        path: path.clone(),
        source: e,
    })?;
    tmp.write_all(json.as_bytes()).map_err(|e| StoreError::Write {
        path: path.clone(),
        source: e,
    })?;
    tmp.persist(&path).map_err(|e| StoreError::Write {
        path: path.clone(),
        source: e.error,
    })?;
    Ok(())
}
