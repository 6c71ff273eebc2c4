//! Filesystem helpers for the prompt store.
//!
//! Prompt files are written atomically: content goes to a temporary file in
//! the target directory, is synced, and is then renamed over the target. A
//! crash can leave a stray `.{name}.{pid}.tmp` file behind but never a
//! truncated prompt.

use crate::error::{PrenError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically write a string to a file, creating parent directories.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            PrenError::StorageError(format!(
                "failed to create directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    let temp_path = temp_path_for(path)?;
    if let Err(e) = write_synced(&temp_path, content.as_bytes()) {
        let _ = fs::remove_file(&temp_path);
        return Err(e);
    }

    // rename() replaces an existing target on every supported platform.
    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        PrenError::StorageError(format!("failed to replace '{}': {}", path.display(), e))
    })
}

/// Temporary sibling path for `target`.
fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let file_name = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            PrenError::StorageError(format!("invalid file path '{}'", target.display()))
        })?;

    let temp_name = format!(".{}.{}.tmp", file_name, std::process::id());
    Ok(target.with_file_name(temp_name))
}

fn write_synced(path: &Path, content: &[u8]) -> Result<()> {
    let write = || -> std::io::Result<()> {
        let mut file = File::create(path)?;
        file.write_all(content)?;
        file.sync_all()
    };

    write().map_err(|e| {
        PrenError::StorageError(format!(
            "failed to write temporary file '{}': {}",
            path.display(),
            e
        ))
    })
}
