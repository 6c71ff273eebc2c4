//! File I/O operations for prompt files.

use super::PromptRecord;
use crate::error::{PrenError, Result};
use std::path::Path;
use tracing::debug;

impl PromptRecord {
    /// Load a prompt file from disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PrenError::StorageError(format!(
                "failed to read prompt file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "loaded prompt file");
        Self::parse(&content).map_err(|e| {
            PrenError::StorageError(format!("{} (in '{}')", e, path.display()))
        })
    }

    /// Atomically save the prompt file to disk.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = self.to_file_string()?;
        crate::fs::atomic_write_file(path, &content)
    }

    /// Serialize the prompt to the on-disk format.
    pub fn to_file_string(&self) -> Result<String> {
        let frontmatter_yaml = serde_yaml::to_string(&self.meta).map_err(|e| {
            PrenError::StorageError(format!("failed to serialize prompt frontmatter: {}", e))
        })?;

        let mut output = String::new();
        output.push_str("---\n");
        output.push_str(&frontmatter_yaml);
        output.push_str("---\n");
        output.push_str(&self.template);

        Ok(output)
    }
}
