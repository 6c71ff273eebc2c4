//! Directory-backed prompt storage.
//!
//! Each prompt lives in `<root>/<name>.md`. The file stem is the prompt's
//! identity; a frontmatter `name` that disagrees with it is overridden (with
//! a warning) so lookups by name always find what listing shows.

use super::PromptLibrary;
use crate::error::{PrenError, Result};
use crate::prompt::PromptRecord;
use crate::template::Arguments;
use regex::Regex;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use tracing::{debug, warn};

/// File extension for prompt files.
const PROMPT_EXTENSION: &str = "md";

/// Names that can be stored as a single file without escaping.
static PROMPT_NAME_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_.-]*$").expect("Invalid prompt name regex")
});

/// Validate a prompt name for on-disk storage.
///
/// # Returns
///
/// * `Ok(())` - The name is usable as a file stem
/// * `Err(PrenError::UserError)` - The name is empty or contains path characters
pub fn validate_prompt_name(name: &str) -> Result<()> {
    if PROMPT_NAME_REGEX.is_match(name) {
        Ok(())
    } else {
        Err(PrenError::UserError(format!(
            "invalid prompt name '{}': use letters, digits, '_', '-' or '.', starting with a letter or digit",
            name
        )))
    }
}

/// Prompt store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `root`. The directory is created on first save.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The prompt directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file that holds prompt `name`.
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        validate_prompt_name(name)?;
        Ok(self.root.join(format!("{}.{}", name, PROMPT_EXTENSION)))
    }

    /// Whether prompt `name` exists.
    pub fn exists(&self, name: &str) -> Result<bool> {
        Ok(self.path_for(name)?.is_file())
    }

    /// Load prompt `name`, if it exists.
    pub fn get(&self, name: &str) -> Result<Option<PromptRecord>> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            return Ok(None);
        }
        load_named(&path, name).map(Some)
    }

    /// Load prompt `name`, failing with a user error if it does not exist.
    pub fn require(&self, name: &str) -> Result<PromptRecord> {
        self.get(name)?.ok_or_else(|| {
            PrenError::UserError(format!(
                "prompt '{}' not found in '{}'.\n\nUse `pren list` to see all prompts.",
                name,
                self.root.display()
            ))
        })
    }

    /// Save a prompt.
    ///
    /// Refuses to replace an existing prompt unless `overwrite` is set.
    /// Returns the path written.
    pub fn save(&self, record: &PromptRecord, overwrite: bool) -> Result<PathBuf> {
        let path = self.path_for(record.name())?;

        if !overwrite && path.exists() {
            return Err(PrenError::UserError(format!(
                "prompt '{}' already exists. Use --overwrite to replace it.",
                record.name()
            )));
        }

        record.save(&path)?;
        debug!(prompt = record.name(), path = %path.display(), "saved prompt");
        Ok(path)
    }

    /// Delete prompt `name`.
    pub fn delete(&self, name: &str) -> Result<()> {
        let path = self.path_for(name)?;
        if !path.is_file() {
            return Err(PrenError::UserError(format!("prompt '{}' not found", name)));
        }

        fs::remove_file(&path).map_err(|e| {
            PrenError::StorageError(format!(
                "failed to delete prompt file '{}': {}",
                path.display(),
                e
            ))
        })?;
        debug!(prompt = name, "deleted prompt");
        Ok(())
    }

    /// Paths of all prompt files, sorted by file name.
    ///
    /// A missing root directory is an empty store. Hidden files, files with
    /// other extensions and files whose stem is not a valid prompt name are
    /// skipped.
    pub fn entries(&self) -> Result<Vec<(String, PathBuf)>> {
        if !self.root.exists() {
            return Ok(Vec::new());
        }

        let read_dir = fs::read_dir(&self.root).map_err(|e| {
            PrenError::StorageError(format!(
                "failed to read prompt directory '{}': {}",
                self.root.display(),
                e
            ))
        })?;

        let mut entries = Vec::new();
        for entry in read_dir {
            let entry = entry.map_err(|e| {
                PrenError::StorageError(format!("failed to read directory entry: {}", e))
            })?;
            let path = entry.path();

            if !path.is_file()
                || path.extension().and_then(|e| e.to_str()) != Some(PROMPT_EXTENSION)
            {
                continue;
            }

            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if stem.starts_with('.') {
                continue;
            }
            if validate_prompt_name(stem).is_err() {
                warn!(path = %path.display(), "skipping prompt file with invalid name");
                continue;
            }

            entries.push((stem.to_string(), path));
        }

        entries.sort();
        Ok(entries)
    }

    /// Load every prompt, sorted by name.
    pub fn list(&self) -> Result<Vec<PromptRecord>> {
        self.entries()?
            .into_iter()
            .map(|(name, path)| load_named(&path, &name))
            .collect()
    }

    /// Load prompts that carry any of `tags`. An empty tag list matches all.
    pub fn by_tags(&self, tags: &[String]) -> Result<Vec<PromptRecord>> {
        let prompts = self.list()?;
        if tags.is_empty() {
            return Ok(prompts);
        }

        Ok(prompts
            .into_iter()
            .filter(|prompt| tags.iter().any(|tag| prompt.has_tag(tag)))
            .collect())
    }

    /// Load every prompt into an in-memory library for rendering.
    pub fn load_library(&self) -> Result<PromptLibrary> {
        let library: PromptLibrary = self.list()?.into_iter().collect();
        debug!(count = library.len(), root = %self.root.display(), "loaded prompt library");
        Ok(library)
    }

    /// Load prompt `name` and every prompt it can reach, into a library.
    ///
    /// References are followed through `{{prompt:...}}` names and through
    /// `{{prompt_var:...}}` values found in `args`. Unrelated files are never
    /// read, so a broken prompt elsewhere in the store does not matter.
    /// Missing prompts and templates with syntax errors are left for the
    /// renderer to report when it reaches them.
    pub fn load_reachable(&self, name: &str, args: &Arguments) -> Result<PromptLibrary> {
        let mut library = PromptLibrary::new();
        let mut seen: BTreeSet<String> = BTreeSet::new();
        let mut pending = vec![name.to_string()];

        while let Some(next) = pending.pop() {
            if !seen.insert(next.clone()) || validate_prompt_name(&next).is_err() {
                continue;
            }
            let Some(record) = self.get(&next)? else {
                continue;
            };

            if let Ok(template) = record.parse_template() {
                for reference in template.prompt_refs() {
                    pending.push(reference.to_string());
                }
                for variable in template.prompt_var_refs() {
                    if let Ok(value) = args.get(variable) {
                        pending.push(value.to_string());
                    }
                }
            }

            library.insert(record);
        }

        debug!(root = name, count = library.len(), "loaded reachable prompts");
        Ok(library)
    }
}

/// Load a prompt file, forcing its name to match the file stem.
fn load_named(path: &Path, name: &str) -> Result<PromptRecord> {
    let mut record = PromptRecord::load(path)?;
    if record.meta.name != name {
        warn!(
            path = %path.display(),
            frontmatter_name = %record.meta.name,
            "prompt name does not match file name; using file name"
        );
        record.meta.name = name.to_string();
    }
    Ok(record)
}
