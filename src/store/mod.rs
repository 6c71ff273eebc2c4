//! Prompt storage.
//!
//! - [`FileStore`] keeps one markdown file per prompt in a directory.
//! - [`PromptLibrary`] is an in-memory snapshot of prompts that implements
//!   [`PromptLookup`], so the renderer never touches the disk while resolving.

mod file;

pub use file::{FileStore, validate_prompt_name};

use crate::prompt::PromptRecord;
use crate::template::PromptLookup;
use std::collections::BTreeMap;

/// In-memory prompt collection keyed by name.
#[derive(Debug, Clone, Default)]
pub struct PromptLibrary {
    prompts: BTreeMap<String, PromptRecord>,
}

impl PromptLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a prompt, returning the one it replaced.
    pub fn insert(&mut self, record: PromptRecord) -> Option<PromptRecord> {
        self.prompts.insert(record.meta.name.clone(), record)
    }

    /// Get a prompt by name.
    pub fn get(&self, name: &str) -> Option<&PromptRecord> {
        self.prompts.get(name)
    }

    /// Whether a prompt with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.prompts.contains_key(name)
    }

    /// All prompts, ordered by name.
    pub fn iter(&self) -> impl Iterator<Item = &PromptRecord> {
        self.prompts.values()
    }

    /// Number of prompts.
    pub fn len(&self) -> usize {
        self.prompts.len()
    }

    /// Whether the library is empty.
    pub fn is_empty(&self) -> bool {
        self.prompts.is_empty()
    }
}

impl FromIterator<PromptRecord> for PromptLibrary {
    fn from_iter<I: IntoIterator<Item = PromptRecord>>(records: I) -> Self {
        let mut library = Self::new();
        for record in records {
            library.insert(record);
        }
        library
    }
}

impl PromptLookup for PromptLibrary {
    fn resolve(&self, name: &str) -> Option<&str> {
        self.prompts.get(name).map(|record| record.template.as_str())
    }
}
