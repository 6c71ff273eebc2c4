//! The capability the resolver uses to fetch composed prompts.

use std::collections::{BTreeMap, HashMap};

/// Resolves a prompt name to its template text.
///
/// Implementations are expected to be fast and synchronous; the resolver
/// calls `resolve` once per composed prompt and never writes through it.
pub trait PromptLookup {
    /// Return the template text stored under `name`, if any.
    fn resolve(&self, name: &str) -> Option<&str>;
}

impl<T: PromptLookup + ?Sized> PromptLookup for &T {
    fn resolve(&self, name: &str) -> Option<&str> {
        (**self).resolve(name)
    }
}

impl PromptLookup for HashMap<String, String> {
    fn resolve(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl PromptLookup for BTreeMap<String, String> {
    fn resolve(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}
