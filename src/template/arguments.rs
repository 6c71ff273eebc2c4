//! Argument environment for a render call.

use super::RenderError;
use std::collections::HashMap;

/// Named string arguments visible to a render call.
///
/// Built once by the caller and borrowed immutably for the whole render,
/// including every composed prompt. Nested prompts see exactly the same
/// values as the top-level template; there is no shadowing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Arguments {
    values: HashMap<String, String>,
}

impl Arguments {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an argument value.
    pub fn get(&self, name: &str) -> Result<&str, RenderError> {
        self.values
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| RenderError::UndefinedVariable(name.to_string()))
    }

    /// Whether an argument with this name was supplied.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Number of arguments.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no arguments were supplied.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(name, value)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Arguments
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(pairs: I) -> Self {
        Self {
            values: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<HashMap<String, String>> for Arguments {
    fn from(values: HashMap<String, String>) -> Self {
        Self { values }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_value() {
        let args: Arguments = [("name", "Alice")].into_iter().collect();
        assert_eq!(args.get("name"), Ok("Alice"));
        assert!(args.contains("name"));
        assert_eq!(args.len(), 1);
    }

    #[test]
    fn get_missing_is_undefined_variable() {
        let args = Arguments::new();
        assert!(args.is_empty());
        assert_eq!(
            args.get("name"),
            Err(RenderError::UndefinedVariable("name".to_string()))
        );
    }

    #[test]
    fn names_are_case_sensitive() {
        let args: Arguments = [("Name", "Alice")].into_iter().collect();
        assert!(args.get("name").is_err());
    }

    #[test]
    fn from_hash_map() {
        let mut map = HashMap::new();
        map.insert("topic".to_string(), "rust".to_string());
        let args = Arguments::from(map);
        assert_eq!(args.get("topic"), Ok("rust"));
    }
}
