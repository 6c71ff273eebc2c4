//! Prompt file model for pren.
//!
//! A stored prompt is a markdown file with YAML frontmatter followed by the
//! template text:
//!
//! ```text
//! ---
//! name: greeting
//! description: Friendly opener
//! tags:
//!   - example
//! ---
//! Hello, {{name}}!
//! ```
//!
//! Unknown frontmatter fields are kept in `extra` and written back on save.

use crate::error::{PrenError, Result};
use crate::template::{RenderError, Template};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

mod io;

/// A stored prompt: metadata plus template text.
#[derive(Debug, Clone, PartialEq)]
pub struct PromptRecord {
    /// The parsed frontmatter fields.
    pub meta: PromptMeta,
    /// The template text (everything after the closing `---`).
    pub template: String,
}

/// Prompt frontmatter fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PromptMeta {
    /// Unique prompt name.
    pub name: String,

    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Tags for categorization.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,

    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,

    /// Any fields not explicitly defined above.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl PromptRecord {
    /// Create a new prompt stamped with the current time.
    ///
    /// The template syntax is checked up front so that broken prompts never
    /// reach storage.
    pub fn new(
        name: impl Into<String>,
        template: impl Into<String>,
        description: Option<String>,
        tags: Vec<String>,
    ) -> Result<Self> {
        let record = Self {
            meta: PromptMeta {
                name: name.into(),
                description,
                tags,
                created: Some(Utc::now()),
                extra: BTreeMap::new(),
            },
            template: template.into(),
        };

        record.parse_template().map_err(|e| {
            PrenError::UserError(format!(
                "invalid template for prompt '{}': {}",
                record.meta.name, e
            ))
        })?;

        Ok(record)
    }

    /// The prompt name.
    pub fn name(&self) -> &str {
        &self.meta.name
    }

    /// Whether the prompt carries `tag`.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.meta.tags.iter().any(|t| t == tag)
    }

    /// Parse the template text.
    pub fn parse_template(&self) -> std::result::Result<Template<'_>, RenderError> {
        Template::parse(&self.template)
    }

    /// Parse a prompt file from its content string.
    ///
    /// Leading blank lines between the closing `---` and the template are
    /// dropped; the rest of the body is kept exactly.
    pub fn parse(content: &str) -> Result<Self> {
        let (frontmatter_yaml, body) = split_frontmatter(content)?;

        let meta: PromptMeta = serde_yaml::from_str(frontmatter_yaml).map_err(|e| {
            PrenError::StorageError(format!("failed to parse prompt frontmatter: {}", e))
        })?;

        if meta.name.trim().is_empty() {
            return Err(PrenError::StorageError(
                "prompt frontmatter is missing 'name'".to_string(),
            ));
        }

        let template = body.trim_start_matches(['\r', '\n']).to_string();

        Ok(Self { meta, template })
    }
}

/// Split `content` into the frontmatter YAML and the body after it.
fn split_frontmatter(content: &str) -> Result<(&str, &str)> {
    let rest = content
        .strip_prefix("---\r\n")
        .or_else(|| content.strip_prefix("---\n"))
        .ok_or_else(|| {
            PrenError::StorageError(
                "prompt file must start with '---' frontmatter delimiter".to_string(),
            )
        })?;

    // An empty frontmatter block closes immediately.
    if let Some(body) = rest.strip_prefix("---") {
        return Ok(("", skip_line_end(body)));
    }

    let closing = rest.find("\n---").ok_or_else(|| {
        PrenError::StorageError(
            "prompt file missing closing '---' frontmatter delimiter".to_string(),
        )
    })?;

    let frontmatter = &rest[..closing];
    let body = &rest[closing + "\n---".len()..];

    Ok((frontmatter, skip_line_end(body)))
}

fn skip_line_end(body: &str) -> &str {
    body.strip_prefix("\r\n")
        .or_else(|| body.strip_prefix('\n'))
        .unwrap_or(body)
}
