//! Template engine for prompt rendering.
//!
//! Templates are plain text with double-brace placeholders. Rendering
//! substitutes variables from the caller's [`Arguments`] and splices in other
//! prompts fetched through a [`PromptLookup`].
//!
//! # Syntax
//!
//! - `{{name}}` - Substitutes the argument `name`
//! - `{{prompt:name}}` - Inserts the rendered prompt `name`
//! - `{{prompt_var:var}}` - Inserts the rendered prompt whose name is the value of `var`
//! - `{{{{text}}}}` - Renders as literal `{{text}}`
//!
//! Whitespace around a placeholder body is ignored, so `{{ name }}` and
//! `{{name}}` are the same placeholder.
//!
//! # Error Handling
//!
//! Rendering is fail-fast and all-or-nothing. Undefined variables, missing
//! prompts, cycles and syntax errors abort the whole render with a
//! [`RenderError`] instead of producing partial output. Argument values are
//! inserted as-is and never re-parsed as templates.
//!
//! # Examples
//!
//! ```
//! use std::collections::HashMap;
//! use pren::template::{Arguments, render};
//!
//! let mut prompts = HashMap::new();
//! prompts.insert("greeting".to_string(), "Hello, {{name}}!".to_string());
//!
//! let args: Arguments = [("name", "Bob")].into_iter().collect();
//! let text = render("{{prompt:greeting}} Please enjoy your stay.", &args, &prompts).unwrap();
//! assert_eq!(text, "Hello, Bob! Please enjoy your stay.");
//! ```

mod arguments;
mod error;
mod lookup;
mod placeholder;
mod resolver;
mod scanner;


pub use arguments::Arguments;
pub use error::RenderError;
pub use lookup::PromptLookup;
pub use placeholder::{PROMPT_PREFIX, PROMPT_VAR_PREFIX, Placeholder, classify};
pub use resolver::{DEFAULT_MAX_DEPTH, Renderer, render};
pub use scanner::{Segment, scan};

/// A parsed template: the ordered segments of its source text.
///
/// Parsing borrows from the source; nothing is copied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> Template<'a> {
    /// Parse template source text.
    pub fn parse(source: &'a str) -> Result<Self, RenderError> {
        Ok(Self {
            segments: scan(source)?,
        })
    }

    /// The segments in source order.
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Variable names the template reads directly, in first-use order.
    ///
    /// Variables consulted by `prompt_var` references are included, since
    /// the caller must supply them too.
    pub fn variables(&self) -> Vec<&'a str> {
        self.unique(|placeholder| match placeholder {
            Placeholder::Variable(name) | Placeholder::PromptVarRef(name) => Some(name),
            _ => None,
        })
    }

    /// Prompt names referenced statically with `{{prompt:...}}`.
    pub fn prompt_refs(&self) -> Vec<&'a str> {
        self.unique(|placeholder| match placeholder {
            Placeholder::PromptRef(name) => Some(name),
            _ => None,
        })
    }

    /// Variable names used for dynamic `{{prompt_var:...}}` references.
    pub fn prompt_var_refs(&self) -> Vec<&'a str> {
        self.unique(|placeholder| match placeholder {
            Placeholder::PromptVarRef(name) => Some(name),
            _ => None,
        })
    }

    /// Whether rendering needs neither arguments nor other prompts.
    pub fn is_static(&self) -> bool {
        self.segments.iter().all(|segment| {
            matches!(
                segment,
                Segment::Literal(_) | Segment::Placeholder(Placeholder::EscapedLiteral(_))
            )
        })
    }

    fn unique<F>(&self, select: F) -> Vec<&'a str>
    where
        F: Fn(Placeholder<'a>) -> Option<&'a str>,
    {
        let mut names: Vec<&'a str> = Vec::new();
        for segment in &self.segments {
            if let Segment::Placeholder(placeholder) = *segment
                && let Some(name) = select(placeholder)
                && !names.contains(&name)
            {
                names.push(name);
            }
        }
        names
    }
}
