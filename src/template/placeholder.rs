//! Placeholder classification.
//!
//! A placeholder body (the text between `{{` and `}}`) is classified purely
//! by its prefix:
//!
//! - `prompt:name` - static composition of the prompt `name`
//! - `prompt_var:var` - dynamic composition of the prompt named by argument `var`
//! - anything else - a variable reference

use super::RenderError;

/// Prefix marking a static prompt reference.
pub const PROMPT_PREFIX: &str = "prompt:";

/// Prefix marking a dynamic prompt reference through a variable.
pub const PROMPT_VAR_PREFIX: &str = "prompt_var:";

/// The kind of a placeholder, borrowing its name from the template source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder<'a> {
    /// `{{name}}`: substituted with the argument `name`.
    Variable(&'a str),
    /// `{{prompt:name}}`: replaced by the rendered prompt `name`.
    PromptRef(&'a str),
    /// `{{prompt_var:var}}`: replaced by the rendered prompt whose name is
    /// the value of argument `var`.
    PromptVarRef(&'a str),
    /// `{{{{text}}}}`: rendered as `{{text}}`.
    EscapedLiteral(&'a str),
}

/// Classify a placeholder body.
///
/// The body is trimmed first. `position` is the byte offset of the opening
/// braces and is only used for error reporting.
pub fn classify(body: &str, position: usize) -> Result<Placeholder<'_>, RenderError> {
    let body = body.trim();

    let placeholder = if let Some(rest) = body.strip_prefix(PROMPT_VAR_PREFIX) {
        Placeholder::PromptVarRef(rest.trim())
    } else if let Some(rest) = body.strip_prefix(PROMPT_PREFIX) {
        Placeholder::PromptRef(rest.trim())
    } else {
        Placeholder::Variable(body)
    };

    if placeholder.name().is_empty() {
        return Err(RenderError::EmptyReferenceName { position });
    }

    Ok(placeholder)
}

impl<'a> Placeholder<'a> {
    /// The name (or escaped text) carried by this placeholder.
    pub fn name(&self) -> &'a str {
        match *self {
            Placeholder::Variable(name)
            | Placeholder::PromptRef(name)
            | Placeholder::PromptVarRef(name)
            | Placeholder::EscapedLiteral(name) => name,
        }
    }
}
