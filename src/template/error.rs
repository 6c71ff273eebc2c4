//! Error type for template parsing and rendering failures.

use thiserror::Error;

/// Error returned when a template cannot be parsed or rendered.
///
/// Every variant is terminal for the render call that produced it. Errors
/// raised while rendering a composed prompt surface unchanged from the
/// top-level call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A `{{` (or `{{{{`) was found without its closing braces.
    #[error("unterminated placeholder at position {position} in template")]
    UnterminatedPlaceholder {
        /// Byte offset of the opening braces.
        position: usize,
    },

    /// A placeholder body contains a nested `{{`.
    #[error("malformed placeholder at position {position}: nested '{{{{' is not allowed")]
    MalformedPlaceholder {
        /// Byte offset of the opening braces.
        position: usize,
    },

    /// A placeholder has no name, e.g. `{{}}` or `{{prompt: }}`.
    #[error("empty name in placeholder at position {position}")]
    EmptyReferenceName {
        /// Byte offset of the opening braces.
        position: usize,
    },

    /// A variable was referenced but no argument with that name was supplied.
    #[error("missing argument '{0}'")]
    UndefinedVariable(String),

    /// A composed prompt could not be found.
    #[error("prompt '{0}' not found")]
    PromptNotFound(String),

    /// A prompt was reached again while it was still being resolved.
    #[error("circular prompt reference: {}", .0.join(" -> "))]
    CyclicReference(Vec<String>),

    /// Composition nested deeper than the configured limit.
    #[error("maximum prompt nesting depth of {limit} exceeded")]
    RecursionLimitExceeded {
        /// The depth limit in effect.
        limit: usize,
    },
}
