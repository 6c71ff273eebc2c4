//! Error types for the pren CLI and prompt store.
//!
//! Uses thiserror for derive macros. Template engine failures keep their own
//! [`RenderError`] type and are wrapped here unchanged.

use crate::exit_codes;
use crate::template::RenderError;
use thiserror::Error;

/// Main error type for pren operations.
#[derive(Error, Debug)]
pub enum PrenError {
    /// Invalid arguments or an unsatisfiable request.
    #[error("{0}")]
    UserError(String),

    /// Reading or writing the prompt directory failed.
    #[error("{0}")]
    StorageError(String),

    /// The template engine rejected the render.
    #[error("failed to render prompt: {0}")]
    Render(#[from] RenderError),
}

impl PrenError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PrenError::UserError(_) => exit_codes::USER_ERROR,
            PrenError::Render(_) => exit_codes::RENDER_FAILURE,
            PrenError::StorageError(_) => exit_codes::STORAGE_FAILURE,
        }
    }
}

/// Result type alias for pren operations.
pub type Result<T> = std::result::Result<T, PrenError>;
