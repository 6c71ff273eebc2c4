//! Pren: a prompt template engine.
//!
//! Prompts are named text templates that can read caller arguments and
//! include other prompts, either by name or by the value of an argument.
//!
//! - [`template`] parses and renders templates against any [`template::PromptLookup`].
//! - [`store`] keeps prompts as markdown files with YAML frontmatter.
//! - [`commands`] implements the `pren` CLI on top of both.

pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod prompt;
pub mod store;
pub mod template;

pub use error::{PrenError, Result};
