//! CLI argument parsing for pren.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Pren: a prompt template engine.
///
/// Prompts are named templates stored as markdown files. Templates use
/// `{{name}}` for arguments, `{{prompt:name}}` to include another prompt,
/// `{{prompt_var:var}}` to include the prompt named by an argument, and
/// `{{{{text}}}}` for a literal `{{text}}`.
#[derive(Parser, Debug)]
#[command(name = "pren")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding prompt files (overrides the config file).
    #[arg(short = 'p', long, global = true, alias = "storage-path")]
    pub prompts_dir: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv). `PREN_LOG` takes precedence.
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Available commands for pren.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new prompt.
    ///
    /// The template is checked for syntax errors before it is saved.
    Add(AddArgs),

    /// Render a prompt with arguments and print the result.
    #[command(alias = "render")]
    Get(GetArgs),

    /// List stored prompts.
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show a prompt's metadata, placeholders and raw template.
    Show(ShowArgs),

    /// Delete a prompt.
    ///
    /// Asks for confirmation unless --force is given.
    #[command(alias = "rm")]
    Delete(DeleteArgs),

    /// Check every stored prompt for syntax errors and dangling references.
    Check,
}

/// Arguments for the `add` command.
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Name of the new prompt.
    pub name: String,

    /// Template text.
    #[arg(short, long, conflicts_with = "file", required_unless_present = "file")]
    pub content: Option<String>,

    /// Read the template text from a file.
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Short description.
    #[arg(short, long)]
    pub description: Option<String>,

    /// Tags for categorization.
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Replace an existing prompt with the same name.
    #[arg(short, long)]
    pub overwrite: bool,
}

/// Arguments for the `get` command.
#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Name of the prompt to render.
    pub name: String,

    /// Template arguments as KEY=value (repeatable or comma separated).
    #[arg(short, long = "arg", value_parser = parse_key_val, value_delimiter = ',')]
    pub args: Vec<(String, String)>,

    /// Maximum nesting depth of prompt references (overrides the config file).
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Also copy the rendered prompt to the system clipboard.
    #[arg(short, long)]
    pub copy: bool,
}

/// Arguments for the `list` command.
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Only prompts carrying any of these tags.
    #[arg(short, long, value_delimiter = ',')]
    pub tag: Vec<String>,

    /// Only prompts whose name matches this glob (e.g. `plan-*`).
    #[arg(short, long)]
    pub name: Option<String>,

    /// Print JSON instead of a table.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Name of the prompt to show.
    pub name: String,
}

/// Arguments for the `delete` command.
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Name of the prompt to delete.
    pub name: String,

    /// Delete without asking for confirmation.
    #[arg(short, long)]
    pub force: bool,
}

/// Parse a single `KEY=value` pair, splitting on the first `=`.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid KEY=value: no `=` found in `{}`", s))?;

    if key.trim().is_empty() {
        return Err(format!("invalid KEY=value: empty key in `{}`", s));
    }

    Ok((key.trim().to_string(), value.to_string()))
}
