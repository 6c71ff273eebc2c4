//! Command implementations for pren.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Every command runs against the same resolved
//! [`PrenContext`].

mod add;
mod check;
mod delete;
mod get;
mod list;
mod show;

use crate::cli::{Cli, Command};
use crate::context::PrenContext;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. The context is
/// resolved once, then each command is routed to its handler function.
pub fn dispatch(cli: Cli) -> Result<()> {
    let ctx = PrenContext::resolve(cli.prompts_dir)?;

    match cli.command {
        Command::Add(args) => add::cmd_add(&ctx, args),
        Command::Get(args) => get::cmd_get(&ctx, args),
        Command::List(args) => list::cmd_list(&ctx, args),
        Command::Show(args) => show::cmd_show(&ctx, args),
        Command::Delete(args) => delete::cmd_delete(&ctx, args),
        Command::Check => check::cmd_check(&ctx),
    }
}
