//! Implementation of the `pren delete` command.

use crate::cli::DeleteArgs;
use crate::context::PrenContext;
use crate::error::{PrenError, Result};
use std::io::{self, BufRead, Write};

/// Execute the `pren delete` command.
///
/// Without `--force` the user must answer `y` or `yes` on stdin.
pub fn cmd_delete(ctx: &PrenContext, args: DeleteArgs) -> Result<()> {
    // Fail on a missing prompt before asking anything.
    ctx.store.require(&args.name)?;

    if !args.force {
        print!("Delete prompt '{}'? [y/N] ", args.name);
        io::stdout()
            .flush()
            .map_err(|e| PrenError::UserError(format!("failed to write prompt: {}", e)))?;

        if !confirm(io::stdin().lock())? {
            println!("Aborted.");
            return Ok(());
        }
    }

    ctx.store.delete(&args.name)?;
    println!("Deleted prompt: {}", args.name);
    Ok(())
}

/// Read one line and accept `y` or `yes` in any case.
fn confirm<R: BufRead>(mut input: R) -> Result<bool> {
    let mut line = String::new();
    input
        .read_line(&mut line)
        .map_err(|e| PrenError::UserError(format!("failed to read confirmation: {}", e)))?;

    let answer = line.trim().to_ascii_lowercase();
    Ok(answer == "y" || answer == "yes")
}
