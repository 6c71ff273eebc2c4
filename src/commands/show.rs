//! Implementation of the `pren show` command.
//!
//! Displays a prompt's metadata, the placeholders it uses and its raw template.

use crate::cli::ShowArgs;
use crate::context::PrenContext;
use crate::error::Result;
use crate::prompt::PromptRecord;

const RULE: &str =
    "================================================================================";

/// Execute the `pren show` command.
pub fn cmd_show(ctx: &PrenContext, args: ShowArgs) -> Result<()> {
    let prompt = ctx.store.require(&args.name)?;
    print!("{}", describe(&prompt)?);
    Ok(())
}

/// Format the full description of a prompt.
pub(crate) fn describe(prompt: &PromptRecord) -> Result<String> {
    let template = prompt.parse_template()?;
    let mut out = String::new();

    out.push_str(RULE);
    out.push('\n');
    out.push_str(prompt.name());
    out.push('\n');
    out.push_str(RULE);
    out.push_str("\n\n");

    if let Some(description) = &prompt.meta.description {
        out.push_str(&format!("Description: {}\n", description));
    }
    if !prompt.meta.tags.is_empty() {
        out.push_str(&format!("Tags:        {}\n", prompt.meta.tags.join(", ")));
    }
    if let Some(created) = prompt.meta.created {
        out.push_str(&format!(
            "Created:     {}\n",
            created.format("%Y-%m-%d %H:%M:%S UTC")
        ));
    }

    let sections = [
        ("Arguments:", template.variables()),
        ("Includes:", template.prompt_refs()),
        ("Includes (by argument):", template.prompt_var_refs()),
    ];
    for (title, names) in sections {
        if names.is_empty() {
            continue;
        }
        out.push('\n');
        out.push_str(title);
        out.push('\n');
        for name in names {
            out.push_str(&format!("  - {}\n", name));
        }
    }

    out.push('\n');
    out.push_str("Template:\n");
    out.push_str("--------------------------------------------------------------------------------\n");
    out.push_str(&prompt.template);
    if !prompt.template.ends_with('\n') {
        out.push('\n');
    }

    Ok(out)
}
