//! Implementation of the `pren get` command.
//!
//! Renders a stored prompt with the given arguments and prints the result,
//! optionally copying it to the system clipboard as well.

use crate::cli::GetArgs;
use crate::context::PrenContext;
use crate::error::{PrenError, Result};
use crate::store::validate_prompt_name;
use crate::template::{Arguments, Renderer};
use arboard::Clipboard;
use std::collections::HashMap;
use tracing::debug;

/// Execute the `pren get` command.
pub fn cmd_get(ctx: &PrenContext, args: GetArgs) -> Result<()> {
    let copy = args.copy;
    let rendered = render_stored_prompt(ctx, args)?;
    println!("{}", rendered);

    // stdout is already written; a clipboard failure only changes the exit code.
    if copy {
        copy_to_clipboard(&rendered)?;
    }
    Ok(())
}

/// Render the prompt named in `args`.
///
/// Only the prompt and the prompts it can reach are read from the store.
pub(crate) fn render_stored_prompt(ctx: &PrenContext, args: GetArgs) -> Result<String> {
    validate_prompt_name(&args.name)?;
    let arguments = build_arguments(args.args)?;

    let max_depth = args.max_depth.unwrap_or(ctx.config.max_depth);
    if max_depth == 0 {
        return Err(PrenError::UserError(
            "--max-depth must be greater than 0".to_string(),
        ));
    }

    let library = ctx.store.load_reachable(&args.name, &arguments)?;
    if !library.contains(&args.name) {
        return Err(PrenError::UserError(format!(
            "prompt '{}' not found in '{}'.\n\nUse `pren list` to see all prompts.",
            args.name,
            ctx.store.root().display()
        )));
    }

    let rendered = Renderer::new(&library)
        .with_max_depth(max_depth)
        .render_prompt(&args.name, &arguments)?;

    Ok(rendered)
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new()
        .map_err(|e| PrenError::UserError(format!("failed to open clipboard: {}", e)))?;
    clipboard
        .set_text(text)
        .map_err(|e| PrenError::UserError(format!("failed to copy prompt to clipboard: {}", e)))?;
    debug!(bytes = text.len(), "copied rendered prompt to clipboard");
    Ok(())
}

/// Build the argument environment, rejecting duplicate keys.
fn build_arguments(pairs: Vec<(String, String)>) -> Result<Arguments> {
    let mut values = HashMap::with_capacity(pairs.len());
    for (key, value) in pairs {
        if values.contains_key(&key) {
            return Err(PrenError::UserError(format!(
                "argument '{}' was given more than once",
                key
            )));
        }
        values.insert(key, value);
    }
    Ok(Arguments::from(values))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::exit_codes;
    use crate::prompt::PromptRecord;
    use crate::template::RenderError;
    use tempfile::TempDir;

    fn context_with(prompts: &[(&str, &str)]) -> (TempDir, PrenContext) {
        let temp = TempDir::new().unwrap();
        let ctx = PrenContext::from_config(Config::default(), Some(temp.path().join("prompts")));
        for (name, template) in prompts {
            let record = PromptRecord::new(*name, *template, None, vec![]).unwrap();
            ctx.store.save(&record, false).unwrap();
        }
        (temp, ctx)
    }

    fn get(name: &str, pairs: &[(&str, &str)]) -> GetArgs {
        GetArgs {
            name: name.to_string(),
            args: pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            max_depth: None,
            copy: false,
        }
    }

    #[test]
    fn test_renders_composed_prompt() {
        let (_temp, ctx) = context_with(&[
            ("greeting", "Hello, {{name}}!"),
            ("farewell", "Goodbye, {{name}}!"),
            ("dynamic", "Message: {{prompt_var:message_type}}"),
        ]);

        let rendered = render_stored_prompt(
            &ctx,
            get("dynamic", &[("message_type", "farewell"), ("name", "Charlie")]),
        )
        .unwrap();
        assert_eq!(rendered, "Message: Goodbye, Charlie!");
    }

    #[test]
    fn test_unrelated_broken_file_does_not_block_render() {
        let (temp, ctx) = context_with(&[
            ("greeting", "Hello, {{name}}!"),
            ("farewell", "Goodbye, {{name}}!"),
            ("dynamic", "{{prompt_var:kind}}"),
        ]);
        std::fs::write(temp.path().join("prompts").join("garbled.md"), "no frontmatter").unwrap();

        assert_eq!(
            render_stored_prompt(&ctx, get("greeting", &[("name", "Bob")])).unwrap(),
            "Hello, Bob!"
        );
        assert_eq!(
            render_stored_prompt(&ctx, get("dynamic", &[("kind", "farewell"), ("name", "Bob")]))
                .unwrap(),
            "Goodbye, Bob!"
        );
    }

    #[test]
    fn test_broken_referenced_file_is_storage_failure() {
        let (temp, ctx) = context_with(&[("outer", "{{prompt:garbled}}")]);
        std::fs::write(temp.path().join("prompts").join("garbled.md"), "no frontmatter").unwrap();

        let err = render_stored_prompt(&ctx, get("outer", &[])).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::STORAGE_FAILURE);
        assert!(err.to_string().contains("garbled.md"));
    }

    #[test]
    fn test_unknown_prompt_is_user_error() {
        let (_temp, ctx) = context_with(&[]);
        let err = render_stored_prompt(&ctx, get("nope", &[])).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(err.to_string().contains("pren list"));
    }

    #[test]
    fn test_missing_argument_is_render_failure() {
        let (_temp, ctx) = context_with(&[("greeting", "Hello, {{name}}!")]);
        let err = render_stored_prompt(&ctx, get("greeting", &[])).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::RENDER_FAILURE);
        assert!(matches!(
            err,
            PrenError::Render(RenderError::UndefinedVariable(ref name)) if name == "name"
        ));
    }

    #[test]
    fn test_duplicate_arguments_rejected() {
        let (_temp, ctx) = context_with(&[("greeting", "Hello, {{name}}!")]);
        let err = render_stored_prompt(&ctx, get("greeting", &[("name", "a"), ("name", "b")]))
            .unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_max_depth_override() {
        let (_temp, ctx) = context_with(&[
            ("a", "a{{prompt:b}}"),
            ("b", "b{{prompt:c}}"),
            ("c", "c"),
        ]);

        let mut shallow = get("a", &[]);
        shallow.max_depth = Some(1);
        let err = render_stored_prompt(&ctx, shallow).unwrap_err();
        assert!(matches!(
            err,
            PrenError::Render(RenderError::RecursionLimitExceeded { limit: 1 })
        ));

        assert_eq!(render_stored_prompt(&ctx, get("a", &[])).unwrap(), "abc");

        let mut zero = get("a", &[]);
        zero.max_depth = Some(0);
        assert_eq!(
            render_stored_prompt(&ctx, zero).unwrap_err().exit_code(),
            exit_codes::USER_ERROR
        );
    }
}
