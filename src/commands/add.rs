//! Implementation of the `pren add` command.
//!
//! Creates a new prompt file after checking the template syntax.

use crate::cli::AddArgs;
use crate::context::PrenContext;
use crate::error::{PrenError, Result};
use crate::prompt::PromptRecord;
use std::path::PathBuf;

/// Execute the `pren add` command.
pub fn cmd_add(ctx: &PrenContext, args: AddArgs) -> Result<()> {
    let (record, path) = add_prompt(ctx, args)?;

    if has_leading_blank_lines(&record.template) {
        eprintln!(
            "Warning: leading blank lines of prompt '{}' are not kept when it is loaded",
            record.name()
        );
    }

    // References are resolved at render time, so a missing one is only a warning here.
    for missing in missing_references(ctx, &record)? {
        eprintln!(
            "Warning: prompt '{}' references '{}', which does not exist yet",
            record.name(),
            missing
        );
    }

    println!("Saved prompt: {}", record.name());
    println!("  Path: {}", path.display());

    Ok(())
}

/// Build the prompt from the arguments and save it.
pub(crate) fn add_prompt(ctx: &PrenContext, args: AddArgs) -> Result<(PromptRecord, PathBuf)> {
    let content = match (args.content, args.file) {
        (Some(content), _) => content,
        (None, Some(file)) => std::fs::read_to_string(&file).map_err(|e| {
            PrenError::UserError(format!(
                "failed to read template file '{}': {}",
                file.display(),
                e
            ))
        })?,
        (None, None) => {
            return Err(PrenError::UserError(
                "either --content or --file is required".to_string(),
            ));
        }
    };

    let tags = normalize_tags(args.tags);
    let record = PromptRecord::new(args.name, content, args.description, tags)?;
    let path = ctx.store.save(&record, args.overwrite)?;

    Ok((record, path))
}

/// Static prompt references in `record` that are not in the store.
fn missing_references(ctx: &PrenContext, record: &PromptRecord) -> Result<Vec<String>> {
    let template = record.parse_template()?;
    let mut missing = Vec::new();

    for name in template.prompt_refs() {
        // A name that cannot be stored on disk can never be found either.
        let exists = ctx.store.exists(name).unwrap_or(false);
        if !exists {
            missing.push(name.to_string());
        }
    }

    Ok(missing)
}

/// Whether the stored template starts with line breaks, which loading drops.
fn has_leading_blank_lines(template: &str) -> bool {
    template.starts_with('\n') || template.starts_with("\r\n")
}

/// Trim tags and drop empty or duplicate entries, keeping order.
fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::new();
    for tag in tags {
        let tag = tag.trim();
        if !tag.is_empty() && !normalized.iter().any(|t| t == tag) {
            normalized.push(tag.to_string());
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::exit_codes;
    use tempfile::TempDir;

    fn test_context() -> (TempDir, PrenContext) {
        let temp = TempDir::new().unwrap();
        let ctx = PrenContext::from_config(Config::default(), Some(temp.path().join("prompts")));
        (temp, ctx)
    }

    fn args(name: &str, content: &str) -> AddArgs {
        AddArgs {
            name: name.to_string(),
            content: Some(content.to_string()),
            file: None,
            description: None,
            tags: vec![],
            overwrite: false,
        }
    }

    #[test]
    fn test_add_saves_prompt() {
        let (_temp, ctx) = test_context();
        let mut add = args("greeting", "Hello, {{name}}!");
        add.description = Some("Friendly".to_string());
        add.tags = vec![" example ".to_string(), "example".to_string(), "".to_string()];

        let (record, path) = add_prompt(&ctx, add).unwrap();
        assert!(path.is_file());

        let stored = ctx.store.require("greeting").unwrap();
        assert_eq!(stored, record);
        assert_eq!(stored.meta.tags, vec!["example"]);
        assert_eq!(stored.meta.description.as_deref(), Some("Friendly"));
    }

    #[test]
    fn test_add_from_file() {
        let (temp, ctx) = test_context();
        let file = temp.path().join("template.txt");
        std::fs::write(&file, "From {{source}}\n").unwrap();

        let mut add = args("from-file", "");
        add.content = None;
        add.file = Some(file);

        add_prompt(&ctx, add).unwrap();
        assert_eq!(
            ctx.store.require("from-file").unwrap().template,
            "From {{source}}\n"
        );
    }

    #[test]
    fn test_add_rejects_bad_template() {
        let (_temp, ctx) = test_context();
        let err = add_prompt(&ctx, args("broken", "Hi {{name")).unwrap_err();
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
        assert!(!ctx.store.exists("broken").unwrap());
    }

    #[test]
    fn test_add_rejects_bad_name() {
        let (_temp, ctx) = test_context();
        assert!(add_prompt(&ctx, args("../escape", "x")).is_err());
    }

    #[test]
    fn test_add_requires_overwrite_to_replace() {
        let (_temp, ctx) = test_context();
        add_prompt(&ctx, args("greeting", "one")).unwrap();
        assert!(add_prompt(&ctx, args("greeting", "two")).is_err());

        let mut replace = args("greeting", "two");
        replace.overwrite = true;
        add_prompt(&ctx, replace).unwrap();
        assert_eq!(ctx.store.require("greeting").unwrap().template, "two");
    }

    #[test]
    fn test_leading_blank_lines_are_flagged() {
        let (_temp, ctx) = test_context();
        let (record, _) = add_prompt(&ctx, args("padded", "\n\nHi")).unwrap();

        assert!(has_leading_blank_lines(&record.template));
        assert_eq!(ctx.store.require("padded").unwrap().template, "Hi");

        assert!(has_leading_blank_lines("\r\nHi"));
        assert!(!has_leading_blank_lines("Hi\n\n"));
        assert!(!has_leading_blank_lines("  Hi"));
    }

    #[test]
    fn test_missing_references() {
        let (_temp, ctx) = test_context();
        add_prompt(&ctx, args("greeting", "Hello")).unwrap();
        let (record, _) = add_prompt(
            &ctx,
            args("combo", "{{prompt:greeting}} {{prompt:absent}} {{prompt_var:kind}}"),
        )
        .unwrap();

        assert_eq!(missing_references(&ctx, &record).unwrap(), vec!["absent"]);
    }
}
