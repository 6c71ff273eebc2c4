//! Implementation of the `pren list` command.
//!
//! Lists stored prompts, optionally filtered by tag and name glob.

use crate::cli::ListArgs;
use crate::context::PrenContext;
use crate::error::{PrenError, Result};
use crate::prompt::PromptRecord;
use globset::{Glob, GlobMatcher};
use serde::Serialize;

/// One row of `pren list --json` output.
#[derive(Debug, Serialize)]
struct ListEntry<'a> {
    name: &'a str,
    description: Option<&'a str>,
    tags: &'a [String],
    variables: Vec<&'a str>,
    prompt_refs: Vec<&'a str>,
}

impl<'a> ListEntry<'a> {
    fn from_record(record: &'a PromptRecord) -> Self {
        // Stored prompts were checked on save; a hand-edited broken one lists without details.
        let (variables, prompt_refs) = match record.parse_template() {
            Ok(template) => (template.variables(), template.prompt_refs()),
            Err(_) => (Vec::new(), Vec::new()),
        };

        Self {
            name: record.name(),
            description: record.meta.description.as_deref(),
            tags: &record.meta.tags,
            variables,
            prompt_refs,
        }
    }
}

/// Execute the `pren list` command.
pub fn cmd_list(ctx: &PrenContext, args: ListArgs) -> Result<()> {
    let json = args.json;
    let prompts = select_prompts(ctx, &args)?;

    if json {
        let entries: Vec<ListEntry<'_>> = prompts.iter().map(ListEntry::from_record).collect();
        let output = serde_json::to_string_pretty(&entries).map_err(|e| {
            PrenError::StorageError(format!("failed to serialize prompt list: {}", e))
        })?;
        println!("{}", output);
        return Ok(());
    }

    if prompts.is_empty() {
        println!("No prompts found in {}", ctx.store.root().display());
        return Ok(());
    }

    let width = prompts.iter().map(|p| p.name().len()).max().unwrap_or(0);
    for prompt in &prompts {
        let description = prompt.meta.description.as_deref().unwrap_or("");
        if prompt.meta.tags.is_empty() {
            println!("{:width$}  {}", prompt.name(), description, width = width);
        } else {
            println!(
                "{:width$}  {} [{}]",
                prompt.name(),
                description,
                prompt.meta.tags.join(", "),
                width = width
            );
        }
    }

    println!();
    println!("{} prompt(s)", prompts.len());

    Ok(())
}

/// Load the prompts selected by the tag and name filters, sorted by name.
pub(crate) fn select_prompts(ctx: &PrenContext, args: &ListArgs) -> Result<Vec<PromptRecord>> {
    let matcher = args.name.as_deref().map(name_matcher).transpose()?;

    let prompts = ctx.store.by_tags(&args.tag)?;
    Ok(prompts
        .into_iter()
        .filter(|prompt| {
            matcher
                .as_ref()
                .is_none_or(|matcher| matcher.is_match(prompt.name()))
        })
        .collect())
}

fn name_matcher(pattern: &str) -> Result<GlobMatcher> {
    let glob = Glob::new(pattern).map_err(|e| {
        PrenError::UserError(format!("invalid name pattern '{}': {}", pattern, e))
    })?;
    Ok(glob.compile_matcher())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use tempfile::TempDir;

    fn context_with(prompts: &[(&str, &[&str])]) -> (TempDir, PrenContext) {
        let temp = TempDir::new().unwrap();
        let ctx = PrenContext::from_config(Config::default(), Some(temp.path().join("prompts")));
        for (name, tags) in prompts {
            let record = PromptRecord::new(
                *name,
                "Hello, {{name}}! {{prompt:base}}",
                Some(format!("about {}", name)),
                tags.iter().map(|t| t.to_string()).collect(),
            )
            .unwrap();
            ctx.store.save(&record, false).unwrap();
        }
        (temp, ctx)
    }

    fn list_args(tags: &[&str], name: Option<&str>) -> ListArgs {
        ListArgs {
            tag: tags.iter().map(|t| t.to_string()).collect(),
            name: name.map(str::to_string),
            json: false,
        }
    }

    fn names(prompts: &[PromptRecord]) -> Vec<&str> {
        prompts.iter().map(|p| p.name()).collect()
    }

    #[test]
    fn test_select_all() {
        let (_temp, ctx) = context_with(&[("plan-b", &[]), ("plan-a", &["work"]), ("note", &[])]);
        let prompts = select_prompts(&ctx, &list_args(&[], None)).unwrap();
        assert_eq!(names(&prompts), vec!["note", "plan-a", "plan-b"]);
    }

    #[test]
    fn test_select_by_name_glob_and_tag() {
        let (_temp, ctx) = context_with(&[
            ("plan-a", &["work"]),
            ("plan-b", &[]),
            ("note", &["work"]),
        ]);

        let by_name = select_prompts(&ctx, &list_args(&[], Some("plan-*"))).unwrap();
        assert_eq!(names(&by_name), vec!["plan-a", "plan-b"]);

        let by_tag = select_prompts(&ctx, &list_args(&["work"], None)).unwrap();
        assert_eq!(names(&by_tag), vec!["note", "plan-a"]);

        let both = select_prompts(&ctx, &list_args(&["work"], Some("plan-*"))).unwrap();
        assert_eq!(names(&both), vec!["plan-a"]);
    }

    #[test]
    fn test_invalid_glob_is_user_error() {
        let (_temp, ctx) = context_with(&[]);
        let err = select_prompts(&ctx, &list_args(&[], Some("plan-[a"))).unwrap_err();
        assert!(err.to_string().contains("invalid name pattern"));
    }

    #[test]
    fn test_json_entry() {
        let record = PromptRecord::new(
            "greeting",
            "Hello, {{name}}! {{prompt:base}} {{prompt_var:kind}}",
            Some("Friendly".to_string()),
            vec!["example".to_string()],
        )
        .unwrap();

        let value = serde_json::to_value(ListEntry::from_record(&record)).unwrap();
        assert_eq!(value["name"], "greeting");
        assert_eq!(value["description"], "Friendly");
        assert_eq!(value["tags"], serde_json::json!(["example"]));
        assert_eq!(value["variables"], serde_json::json!(["name", "kind"]));
        assert_eq!(value["prompt_refs"], serde_json::json!(["base"]));
    }
}
