//! Implementation of the `pren check` command.
//!
//! Scans every prompt file and reports problems that would make rendering
//! fail regardless of the arguments given: unreadable files, template
//! syntax errors and static references to prompts that do not exist.

use crate::context::PrenContext;
use crate::error::{PrenError, Result};
use crate::prompt::PromptRecord;
use std::collections::BTreeSet;
use std::fmt;

/// A problem found in one prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Issue {
    pub prompt: String,
    pub message: String,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.prompt, self.message)
    }
}

/// Execute the `pren check` command.
pub fn cmd_check(ctx: &PrenContext) -> Result<()> {
    let (checked, issues) = find_issues(ctx)?;

    if issues.is_empty() {
        println!("Checked {} prompt(s): no problems found", checked);
        return Ok(());
    }

    for issue in &issues {
        println!("  - {}", issue);
    }
    println!();

    Err(PrenError::UserError(format!(
        "{} problem(s) found in {} prompt(s)",
        issues.len(),
        checked
    )))
}

/// Check every prompt file. Returns the number of files checked and the issues.
pub(crate) fn find_issues(ctx: &PrenContext) -> Result<(usize, Vec<Issue>)> {
    let entries = ctx.store.entries()?;
    let known: BTreeSet<&str> = entries.iter().map(|(name, _)| name.as_str()).collect();
    let mut issues = Vec::new();

    for (name, path) in &entries {
        let record = match PromptRecord::load(path) {
            Ok(record) => record,
            Err(e) => {
                issues.push(Issue {
                    prompt: name.clone(),
                    message: e.to_string(),
                });
                continue;
            }
        };

        let template = match record.parse_template() {
            Ok(template) => template,
            Err(e) => {
                issues.push(Issue {
                    prompt: name.clone(),
                    message: format!("invalid template: {}", e),
                });
                continue;
            }
        };

        for reference in template.prompt_refs() {
            if reference == name.as_str() {
                issues.push(Issue {
                    prompt: name.clone(),
                    message: "includes itself".to_string(),
                });
            } else if !known.contains(reference) {
                issues.push(Issue {
                    prompt: name.clone(),
                    message: format!("includes missing prompt '{}'", reference),
                });
            }
        }
    }

    Ok((entries.len(), issues))
}
