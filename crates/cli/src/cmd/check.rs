//! Check command implementation.

use std::path::PathBuf;

use color_eyre::eyre::Result;
use frontlint_core::config::ResolvedConfig;
use frontlint_core::rule::{FrontmatterSchemaRule, RuleInput};

use super::output::{FileReport, print_json, print_quiet, print_text};
use crate::{CheckArgs, OutputFormat};

/// Exit code when every file passed.
pub const EXIT_OK: i32 = 0;
/// Exit code when at least one frontmatter error was reported.
pub const EXIT_LINT_ERRORS: i32 = 1;
/// Exit code when a file could not be read.
pub const EXIT_IO_ERROR: i32 = 2;

pub fn run(rc: &ResolvedConfig, args: CheckArgs) -> Result<i32> {
    let rule = FrontmatterSchemaRule::default();
    let pre_split = args.pre_split || rc.lint.pre_split;
    let format = args.format.unwrap_or_else(|| rc.lint.format.into());

    let mut reports = Vec::with_capacity(args.files.len());
    let mut unreadable: Vec<PathBuf> = Vec::new();

    for path in args.files {
        let content = match std::fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error reading {}: {}", path.display(), e);
                unreadable.push(path);
                continue;
            }
        };

        let input = if pre_split {
            RuleInput::PreSplit { text: &content, start_line: 0 }
        } else {
            RuleInput::Document(&content)
        };

        let errors = rule.check(input);
        tracing::info!(path = %path.display(), errors = errors.len(), "checked file");
        reports.push(FileReport { path, errors });
    }

    match format {
        OutputFormat::Text => print_text(&reports),
        OutputFormat::Json => print_json(&reports)?,
        OutputFormat::Quiet => print_quiet(&reports),
    }

    if !unreadable.is_empty() {
        Ok(EXIT_IO_ERROR)
    } else if reports.iter().any(|r| !r.errors.is_empty()) {
        Ok(EXIT_LINT_ERRORS)
    } else {
        Ok(EXIT_OK)
    }
}
