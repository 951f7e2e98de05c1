//! Report formatting for the check command.

use std::path::{Path, PathBuf};

use color_eyre::eyre::Result;
use frontlint_core::validation::PositionedError;
use serde::Serialize;

/// Errors found in one file.
#[derive(Debug, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub errors: Vec<PositionedError>,
}

/// `path:line[:start-end] rule detail`
pub fn format_error(path: &Path, error: &PositionedError) -> String {
    let location = match error.error_range {
        Some((start, end)) => format!("{}:{}:{}-{}", path.display(), error.line_number, start, end),
        None => format!("{}:{}", path.display(), error.line_number),
    };
    format!("{location} {} {}", error.rule, error.detail)
}

pub fn print_text(reports: &[FileReport]) {
    let failing = reports.iter().filter(|r| !r.errors.is_empty()).count();
    if failing == 0 {
        println!("All {} files passed.", reports.len());
        return;
    }

    let mut total = 0;
    for report in reports {
        for error in &report.errors {
            println!("{}", format_error(&report.path, error));
            total += 1;
        }
    }
    println!();
    println!("{} error(s) in {} of {} files", total, failing, reports.len());
}

pub fn print_json(reports: &[FileReport]) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(reports)?);
    Ok(())
}

pub fn print_quiet(reports: &[FileReport]) {
    for report in reports.iter().filter(|r| !r.errors.is_empty()) {
        println!("{}", report.path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use frontlint_core::validation::ErrorKind;

    #[test]
    fn test_format_with_range() {
        let error = PositionedError {
            line_number: 5,
            error_range: Some((1, 4)),
            rule: ErrorKind::UnknownProperty,
            detail: "The frontmatter property 'mona' is not supported".to_string(),
        };
        assert_eq!(
            format_error(&PathBuf::from("doc.md"), &error),
            "doc.md:5:1-4 unknown-property The frontmatter property 'mona' is not supported"
        );
    }

    #[test]
    fn test_format_without_range() {
        let error = PositionedError {
            line_number: 1,
            error_range: None,
            rule: ErrorKind::MissingRequired,
            detail: "Missing required frontmatter property 'versions'".to_string(),
        };
        assert_eq!(
            format_error(&PathBuf::from("a/b.md"), &error),
            "a/b.md:1 missing-required Missing required frontmatter property 'versions'"
        );
    }
}
