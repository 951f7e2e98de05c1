//! Locating the frontmatter block inside a markdown document.

use super::types::FrontmatterBlock;

const DELIMITER: &str = "---";

/// Extract the frontmatter block from a full document.
///
/// The document must open with a `---` line and the block runs until the
/// next line that is exactly `---`:
/// ```markdown
/// ---
/// title: Hello
/// ---
/// # Document content
/// ```
/// Returns `None` when the opening delimiter is not the first line or the
/// closing delimiter is missing.
pub fn extract(document: &str) -> Option<FrontmatterBlock> {
    let document = document.strip_prefix('\u{feff}').unwrap_or(document);
    let mut lines = document.lines();

    let first = lines.next()?;
    if first.trim_end() != DELIMITER {
        return None;
    }

    let mut body = Vec::new();
    for (idx, line) in lines.enumerate() {
        if line.trim_end() == DELIMITER {
            // idx is 0-based relative to the line after the opening delimiter
            let end_line = idx + 2;
            return Some(FrontmatterBlock { text: body.join("\n"), start_line: 1, end_line });
        }
        body.push(line);
    }

    None
}
