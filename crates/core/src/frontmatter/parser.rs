//! Frontmatter parsing into a positioned key tree.
//!
//! `serde_yaml` decides what the block means; a line scanner decides where
//! each key lives. The two are joined key by key so every node carries the
//! absolute line it was written on.

use std::sync::LazyLock;

use regex::Regex;
use serde_yaml::{Mapping, Value};
use thiserror::Error;

use super::types::{ColumnSpan, FrontmatterNode, NodeValue};

/// Errors that can occur during frontmatter parsing.
#[derive(Debug, Error)]
pub enum FrontmatterParseError {
    #[error("invalid YAML frontmatter: {0}")]
    InvalidYaml(#[from] serde_yaml::Error),

    #[error("frontmatter must be a mapping of keys to values, found {0}")]
    NotAMapping(&'static str),
}

static KEY_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    // Matches a block mapping entry `key:` / `key: value`
    // Captures:
    // indent: leading spaces
    // key: double-quoted, single-quoted or plain key
    // rest: everything after the colon
    Regex::new(
        r#"^(?P<indent> *)(?P<key>"(?:[^"\\]|\\.)*"|'(?:[^']|'')*'|[^\s#'"\[\]{},&*!|>%@`-][^:]*?|-[^\s:][^:]*?)[ \t]*:(?:[ \t]+(?P<rest>.*))?$"#,
    )
    .unwrap()
});

/// A `key:` line found by the scanner.
#[derive(Debug, Clone, PartialEq)]
struct ScannedKey {
    key: String,
    indent: usize,
    /// 1-based line within the block.
    line: usize,
    span: ColumnSpan,
    parent: Option<usize>,
}

/// Where keys of a mapping should look for their positions.
#[derive(Debug, Clone, Copy)]
enum Anchor {
    Root,
    Scanned(usize),
    /// Flow mapping or unscanned key: children share the containing line.
    Inherit { line: usize, span: ColumnSpan },
}

/// Parse the text of a frontmatter block into positioned nodes.
///
/// `start_line` is the document line of the opening delimiter, so the first
/// line of `text` lands on `start_line + 1`.
pub fn parse(
    text: &str,
    start_line: usize,
) -> Result<Vec<FrontmatterNode>, FrontmatterParseError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mapping = match serde_yaml::from_str::<Value>(text)? {
        Value::Mapping(m) => m,
        Value::Null => return Ok(Vec::new()),
        other => return Err(FrontmatterParseError::NotAMapping(yaml_type_name(&other))),
    };

    let scanned = scan_keys(text);
    tracing::trace!(keys = scanned.len(), "scanned frontmatter key lines");

    Ok(build_nodes(&mapping, &scanned, Anchor::Root, start_line))
}

/// Record every block-style `key:` line with its indentation parent.
fn scan_keys(text: &str) -> Vec<ScannedKey> {
    let mut scanned: Vec<ScannedKey> = Vec::new();
    let mut stack: Vec<usize> = Vec::new();
    // Indent of a key whose value is a `|` / `>` block scalar.
    let mut block_scalar: Option<usize> = None;

    for (idx, line) in text.lines().enumerate() {
        let trimmed = line.trim_start();
        if trimmed.is_empty() {
            continue;
        }
        let indent = line.len() - trimmed.len();

        if let Some(owner) = block_scalar {
            if indent > owner {
                continue;
            }
            block_scalar = None;
        }

        if trimmed.starts_with('#') || trimmed == "-" || trimmed.starts_with("- ") {
            continue;
        }

        let Some(caps) = KEY_LINE_RE.captures(line) else {
            continue;
        };
        let indent = caps["indent"].len();
        let key = unquote(&caps["key"]);
        let rest = caps.name("rest").map_or("", |m| m.as_str().trim());
        if rest.starts_with('|') || rest.starts_with('>') {
            block_scalar = Some(indent);
        }

        while let Some(&top) = stack.last()
            && scanned[top].indent >= indent
        {
            stack.pop();
        }

        let span = ColumnSpan::new(indent + 1, line.trim_end().chars().count());
        scanned.push(ScannedKey { key, indent, line: idx + 1, span, parent: stack.last().copied() });
        stack.push(scanned.len() - 1);
    }

    scanned
}

fn build_nodes(
    mapping: &Mapping,
    scanned: &[ScannedKey],
    anchor: Anchor,
    start_line: usize,
) -> Vec<FrontmatterNode> {
    let mut nodes = Vec::with_capacity(mapping.len());

    for (k, v) in mapping {
        let key = key_to_string(k);

        let found = match anchor {
            Anchor::Root => scanned.iter().position(|s| s.parent.is_none() && s.key == key),
            Anchor::Scanned(parent) => {
                scanned.iter().position(|s| s.parent == Some(parent) && s.key == key)
            }
            Anchor::Inherit { .. } => None,
        };

        let (line, span, child_anchor) = match (found, anchor) {
            (Some(i), _) => {
                let s = &scanned[i];
                (start_line + s.line, s.span, Anchor::Scanned(i))
            }
            (None, Anchor::Inherit { line, span }) => (line, span, anchor),
            (None, Anchor::Scanned(parent)) => {
                let p = &scanned[parent];
                let line = start_line + p.line;
                (line, p.span, Anchor::Inherit { line, span: p.span })
            }
            (None, Anchor::Root) => {
                let line = start_line + 1;
                let span = ColumnSpan::new(1, key.chars().count().max(1));
                (line, span, Anchor::Inherit { line, span })
            }
        };

        // Flow mappings have no key lines of their own below this entry.
        let child_anchor = match child_anchor {
            Anchor::Scanned(i) if !scanned.iter().any(|s| s.parent == Some(i)) => {
                Anchor::Inherit { line, span }
            }
            other => other,
        };

        let value = convert_value(v, scanned, child_anchor, start_line);
        nodes.push(FrontmatterNode { key, value, line, span });
    }

    nodes
}

fn convert_value(
    value: &Value,
    scanned: &[ScannedKey],
    anchor: Anchor,
    start_line: usize,
) -> NodeValue {
    match value {
        Value::Null => NodeValue::Null,
        Value::Mapping(m) => NodeValue::Mapping(build_nodes(m, scanned, anchor, start_line)),
        Value::Tagged(tagged) => convert_value(&tagged.value, scanned, anchor, start_line),
        other => NodeValue::Scalar(other.clone()),
    }
}

fn key_to_string(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => "null".to_string(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

fn unquote(raw: &str) -> String {
    if let Some(inner) = raw.strip_prefix('"').and_then(|s| s.strip_suffix('"')) {
        return inner.replace("\\\"", "\"").replace("\\\\", "\\");
    }
    if let Some(inner) = raw.strip_prefix('\'').and_then(|s| s.strip_suffix('\'')) {
        return inner.replace("''", "'");
    }
    raw.to_string()
}

/// Get a human-readable type name for a YAML value.
fn yaml_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "list",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}
