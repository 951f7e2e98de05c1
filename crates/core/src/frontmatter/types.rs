//! Frontmatter types and data structures.

use serde::Serialize;
use serde_yaml::Value;

/// The delimiter-bounded frontmatter region of a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontmatterBlock {
    /// Raw text strictly between the two `---` delimiters, joined with `\n`.
    pub text: String,
    /// 1-based line of the opening delimiter.
    pub start_line: usize,
    /// 1-based line of the closing delimiter.
    pub end_line: usize,
}

impl FrontmatterBlock {
    /// Line of the first content line inside the block.
    pub fn first_content_line(&self) -> usize {
        self.start_line + 1
    }
}

/// Inclusive, 1-based column range on a single line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnSpan {
    pub start: usize,
    pub end: usize,
}

impl ColumnSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn as_range(&self) -> (usize, usize) {
        (self.start, self.end)
    }
}

/// Value held by a [`FrontmatterNode`].
#[derive(Debug, Clone, PartialEq)]
pub enum NodeValue {
    /// `key:` with nothing after it, or an explicit `null`/`~`.
    Null,
    /// Any non-mapping value: strings, numbers, booleans and sequences.
    Scalar(Value),
    /// Nested mapping, children in source order.
    Mapping(Vec<FrontmatterNode>),
}

impl NodeValue {
    pub fn children(&self) -> Option<&[FrontmatterNode]> {
        match self {
            Self::Mapping(children) => Some(children),
            _ => None,
        }
    }
}

/// A single key of the parsed frontmatter, with its position in the document.
#[derive(Debug, Clone, PartialEq)]
pub struct FrontmatterNode {
    pub key: String,
    pub value: NodeValue,
    /// 1-based line, absolute within the whole document.
    pub line: usize,
    /// Columns covered by the `key: value` text on `line`.
    pub span: ColumnSpan,
}

impl FrontmatterNode {
    /// Length of the key in characters.
    pub fn key_len(&self) -> usize {
        self.key.chars().count()
    }

    pub fn children(&self) -> &[FrontmatterNode] {
        self.value.children().unwrap_or(&[])
    }

    pub fn is_mapping(&self) -> bool {
        matches!(self.value, NodeValue::Mapping(_))
    }
}
