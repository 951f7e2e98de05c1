//! Mapping violations back onto document lines and columns.

use serde::Serialize;

use super::violation::{Violation, ViolationKind};

/// Rule identifier carried by a [`PositionedError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// The block is not valid YAML or not a mapping; no schema checks ran.
    MalformedFrontmatter,
    MissingRequired,
    UnknownProperty,
    DeprecatedProperty,
    NestedMissingRequired,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MalformedFrontmatter => "malformed-frontmatter",
            Self::MissingRequired => "missing-required",
            Self::UnknownProperty => "unknown-property",
            Self::DeprecatedProperty => "deprecated-property",
            Self::NestedMissingRequired => "nested-missing-required",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<ViolationKind> for ErrorKind {
    fn from(kind: ViolationKind) -> Self {
        match kind {
            ViolationKind::MissingRequired => Self::MissingRequired,
            ViolationKind::UnknownProperty => Self::UnknownProperty,
            ViolationKind::DeprecatedProperty => Self::DeprecatedProperty,
            ViolationKind::NestedMissingRequired => Self::NestedMissingRequired,
        }
    }
}

/// A problem anchored to a document line, ready for the reporter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionedError {
    /// 1-based line in the whole document.
    pub line_number: usize,
    /// Inclusive 1-based column range, serialized as `[start, end]` or `null`.
    pub error_range: Option<(usize, usize)>,
    pub rule: ErrorKind,
    pub detail: String,
}

impl PositionedError {
    /// The frontmatter block could not be parsed.
    pub fn malformed(block_start_line: usize, error: &impl std::fmt::Display) -> Self {
        Self {
            line_number: block_start_line,
            error_range: None,
            rule: ErrorKind::MalformedFrontmatter,
            detail: error.to_string(),
        }
    }
}

/// Translate one violation into a positioned error.
///
/// `block_start_line` is the line of the opening delimiter, which is where
/// anything without a node of its own gets anchored.
pub fn locate(violation: &Violation<'_>, block_start_line: usize) -> PositionedError {
    let (line_number, error_range) = match (violation.kind, violation.node) {
        (ViolationKind::UnknownProperty, Some(node)) => (node.line, Some((1, node.key_len()))),
        (ViolationKind::DeprecatedProperty, Some(node)) => (node.line, Some(node.span.as_range())),
        (ViolationKind::NestedMissingRequired, Some(parent)) => (parent.line, None),
        (ViolationKind::MissingRequired, _) | (_, None) => (block_start_line, None),
    };

    PositionedError {
        line_number,
        error_range,
        rule: violation.kind.into(),
        detail: violation.message(),
    }
}

/// Locate every violation and order the result by line.
///
/// The sort is stable, so violations on the same line keep emission order.
pub fn locate_all(violations: &[Violation<'_>], block_start_line: usize) -> Vec<PositionedError> {
    let mut errors: Vec<PositionedError> =
        violations.iter().map(|v| locate(v, block_start_line)).collect();
    errors.sort_by_key(|e| e.line_number);
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::{ColumnSpan, FrontmatterNode, NodeValue};
    use crate::validation::violation::KeyPath;

    fn node(key: &str, line: usize, span: (usize, usize)) -> FrontmatterNode {
        FrontmatterNode {
            key: key.to_string(),
            value: NodeValue::Null,
            line,
            span: ColumnSpan::new(span.0, span.1),
        }
    }

    #[test]
    fn test_unknown_covers_key_name() {
        let mona = node("mona", 5, (1, 10));
        let v = Violation::new(ViolationKind::UnknownProperty, KeyPath::root().child("mona"), Some(&mona));
        let e = locate(&v, 1);
        assert_eq!(e.line_number, 5);
        assert_eq!(e.error_range, Some((1, 4)));
        assert_eq!(e.rule, ErrorKind::UnknownProperty);
    }

    #[test]
    fn test_deprecated_covers_whole_entry() {
        let n = node("miniTocMaxHeadingLevel", 5, (1, 25));
        let v = Violation::new(ViolationKind::DeprecatedProperty, KeyPath::root().child(&n.key), Some(&n));
        let e = locate(&v, 1);
        assert_eq!(e.line_number, 5);
        assert_eq!(e.error_range, Some((1, 25)));
    }

    #[test]
    fn test_missing_required_anchors_at_block_start() {
        let v = Violation::new(ViolationKind::MissingRequired, KeyPath::root().child("versions"), None);
        let e = locate(&v, 1);
        assert_eq!(e.line_number, 1);
        assert_eq!(e.error_range, None);
        assert_eq!(e.detail, "Missing required frontmatter property 'versions'");
    }

    #[test]
    fn test_nested_missing_anchors_at_parent() {
        let parent = node("sidebarLink", 5, (1, 12));
        let v = Violation::new(
            ViolationKind::NestedMissingRequired,
            ["sidebarLink", "text"].into_iter().collect(),
            Some(&parent),
        );
        let e = locate(&v, 1);
        assert_eq!(e.line_number, 5);
        assert_eq!(e.error_range, None);
    }

    #[test]
    fn test_locate_all_sorts_stably_by_line() {
        let late = node("zzz", 7, (1, 8));
        let early = node("aaa", 3, (1, 8));
        let violations = vec![
            Violation::new(ViolationKind::MissingRequired, KeyPath::root().child("title"), None),
            Violation::new(ViolationKind::UnknownProperty, KeyPath::root().child("zzz"), Some(&late)),
            Violation::new(ViolationKind::MissingRequired, KeyPath::root().child("versions"), None),
            Violation::new(ViolationKind::UnknownProperty, KeyPath::root().child("aaa"), Some(&early)),
        ];
        let errors = locate_all(&violations, 1);
        let lines: Vec<_> = errors.iter().map(|e| e.line_number).collect();
        assert_eq!(lines, [1, 1, 3, 7]);
        assert!(errors[0].detail.contains("'title'"));
        assert!(errors[1].detail.contains("'versions'"));
    }

    #[test]
    fn test_malformed_constructor() {
        let e = PositionedError::malformed(1, &"bad yaml");
        assert_eq!(e.rule, ErrorKind::MalformedFrontmatter);
        assert_eq!(e.line_number, 1);
        assert_eq!(e.error_range, None);
        assert_eq!(e.detail, "bad yaml");
    }

    #[test]
    fn test_serialized_shape() {
        let e = PositionedError {
            line_number: 4,
            error_range: Some((1, 2)),
            rule: ErrorKind::UnknownProperty,
            detail: "x".to_string(),
        };
        let json = serde_json::to_value(&e).unwrap();
        assert_eq!(json["lineNumber"], 4);
        assert_eq!(json["errorRange"], serde_json::json!([1, 2]));
        assert_eq!(json["rule"], "unknown-property");

        let missing = PositionedError { error_range: None, ..e };
        let json = serde_json::to_value(&missing).unwrap();
        assert!(json["errorRange"].is_null());
    }
}
