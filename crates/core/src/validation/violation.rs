//! Position-independent descriptions of schema non-conformance.

use serde::Serialize;

use crate::frontmatter::FrontmatterNode;

/// Kind of schema violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ViolationKind {
    /// A required top-level key is absent (or the whole block is).
    MissingRequired,
    /// A key that no rule recognises.
    UnknownProperty,
    /// A recognised key that must no longer be used.
    DeprecatedProperty,
    /// A required key of a nested object is absent.
    NestedMissingRequired,
}

impl ViolationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::MissingRequired => "missing-required",
            Self::UnknownProperty => "unknown-property",
            Self::DeprecatedProperty => "deprecated-property",
            Self::NestedMissingRequired => "nested-missing-required",
        }
    }
}

impl std::fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Key names from the root of the frontmatter down to a value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyPath(Vec<String>);

impl KeyPath {
    /// The empty path, meaning the frontmatter block itself.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    /// A copy of this path extended by one key.
    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(key.to_string());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Last key on the path.
    pub fn leaf(&self) -> Option<&str> {
        self.0.last().map(String::as_str)
    }

    /// Everything but the last key, dotted.
    pub fn parent_display(&self) -> String {
        match self.0.split_last() {
            Some((_, parents)) => parents.join("."),
            None => String::new(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for KeyPath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl std::fmt::Display for KeyPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// A schema violation, tied to the node that caused it when there is one.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation<'a> {
    pub kind: ViolationKind,
    pub path: KeyPath,
    /// Offending node; for nested-missing violations, the containing object.
    /// `None` for missing top-level keys.
    pub node: Option<&'a FrontmatterNode>,
}

impl<'a> Violation<'a> {
    pub fn new(kind: ViolationKind, path: KeyPath, node: Option<&'a FrontmatterNode>) -> Self {
        Self { kind, path, node }
    }

    /// The document has no frontmatter block at all.
    pub fn missing_frontmatter() -> Self {
        Self::new(ViolationKind::MissingRequired, KeyPath::root(), None)
    }

    /// Human-readable description for reports.
    pub fn message(&self) -> String {
        let key = self.path.leaf().unwrap_or_default();
        match self.kind {
            ViolationKind::MissingRequired if self.path.is_root() => {
                "Document does not start with a frontmatter block".to_string()
            }
            ViolationKind::MissingRequired => {
                format!("Missing required frontmatter property '{key}'")
            }
            ViolationKind::UnknownProperty if self.path.segments().len() > 1 => {
                format!(
                    "The property '{key}' is not supported in '{}'",
                    self.path.parent_display()
                )
            }
            ViolationKind::UnknownProperty => {
                format!("The frontmatter property '{key}' is not supported")
            }
            ViolationKind::DeprecatedProperty => format!(
                "The frontmatter property '{key}' is deprecated. Remove it from the frontmatter"
            ),
            ViolationKind::NestedMissingRequired => format!(
                "'{}' is missing required property '{key}'",
                self.path.parent_display()
            ),
        }
    }
}
