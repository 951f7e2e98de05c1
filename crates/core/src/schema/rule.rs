//! Schema rule and schema table types.

/// How a recognised key is treated when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleStatus {
    Required,
    Optional,
    Deprecated,
}

impl RuleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional",
            Self::Deprecated => "deprecated",
        }
    }
}

impl std::fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Schema entry for a single frontmatter key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaRule {
    /// Key name as written in the frontmatter.
    pub name: &'static str,

    /// Whether the key must be present.
    pub required: bool,

    /// Recognised, but its presence is reported.
    pub deprecated: bool,

    /// Sub-keys accepted when the value is an object.
    /// Keys outside this list are unknown.
    pub nested: Option<&'static [SchemaRule]>,
}

impl SchemaRule {
    /// A key that may be omitted.
    pub const fn optional(name: &'static str) -> Self {
        Self { name, required: false, deprecated: false, nested: None }
    }

    /// A key that must be present.
    pub const fn required(name: &'static str) -> Self {
        Self { name, required: true, deprecated: false, nested: None }
    }

    /// A key that is recognised but must no longer be used.
    pub const fn deprecated(name: &'static str) -> Self {
        Self { name, required: false, deprecated: true, nested: None }
    }

    /// Attach an object shape to this key.
    pub const fn with_nested(self, rules: &'static [SchemaRule]) -> Self {
        Self { nested: Some(rules), ..self }
    }

    pub fn status(&self) -> RuleStatus {
        if self.deprecated {
            RuleStatus::Deprecated
        } else if self.required {
            RuleStatus::Required
        } else {
            RuleStatus::Optional
        }
    }

    /// The object shape of this key as a schema of its own.
    pub fn nested_schema(&self) -> Option<Schema> {
        self.nested.map(Schema::new)
    }
}

/// An ordered table of rules for one scope (top level or inside an object).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    rules: &'static [SchemaRule],
}

impl Schema {
    pub const fn new(rules: &'static [SchemaRule]) -> Self {
        Self { rules }
    }

    /// Rules in declaration order.
    pub fn rules(&self) -> &'static [SchemaRule] {
        self.rules
    }

    /// Look up the rule for a key.
    pub fn rule(&self, name: &str) -> Option<&'static SchemaRule> {
        self.rules.iter().find(|r| r.name == name)
    }

    /// Required rules in declaration order.
    pub fn required(&self) -> impl Iterator<Item = &'static SchemaRule> {
        self.rules.iter().filter(|r| r.required)
    }

    /// Deprecated rules in declaration order.
    pub fn deprecated(&self) -> impl Iterator<Item = &'static SchemaRule> {
        self.rules.iter().filter(|r| r.deprecated)
    }

    /// Whether `name` is a recognised key that may still be used.
    pub fn is_allowed(&self, name: &str) -> bool {
        self.rule(name).is_some_and(|r| !r.deprecated)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
