//! The frontmatter schema lint rule.
//!
//! Runs extraction, parsing, validation and location mapping for one document
//! and hands back errors ready for the reporter.

use std::borrow::Cow;

use tracing::debug;

use crate::frontmatter::{extract, parse};
use crate::schema::{FRONTMATTER_SCHEMA, Schema};
use crate::validation::{PositionedError, Violation, locate, locate_all, validate};

/// Names the rule is registered under.
pub const RULE_NAMES: &[&str] = &["FM001", "frontmatter-schema"];

/// What the harness hands to the rule.
#[derive(Debug, Clone, Copy)]
pub enum RuleInput<'a> {
    /// Whole document; the frontmatter block is located here.
    Document(&'a str),
    /// The harness already split the frontmatter from the body.
    /// `start_line` is the document line of the opening delimiter; `0` means
    /// there is none and the text starts on line 1.
    PreSplit { text: &'a str, start_line: usize },
}

/// Checks frontmatter against a schema and reports positioned errors.
#[derive(Debug, Clone, Copy)]
pub struct FrontmatterSchemaRule {
    schema: &'static Schema,
}

impl Default for FrontmatterSchemaRule {
    fn default() -> Self {
        Self::new(&FRONTMATTER_SCHEMA)
    }
}

impl FrontmatterSchemaRule {
    pub fn new(schema: &'static Schema) -> Self {
        Self { schema }
    }

    pub fn names(&self) -> &'static [&'static str] {
        RULE_NAMES
    }

    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Run the rule. An empty result means the frontmatter is valid.
    pub fn check(&self, input: RuleInput<'_>) -> Vec<PositionedError> {
        let (text, start_line) = match input {
            RuleInput::Document(document) => match extract(document) {
                Some(block) => {
                    debug!(start = block.start_line, end = block.end_line, "found frontmatter block");
                    (Cow::Owned(block.text), block.start_line)
                }
                None => {
                    debug!("document has no frontmatter block");
                    return vec![locate(&Violation::missing_frontmatter(), 1)];
                }
            },
            RuleInput::PreSplit { text, start_line } => (Cow::Borrowed(text), start_line),
        };

        self.check_block(&text, start_line)
    }

    /// Check an already extracted block whose opening delimiter is on `start_line`.
    pub fn check_block(&self, text: &str, start_line: usize) -> Vec<PositionedError> {
        // Errors without a node of their own need a real line to sit on.
        let anchor = start_line.max(1);

        let nodes = match parse(text, start_line) {
            Ok(nodes) => nodes,
            Err(e) => {
                debug!(error = %e, "frontmatter is malformed, skipping schema checks");
                return vec![PositionedError::malformed(anchor, &e)];
            }
        };

        let violations = validate(&nodes, self.schema);
        debug!(nodes = nodes.len(), violations = violations.len(), "validated frontmatter");

        locate_all(&violations, anchor)
    }
}
