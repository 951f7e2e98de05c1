//! Declarative schema for documentation frontmatter.
//!
//! The schema is a static table of [`SchemaRule`]s. Each rule names a key and
//! says whether it is required, deprecated, and which sub-keys it accepts when
//! its value is an object. Anything not named by a rule is unknown.

pub mod builtin;
pub mod rule;

pub use builtin::FRONTMATTER_SCHEMA;
pub use rule::{RuleStatus, Schema, SchemaRule};
