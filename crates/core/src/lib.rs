//! Positioned frontmatter schema validation.
//!
//! Given a markdown document, [`rule::FrontmatterSchemaRule`] finds the YAML
//! frontmatter block, checks it against a static schema and reports every
//! problem with the document line (and, where it makes sense, the column
//! range) an author has to look at.
//!
//! ```
//! use frontlint_core::rule::{FrontmatterSchemaRule, RuleInput};
//!
//! let doc = "---\ntitle: Title\nversions:\n  fpt: '*'\nmona: lisa\n---\n";
//! let errors = FrontmatterSchemaRule::default().check(RuleInput::Document(doc));
//! assert_eq!(errors.len(), 1);
//! assert_eq!(errors[0].line_number, 5);
//! assert_eq!(errors[0].error_range, Some((1, 4)));
//! ```

#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod frontmatter;
pub mod rule;
pub mod schema;
pub mod validation;
