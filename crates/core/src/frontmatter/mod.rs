//! Frontmatter extraction and positioned parsing.
//!
//! This module provides functionality to:
//! - Locate the `---` delimited block at the top of a markdown document
//! - Parse that block into a key tree where every node knows its source line

pub mod extract;
pub mod parser;
pub mod types;

pub use extract::extract;
pub use parser::{FrontmatterParseError, parse};
pub use types::{ColumnSpan, FrontmatterBlock, FrontmatterNode, NodeValue};
