//! Frontmatter validation against a schema.

use crate::frontmatter::{FrontmatterNode, NodeValue};
use crate::schema::{Schema, SchemaRule};

use super::violation::{KeyPath, Violation, ViolationKind};

/// Validate parsed frontmatter nodes against a schema.
///
/// Missing top-level keys come first, in schema order. Everything else follows
/// the order keys appear in the source. Nothing stops the walk early: every
/// violation in the block is returned.
pub fn validate<'a>(nodes: &'a [FrontmatterNode], schema: &Schema) -> Vec<Violation<'a>> {
    let mut violations = Vec::new();
    check_scope(nodes, schema.rules(), &KeyPath::root(), None, &mut violations);
    violations
}

fn check_scope<'a>(
    nodes: &'a [FrontmatterNode],
    rules: &[SchemaRule],
    prefix: &KeyPath,
    parent: Option<&'a FrontmatterNode>,
    out: &mut Vec<Violation<'a>>,
) {
    report_missing(nodes, rules, prefix, parent, out);

    for node in nodes {
        let path = prefix.child(&node.key);

        let Some(rule) = rules.iter().find(|r| r.name == node.key) else {
            out.push(Violation::new(ViolationKind::UnknownProperty, path, Some(node)));
            continue;
        };

        if rule.deprecated {
            out.push(Violation::new(ViolationKind::DeprecatedProperty, path.clone(), Some(node)));
        }

        if let Some(nested) = rule.nested {
            match &node.value {
                NodeValue::Mapping(children) => {
                    check_scope(children, nested, &path, Some(node), out);
                }
                // Non-object value: every required sub-key counts as missing.
                NodeValue::Null | NodeValue::Scalar(_) => {
                    report_missing(&[], nested, &path, Some(node), out);
                }
            }
        }
    }
}

fn report_missing<'a>(
    nodes: &[FrontmatterNode],
    rules: &[SchemaRule],
    prefix: &KeyPath,
    parent: Option<&'a FrontmatterNode>,
    out: &mut Vec<Violation<'a>>,
) {
    let kind = match parent {
        Some(_) => ViolationKind::NestedMissingRequired,
        None => ViolationKind::MissingRequired,
    };

    for rule in rules.iter().filter(|r| r.required) {
        if !nodes.iter().any(|n| n.key == rule.name) {
            out.push(Violation::new(kind, prefix.child(rule.name), parent));
        }
    }
}
