//! Schema listing command.

use frontlint_core::schema::{FRONTMATTER_SCHEMA, Schema};
use tabled::{Table, Tabled, settings::Style};

/// Row for the schema table.
#[derive(Tabled)]
struct RuleRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Status")]
    status: String,
}

fn rows(schema: &Schema) -> Vec<RuleRow> {
    let mut rows = Vec::new();
    for rule in schema.rules() {
        rows.push(RuleRow { key: rule.name.to_string(), status: rule.status().to_string() });
        for sub in rule.nested.unwrap_or_default() {
            rows.push(RuleRow {
                key: format!("{}.{}", rule.name, sub.name),
                status: sub.status().to_string(),
            });
        }
    }
    rows
}

pub fn run() {
    let rows = rows(&FRONTMATTER_SCHEMA);
    let table = Table::new(&rows).with(Style::rounded()).to_string();
    println!("{}", table);
    println!("\nUnlisted keys are reported as unknown.");
}
