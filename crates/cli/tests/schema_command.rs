use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn schema_lists_required_nested_and_deprecated_keys() {
    let tmp = tempdir().unwrap();
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("frontlint"));
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"title\s+│ required").unwrap())
        .stdout(predicate::str::is_match(r"sidebarLink\.href\s+│ required").unwrap())
        .stdout(predicate::str::is_match(r"miniTocMaxHeadingLevel\s+│ deprecated").unwrap())
        .stdout(predicate::str::contains("Unlisted keys are reported as unknown."));
}
