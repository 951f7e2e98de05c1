use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

/// Command isolated from any config in the developer's home directory.
fn frontlint(config_home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("frontlint"));
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn valid_document_passes() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("ok.md");
    write_file(&doc, "---\ntitle: Title\nversions:\n  fpt: '*'\n---\n\n# Body\n");

    frontlint(tmp.path())
        .arg("check")
        .arg(&doc)
        .assert()
        .success()
        .stdout(predicate::str::contains("All 1 files passed."));
}

#[test]
fn deprecated_property_is_reported_with_range() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("doc.md");
    write_file(
        &doc,
        "---\ntitle: Title\nversions:\n  fpt: '*'\nminiTocMaxHeadingLevel: 2\n---\n",
    );

    frontlint(tmp.path())
        .current_dir(tmp.path())
        .args(["check", "doc.md"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("doc.md:5:1-25 deprecated-property"))
        .stdout(predicate::str::contains("1 error(s) in 1 of 1 files"));
}

#[test]
fn errors_are_listed_in_line_order() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("doc.md");
    write_file(&doc, "---\ntitle: Title\nversions:\n  ft: '*'\nmona: lisa\n---\n");

    let assert = frontlint(tmp.path())
        .current_dir(tmp.path())
        .args(["check", "doc.md"])
        .assert()
        .code(1);

    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = out.lines().filter(|l| l.starts_with("doc.md:")).collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("doc.md:4:1-2 unknown-property"));
    assert!(lines[1].starts_with("doc.md:5:1-4 unknown-property"));
}

#[test]
fn missing_required_has_no_range() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("doc.md");
    write_file(&doc, "---\ntitle: Title\n---\n");

    frontlint(tmp.path())
        .current_dir(tmp.path())
        .args(["check", "doc.md"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "doc.md:1 missing-required Missing required frontmatter property 'versions'",
        ));
}

#[test]
fn json_format_reports_positions() {
    let tmp = tempdir().unwrap();
    let doc = tmp.path().join("doc.md");
    write_file(&doc, "---\ntitle: Title\n---\n");

    let assert = frontlint(tmp.path())
        .current_dir(tmp.path())
        .args(["check", "--format", "json", "doc.md"])
        .assert()
        .code(1);

    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&out).unwrap();
    let errors = &json[0]["errors"];
    assert_eq!(json[0]["path"], "doc.md");
    assert_eq!(errors[0]["lineNumber"], 1);
    assert!(errors[0]["errorRange"].is_null());
    assert_eq!(errors[0]["rule"], "missing-required");
}

#[test]
fn quiet_format_lists_failing_files_only() {
    let tmp = tempdir().unwrap();
    write_file(&tmp.path().join("good.md"), "---\ntitle: T\nversions:\n  fpt: '*'\n---\n");
    write_file(&tmp.path().join("bad.md"), "# no frontmatter\n");

    frontlint(tmp.path())
        .current_dir(tmp.path())
        .args(["check", "--format", "quiet", "good.md", "bad.md"])
        .assert()
        .code(1)
        .stdout(predicate::eq("bad.md\n"));
}

#[test]
fn pre_split_flag_reads_bare_yaml() {
    let tmp = tempdir().unwrap();
    let fm = tmp.path().join("fm.yml");
    write_file(&fm, "title: Title\nversions:\n  fpt: '*'\nmona: lisa\n");

    frontlint(tmp.path())
        .current_dir(tmp.path())
        .args(["check", "--pre-split", "fm.yml"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("fm.yml:4:1-4 unknown-property"));
}

#[test]
fn config_sets_default_format() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("frontlint/config.toml");
    write_file(&cfg, "version = 1\n[lint]\nformat = \"json\"\n");
    write_file(&tmp.path().join("doc.md"), "---\ntitle: T\nversions:\n  fpt: '*'\n---\n");

    frontlint(tmp.path())
        .current_dir(tmp.path())
        .args(["check", "doc.md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"errors\": []"));
}

#[test]
fn unreadable_file_exits_with_two() {
    let tmp = tempdir().unwrap();
    write_file(&tmp.path().join("ok.md"), "---\ntitle: T\nversions:\n  fpt: '*'\n---\n");

    frontlint(tmp.path())
        .current_dir(tmp.path())
        .args(["check", "ok.md", "missing.md"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Error reading missing.md"));
}

#[test]
fn missing_explicit_config_exits_with_two() {
    let tmp = tempdir().unwrap();
    write_file(&tmp.path().join("ok.md"), "---\ntitle: T\nversions:\n  fpt: '*'\n---\n");

    frontlint(tmp.path())
        .current_dir(tmp.path())
        .args(["--config", "nope.toml", "check", "ok.md"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config file not found"));
}

#[test]
fn check_requires_files() {
    let tmp = tempdir().unwrap();
    frontlint(tmp.path()).arg("check").assert().failure();
}
