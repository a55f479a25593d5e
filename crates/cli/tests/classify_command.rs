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

fn vibedoc(config_home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("vibedoc"));
    cmd.env("XDG_CONFIG_HOME", config_home);
    cmd
}

#[test]
fn classify_by_path() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("project/naming-rule.mdc");
    write_file(&file, "plain words");

    vibedoc(tmp.path())
        .args(["classify", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::diff("rule\n"));
}

#[test]
fn classify_by_content_only() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("project/naming-rule.mdc");
    write_file(&file, "plain words");

    vibedoc(tmp.path())
        .args(["classify", "--no-context", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::diff("generic\n"));
}

#[test]
fn classify_rule_content_without_context() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("data.txt");
    write_file(&file, "---\nrule: true\n---\n约定内容");

    vibedoc(tmp.path())
        .args(["classify", "--no-context", "--json", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"rule\""))
        .stdout(predicate::str::contains("\"by\": \"content\""));
}

#[test]
fn classify_document_content_without_context() {
    let tmp = tempdir().unwrap();
    let file = tmp.path().join("data.txt");
    write_file(&file, "# One\n\n## Two\n\n- a\n- b\n");

    vibedoc(tmp.path())
        .args(["classify", "--no-context", file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::diff("document\n"));
}

#[test]
fn classify_with_configured_keyword() {
    let tmp = tempdir().unwrap();
    let cfg = tmp.path().join("cfg.toml");
    write_file(&cfg, "version = 1\n[classifier]\nextra_rule_keywords = [\"policy\"]\n");
    let file = tmp.path().join("data.txt");
    write_file(&file, "---\nowner: ops\n---\nPolicy text");

    vibedoc(tmp.path())
        .args(["--config", cfg.to_str().unwrap(), "classify", "--no-context"])
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::diff("rule\n"));
}
