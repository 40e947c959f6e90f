//! CLI behavior tests.

use assert_cmd::Command;
use predicates::prelude::*;

fn hanlint() -> Command {
    Command::cargo_bin("hanlint").expect("binary builds")
}

#[test]
fn no_arguments_prints_usage() {
    hanlint()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn check_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();

    hanlint()
        .current_dir(dir.path())
        .arg("check")
        .arg("does-not-exist.pdf")
        .assert()
        .code(2);
}

#[test]
fn check_rejects_empty_checker_set() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("dummy.pdf"), b"%PDF-1.4\n").unwrap();

    hanlint()
        .current_dir(dir.path())
        .arg("check")
        .arg("dummy.pdf")
        .arg("--checkers")
        .arg("")
        .assert()
        .code(2);
}

#[test]
fn check_rejects_unknown_checker() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("dummy.pdf"), b"%PDF-1.4\n").unwrap();

    hanlint()
        .current_dir(dir.path())
        .arg("check")
        .arg("dummy.pdf")
        .arg("--checkers")
        .arg("grammar")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown checker"));
}

#[test]
fn init_creates_config() {
    let dir = tempfile::tempdir().unwrap();

    hanlint()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    let config_path = dir.path().join(".hanlint.jsonc");
    assert!(config_path.exists());
    let content = std::fs::read_to_string(config_path).unwrap();
    assert!(content.contains("checkers"));
}

#[test]
fn init_refuses_to_overwrite() {
    let dir = tempfile::tempdir().unwrap();

    hanlint()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success();

    hanlint()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn init_force_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".hanlint.jsonc"), "{}").unwrap();

    hanlint()
        .current_dir(dir.path())
        .arg("init")
        .arg("--force")
        .assert()
        .success();

    let content = std::fs::read_to_string(dir.path().join(".hanlint.jsonc")).unwrap();
    assert!(content.contains("korean_ratio"));
}

#[test]
fn bad_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("config.jsonc"), r#"{ "checkers": [] }"#).unwrap();
    std::fs::write(dir.path().join("dummy.pdf"), b"%PDF-1.4\n").unwrap();

    hanlint()
        .current_dir(dir.path())
        .arg("--config")
        .arg("config.jsonc")
        .arg("check")
        .arg("dummy.pdf")
        .assert()
        .code(2);
}
