//! Check subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_check_clean_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("clean.rst");
    fs::write(&test_file, "Title\n=====\n\n.. note:: All good.\n").unwrap();

    cargo_bin_cmd!("rstdoc")
        .args(["check", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("No issues found"));
}

#[test]
fn test_check_clean_stdin_is_silent() {
    cargo_bin_cmd!("rstdoc")
        .arg("check")
        .write_stdin("Just text.\n")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_check_unknown_directive_fails() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("broken.rst");
    fs::write(&test_file, "Intro\n\n.. mystery:: thing\n").unwrap();

    cargo_bin_cmd!("rstdoc")
        .args(["check", test_file.to_str().unwrap()])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unknown-directive"))
        .stderr(predicate::str::contains("broken.rst:3"))
        .stderr(predicate::str::contains("Found 1 issue(s)"));
}

#[test]
fn test_check_directive_failure() {
    cargo_bin_cmd!("rstdoc")
        .arg("check")
        .write_stdin(".. code-block:: rust\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("directive-failure"))
        .stderr(predicate::str::contains("requires content"));
}

#[test]
fn test_check_discovers_config_next_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("page.rst");
    fs::write(&test_file, ".. raw:: html\n\n   <hr>\n").unwrap();

    cargo_bin_cmd!("rstdoc")
        .args(["check", test_file.to_str().unwrap()])
        .assert()
        .success();

    fs::write(
        temp_dir.path().join(".rstdoc.toml"),
        "[directives]\ndisabled = [\"raw\"]\n",
    )
    .unwrap();

    cargo_bin_cmd!("rstdoc")
        .args(["check", test_file.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown directive \"raw\""));
}
