//! Parse subcommand tests

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_parse_stdin() {
    cargo_bin_cmd!("rstdoc")
        .arg("parse")
        .write_stdin("Title\n=====\n\nParagraph.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("SectionBegin"))
        .stdout(predicate::str::contains("Paragraph"));
}

#[test]
fn test_parse_simple_file() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("index.rst");
    fs::write(&test_file, "Title\n=====\n\n- one\n- two\n").unwrap();

    cargo_bin_cmd!("rstdoc")
        .args(["parse", test_file.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title"))
        .stdout(predicate::str::contains("List"));
}

#[test]
fn test_parse_json() {
    cargo_bin_cmd!("rstdoc")
        .args(["parse", "--json"])
        .write_stdin("Some text.\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"type\": \"paragraph\""))
        .stdout(predicate::str::contains("\"text\": \"Some text.\""));
}

#[test]
fn test_parse_reports_diagnostics_on_stderr() {
    cargo_bin_cmd!("rstdoc")
        .arg("parse")
        .write_stdin(".. mystery::\n\nText\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown-directive"))
        .stderr(predicate::str::contains("<stdin>:1"));
}

#[test]
fn test_parse_with_config() {
    let temp_dir = TempDir::new().unwrap();
    let test_file = temp_dir.path().join("index.rst");
    let config_file = temp_dir.path().join("custom.toml");

    fs::write(&test_file, "Title\n=====\n").unwrap();
    fs::write(&config_file, "initial_header_level = 3\n").unwrap();

    cargo_bin_cmd!("rstdoc")
        .args([
            "parse",
            "--json",
            "--config",
            config_file.to_str().unwrap(),
            test_file.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"level\": 3"));
}

#[test]
fn test_parse_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("broken.toml");
    fs::write(&config_file, "initial_header_level = \"high\"\n").unwrap();

    cargo_bin_cmd!("rstdoc")
        .args(["parse", "--config", config_file.to_str().unwrap()])
        .write_stdin("Text\n")
        .assert()
        .failure();
}
