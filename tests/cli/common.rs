//! Help output, version and argument errors shared by every subcommand.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn test_help_describes_config_lookup() {
    cargo_bin_cmd!("rstdoc")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("rstdoc parses reStructuredText"))
        .stdout(predicate::str::contains(".rstdoc.toml"))
        .stdout(predicate::str::contains("~/.config/rstdoc/config.toml"))
        .stdout(predicate::str::contains("disabled = [\"raw\"]"));
}

#[test]
fn test_config_flag_is_global() {
    cargo_bin_cmd!("rstdoc")
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--config"))
        .stdout(predicate::str::contains("Exits with code 1"));
}

#[test]
fn test_parse_help_mentions_json() {
    cargo_bin_cmd!("rstdoc")
        .args(["parse", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("printed to stderr"));
}

#[test]
fn test_version() {
    cargo_bin_cmd!("rstdoc")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("rstdoc "))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_subcommand_is_required() {
    cargo_bin_cmd!("rstdoc")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage: rstdoc"))
        .stderr(predicate::str::contains("check"));
}

#[test]
fn test_unknown_subcommand() {
    cargo_bin_cmd!("rstdoc")
        .arg("render")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand 'render'"));
}

#[test]
fn test_missing_input_file() {
    cargo_bin_cmd!("rstdoc")
        .args(["parse", "does-not-exist.rst"])
        .assert()
        .failure();
}
