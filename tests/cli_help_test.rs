//! CLI help output integration tests

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_root_help() {
    Command::cargo_bin("tierlabel")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Tier label classifier CLI"));
}

#[test]
fn test_classify_help() {
    Command::cargo_bin("tierlabel")
        .unwrap()
        .args(["classify", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Label instance descriptors by tier").or(
            predicate::str::contains("EXAMPLES"),
        ));
}

#[test]
fn test_number_help() {
    Command::cargo_bin("tierlabel")
        .unwrap()
        .args(["number", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
}

#[test]
fn test_counter_help() {
    Command::cargo_bin("tierlabel")
        .unwrap()
        .args(["counter", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--start"))
        .stdout(predicate::str::contains("--times"));
}

#[test]
fn test_classify_requires_instance() {
    Command::cargo_bin("tierlabel")
        .unwrap()
        .arg("classify")
        .assert()
        .failure();
}
