// word-define/tests/cli_integration.rs

//! Integration tests for the word-define binary.
//!
//! These cover the paths that need no live dictionary service: the binary
//! takes no arguments, so the interesting offline surface is empty input
//! (no words means no requests are ever issued).

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_empty_stdin_prints_nothing_and_succeeds() {
    let mut cmd = Command::cargo_bin("word-define").unwrap();
    cmd.write_stdin("");

    cmd.assert().success().stdout(predicate::str::is_empty());
}

#[test]
fn test_takes_no_arguments() {
    // Arguments are simply ignored; the word list comes from stdin only
    let mut cmd = Command::cargo_bin("word-define").unwrap();
    cmd.arg("--help").write_stdin("");

    cmd.assert().success().stdout(predicate::str::is_empty());
}
