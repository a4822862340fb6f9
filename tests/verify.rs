// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! End-to-end tests for the cg binary: exit codes and stderr contract.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn cg() -> Command {
    Command::cargo_bin("cg").unwrap()
}

fn message_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", contents).unwrap();
    file
}

#[test]
fn accepts_conventional_message() {
    let file = message_file("feat: add 'comments' option\n");
    cg().arg(file.path()).assert().success().stderr("");
}

#[test]
fn accepts_scoped_and_reverted_messages() {
    for msg in [
        "fix(core): handle null input",
        "revert: feat(compiler): add fragments",
    ] {
        let file = message_file(msg);
        cg().arg(file.path()).assert().success();
    }
}

#[test]
fn accepts_release_message() {
    let file = message_file("v2.0.0 release\n");
    cg().arg(file.path()).assert().success();
}

#[test]
fn rejects_with_diagnostic_and_exit_one() {
    let file = message_file("did some work\n");
    cg().arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("ERROR"))
        .stderr(predicate::str::contains("feat: add 'comments' option"))
        .stderr(predicate::str::contains(
            "fix: handle events on blur (close #28)",
        ))
        .stderr(predicate::str::contains(".github/commit-convention.md"));
}

#[test]
fn rejects_unknown_type() {
    let file = message_file("feature: add thing\n");
    cg().arg(file.path()).assert().code(1);
}

#[test]
fn rejects_empty_message() {
    let file = message_file("\n\n");
    cg().arg(file.path()).assert().code(1);
}

#[test]
fn missing_file_is_an_error_not_a_rejection() {
    cg().arg("/nonexistent/COMMIT_EDITMSG")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("ERROR ").not());
}

#[test]
fn missing_argument_fails_usage() {
    cg().assert().failure();
}
