//! End-to-end tests for the pdfocr binary.
//!
//! These exercise argument handling and the exit-code policy only; they do
//! not require tesseract or pdfium to be installed, because every scenario
//! fails before the backends are touched.

use assert_cmd::Command;
use predicates::prelude::*;

fn pdfocr() -> Command {
    Command::cargo_bin("pdfocr").unwrap()
}

#[test]
fn missing_arguments_print_usage_and_exit_1() {
    pdfocr()
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn single_argument_exits_1() {
    pdfocr()
        .arg("input.pdf")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_input_reports_fatal_error_and_exits_0() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.json");

    pdfocr()
        .arg(dir.path().join("absent.pdf"))
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("[FATAL ERROR]"))
        .stdout(predicate::str::contains("file not found"));

    assert!(!output.exists());
}

#[test]
fn strict_exit_turns_fatal_error_into_nonzero_status() {
    let dir = tempfile::tempdir().unwrap();

    pdfocr()
        .arg(dir.path().join("absent.pdf"))
        .arg(dir.path().join("out.json"))
        .arg("--strict-exit")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[FATAL ERROR]"));
}

#[test]
fn version_flag_exits_0() {
    pdfocr()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pdfocr"));
}

#[test]
fn help_shows_language_default() {
    pdfocr()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("rus"));
}
