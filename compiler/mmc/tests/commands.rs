//! Tests for the `eval`, `run` and `explain` commands.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use mmc::commands::{eval_expression, explain_error, run_file};
use pretty_assertions::assert_eq;
use std::io::Write;

struct Output {
    ok: bool,
    out: String,
    err: String,
}

fn capture(f: impl FnOnce(&mut Vec<u8>, &mut Vec<u8>) -> std::io::Result<bool>) -> Output {
    let (mut out, mut err) = (Vec::new(), Vec::new());
    let ok = f(&mut out, &mut err).unwrap();
    Output {
        ok,
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
    }
}

// -- eval --

#[test]
fn eval_prints_value() {
    let result = capture(|out, err| eval_expression("M(15, m(16, 8))", out, err));
    assert!(result.ok);
    assert_eq!(result.out, "15\n");
    assert_eq!(result.err, "");
}

#[test]
fn eval_reports_error_on_stderr() {
    let result = capture(|out, err| eval_expression("m(5,10,15)", out, err));
    assert!(!result.ok);
    assert_eq!(result.out, "");
    assert!(result.err.starts_with("error[E1003]: m expects 2 operands, got 3\n"));
}

// -- run --

#[test]
fn run_evaluates_each_line_in_order() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "m(5,10)").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "  M(15,m(16,8))  ").unwrap();
    writeln!(file, "m(M(2,5),M(3,8))").unwrap();

    let result = capture(|out, err| run_file(file.path(), out, err));
    assert!(result.ok);
    assert_eq!(result.out, "line 1: 5\nline 3: 15\nline 4: 5\n");
}

#[test]
fn run_reports_failing_lines_and_continues() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "m(5,x)").unwrap();
    writeln!(file, "M(1,2)").unwrap();

    let result = capture(|out, err| run_file(file.path(), out, err));
    assert!(!result.ok);
    assert!(result.out.starts_with("line 1: error[E0001]: invalid character 'x'\n"));
    assert!(result.out.ends_with("line 2: 2\n"));
}

#[test]
fn run_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.txt");

    let result = capture(|out, err| run_file(&missing, out, err));
    assert!(!result.ok);
    assert!(result.err.starts_with("error: failed to read"));
}

#[test]
fn run_empty_file_succeeds() {
    let file = tempfile::NamedTempFile::new().unwrap();
    let result = capture(|out, err| run_file(file.path(), out, err));
    assert!(result.ok);
    assert_eq!(result.out, "");
}

// -- explain --

#[test]
fn explain_known_code() {
    let result = capture(|out, err| explain_error("E1002", out, err));
    assert!(result.ok);
    assert!(result.out.starts_with("# E1002: Unbalanced Parentheses"));
}

#[test]
fn explain_is_case_insensitive() {
    let result = capture(|out, err| explain_error("e0001", out, err));
    assert!(result.ok);
    assert!(result.out.contains("Invalid Character"));
}

#[test]
fn explain_unknown_code() {
    let result = capture(|out, err| explain_error("E4242", out, err));
    assert!(!result.ok);
    assert!(result.err.starts_with("Unknown error code: E4242"));
    assert!(result.err.contains("E1003"));
}
