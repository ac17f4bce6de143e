//! Tests that drive the `decomment` binary.

#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn decomment(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_decomment"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn decomment_stdin(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_decomment"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn strip_fixture_to_file() {
    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("clean.cpp");
    let output = decomment(&[
        "strip",
        concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/test.cpp"),
        "-o",
        out_path.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0), "{}", stderr(&output));
    assert_eq!(
        fs::read_to_string(&out_path).unwrap(),
        include_str!("fixtures/test.cleaned.cpp")
    );
    assert!(stderr(&output).contains("24 blank lines"));
}

#[test]
fn strip_from_stdin_to_stdout() {
    let output = decomment_stdin(&["strip", "-", "-q"], "int a; // x\n\n/* y */ int b;\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "int a;\nint b;\n");
    assert_eq!(stderr(&output), "");
}

#[test]
fn strip_raw_from_stdin() {
    let output = decomment_stdin(&["strip", "--raw", "-", "--quiet"], "a; /* b */ c; // d\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "a;  c; \n");
}

#[test]
fn strip_with_errors_exits_1_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("bad.cpp");
    fs::write(&input, "int a;\n/* never closed\n").unwrap();
    let output = decomment(&["strip", input.to_str().unwrap(), "--color=never"]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
    let err = stderr(&output);
    assert!(err.contains("error[E0003]: unterminated block comment"));
    assert!(err.contains("2 | /* never closed"));
}

#[test]
fn missing_file_exits_2() {
    let output = decomment(&["strip", "/definitely/not/here.cpp"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("cannot find file"));
}

#[test]
fn non_utf8_input_exits_2() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("latin1.cpp");
    fs::write(&input, b"int caf\xe9;\n").unwrap();
    let output = decomment(&["strip", input.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("invalid UTF-8"));
}

#[test]
fn usage_errors_exit_2() {
    assert_eq!(decomment(&["strip"]).status.code(), Some(2));
    assert_eq!(decomment(&["frobnicate"]).status.code(), Some(2));
    assert_eq!(decomment(&["strip", "a.c", "--nope"]).status.code(), Some(2));
}

#[test]
fn check_multiple_files() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.c");
    let bad = dir.path().join("bad.c");
    fs::write(&good, "int a; /* fine */\n").unwrap();
    fs::write(&bad, "int b; */\n").unwrap();

    let output = decomment(&[
        "check",
        good.to_str().unwrap(),
        bad.to_str().unwrap(),
        "--color=never",
    ]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), format!("OK: {}\n", good.display()));
    assert!(stderr(&output).contains("error[E0004]"));
}

#[test]
fn check_json_output() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("warn.c");
    fs::write(&file, "char c = 'x;\n").unwrap();
    let output = decomment(&["check", file.to_str().unwrap(), "--format=json"]);
    assert_eq!(output.status.code(), Some(0));
    let err = stderr(&output);
    assert!(err.contains("\"code\": \"E0006\""));
    assert!(err.contains("\"line\": 1,"));
    assert!(err.contains("\"column\": 10,"));
}

#[test]
fn strip_json_keeps_stderr_parseable() {
    let dir = TempDir::new().unwrap();
    let file = dir.path().join("q.c");
    fs::write(&file, "int y; /* open").unwrap();
    let output = decomment(&["strip", file.to_str().unwrap(), "--format=json"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.trim_end().starts_with('['), "{err}");
    assert!(err.trim_end().ends_with(']'), "{err}");
    assert!(err.contains("\"code\": \"E0003\""));

    fs::write(&file, "int y; // fine\n").unwrap();
    let output = decomment(&["strip", file.to_str().unwrap(), "--format=json"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "int y;\n");
    assert_eq!(stderr(&output), "[\n\n]\n");
}

#[test]
fn explain_codes() {
    let output = decomment(&["--explain", "E0004"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).starts_with("# E0004:"));

    let unknown = decomment(&["--explain", "E1234"]);
    assert_eq!(unknown.status.code(), Some(2));
    assert!(stderr(&unknown).contains("unknown error code: E1234"));
}

#[test]
fn help_and_version() {
    assert!(stdout(&decomment(&[])).contains("Usage: decomment <command>"));
    assert!(stdout(&decomment(&["help"])).contains("strip <file|->"));
    assert_eq!(
        stdout(&decomment(&["--version"])),
        format!("decomment {}\n", env!("CARGO_PKG_VERSION"))
    );
}
