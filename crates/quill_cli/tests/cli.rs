//! End-to-end tests for the `quill` binary.

#![allow(clippy::unwrap_used)]

use std::path::Path;
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

fn quill(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_quill"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .unwrap()
}

fn write(dir: &Path, name: &str, contents: &str) -> String {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path.display().to_string()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn highlight_a_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "a.js", "let y = 'hi';\n");
    let output = quill(&["highlight", &file]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "1:1 keyword let\n1:5 def y\n1:7 operator =\n1:9 string 'hi'\n1:13 - ;\n"
    );
}

#[test]
fn json_files_are_detected_by_extension() {
    let dir = tempfile::tempdir().unwrap();
    let file = write(dir.path(), "data.json", "{\"if\": true}\n");
    let output = quill(&["highlight", &file]);
    assert!(output.status.success());
    assert!(!stdout(&output).contains("keyword"));
}

#[test]
fn indent_several_files_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let first = write(dir.path(), "one.js", "if (x) {\nfoo();\n}\n");
    let second = write(dir.path(), "two.js", "switch (x) {\ncase 1:\nbar();\n}\n");
    let output = quill(&["indent", "--indent-unit=2", &first, &second]);
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        format!(
            "==> {first} <==\nif (x) {{\n  foo();\n}}\n\
             ==> {second} <==\nswitch (x) {{\n  case 1:\n    bar();\n}}\n"
        )
    );
}

#[test]
fn check_indent_exit_status() {
    let dir = tempfile::tempdir().unwrap();
    let good = write(dir.path(), "good.js", "if (x) {\n    foo();\n}\n");
    let bad = write(dir.path(), "bad.js", "if (x) {\n  foo();\n}\n");

    assert!(quill(&["check-indent", &good]).status.success());

    let output = quill(&["check-indent", &bad]);
    assert!(!output.status.success());
    assert_eq!(
        stdout(&output),
        format!("{bad}:2: expected indentation 4, found 2\n")
    );
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.js").display().to_string();
    let output = quill(&["highlight", &missing]);
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("error: cannot read"), "{stderr}");
}

#[test]
fn unknown_command_prints_usage() {
    let output = quill(&["frobnicate"]);
    assert!(!output.status.success());
    assert!(stdout(&output).contains("Usage: quill"));
}

#[test]
fn mimes_lists_the_registry() {
    let output = quill(&["mimes"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("application/json\tjson\n"));
}
