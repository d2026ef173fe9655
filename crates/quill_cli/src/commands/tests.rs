use pretty_assertions::assert_eq;
use quill_mode::ModeConfig;

use super::*;

fn two_columns() -> ModeConfig {
    ModeConfig::default().with_indent_unit(2)
}

#[test]
fn highlight_rows() {
    assert_eq!(
        highlight_source(ModeConfig::default(), "var x = 1;\n"),
        "1:1 keyword var\n1:5 def x\n1:7 operator =\n1:9 number 1\n1:10 - ;\n"
    );
}

#[test]
fn indent_fixes_a_function_body() {
    assert_eq!(
        indent_source(two_columns(), "function f(a, b) {\nreturn a+b;\n}\n"),
        "function f(a, b) {\n  return a+b;\n}\n"
    );
}

#[test]
fn indent_keeps_a_missing_final_newline() {
    assert_eq!(
        indent_source(ModeConfig::default(), "if (x)\nfoo();"),
        "if (x)\n    foo();"
    );
}

#[test]
fn indent_empties_blank_lines() {
    assert_eq!(
        indent_source(ModeConfig::default(), "if (x) {\n   \nfoo();\n}\n"),
        "if (x) {\n\n    foo();\n}\n"
    );
}

#[test]
fn indent_leaves_comment_bodies_alone() {
    let source = "/*\n   keep\n*/\nx;\n";
    assert_eq!(indent_source(ModeConfig::default(), source), source);
}

#[test]
fn check_reports_mismatches() {
    assert_eq!(
        check_source(ModeConfig::default(), "if (x) {\n  foo();\n}\n"),
        [Mismatch {
            line: 2,
            expected: 4,
            found: 2,
        }]
    );
    assert_eq!(
        check_source(two_columns(), "if (x) {\n  foo();\n}\n"),
        Vec::<Mismatch>::new()
    );
}

#[test]
fn mime_listing() {
    let listing = list_mimes();
    assert_eq!(listing.lines().count(), MIME_TYPES.len());
    assert!(listing.contains("text/javascript\tjavascript\n"));
    assert!(listing.contains("application/ld+json\tjsonld\n"));
    assert!(listing.contains("application/manifest+json\tjson\n"));
    assert!(listing.contains("text/typescript\ttypescript\n"));
}
