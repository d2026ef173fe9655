use super::*;
use pretty_assertions::assert_eq;

fn arrow_start(line: &str) -> Option<usize> {
    find_fat_arrow(&LineStream::new(line, 4), WordChars::Unicode, false)
}

fn arrow_start_ts(line: &str) -> Option<usize> {
    find_fat_arrow(&LineStream::new(line, 4), WordChars::Unicode, true)
}

#[test]
fn parenthesized_params() {
    assert_eq!(arrow_start("(a, b) => a + b"), Some(0));
    assert_eq!(arrow_start("let f = (x) => 1"), Some(8));
    assert_eq!(arrow_start("g((x, [y, z]) => x)"), Some(2));
}

#[test]
fn bare_identifier_params() {
    assert_eq!(arrow_start("f(a => a)"), Some(2));
    assert_eq!(arrow_start("xs.map(item => item.id)"), Some(7));
    assert_eq!(arrow_start("x => x"), Some(0));
}

#[test]
fn no_arrow() {
    assert_eq!(arrow_start("a + b"), None);
    assert_eq!(arrow_start("a >= b"), None);
}

#[test]
fn arrow_inside_string_is_ignored() {
    assert_eq!(arrow_start(r#"f("=>")"#), None);
}

#[test]
fn search_starts_at_the_lexeme() {
    let mut stream = LineStream::new("(a) => (b) => b", 4);
    stream.match_str("(a) => ", true);
    stream.begin_token();
    assert_eq!(
        find_fat_arrow(&stream, WordChars::Unicode, false),
        Some(7)
    );
}

#[test]
fn return_annotation_is_skipped_in_typed_dialect() {
    assert_eq!(arrow_start_ts("(a): number => a"), Some(0));
    assert_eq!(arrow_start("(a): number => a"), Some(5));
    assert_eq!(arrow_start_ts("(a): Array<T> => a"), Some(0));
    assert_eq!(arrow_start_ts("(a): { x: T } => a"), Some(0));
}

#[test]
fn annotation_tail_shapes() {
    assert!(is_annotation_tail(" T "));
    assert!(is_annotation_tail("T[]"));
    assert!(is_annotation_tail(" Map<K, V>"));
    assert!(is_annotation_tail(" { a: b }"));
    assert!(!is_annotation_tail(" a + b"));
    assert!(!is_annotation_tail(""));
}
