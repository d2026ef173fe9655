use super::*;

// === Navigation ===

#[test]
fn next_advances_by_char_width() {
    let mut s = LineStream::new("aé€b", 4);
    assert_eq!(s.next(), Some('a'));
    assert_eq!(s.pos(), 1);
    assert_eq!(s.next(), Some('é'));
    assert_eq!(s.pos(), 3);
    assert_eq!(s.next(), Some('€'));
    assert_eq!(s.pos(), 6);
    assert_eq!(s.next(), Some('b'));
    assert!(s.eol());
    assert_eq!(s.next(), None);
}

#[test]
fn sol_only_at_line_start() {
    let mut s = LineStream::new("ab", 4);
    assert!(s.sol());
    s.next();
    assert!(!s.sol());
}

#[test]
fn eat_and_eat_while() {
    let mut s = LineStream::new("aaab", 4);
    assert!(!s.eat('b'));
    assert!(s.eat('a'));
    assert!(s.eat_while(|c| c == 'a'));
    assert_eq!(s.pos(), 3);
    assert!(!s.eat_while(|c| c == 'a'));
    assert_eq!(s.eat_if(|c| c == 'b'), Some('b'));
}

#[test]
fn current_spans_start_to_pos() {
    let mut s = LineStream::new("foo bar", 4);
    s.eat_while(char::is_alphanumeric);
    assert_eq!(s.current(), "foo");
    s.eat_space();
    s.begin_token();
    s.eat_while(char::is_alphanumeric);
    assert_eq!(s.current(), "bar");
    assert_eq!(s.start(), 4);
}

#[test]
fn back_up_rewinds() {
    let mut s = LineStream::new("/abc/", 4);
    s.skip_to_end();
    s.back_up(4);
    assert_eq!(s.pos(), 1);
    assert_eq!(s.rest(), "abc/");
}

#[test]
fn match_str_optionally_consumes() {
    let mut s = LineStream::new("...x", 4);
    assert!(s.match_str("...", false));
    assert_eq!(s.pos(), 0);
    assert!(s.match_str("...", true));
    assert_eq!(s.pos(), 3);
    assert!(!s.match_str("y", true));
}

#[test]
fn find_from_searches_forward() {
    let s = LineStream::new("(a) => b => c", 4);
    assert_eq!(s.find_from("=>", 0), Some(4));
    assert_eq!(s.find_from("=>", 5), Some(9));
    assert_eq!(s.find_from("=>", 10), None);
    assert_eq!(s.find_from("=>", 100), None);
}

// === Columns ===

#[test]
fn column_expands_tabs() {
    let mut s = LineStream::new("\t  x", 4);
    s.eat_space();
    s.begin_token();
    assert_eq!(s.column(), 6);
}

#[test]
fn indentation_counts_leading_whitespace() {
    assert_eq!(LineStream::new("    foo", 4).indentation(), 4);
    assert_eq!(LineStream::new("\tfoo", 8).indentation(), 8);
    assert_eq!(LineStream::new(" \tfoo", 4).indentation(), 4);
    assert_eq!(LineStream::new("", 4).indentation(), 0);
    assert_eq!(LineStream::new("   ", 4).indentation(), 3);
}

#[test]
fn count_column_zero_tab_size_is_safe() {
    assert_eq!(count_column("\t\t", 0), 2);
}
