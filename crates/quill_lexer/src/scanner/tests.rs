use super::*;
use pretty_assertions::assert_eq;

/// Helper: scan a line, tracking `last_kind` the way the mode does.
fn scan_line<'a>(line: &'a str, state: &mut ScanState, scanner: Scanner) -> Vec<Token<'a>> {
    let mut stream = LineStream::new(line, 4);
    let mut tokens = Vec::new();
    while !stream.eol() {
        stream.begin_token();
        if state.mode != ScanMode::BlockComment && stream.eat_space() {
            continue;
        }
        let tok = scanner.next_token(&mut stream, state, false);
        if tok.kind != TokenKind::Comment {
            state.last_kind = tok.kind;
        }
        tokens.push(tok);
    }
    tokens
}

fn scan(line: &str) -> Vec<Token<'_>> {
    scan_line(line, &mut ScanState::default(), Scanner::default())
}

fn kinds(line: &str) -> Vec<(TokenKind, &str)> {
    scan(line).into_iter().map(|t| (t.kind, t.text)).collect()
}

fn styles(line: &str) -> Vec<(Option<Style>, &str)> {
    scan(line).into_iter().map(|t| (t.style, t.text)).collect()
}

// ─── Numbers ────────────────────────────────────────────────────

#[test]
fn number_forms() {
    for src in [
        "0", "42", "1_000", "3.14", "1.", ".5", ".5e3", "1e10", "1E-7", "2e+3", "10n", "0x1F",
        "0xffn", "0o17", "0b1010", "0b1_0n",
    ] {
        assert_eq!(kinds(src), vec![(TokenKind::Number, src)], "{src}");
    }
}

#[test]
fn exponent_without_digits_is_not_consumed() {
    assert_eq!(
        kinds("1e"),
        vec![(TokenKind::Number, "1"), (TokenKind::Variable, "e")]
    );
}

#[test]
fn bad_radix_falls_back_to_decimal() {
    assert_eq!(
        kinds("0xg"),
        vec![(TokenKind::Number, "0"), (TokenKind::Variable, "xg")]
    );
}

// ─── Strings ────────────────────────────────────────────────────

#[test]
fn quoted_strings() {
    assert_eq!(
        styles(r#"'a' "b\"c""#),
        vec![
            (Some(Style::String), "'a'"),
            (Some(Style::String), r#""b\"c""#)
        ]
    );
}

#[test]
fn unterminated_string_ends_at_eol() {
    let mut state = ScanState::default();
    let toks = scan_line("'abc", &mut state, Scanner::default());
    assert_eq!(toks[0].kind, TokenKind::String);
    assert_eq!(state.mode, ScanMode::Base);
}

#[test]
fn backslash_continues_string_onto_next_line() {
    let mut state = ScanState::default();
    scan_line("x = 'abc\\", &mut state, Scanner::default());
    assert_eq!(state.mode, ScanMode::String('\''));
    let toks = scan_line("def' + 1", &mut state, Scanner::default());
    assert_eq!(toks[0].text, "def'");
    assert_eq!(toks[0].kind, TokenKind::String);
    assert_eq!(state.mode, ScanMode::Base);
}

#[test]
fn jsonld_keywords_only_in_jsonld() {
    let plain = scan(r#""@context""#);
    assert_eq!(plain[0].kind, TokenKind::String);

    let mut state = ScanState::default();
    let ld = scan_line(
        r#""@context": "x""#,
        &mut state,
        Scanner::new(WordChars::Unicode, true),
    );
    assert_eq!(ld[0].kind, TokenKind::JsonldKeyword);
    assert_eq!(ld[0].style, Some(Style::Meta));
    assert_eq!(ld[0].text, r#""@context""#);
    assert_eq!(ld[2].kind, TokenKind::String);
}

// ─── Comments ───────────────────────────────────────────────────

#[test]
fn line_comment_runs_to_eol() {
    assert_eq!(
        kinds("x // y z"),
        vec![(TokenKind::Variable, "x"), (TokenKind::Comment, "// y z")]
    );
}

#[test]
fn block_comment_spans_lines() {
    let mut state = ScanState::default();
    let first = scan_line("a /* one", &mut state, Scanner::default());
    assert_eq!(first[1].kind, TokenKind::Comment);
    assert_eq!(state.mode, ScanMode::BlockComment);

    let second = scan_line("  two */ b", &mut state, Scanner::default());
    assert_eq!(second[0].text, "  two */");
    assert_eq!(second[1].text, "b");
    assert_eq!(state.mode, ScanMode::Base);
}

#[test]
fn html_comments() {
    assert_eq!(kinds("<!-- hi"), vec![(TokenKind::Comment, "<!-- hi")]);
    assert_eq!(kinds("  --> hi"), vec![(TokenKind::Comment, "--> hi")]);
    assert_eq!(
        kinds("i-->0")[..2],
        [(TokenKind::Variable, "i"), (TokenKind::Operator, "--")]
    );
}

#[test]
fn shebang_and_private_names() {
    assert_eq!(styles("#!/usr/bin/env node"), vec![(Some(Style::Meta), "#!/usr/bin/env node")]);
    assert_eq!(styles("#secret"), vec![(Some(Style::Property), "#secret")]);
}

// ─── Regex vs division ─────────────────────────────────────────

#[test]
fn regex_after_assignment() {
    let toks = kinds("const re = /abc/;");
    assert_eq!(toks[3], (TokenKind::Regexp, "/abc/"));
}

#[test]
fn division_after_operand() {
    assert_eq!(
        kinds("a / b / c"),
        vec![
            (TokenKind::Variable, "a"),
            (TokenKind::Operator, "/"),
            (TokenKind::Variable, "b"),
            (TokenKind::Operator, "/"),
            (TokenKind::Variable, "c"),
        ]
    );
    assert_eq!(kinds("x /= 2")[1], (TokenKind::Operator, "/="));
}

#[test]
fn regex_at_line_start_and_after_keywords() {
    assert_eq!(kinds("/x/g")[0], (TokenKind::Regexp, "/x/g"));
    assert_eq!(kinds("return /x/")[1], (TokenKind::Regexp, "/x/"));
    assert_eq!(kinds("f(/x/)")[2], (TokenKind::Regexp, "/x/"));
}

#[test]
fn regex_class_and_escape_do_not_close() {
    assert_eq!(kinds("= /[/]\\//")[1], (TokenKind::Regexp, "/[/]\\//"));
}

#[test]
fn regex_flags_must_be_distinct_and_bounded() {
    assert_eq!(kinds("= /a/gimsuy")[1].1, "/a/gimsuy");
    assert_eq!(kinds("= /a/gg")[1].1, "/a/");
    assert_eq!(kinds("= /a/gx")[1].1, "/a/");
    assert_eq!(kinds("= /a/g;")[1].1, "/a/g");
}

#[test]
fn regex_after_template_interpolation_brace() {
    let mut state = ScanState {
        mode: ScanMode::Base,
        last_kind: TokenKind::Quasi,
    };
    let toks = scan_line("`a${ /x/.source }`", &mut state, Scanner::default());
    assert_eq!(toks[1].kind, TokenKind::Regexp);
}

// ─── Templates ──────────────────────────────────────────────────

#[test]
fn template_interpolation_returns_to_base() {
    let mut state = ScanState::default();
    let toks = scan_line("`a ${b", &mut state, Scanner::default());
    assert_eq!(toks[0], Token::new(TokenKind::Quasi, Some(Style::String2), "`a ${"));
    assert_eq!(toks[1].kind, TokenKind::Variable);
    assert_eq!(state.mode, ScanMode::Base);
}

#[test]
fn template_spans_lines() {
    let mut state = ScanState::default();
    scan_line("`first", &mut state, Scanner::default());
    assert_eq!(state.mode, ScanMode::Quasi);
    let toks = scan_line("second` + 1", &mut state, Scanner::default());
    assert_eq!(toks[0].text, "second`");
    assert_eq!(state.mode, ScanMode::Base);
}

// ─── Operators and punctuation ──────────────────────────────────

#[test]
fn compound_operators() {
    for op in [
        "=", "==", "===", "!=", "!==", "<=", ">=", "<<", ">>", ">>>", "**", "++", "--", "||",
        "&&", "??", "+=", "?", "@", "~", "^", "%",
    ] {
        let line = format!("a {op} b");
        let toks = scan(&line);
        assert_eq!(toks[1].text, op, "{line}");
        assert_eq!(toks[1].kind, TokenKind::Operator, "{line}");
    }
}

#[test]
fn angle_close_stays_single_inside_type_args() {
    let mut stream = LineStream::new(">>", 4);
    let tok = Scanner::default().next_token(&mut stream, &mut ScanState::default(), true);
    assert_eq!(tok.text, ">");
}

#[test]
fn optional_chain_is_a_dot() {
    assert_eq!(
        kinds("a?.b"),
        vec![
            (TokenKind::Variable, "a"),
            (TokenKind::Dot, "?."),
            (TokenKind::Variable, "b")
        ]
    );
}

#[test]
fn arrow_and_spread() {
    assert_eq!(
        styles("(...a) => a"),
        vec![
            (None, "("),
            (Some(Style::Meta), "..."),
            (Some(Style::Variable), "a"),
            (None, ")"),
            (Some(Style::Operator), "=>"),
            (Some(Style::Variable), "a"),
        ]
    );
}

// ─── Words ──────────────────────────────────────────────────────

#[test]
fn keywords_after_dot_are_variables() {
    assert_eq!(
        kinds("a.default.if"),
        vec![
            (TokenKind::Variable, "a"),
            (TokenKind::Dot, "."),
            (TokenKind::Variable, "default"),
            (TokenKind::Dot, "."),
            (TokenKind::Variable, "if"),
        ]
    );
}

#[test]
fn async_is_keyword_only_before_something_it_modifies() {
    assert_eq!(kinds("async function")[0].0, TokenKind::Async);
    assert_eq!(kinds("async (x)")[0].0, TokenKind::Async);
    assert_eq!(kinds("async /* c */ x")[0].0, TokenKind::Async);
    assert_eq!(kinds("async = 1")[0].0, TokenKind::Variable);
    assert_eq!(kinds("async")[0].0, TokenKind::Variable);
    assert_eq!(kinds("async /* open")[0].0, TokenKind::Variable);
}

#[test]
fn unicode_identifiers_follow_word_chars() {
    assert_eq!(kinds("café"), vec![(TokenKind::Variable, "café")]);
    let ascii = scan_line(
        "café",
        &mut ScanState::default(),
        Scanner::new(WordChars::Ascii, false),
    );
    assert_eq!(ascii[0].text, "caf");
    assert_eq!(ascii[1].kind, TokenKind::Error);
}

#[test]
fn unscannable_characters_become_error_tokens() {
    assert_eq!(
        styles("a \\ b"),
        vec![
            (Some(Style::Variable), "a"),
            (Some(Style::Error), "\\"),
            (Some(Style::Variable), "b"),
        ]
    );
}

// ─── Properties ─────────────────────────────────────────────────

mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn tokens_cover_the_line(line in "[ -~\u{a1}-\u{3000}\t]{0,60}") {
            let mut state = ScanState::default();
            let mut stream = LineStream::new(&line, 4);
            let mut covered = 0;
            while !stream.eol() {
                stream.begin_token();
                let before = stream.pos();
                if state.mode != ScanMode::BlockComment && stream.eat_space() {
                    covered += stream.pos() - before;
                    continue;
                }
                let tok = Scanner::default().next_token(&mut stream, &mut state, false);
                prop_assert!(stream.pos() > before, "no progress at {} in {:?}", before, line);
                prop_assert_eq!(tok.text.len(), stream.pos() - before);
                covered += tok.text.len();
                if tok.kind != TokenKind::Comment {
                    state.last_kind = tok.kind;
                }
            }
            prop_assert_eq!(covered, line.len());
        }
    }
}
