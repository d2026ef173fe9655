use super::*;
use pretty_assertions::assert_eq;

#[test]
fn statement_keywords() {
    assert_eq!(lookup("if"), Some((TokenKind::If, Style::Keyword)));
    assert_eq!(lookup("while"), Some((TokenKind::KeywordA, Style::Keyword)));
    assert_eq!(lookup("with"), Some((TokenKind::KeywordA, Style::Keyword)));
    for word in ["else", "do", "try", "finally"] {
        assert_eq!(lookup(word), Some((TokenKind::KeywordB, Style::Keyword)), "{word}");
    }
    for word in ["return", "break", "continue"] {
        assert_eq!(lookup(word), Some((TokenKind::KeywordD, Style::Keyword)), "{word}");
    }
    for word in ["delete", "void", "throw", "yield", "extends", "await"] {
        assert_eq!(lookup(word), Some((TokenKind::KeywordC, Style::Keyword)), "{word}");
    }
}

#[test]
fn declaration_keywords() {
    for word in ["var", "let", "const"] {
        assert_eq!(lookup(word), Some((TokenKind::Var, Style::Keyword)), "{word}");
    }
    assert_eq!(lookup("function"), Some((TokenKind::Function, Style::Keyword)));
    assert_eq!(lookup("class"), Some((TokenKind::Class, Style::Keyword)));
    assert_eq!(lookup("import"), Some((TokenKind::Import, Style::Keyword)));
    assert_eq!(lookup("export"), Some((TokenKind::Export, Style::Keyword)));
}

#[test]
fn word_operators() {
    for word in ["in", "typeof", "instanceof"] {
        assert_eq!(lookup(word), Some((TokenKind::Operator, Style::Keyword)), "{word}");
    }
}

#[test]
fn atoms() {
    for word in ["true", "false", "null", "undefined", "NaN", "Infinity"] {
        assert_eq!(lookup(word), Some((TokenKind::Atom, Style::Atom)), "{word}");
    }
    assert_eq!(lookup("super"), Some((TokenKind::Atom, Style::Keyword)));
}

#[test]
fn plain_identifiers() {
    for word in ["x", "foo", "iff", "Return", "async", "of", "interface", "constructor"] {
        assert_eq!(lookup(word), None, "{word}");
    }
}

#[test]
fn operator_chars() {
    for c in "+-*&%=<>!?|~^@".chars() {
        assert!(is_operator_char(c), "{c}");
    }
    for c in "/.,;:()[]{}#a1".chars() {
        assert!(!is_operator_char(c), "{c}");
    }
}

#[test]
fn jsonld_keywords_need_closing_quote() {
    assert_eq!(jsonld_keyword_len("@context\": {}"), Some(9));
    assert_eq!(jsonld_keyword_len("@id\""), Some(4));
    assert_eq!(jsonld_keyword_len("@index\""), Some(7));
    assert_eq!(jsonld_keyword_len("@contexts\""), None);
    assert_eq!(jsonld_keyword_len("@nope\""), None);
    assert_eq!(jsonld_keyword_len("context\""), None);
}
