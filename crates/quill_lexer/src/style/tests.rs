use super::*;

#[test]
fn style_spelling_matches_renderer_vocabulary() {
    let all = [
        (Style::Keyword, "keyword"),
        (Style::Atom, "atom"),
        (Style::Variable, "variable"),
        (Style::Variable2, "variable-2"),
        (Style::Property, "property"),
        (Style::Number, "number"),
        (Style::String, "string"),
        (Style::String2, "string-2"),
        (Style::Comment, "comment"),
        (Style::Operator, "operator"),
        (Style::Meta, "meta"),
        (Style::Def, "def"),
        (Style::Type, "type"),
        (Style::Builtin, "builtin"),
        (Style::Qualifier, "qualifier"),
        (Style::Error, "error"),
        (Style::StringProperty, "string property"),
        (Style::NumberProperty, "number property"),
    ];
    for (style, spelling) in all {
        assert_eq!(style.as_str(), spelling);
        assert_eq!(style.to_string(), spelling);
    }
}

#[test]
fn property_compound() {
    assert_eq!(Style::String.with_property(), Style::StringProperty);
    assert_eq!(Style::Number.with_property(), Style::NumberProperty);
    assert_eq!(Style::Keyword.with_property(), Style::Property);
}

#[test]
fn punct_kinds() {
    assert_eq!(TokenKind::punct('('), Some(TokenKind::LParen));
    assert_eq!(TokenKind::punct('.'), Some(TokenKind::Dot));
    assert_eq!(TokenKind::punct('+'), None);
    assert!(TokenKind::RBrace.is_closing());
    assert!(!TokenKind::LBrace.is_closing());
}

#[test]
fn division_after_operands() {
    assert!(!TokenKind::Variable.allows_expression_after());
    assert!(!TokenKind::Number.allows_expression_after());
    assert!(!TokenKind::RParen.allows_expression_after());
    assert!(!TokenKind::IncDec.allows_expression_after());
    assert!(TokenKind::Operator.allows_expression_after());
    assert!(TokenKind::Sof.allows_expression_after());
    assert!(TokenKind::KeywordD.allows_expression_after());
}
