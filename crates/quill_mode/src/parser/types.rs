//! Type annotation rules for the typed dialect.
//!
//! These only run from continuations the typed dialect schedules, except
//! [`Cx::maybe_type`] and friends, which check the dialect themselves
//! because untyped grammar paths share them.

use quill_lexer::{ScanMode, Style, TokenKind};

use super::{Cx, EXPECT_COLON, EXPECT_RBRACKET, PUSH_ANGLE, PUSH_BRACE, PUSH_BRACKET};
use crate::cont::{Cont, Item, Want};
use crate::lexical::Closer;

/// Does `rest` start with `ident is`, as in a type predicate
/// `(x): x is Foo`?
fn type_predicate_follows(rest: &str) -> bool {
    let rest = rest.trim_start();
    let ident = rest
        .find(|c: char| !(c.is_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    if ident == 0 {
        return false;
    }
    let after = &rest[ident..];
    let Some(tail) = after.trim_start().strip_prefix("is") else {
        return false;
    };
    after.len() > after.trim_start().len()
        && !tail.starts_with(|c: char| c.is_alphanumeric() || c == '_')
}

/// Angle-bracketed list of type expressions, then `after`.
const fn angle_list(item: Item, after: Cont) -> [Cont; 4] {
    [
        PUSH_ANGLE,
        Cont::CommaSep {
            item,
            end: Closer::Angle,
        },
        Cont::PopLex,
        after,
    ]
}

impl Cx<'_, '_> {
    pub(super) fn type_name(&mut self, kind: TokenKind, text: &str) -> bool {
        if kind == TokenKind::Variable {
            self.mark(Style::Type);
            return self.cont(&[Cont::TypeName]);
        }
        if text == "<" {
            return self.cont(&[
                PUSH_ANGLE,
                Cont::CommaSep {
                    item: Item::TypeParam,
                    end: Closer::Angle,
                },
                Cont::PopLex,
            ]);
        }
        false
    }

    pub(super) fn type_expr(&mut self, kind: TokenKind, text: &str) -> bool {
        if matches!(text, "keyof" | "typeof" | "infer" | "readonly") {
            self.mark(Style::Keyword);
            let next = if text == "typeof" {
                Cont::ExpressionNoComma
            } else {
                Cont::TypeExpr
            };
            return self.cont(&[next]);
        }
        if kind == TokenKind::Variable || text == "void" {
            self.mark(Style::Type);
            return self.cont(&[Cont::AfterType]);
        }
        if text == "|" || text == "&" {
            return self.cont(&[Cont::TypeExpr]);
        }
        if text == "<" {
            return self.cont(&[
                Cont::CommaSep {
                    item: Item::TypeExpr,
                    end: Closer::Angle,
                },
                Cont::TypeExpr,
            ]);
        }
        match kind {
            TokenKind::String | TokenKind::Number | TokenKind::Atom => {
                self.cont(&[Cont::AfterType])
            }
            TokenKind::LBracket => self.cont(&[
                PUSH_BRACKET,
                Cont::CommaSep {
                    item: Item::TypeExpr,
                    end: Closer::Bracket,
                },
                Cont::PopLex,
                Cont::AfterType,
            ]),
            TokenKind::LBrace => {
                self.cont(&[PUSH_BRACE, Cont::TypeProps, Cont::PopLex, Cont::AfterType])
            }
            TokenKind::LParen => self.cont(&[
                Cont::CommaSep {
                    item: Item::TypeArg,
                    end: Closer::Paren,
                },
                Cont::MaybeReturnType,
                Cont::AfterType,
            ]),
            TokenKind::Quasi => self.pass(&[Cont::QuasiType, Cont::AfterType]),
            _ => false,
        }
    }

    pub(super) fn maybe_type(&mut self, kind: TokenKind, text: &str) -> bool {
        if !self.typescript() {
            return false;
        }
        if kind == TokenKind::Colon {
            self.cont(&[Cont::TypeExpr])
        } else if text == "?" {
            self.cont(&[Cont::MaybeType])
        } else {
            false
        }
    }

    /// Mapped type key: `[K in keyof T]` or an index signature `[k: string]`.
    pub(super) fn maybe_type_or_in(&mut self, kind: TokenKind, text: &str) -> bool {
        self.typescript()
            && (kind == TokenKind::Colon || text == "in")
            && self.cont(&[Cont::TypeExpr])
    }

    /// Function return annotation, including type predicates.
    pub(super) fn maybe_ret_type(&mut self, kind: TokenKind) -> bool {
        if !self.typescript() || kind != TokenKind::Colon {
            return false;
        }
        if type_predicate_follows(self.rest()) {
            self.cont(&[Cont::Expression, Cont::IsKw, Cont::TypeExpr])
        } else {
            self.cont(&[Cont::TypeExpr])
        }
    }

    pub(super) fn is_kw(&mut self, text: &str) -> bool {
        if text != "is" {
            return false;
        }
        self.mark(Style::Keyword);
        self.cont(&[])
    }

    pub(super) fn maybe_return_type(&mut self, kind: TokenKind) -> bool {
        kind == TokenKind::Arrow && self.cont(&[Cont::TypeExpr])
    }

    // ─── Object types ───────────────────────────────────────────────

    pub(super) fn type_props(&mut self, kind: TokenKind) -> bool {
        match kind {
            TokenKind::RBrace | TokenKind::RParen | TokenKind::RBracket => self.cont(&[]),
            TokenKind::Comma | TokenKind::Semi => self.cont(&[Cont::TypeProps]),
            _ => self.pass(&[Cont::TypeProp, Cont::TypeProps]),
        }
    }

    pub(super) fn type_prop(&mut self, kind: TokenKind, text: &str) -> bool {
        if kind == TokenKind::Variable || self.style == Some(Style::Keyword) {
            self.mark(Style::Property);
            return self.cont(&[Cont::TypeProp]);
        }
        if text == "?" {
            return self.cont(&[Cont::TypeProp]);
        }
        match kind {
            TokenKind::Number | TokenKind::String => self.cont(&[Cont::TypeProp]),
            TokenKind::Colon => self.cont(&[Cont::TypeExpr]),
            TokenKind::LBracket => self.cont(&[
                Cont::Expect(Want::Kind(TokenKind::Variable)),
                Cont::MaybeTypeOrIn,
                EXPECT_RBRACKET,
                Cont::TypeProp,
            ]),
            TokenKind::LParen => self.pass(&[Cont::FunctionDecl, Cont::TypeProp]),
            TokenKind::Semi
            | TokenKind::RBrace
            | TokenKind::RParen
            | TokenKind::RBracket
            | TokenKind::Comma => false,
            _ => self.cont(&[]),
        }
    }

    // ─── Template literal types ─────────────────────────────────────

    pub(super) fn quasi_type(&mut self, kind: TokenKind, text: &str) -> bool {
        if kind != TokenKind::Quasi {
            self.pass(&[])
        } else if text.ends_with("${") {
            self.cont(&[Cont::TypeExpr, Cont::ContinueQuasiType])
        } else {
            self.cont(&[Cont::QuasiType])
        }
    }

    pub(super) fn continue_quasi_type(&mut self, kind: TokenKind) -> bool {
        if kind != TokenKind::RBrace {
            return false;
        }
        self.mark(Style::String2);
        self.state.scan.mode = ScanMode::Quasi;
        self.cont(&[Cont::QuasiType])
    }

    // ─── Parameters, arguments and suffixes ─────────────────────────

    /// One parameter of a function type: `(a?: T, ...rest: U[]) => R`.
    pub(super) fn type_arg(&mut self, kind: TokenKind, text: &str) -> bool {
        let labelled = kind == TokenKind::Variable
            && self.rest().trim_start().starts_with(['?', ':']);
        if labelled || text == "?" || kind == TokenKind::Spread {
            return self.cont(&[Cont::TypeArg]);
        }
        if kind == TokenKind::Colon {
            return self.cont(&[Cont::TypeExpr]);
        }
        self.pass(&[Cont::TypeExpr])
    }

    pub(super) fn after_type(&mut self, kind: TokenKind, text: &str) -> bool {
        match text {
            "<" => self.cont(&angle_list(Item::TypeExpr, Cont::AfterType)),
            "|" | "&" => self.cont(&[Cont::TypeExpr]),
            "extends" | "implements" => {
                self.mark(Style::Keyword);
                self.cont(&[Cont::TypeExpr])
            }
            "?" => self.cont(&[Cont::TypeExpr, EXPECT_COLON, Cont::TypeExpr]),
            _ => match kind {
                TokenKind::Dot => self.cont(&[Cont::TypeExpr]),
                TokenKind::LBracket => {
                    self.cont(&[Cont::TypeExpr, EXPECT_RBRACKET, Cont::AfterType])
                }
                _ => false,
            },
        }
    }

    /// Explicit type arguments after `new C`.
    pub(super) fn maybe_type_args(&mut self, text: &str) -> bool {
        text == "<" && self.cont(&angle_list(Item::TypeExpr, Cont::AfterType))
    }

    pub(super) fn maybe_type_default(&mut self, text: &str) -> bool {
        text == "=" && self.cont(&[Cont::TypeExpr])
    }
}

#[cfg(test)]
mod tests {
    use super::type_predicate_follows;

    #[test]
    fn predicate_lookahead() {
        assert!(type_predicate_follows(" x is Foo"));
        assert!(type_predicate_follows("value is"));
        assert!(!type_predicate_follows(" string"));
        assert!(!type_predicate_follows(" x isFoo"));
        assert!(!type_predicate_follows(" xis Foo"));
        assert!(!type_predicate_follows(" (x) is"));
    }
}
