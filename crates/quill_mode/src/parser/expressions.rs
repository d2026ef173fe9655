//! Expression rules: operands, operators, templates, arrows, object and
//! array literals, and comma-separated lists.

use quill_lexer::{ScanMode, Style, TokenKind};

use super::{is_modifier, Cx, EXPECT_COLON, EXPECT_RBRACKET, EXPECT_RPAREN, PUSH_ANGLE};
use super::{PUSH_BRACKET, PUSH_FORM, PUSH_PAREN};
use crate::cont::{Cont, Item, Want};
use crate::fat_arrow::find_fat_arrow;
use crate::lexical::{Closer, FrameInfo};

#[inline]
fn maybe_op(no_comma: bool) -> Cont {
    if no_comma {
        Cont::MaybeOperatorNoComma
    } else {
        Cont::MaybeOperatorComma
    }
}

#[inline]
fn expr(no_comma: bool) -> Cont {
    if no_comma {
        Cont::ExpressionNoComma
    } else {
        Cont::Expression
    }
}

#[inline]
fn arrow_body(no_comma: bool) -> Cont {
    if no_comma {
        Cont::ArrowBodyNoComma
    } else {
        Cont::ArrowBody
    }
}

/// After a `<` following an operand: does the rest read as type arguments
/// closed by `>` and followed by a call, as in `f<T>(x)`? One level of
/// nested `<...>` is allowed.
fn type_args_then_call(rest: &str) -> bool {
    let bytes = rest.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'>' => return rest[i + 1..].trim_start().starts_with('('),
            b'<' => match rest[i + 1..].find(['<', '>']) {
                Some(off) if bytes[i + 1 + off] == b'>' => i += off + 2,
                _ => return false,
            },
            _ => i += 1,
        }
    }
    false
}

impl Cx<'_, '_> {
    pub(super) fn expression(&mut self, kind: TokenKind, no_comma: bool) -> bool {
        if self.state.fat_arrow_at == Some(self.stream.start()) {
            let body = arrow_body(no_comma);
            let arrow = Cont::Expect(Want::Kind(TokenKind::Arrow));
            if kind == TokenKind::LParen {
                return self.cont(&[
                    Cont::PushContext,
                    PUSH_PAREN,
                    Cont::CommaSep {
                        item: Item::FunArg,
                        end: Closer::Paren,
                    },
                    Cont::PopLex,
                    arrow,
                    body,
                    Cont::PopContext,
                ]);
            }
            if kind == TokenKind::Variable {
                return self.pass(&[Cont::PushContext, Cont::Pattern, arrow, body, Cont::PopContext]);
            }
        }

        let next = maybe_op(no_comma);
        if kind.is_atomic() {
            return self.cont(&[next]);
        }
        match kind {
            TokenKind::Function => self.cont(&[Cont::FunctionDef, next]),
            TokenKind::Class => {
                self.mark(Style::Keyword);
                self.cont(&[PUSH_FORM, Cont::ClassExpression, Cont::PopLex])
            }
            TokenKind::KeywordC | TokenKind::Async | TokenKind::Operator | TokenKind::Spread => {
                self.cont(&[expr(no_comma)])
            }
            TokenKind::LParen => self.cont(&[
                PUSH_PAREN,
                Cont::MaybeExpression,
                EXPECT_RPAREN,
                Cont::PopLex,
                next,
            ]),
            TokenKind::LBracket => {
                self.cont(&[PUSH_BRACKET, Cont::ArrayLiteral, Cont::PopLex, next])
            }
            TokenKind::LBrace => {
                self.comma_sep_frame(Item::ObjProp, Closer::Brace, FrameInfo::None, Some(next))
            }
            TokenKind::Quasi => self.pass(&[Cont::Quasi, next]),
            TokenKind::New => self.cont(&[Cont::MaybeTarget { no_comma }]),
            _ => self.cont(&[]),
        }
    }

    pub(super) fn maybe_expression(&mut self, kind: TokenKind) -> bool {
        match kind {
            TokenKind::Semi
            | TokenKind::RBrace
            | TokenKind::RParen
            | TokenKind::RBracket
            | TokenKind::Comma => self.pass(&[]),
            _ => self.pass(&[Cont::Expression]),
        }
    }

    pub(super) fn paren_expr(&mut self, kind: TokenKind) -> bool {
        if kind != TokenKind::LParen {
            return self.pass(&[]);
        }
        self.cont(&[PUSH_PAREN, Cont::MaybeExpression, EXPECT_RPAREN, Cont::PopLex])
    }

    pub(super) fn maybe_operator_comma(&mut self, kind: TokenKind, text: &str) -> bool {
        if kind == TokenKind::Comma {
            self.cont(&[Cont::MaybeExpression])
        } else {
            self.maybe_operator(kind, text, false)
        }
    }

    pub(super) fn maybe_operator(&mut self, kind: TokenKind, text: &str, no_comma: bool) -> bool {
        let me = maybe_op(no_comma);
        let expr = expr(no_comma);
        match kind {
            TokenKind::Arrow => {
                self.cont(&[Cont::PushContext, arrow_body(no_comma), Cont::PopContext])
            }
            TokenKind::Operator => {
                if text.contains("++") || text.contains("--") || (self.typescript() && text == "!")
                {
                    self.cont(&[me])
                } else if self.typescript() && text == "<" && type_args_then_call(self.rest()) {
                    self.cont(&[
                        PUSH_ANGLE,
                        Cont::CommaSep {
                            item: Item::TypeExpr,
                            end: Closer::Angle,
                        },
                        Cont::PopLex,
                        me,
                    ])
                } else if text == "?" {
                    self.cont(&[Cont::Expression, EXPECT_COLON, expr])
                } else {
                    self.cont(&[expr])
                }
            }
            TokenKind::Quasi => self.pass(&[Cont::Quasi, me]),
            TokenKind::Semi => false,
            TokenKind::LParen => self.comma_sep_frame(
                Item::ExpressionNoComma,
                Closer::Paren,
                FrameInfo::Call,
                Some(me),
            ),
            TokenKind::Dot => self.cont(&[Cont::Property, me]),
            TokenKind::LBracket => self.cont(&[
                PUSH_BRACKET,
                Cont::MaybeExpression,
                EXPECT_RBRACKET,
                Cont::PopLex,
                me,
            ]),
            _ if self.typescript() && text == "as" => {
                self.mark(Style::Keyword);
                self.cont(&[Cont::TypeExpr, me])
            }
            TokenKind::Regexp => {
                // An operand precedes, so the slash divides. Re-scan the
                // rest of the regex as ordinary tokens.
                self.state.scan.last_kind = TokenKind::Operator;
                self.mark(Style::Operator);
                let scanned = self.stream.pos() - self.stream.start();
                self.stream.back_up(scanned.saturating_sub(1));
                self.cont(&[expr])
            }
            _ => false,
        }
    }

    // ─── Templates ──────────────────────────────────────────────────

    pub(super) fn quasi(&mut self, kind: TokenKind, text: &str) -> bool {
        if kind != TokenKind::Quasi {
            self.pass(&[])
        } else if text.ends_with("${") {
            self.cont(&[Cont::MaybeExpression, Cont::ContinueQuasi])
        } else {
            self.cont(&[Cont::Quasi])
        }
    }

    /// The `}` closing a template substitution resumes the template.
    pub(super) fn continue_quasi(&mut self, kind: TokenKind) -> bool {
        if kind != TokenKind::RBrace {
            return false;
        }
        self.mark(Style::String2);
        self.state.scan.mode = ScanMode::Quasi;
        self.cont(&[Cont::Quasi])
    }

    // ─── Arrows and `new` ───────────────────────────────────────────

    pub(super) fn arrow_body(&mut self, kind: TokenKind, no_comma: bool) -> bool {
        self.state.fat_arrow_at =
            find_fat_arrow(self.stream, self.config.word_chars, self.typescript());
        if kind == TokenKind::LBrace {
            self.pass(&[Cont::Statement])
        } else {
            self.pass(&[expr(no_comma)])
        }
    }

    pub(super) fn maybe_target(&mut self, kind: TokenKind, no_comma: bool) -> bool {
        match kind {
            TokenKind::Dot => self.cont(&[Cont::Target { no_comma }]),
            TokenKind::Variable if self.typescript() => {
                self.cont(&[Cont::MaybeTypeArgs, maybe_op(no_comma)])
            }
            _ => self.pass(&[expr(no_comma)]),
        }
    }

    /// `new.target`
    pub(super) fn target(&mut self, text: &str, no_comma: bool) -> bool {
        if text != "target" {
            return false;
        }
        self.mark(Style::Keyword);
        self.cont(&[maybe_op(no_comma)])
    }

    pub(super) fn property(&mut self, kind: TokenKind) -> bool {
        if kind != TokenKind::Variable {
            return false;
        }
        self.mark(Style::Property);
        self.cont(&[])
    }

    // ─── Object literals ────────────────────────────────────────────

    pub(super) fn obj_prop(&mut self, kind: TokenKind, text: &str) -> bool {
        if kind == TokenKind::Async {
            self.mark(Style::Property);
            return self.cont(&[Cont::ObjProp]);
        }
        if kind == TokenKind::Variable || self.style == Some(Style::Keyword) {
            self.mark(Style::Property);
            if text == "get" || text == "set" {
                return self.cont(&[Cont::GetterSetter]);
            }
            if self.typescript() && self.state.fat_arrow_at == Some(self.stream.start()) {
                // `key: (x) => ...` where the arrow scan stopped at the key.
                let rest = self.rest();
                if let Some(value) = rest.trim_start().strip_prefix(':') {
                    let skipped = rest.len() - value.trim_start().len();
                    self.state.fat_arrow_at = Some(self.stream.pos() + skipped);
                }
            }
            return self.cont(&[Cont::AfterProp]);
        }
        match kind {
            TokenKind::Number | TokenKind::String => {
                let style = if self.config.dialect.jsonld() {
                    Style::Property
                } else {
                    self.style.map_or(Style::Property, Style::with_property)
                };
                self.mark(style);
                self.cont(&[Cont::AfterProp])
            }
            TokenKind::JsonldKeyword => self.cont(&[Cont::AfterProp]),
            _ if self.typescript() && is_modifier(text) => {
                self.mark(Style::Keyword);
                self.cont(&[Cont::ObjProp])
            }
            TokenKind::LBracket => self.cont(&[
                Cont::Expression,
                Cont::MaybeType,
                EXPECT_RBRACKET,
                Cont::AfterProp,
            ]),
            TokenKind::Spread => self.cont(&[Cont::ExpressionNoComma, Cont::AfterProp]),
            _ if text == "*" => {
                self.mark(Style::Keyword);
                self.cont(&[Cont::ObjProp])
            }
            TokenKind::Colon => self.pass(&[Cont::AfterProp]),
            _ => false,
        }
    }

    pub(super) fn getter_setter(&mut self, kind: TokenKind) -> bool {
        if kind != TokenKind::Variable {
            return self.pass(&[Cont::AfterProp]);
        }
        self.mark(Style::Property);
        self.cont(&[Cont::FunctionDef])
    }

    pub(super) fn after_prop(&mut self, kind: TokenKind) -> bool {
        match kind {
            TokenKind::Colon => self.cont(&[Cont::ExpressionNoComma]),
            TokenKind::LParen => self.pass(&[Cont::FunctionDef]),
            _ => false,
        }
    }

    pub(super) fn array_literal(&mut self, kind: TokenKind) -> bool {
        if kind == TokenKind::RBracket {
            return self.cont(&[]);
        }
        self.pass(&[Cont::CommaSep {
            item: Item::ExpressionNoComma,
            end: Closer::Bracket,
        }])
    }

    // ─── Comma-separated lists ──────────────────────────────────────

    pub(super) fn comma_sep(&mut self, item: Item, end: Closer, kind: TokenKind, text: &str) -> bool {
        if end.closes(kind, text) {
            return self.cont(&[]);
        }
        self.pass(&[item.cont(), Cont::CommaSepNext { item, end }])
    }

    pub(super) fn comma_sep_next(
        &mut self,
        item: Item,
        end: Closer,
        kind: TokenKind,
        text: &str,
    ) -> bool {
        if kind == TokenKind::Comma {
            self.count_argument();
            return self.cont(&[
                Cont::CommaSepItem { item, end },
                Cont::CommaSepNext { item, end },
            ]);
        }
        if end.closes(kind, text) {
            return self.cont(&[]);
        }
        self.cont(&[Cont::Expect(Want::Closer(end))])
    }

    pub(super) fn comma_sep_item(
        &mut self,
        item: Item,
        end: Closer,
        kind: TokenKind,
        text: &str,
    ) -> bool {
        if end.closes(kind, text) {
            self.pass(&[])
        } else {
            self.pass(&[item.cont()])
        }
    }
}
