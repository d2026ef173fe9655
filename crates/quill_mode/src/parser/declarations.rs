//! Declarations: variable lists, destructuring patterns, functions and
//! classes.

use quill_lexer::{Style, TokenKind, WordChars};

use super::{is_modifier, Cx, EXPECT_COLON, EXPECT_RBRACKET, PUSH_ANGLE, PUSH_BRACE, PUSH_PAREN};
use crate::cont::{Cont, Item};
use crate::lexical::{Closer, FrameInfo};

/// `static`, `get` and friends act as modifiers only when another member
/// name follows on the same line.
fn member_name_follows(rest: &str) -> bool {
    let trimmed = rest.trim_start();
    trimmed.len() < rest.len() && trimmed.starts_with(|c| WordChars::Unicode.contains(c))
}

impl Cx<'_, '_> {
    pub(super) fn var_def(&mut self, text: &str) -> bool {
        if text == "enum" {
            self.mark(Style::Keyword);
            return self.cont(&[Cont::EnumDef]);
        }
        self.pass(&[
            Cont::Pattern,
            Cont::MaybeType,
            Cont::MaybeAssign,
            Cont::VarDefCont,
        ])
    }

    pub(super) fn var_def_cont(&mut self, kind: TokenKind) -> bool {
        kind == TokenKind::Comma && self.cont(&[Cont::VarDef])
    }

    pub(super) fn maybe_assign(&mut self, text: &str) -> bool {
        text == "=" && self.cont(&[Cont::ExpressionNoComma])
    }

    // ─── Patterns ───────────────────────────────────────────────────

    pub(super) fn pattern(&mut self, kind: TokenKind, text: &str) -> bool {
        if self.typescript() && is_modifier(text) {
            self.mark(Style::Keyword);
            return self.cont(&[Cont::Pattern]);
        }
        match kind {
            TokenKind::Variable => {
                self.register(text);
                self.cont(&[])
            }
            TokenKind::Spread => self.cont(&[Cont::Pattern]),
            TokenKind::LBracket => {
                self.comma_sep_frame(Item::EltPattern, Closer::Bracket, FrameInfo::None, None)
            }
            TokenKind::LBrace => {
                self.comma_sep_frame(Item::PropPattern, Closer::Brace, FrameInfo::None, None)
            }
            _ => false,
        }
    }

    /// One entry of an object pattern. A name followed by `:` is a key,
    /// anything else binds.
    pub(super) fn prop_pattern(&mut self, kind: TokenKind, text: &str) -> bool {
        if kind == TokenKind::Variable {
            if !self.rest().trim_start().starts_with(':') {
                self.register(text);
                return self.cont(&[Cont::MaybeAssign]);
            }
            self.mark(Style::Property);
        }
        match kind {
            TokenKind::Spread => self.cont(&[Cont::Pattern]),
            TokenKind::RBrace => self.pass(&[]),
            TokenKind::LBracket => self.cont(&[
                Cont::Expression,
                EXPECT_RBRACKET,
                EXPECT_COLON,
                Cont::PropPattern,
            ]),
            _ => self.cont(&[EXPECT_COLON, Cont::Pattern, Cont::MaybeAssign]),
        }
    }

    // ─── Functions ──────────────────────────────────────────────────

    /// Function head and body. `decl` is a body-less signature (interface
    /// members, overloads).
    pub(super) fn function_def(&mut self, kind: TokenKind, text: &str, decl: bool) -> bool {
        let this = if decl {
            Cont::FunctionDecl
        } else {
            Cont::FunctionDef
        };
        if text == "*" {
            self.mark(Style::Keyword);
            return self.cont(&[this]);
        }
        match kind {
            TokenKind::Variable => {
                self.register(text);
                self.cont(&[this])
            }
            TokenKind::LParen => {
                let params = Cont::CommaSep {
                    item: Item::FunArg,
                    end: Closer::Paren,
                };
                if decl {
                    self.cont(&[
                        Cont::PushContext,
                        PUSH_PAREN,
                        params,
                        Cont::PopLex,
                        Cont::MaybeRetType,
                        Cont::PopContext,
                    ])
                } else {
                    self.cont(&[
                        Cont::PushContext,
                        PUSH_PAREN,
                        params,
                        Cont::PopLex,
                        Cont::MaybeRetType,
                        Cont::Statement,
                        Cont::PopContext,
                    ])
                }
            }
            _ if self.typescript() && text == "<" => self.cont(&[
                PUSH_ANGLE,
                Cont::CommaSep {
                    item: Item::TypeParam,
                    end: Closer::Angle,
                },
                Cont::PopLex,
                this,
            ]),
            _ => false,
        }
    }

    pub(super) fn fun_arg(&mut self, kind: TokenKind, text: &str) -> bool {
        if text == "@" {
            return self.cont(&[Cont::Expression, Cont::FunArg]);
        }
        match kind {
            TokenKind::Spread => self.cont(&[Cont::FunArg]),
            _ if self.typescript() && is_modifier(text) => {
                self.mark(Style::Keyword);
                self.cont(&[Cont::FunArg])
            }
            TokenKind::This if self.typescript() => {
                self.cont(&[Cont::MaybeType, Cont::MaybeAssign])
            }
            _ => self.pass(&[Cont::Pattern, Cont::MaybeType, Cont::MaybeAssign]),
        }
    }

    // ─── Classes ────────────────────────────────────────────────────

    pub(super) fn class_name(&mut self, kind: TokenKind, text: &str) -> bool {
        if kind != TokenKind::Variable {
            return false;
        }
        self.register(text);
        self.cont(&[Cont::ClassNameAfter])
    }

    pub(super) fn class_name_after(&mut self, kind: TokenKind, text: &str) -> bool {
        if text == "<" {
            return self.cont(&[
                PUSH_ANGLE,
                Cont::CommaSep {
                    item: Item::TypeParam,
                    end: Closer::Angle,
                },
                Cont::PopLex,
                Cont::ClassNameAfter,
            ]);
        }
        if text == "extends"
            || text == "implements"
            || (self.typescript() && kind == TokenKind::Comma)
        {
            if text == "implements" {
                self.mark(Style::Keyword);
            }
            let heritage = if self.typescript() {
                Cont::TypeExpr
            } else {
                Cont::Expression
            };
            return self.cont(&[heritage, Cont::ClassNameAfter]);
        }
        if kind == TokenKind::LBrace {
            return self.cont(&[PUSH_BRACE, Cont::ClassBody, Cont::PopLex]);
        }
        false
    }

    pub(super) fn class_body(&mut self, kind: TokenKind, text: &str) -> bool {
        let modifier = kind == TokenKind::Async
            || (kind == TokenKind::Variable
                && (matches!(text, "static" | "get" | "set")
                    || (self.typescript() && is_modifier(text)))
                && member_name_follows(self.rest()));
        if modifier {
            self.mark(Style::Keyword);
            return self.cont(&[Cont::ClassBody]);
        }
        if kind == TokenKind::Variable || self.style == Some(Style::Keyword) {
            self.mark(Style::Property);
            return self.cont(&[Cont::ClassField, Cont::ClassBody]);
        }
        match kind {
            TokenKind::Number | TokenKind::String => {
                self.cont(&[Cont::ClassField, Cont::ClassBody])
            }
            TokenKind::LBracket => self.cont(&[
                Cont::Expression,
                Cont::MaybeType,
                EXPECT_RBRACKET,
                Cont::ClassField,
                Cont::ClassBody,
            ]),
            _ if text == "*" => {
                self.mark(Style::Keyword);
                self.cont(&[Cont::ClassBody])
            }
            TokenKind::LParen if self.typescript() => {
                self.pass(&[Cont::FunctionDecl, Cont::ClassBody])
            }
            TokenKind::Semi | TokenKind::Comma => self.cont(&[Cont::ClassBody]),
            TokenKind::RBrace => self.cont(&[]),
            _ if text == "@" => self.cont(&[Cont::Expression, Cont::ClassBody]),
            _ => false,
        }
    }

    pub(super) fn class_field(&mut self, kind: TokenKind, text: &str) -> bool {
        if text == "!" || text == "?" {
            return self.cont(&[Cont::ClassField]);
        }
        if kind == TokenKind::Colon {
            return self.cont(&[Cont::TypeExpr, Cont::MaybeAssign]);
        }
        if text == "=" {
            return self.cont(&[Cont::ExpressionNoComma]);
        }
        let in_interface = self
            .frame()
            .prev
            .is_some_and(|prev| self.arena.frame(prev).info == FrameInfo::Interface);
        if in_interface {
            self.pass(&[Cont::FunctionDecl])
        } else {
            self.pass(&[Cont::FunctionDef])
        }
    }
}
