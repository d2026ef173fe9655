//! Statement rules, including module imports and exports.

use quill_lexer::{Style, TokenKind};

use super::{
    Cx, EXPECT_COLON, EXPECT_RPAREN, EXPECT_SEMI, PUSH_BRACE, PUSH_FORM, PUSH_PAREN, PUSH_STAT,
};
use crate::cont::{Cont, Item, Want};
use crate::lexical::{Closer, FrameInfo, FrameKind, VarKeyword};

const EXPECT_LBRACE: Cont = Cont::Expect(Want::Kind(TokenKind::LBrace));

impl Cx<'_, '_> {
    pub(super) fn statement(&mut self, kind: TokenKind, text: &str) -> bool {
        match kind {
            TokenKind::Var => self.cont(&[
                Cont::PushLex(FrameKind::Vardef, FrameInfo::Vardef(VarKeyword::from_text(text))),
                Cont::VarDef,
                EXPECT_SEMI,
                Cont::PopLex,
            ]),
            TokenKind::KeywordA => {
                self.cont(&[PUSH_FORM, Cont::ParenExpr, Cont::Statement, Cont::PopLex])
            }
            TokenKind::KeywordB => self.cont(&[PUSH_FORM, Cont::Statement, Cont::PopLex]),
            TokenKind::KeywordD => {
                // A bare `return` at the end of a line ends the statement.
                if self.rest().trim().is_empty() {
                    self.cont(&[])
                } else {
                    self.cont(&[PUSH_STAT, Cont::MaybeExpression, EXPECT_SEMI, Cont::PopLex])
                }
            }
            TokenKind::Debugger => self.cont(&[EXPECT_SEMI]),
            TokenKind::LBrace => self.cont(&[
                PUSH_BRACE,
                Cont::PushBlockContext,
                Cont::Block,
                Cont::PopLex,
                Cont::PopContext,
            ]),
            TokenKind::Semi => self.cont(&[]),
            TokenKind::If => {
                // `else if` chains share one form frame.
                if self.frame().info == FrameInfo::Else
                    && self.state.cc.last() == Some(&Cont::PopLex)
                {
                    self.state.cc.pop();
                    self.pop_lex();
                }
                self.cont(&[
                    PUSH_FORM,
                    Cont::ParenExpr,
                    Cont::Statement,
                    Cont::PopLex,
                    Cont::MaybeElse,
                ])
            }
            TokenKind::Function => self.cont(&[Cont::FunctionDef]),
            TokenKind::For => self.cont(&[
                PUSH_FORM,
                Cont::PushBlockContext,
                Cont::ForSpec,
                Cont::Statement,
                Cont::PopContext,
                Cont::PopLex,
            ]),
            TokenKind::Class => self.class_head(FrameInfo::Class),
            TokenKind::Variable if self.typescript() && text == "interface" => {
                self.class_head(FrameInfo::Interface)
            }
            TokenKind::Variable => self.variable_statement(text),
            TokenKind::Switch => self.cont(&[
                PUSH_FORM,
                Cont::ParenExpr,
                EXPECT_LBRACE,
                Cont::PushLex(FrameKind::Brace, FrameInfo::Switch),
                Cont::PushBlockContext,
                Cont::Block,
                Cont::PopLex,
                Cont::PopLex,
                Cont::PopContext,
            ]),
            TokenKind::Case => self.cont(&[Cont::Expression, EXPECT_COLON]),
            TokenKind::Default => self.cont(&[EXPECT_COLON]),
            TokenKind::Catch => self.cont(&[
                PUSH_FORM,
                Cont::PushContext,
                Cont::MaybeCatchBinding,
                Cont::Statement,
                Cont::PopLex,
                Cont::PopContext,
            ]),
            TokenKind::Export => self.cont(&[PUSH_STAT, Cont::AfterExport, Cont::PopLex]),
            TokenKind::Import => self.cont(&[PUSH_STAT, Cont::AfterImport, Cont::PopLex]),
            TokenKind::Async => self.cont(&[Cont::Statement]),
            _ if text == "@" => self.cont(&[Cont::Expression, Cont::Statement]),
            _ => self.pass(&[PUSH_STAT, Cont::Expression, EXPECT_SEMI, Cont::PopLex]),
        }
    }

    fn class_head(&mut self, info: FrameInfo) -> bool {
        self.mark(Style::Keyword);
        self.cont(&[
            Cont::PushLex(FrameKind::Form, info),
            Cont::ClassName,
            Cont::PopLex,
        ])
    }

    /// A statement starting with an identifier: a label, an expression, or
    /// one of the contextual declaration keywords of the typed dialect.
    fn variable_statement(&mut self, text: &str) -> bool {
        if self.typescript() {
            let word_follows = self
                .rest()
                .trim_start()
                .starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_');
            match text {
                "declare" | "abstract" => {
                    self.mark(Style::Keyword);
                    return self.cont(&[Cont::Statement]);
                }
                "enum" if word_follows => {
                    self.mark(Style::Keyword);
                    return self.cont(&[Cont::EnumDef]);
                }
                "type" if word_follows => {
                    self.mark(Style::Keyword);
                    return self.cont(&[
                        Cont::TypeName,
                        Cont::Expect(Want::Kind(TokenKind::Operator)),
                        Cont::TypeExpr,
                        EXPECT_SEMI,
                    ]);
                }
                "module" if word_follows => {
                    self.mark(Style::Keyword);
                    return self.cont(&[
                        PUSH_FORM,
                        Cont::Pattern,
                        EXPECT_LBRACE,
                        PUSH_BRACE,
                        Cont::Block,
                        Cont::PopLex,
                        Cont::PopLex,
                    ]);
                }
                "namespace" => {
                    self.mark(Style::Keyword);
                    return self.cont(&[PUSH_FORM, Cont::Expression, Cont::Statement, Cont::PopLex]);
                }
                _ => {}
            }
        }
        self.cont(&[PUSH_STAT, Cont::MaybeLabel])
    }

    pub(super) fn block(&mut self, kind: TokenKind) -> bool {
        if kind == TokenKind::RBrace {
            self.cont(&[])
        } else {
            self.pass(&[Cont::Statement, Cont::Block])
        }
    }

    pub(super) fn maybe_label(&mut self, kind: TokenKind) -> bool {
        if kind == TokenKind::Colon {
            self.cont(&[Cont::PopLex, Cont::Statement])
        } else {
            self.pass(&[Cont::MaybeOperatorComma, EXPECT_SEMI, Cont::PopLex])
        }
    }

    pub(super) fn maybe_else(&mut self, kind: TokenKind, text: &str) -> bool {
        if kind == TokenKind::KeywordB && text == "else" {
            self.cont(&[
                Cont::PushLex(FrameKind::Form, FrameInfo::Else),
                Cont::Statement,
                Cont::PopLex,
            ])
        } else {
            false
        }
    }

    pub(super) fn maybe_catch_binding(&mut self, kind: TokenKind) -> bool {
        kind == TokenKind::LParen && self.cont(&[Cont::FunArg, EXPECT_RPAREN])
    }

    // ─── for ────────────────────────────────────────────────────────

    pub(super) fn for_spec(&mut self, kind: TokenKind, text: &str) -> bool {
        if text == "await" {
            self.cont(&[Cont::ForSpec])
        } else if kind == TokenKind::LParen {
            self.cont(&[PUSH_PAREN, Cont::ForSpec1, Cont::PopLex])
        } else {
            false
        }
    }

    pub(super) fn for_spec1(&mut self, kind: TokenKind) -> bool {
        match kind {
            TokenKind::Var => self.cont(&[Cont::VarDef, Cont::ForSpec2]),
            TokenKind::Variable => self.cont(&[Cont::ForSpec2]),
            _ => self.pass(&[Cont::ForSpec2]),
        }
    }

    pub(super) fn for_spec2(&mut self, kind: TokenKind, text: &str) -> bool {
        match kind {
            TokenKind::RParen => self.cont(&[]),
            TokenKind::Semi => self.cont(&[Cont::ForSpec2]),
            _ if text == "in" || text == "of" => {
                self.mark(Style::Keyword);
                self.cont(&[Cont::Expression, Cont::ForSpec2])
            }
            _ => self.pass(&[Cont::Expression, Cont::ForSpec2]),
        }
    }

    // ─── Modules ────────────────────────────────────────────────────

    pub(super) fn after_export(&mut self, kind: TokenKind, text: &str) -> bool {
        if text == "*" {
            self.mark(Style::Keyword);
            self.cont(&[Cont::MaybeFrom, EXPECT_SEMI])
        } else if text == "default" {
            self.mark(Style::Keyword);
            self.cont(&[Cont::Expression, EXPECT_SEMI])
        } else if kind == TokenKind::LBrace {
            self.cont(&[
                Cont::CommaSep {
                    item: Item::ExportField,
                    end: Closer::Brace,
                },
                Cont::MaybeFrom,
                EXPECT_SEMI,
            ])
        } else {
            self.pass(&[Cont::Statement])
        }
    }

    pub(super) fn export_field(&mut self, kind: TokenKind, text: &str) -> bool {
        if text == "as" {
            self.mark(Style::Keyword);
            self.cont(&[Cont::Expect(Want::Kind(TokenKind::Variable))])
        } else if kind == TokenKind::Variable {
            self.pass(&[Cont::ExpressionNoComma, Cont::ExportField])
        } else {
            false
        }
    }

    pub(super) fn after_import(&mut self, kind: TokenKind) -> bool {
        match kind {
            TokenKind::String => self.cont(&[]),
            // Dynamic `import(...)` and `import.meta`.
            TokenKind::LParen => self.pass(&[Cont::Expression]),
            TokenKind::Dot => self.pass(&[Cont::MaybeOperatorComma]),
            _ => self.pass(&[Cont::ImportSpec, Cont::MaybeMoreImports, Cont::MaybeFrom]),
        }
    }

    pub(super) fn import_spec(&mut self, kind: TokenKind, text: &str) -> bool {
        if kind == TokenKind::LBrace {
            return self.comma_sep_frame(Item::ImportSpec, Closer::Brace, FrameInfo::None, None);
        }
        if kind == TokenKind::Variable {
            self.register(text);
        }
        if text == "*" {
            self.mark(Style::Keyword);
        }
        self.cont(&[Cont::MaybeAs])
    }

    pub(super) fn maybe_more_imports(&mut self, kind: TokenKind) -> bool {
        kind == TokenKind::Comma && self.cont(&[Cont::ImportSpec, Cont::MaybeMoreImports])
    }

    pub(super) fn maybe_as(&mut self, text: &str) -> bool {
        if text != "as" {
            return false;
        }
        self.mark(Style::Keyword);
        self.cont(&[Cont::ImportSpec])
    }

    pub(super) fn maybe_from(&mut self, text: &str) -> bool {
        if text != "from" {
            return false;
        }
        self.mark(Style::Keyword);
        self.cont(&[Cont::Expression])
    }

    pub(super) fn enum_def(&mut self) -> bool {
        self.pass(&[
            PUSH_FORM,
            Cont::Pattern,
            EXPECT_LBRACE,
            PUSH_BRACE,
            Cont::CommaSep {
                item: Item::EnumMember,
                end: Closer::Brace,
            },
            Cont::PopLex,
            Cont::PopLex,
        ])
    }
}
