//! Continuation-driven parser.
//!
//! [`parse`] feeds one scanned token through the continuation stack in
//! [`LineState::cc`]. Grammar rules live in the submodules, grouped the
//! way the grammar is: statements, expressions, declarations and patterns,
//! and the typed-dialect rules. Every rule has the same shape: look at the
//! token, push what should come next, and report whether the token was
//! consumed.
//!
//! The parser decides styles, not structure. Malformed input never fails;
//! rules decline tokens they cannot use and the stack drains until
//! something takes them (the default statement rule takes anything).

mod declarations;
mod expressions;
mod statements;
mod types;

use quill_lexer::{LineStream, Style, TokenKind};
use tracing::{debug, trace};

use crate::arena::Arena;
use crate::config::ModeConfig;
use crate::cont::{Cont, Item, Want};
use crate::lexical::{Closer, FrameInfo, FrameKind, LexFrame, VarKeyword};
use crate::scope::{self, ScopeFrame};
use crate::state::LineState;

/// Upper bound on declined continuations for a single token. The grammar
/// always consumes well before this; hitting it means the stack is
/// corrupt, and the parser starts over from an empty stack.
const STEP_LIMIT: usize = 10_000;

const PUSH_STAT: Cont = Cont::PushLex(FrameKind::Stat, FrameInfo::None);
const PUSH_FORM: Cont = Cont::PushLex(FrameKind::Form, FrameInfo::None);
const PUSH_PAREN: Cont = Cont::PushLex(FrameKind::Paren, FrameInfo::None);
const PUSH_BRACKET: Cont = Cont::PushLex(FrameKind::Bracket, FrameInfo::None);
const PUSH_BRACE: Cont = Cont::PushLex(FrameKind::Brace, FrameInfo::None);
const PUSH_ANGLE: Cont = Cont::PushLex(FrameKind::Angle, FrameInfo::None);

const EXPECT_SEMI: Cont = Cont::Expect(Want::Kind(TokenKind::Semi));
const EXPECT_COLON: Cont = Cont::Expect(Want::Kind(TokenKind::Colon));
const EXPECT_RPAREN: Cont = Cont::Expect(Want::Kind(TokenKind::RParen));
const EXPECT_RBRACKET: Cont = Cont::Expect(Want::Kind(TokenKind::RBracket));

/// TypeScript member modifiers.
fn is_modifier(text: &str) -> bool {
    matches!(
        text,
        "public" | "private" | "protected" | "abstract" | "readonly"
    )
}

/// Run the continuation machine over one token and return its final style.
///
/// `style` is the scanner's style for the token. The stream may be moved
/// back when a token the scanner read as a regex turns out to be a
/// division operator.
pub(crate) fn parse(
    arena: &mut Arena,
    config: &ModeConfig,
    state: &mut LineState,
    stream: &mut LineStream<'_>,
    style: Option<Style>,
    kind: TokenKind,
    text: &str,
) -> Option<Style> {
    let mut cx = Cx {
        arena,
        config,
        state,
        stream,
        marked: None,
        style,
    };
    cx.run(kind, text)
}

/// Parse context for one token.
struct Cx<'p, 'a> {
    arena: &'p mut Arena,
    config: &'p ModeConfig,
    state: &'p mut LineState,
    stream: &'p mut LineStream<'a>,
    /// Style chosen by the rule that consumed the token.
    marked: Option<Style>,
    /// Scanner style of the token.
    style: Option<Style>,
}

impl<'a> Cx<'_, 'a> {
    fn run(&mut self, kind: TokenKind, text: &str) -> Option<Style> {
        let frame = self.arena.frame_mut(self.state.lexical);
        if frame.align.is_none() {
            frame.align = Some(true);
        }

        let fallback = if self.config.dialect.json_mode() {
            Cont::Expression
        } else {
            Cont::Statement
        };
        for _ in 0..STEP_LIMIT {
            let cont = self.state.cc.pop().unwrap_or(fallback);
            if self.step(cont, kind, text) {
                while let Some(&top) = self.state.cc.last() {
                    if !top.is_lexical() {
                        break;
                    }
                    self.state.cc.pop();
                    self.step(top, kind, text);
                }
                trace!(?kind, text, depth = self.state.cc.len(), "consumed");
                return self.result(kind, text);
            }
        }

        debug!(?kind, text, "token not consumed; clearing continuation stack");
        self.state.cc.clear();
        self.style
    }

    fn result(&self, kind: TokenKind, text: &str) -> Option<Style> {
        if let Some(marked) = self.marked {
            return Some(marked);
        }
        if kind == TokenKind::Variable {
            if self.in_scope(text) {
                return Some(Style::Variable2);
            }
            if self.style == Some(Style::Variable) && self.config.builtins.contains(text) {
                return Some(Style::Builtin);
            }
        }
        self.style
    }

    fn step(&mut self, cont: Cont, kind: TokenKind, text: &str) -> bool {
        match cont {
            Cont::PushLex(frame, info) => {
                self.push_lex(frame, info);
                false
            }
            Cont::PopLex => {
                self.pop_lex();
                false
            }
            Cont::PushContext => {
                self.push_context(false);
                false
            }
            Cont::PushBlockContext => {
                self.push_context(true);
                false
            }
            Cont::PopContext => {
                self.pop_context();
                false
            }
            Cont::Expect(want) => self.expect(want, kind, text),

            Cont::Statement => self.statement(kind, text),
            Cont::Block => self.block(kind),
            Cont::MaybeLabel => self.maybe_label(kind),
            Cont::MaybeElse => self.maybe_else(kind, text),
            Cont::MaybeCatchBinding => self.maybe_catch_binding(kind),
            Cont::ForSpec => self.for_spec(kind, text),
            Cont::ForSpec1 => self.for_spec1(kind),
            Cont::ForSpec2 => self.for_spec2(kind, text),
            Cont::AfterExport => self.after_export(kind, text),
            Cont::ExportField => self.export_field(kind, text),
            Cont::AfterImport => self.after_import(kind),
            Cont::ImportSpec => self.import_spec(kind, text),
            Cont::MaybeMoreImports => self.maybe_more_imports(kind),
            Cont::MaybeAs => self.maybe_as(text),
            Cont::MaybeFrom => self.maybe_from(text),
            Cont::EnumDef => self.enum_def(),
            Cont::EnumMember | Cont::EltPattern => {
                self.pass(&[Cont::Pattern, Cont::MaybeAssign])
            }

            Cont::Expression => self.expression(kind, false),
            Cont::ExpressionNoComma => self.expression(kind, true),
            Cont::MaybeExpression => self.maybe_expression(kind),
            Cont::ParenExpr => self.paren_expr(kind),
            Cont::MaybeOperatorComma => self.maybe_operator_comma(kind, text),
            Cont::MaybeOperatorNoComma => self.maybe_operator(kind, text, true),
            Cont::Quasi => self.quasi(kind, text),
            Cont::ContinueQuasi => self.continue_quasi(kind),
            Cont::ArrowBody => self.arrow_body(kind, false),
            Cont::ArrowBodyNoComma => self.arrow_body(kind, true),
            Cont::MaybeTarget { no_comma } => self.maybe_target(kind, no_comma),
            Cont::Target { no_comma } => self.target(text, no_comma),
            Cont::Property => self.property(kind),
            Cont::ObjProp => self.obj_prop(kind, text),
            Cont::GetterSetter => self.getter_setter(kind),
            Cont::AfterProp => self.after_prop(kind),
            Cont::ArrayLiteral => self.array_literal(kind),
            Cont::CommaSep { item, end } => self.comma_sep(item, end, kind, text),
            Cont::CommaSepNext { item, end } => self.comma_sep_next(item, end, kind, text),
            Cont::CommaSepItem { item, end } => self.comma_sep_item(item, end, kind, text),

            Cont::VarDef => self.var_def(text),
            Cont::VarDefCont => self.var_def_cont(kind),
            Cont::Pattern => self.pattern(kind, text),
            Cont::PropPattern => self.prop_pattern(kind, text),
            Cont::MaybeAssign => self.maybe_assign(text),
            Cont::FunctionDef => self.function_def(kind, text, false),
            Cont::FunctionDecl => self.function_def(kind, text, true),
            Cont::FunArg => self.fun_arg(kind, text),
            Cont::ClassExpression => {
                if kind == TokenKind::Variable {
                    self.class_name(kind, text)
                } else {
                    self.class_name_after(kind, text)
                }
            }
            Cont::ClassName => self.class_name(kind, text),
            Cont::ClassNameAfter => self.class_name_after(kind, text),
            Cont::ClassBody => self.class_body(kind, text),
            Cont::ClassField => self.class_field(kind, text),

            Cont::TypeName => self.type_name(kind, text),
            Cont::TypeExpr => self.type_expr(kind, text),
            Cont::MaybeType => self.maybe_type(kind, text),
            Cont::MaybeTypeOrIn => self.maybe_type_or_in(kind, text),
            Cont::MaybeRetType => self.maybe_ret_type(kind),
            Cont::IsKw => self.is_kw(text),
            Cont::MaybeReturnType => self.maybe_return_type(kind),
            Cont::TypeProps => self.type_props(kind),
            Cont::TypeProp => self.type_prop(kind, text),
            Cont::QuasiType => self.quasi_type(kind, text),
            Cont::ContinueQuasiType => self.continue_quasi_type(kind),
            Cont::TypeArg => self.type_arg(kind, text),
            Cont::AfterType => self.after_type(kind, text),
            Cont::MaybeTypeArgs => self.maybe_type_args(text),
            Cont::TypeParam => self.pass(&[Cont::TypeExpr, Cont::MaybeTypeDefault]),
            Cont::MaybeTypeDefault => self.maybe_type_default(text),
        }
    }

    // ─── Stack primitives ───────────────────────────────────────────

    /// Consume the token; `conts` run next, first element first.
    fn cont(&mut self, conts: &[Cont]) -> bool {
        self.state.cc.extend(conts.iter().rev().copied());
        true
    }

    /// Decline the token after scheduling `conts` to look at it.
    fn pass(&mut self, conts: &[Cont]) -> bool {
        self.state.cc.extend(conts.iter().rev().copied());
        false
    }

    #[inline]
    fn mark(&mut self, style: Style) {
        self.marked = Some(style);
    }

    #[inline]
    fn typescript(&self) -> bool {
        self.config.dialect.typescript()
    }

    /// Unconsumed remainder of the line, for lookahead.
    #[inline]
    fn rest(&self) -> &'a str {
        self.stream.rest()
    }

    #[inline]
    fn frame(&self) -> &LexFrame {
        self.arena.frame(self.state.lexical)
    }

    fn expect(&mut self, want: Want, kind: TokenKind, text: &str) -> bool {
        let matched = match want {
            Want::Kind(wanted) => kind == wanted,
            Want::Closer(closer) => closer.closes(kind, text),
        };
        if matched {
            self.cont(&[])
        } else if want == Want::Kind(TokenKind::Semi) || kind.is_closing() {
            self.pass(&[])
        } else {
            self.cont(&[Cont::Expect(want)])
        }
    }

    /// Open a comma-separated list in its own bracket frame; `after` runs
    /// once the list closes.
    fn comma_sep_frame(
        &mut self,
        item: Item,
        end: Closer,
        info: FrameInfo,
        after: Option<Cont>,
    ) -> bool {
        if let Some(after) = after {
            self.state.cc.push(after);
        }
        self.cont(&[
            Cont::PushLex(end.frame_kind(), info),
            Cont::CommaSep { item, end },
            Cont::PopLex,
        ])
    }

    // ─── Lexical frames ─────────────────────────────────────────────

    fn push_lex(&mut self, kind: FrameKind, info: FrameInfo) {
        let current = self.state.lexical;
        let top = self.arena.frame(current);
        let mut indented = i32::try_from(self.state.indented).unwrap_or(i32::MAX);
        if top.kind == FrameKind::Stat {
            indented = top.indented;
        } else {
            // Aligned parens pass their indentation on.
            let mut cursor = Some(current);
            while let Some(id) = cursor {
                let frame = self.arena.frame(id);
                if frame.kind != FrameKind::Paren || frame.align != Some(true) {
                    break;
                }
                indented = frame.indented;
                cursor = frame.prev;
            }
        }
        self.state.lexical = self.arena.push_frame(LexFrame {
            indented,
            column: self.stream.column(),
            kind,
            align: None,
            prev: Some(current),
            info,
            args: 0,
        });
    }

    fn pop_lex(&mut self) {
        let frame = *self.frame();
        // The root frame is never popped.
        let Some(prev) = frame.prev else {
            return;
        };
        if frame.kind == FrameKind::Paren {
            self.state.indented = u32::try_from(frame.indented).unwrap_or(0);
        }
        self.state.lexical = prev;
    }

    /// Count a comma in a call's argument list. Frames are shared with
    /// earlier snapshots, so the counter lives in a fresh copy.
    fn count_argument(&mut self) {
        let frame = *self.frame();
        if frame.info == FrameInfo::Call {
            self.state.lexical = self.arena.push_frame(LexFrame {
                args: frame.args + 1,
                ..frame
            });
        }
    }

    // ─── Scopes ─────────────────────────────────────────────────────

    fn push_context(&mut self, block: bool) {
        let scope = ScopeFrame {
            prev: self.state.context,
            vars: self.state.local_vars,
            block,
        };
        self.state.context = Some(self.arena.push_scope(scope));
        self.state.local_vars = if block {
            None
        } else {
            Some(self.arena.default_vars())
        };
    }

    fn pop_context(&mut self) {
        if let Some(id) = self.state.context {
            let scope = *self.arena.scope(id);
            self.state.local_vars = scope.vars;
            self.state.context = scope.prev;
        }
    }

    fn in_scope(&self, text: &str) -> bool {
        if !self.config.track_scope {
            return false;
        }
        self.arena.lookup_name(text).is_some_and(|name| {
            scope::in_scope(self.arena, self.state.local_vars, self.state.context, name)
        })
    }

    /// Record a binding occurrence and style it as a definition.
    fn register(&mut self, text: &str) {
        self.mark(Style::Def);
        if !self.config.track_scope {
            return;
        }
        let name = self.arena.intern(text);
        if let Some(context) = self.state.context {
            let function_scoped = self.frame().info
                == FrameInfo::Vardef(VarKeyword::Var)
                && self.arena.scope(context).block;
            if function_scoped {
                if let Some(hoisted) = scope::hoist_var(self.arena, context, name) {
                    self.state.context = Some(hoisted);
                    return;
                }
            } else if !scope::in_list(self.arena, name, self.state.local_vars) {
                self.state.local_vars = Some(self.arena.push_var(name, self.state.local_vars));
                return;
            }
        }
        if self.config.track_globals && !scope::in_list(self.arena, name, self.state.global_vars)
        {
            self.state.global_vars = Some(self.arena.push_var(name, self.state.global_vars));
        }
    }
}
