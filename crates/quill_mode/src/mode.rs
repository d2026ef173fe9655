//! The editor-facing mode object.
//!
//! A [`JsMode`] owns the configuration, the scanner and the arena that
//! every [`LineState`] it hands out points into. The host drives it one
//! line at a time:
//!
//! ```text
//! state = mode.start_state(0)
//! for each line:
//!     snapshot state (for re-highlighting after edits)
//!     spans = mode.highlight_line(line, &mut state)
//! ```
//!
//! States from one mode must never be fed to another.

use quill_lexer::{LineStream, ScanMode, ScanState, Scanner, Style, TokenKind};
use tracing::trace;

use crate::arena::{Arena, ArenaStats, FrameId};
use crate::config::ModeConfig;
use crate::fat_arrow::find_fat_arrow;
use crate::indent::{self, Indent};
use crate::lexical::{FrameInfo, FrameKind, LexFrame};
use crate::parser;
use crate::scope::{self, ScopeFrame};
use crate::state::{ContStack, LineState};

/// Bracket pairs the host may auto-close.
const CLOSE_BRACKETS: &str = "()[]{}''\"\"``";

/// A styled byte range of one line.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct StyledSpan {
    pub start: usize,
    pub end: usize,
    /// `None` for punctuation.
    pub style: Option<Style>,
}

/// Static editor metadata for a mode instance.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ModeInfo {
    pub block_comment_start: Option<&'static str>,
    pub block_comment_end: Option<&'static str>,
    /// Prefix for continuation lines of a block comment.
    pub block_comment_continue: Option<&'static str>,
    pub line_comment: Option<&'static str>,
    /// Folding strategy name.
    pub fold: &'static str,
    pub close_brackets: &'static str,
    /// Name hosts use to look up helpers (linters, hinters).
    pub helper_type: &'static str,
    pub json: bool,
    pub jsonld: bool,
}

/// Highlighting and indentation engine for one document.
pub struct JsMode {
    config: ModeConfig,
    scanner: Scanner,
    arena: Arena,
}

impl JsMode {
    pub fn new(config: ModeConfig) -> Self {
        let scanner = Scanner::new(config.word_chars, config.dialect.jsonld());
        JsMode {
            config,
            scanner,
            arena: Arena::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &ModeConfig {
        &self.config
    }

    /// State for the first line of a document whose top level sits at
    /// column `base_indent`.
    pub fn start_state(&mut self, base_indent: u32) -> LineState {
        let unit = i64::from(self.config.indent_unit);
        let root = i32::try_from(i64::from(base_indent) - unit).unwrap_or(i32::MIN);
        let lexical = self.arena.push_frame(LexFrame {
            indented: root,
            column: 0,
            kind: FrameKind::Block,
            align: Some(false),
            prev: None,
            info: FrameInfo::None,
            args: 0,
        });

        let (local_vars, context) = match &self.config.local_vars {
            Some(names) => {
                let mut list = None;
                for name in names {
                    let name = self.arena.intern(name);
                    list = Some(self.arena.push_var(name, list));
                }
                let root_scope = self.arena.push_scope(ScopeFrame {
                    prev: None,
                    vars: None,
                    block: false,
                });
                (list, Some(root_scope))
            }
            None => (None, None),
        };

        let mut global_vars = None;
        if self.config.track_globals {
            for name in &self.config.global_vars {
                let name = self.arena.intern(name);
                if !scope::in_list(&self.arena, name, global_vars) {
                    global_vars = Some(self.arena.push_var(name, global_vars));
                }
            }
        }

        LineState {
            scan: ScanState::default(),
            fat_arrow_at: None,
            cc: ContStack::new(),
            lexical,
            local_vars,
            context,
            global_vars,
            indented: base_indent,
        }
    }

    /// Scan and parse one lexeme.
    ///
    /// Returns `None` when only whitespace was skipped (or the stream was
    /// already at the end of the line). The span covers exactly the bytes
    /// the lexeme consumed, which may be fewer than the scanner read when a
    /// slash turns out to be a division.
    pub fn token(
        &mut self,
        stream: &mut LineStream<'_>,
        state: &mut LineState,
    ) -> Option<StyledSpan> {
        if stream.eol() {
            return None;
        }
        stream.begin_token();
        if stream.sol() {
            let frame = self.arena.frame_mut(state.lexical);
            if frame.align.is_none() {
                frame.align = Some(false);
            }
            state.indented = stream.indentation();
            state.fat_arrow_at =
                find_fat_arrow(stream, self.config.word_chars, self.config.dialect.typescript());
        }
        if state.scan.mode != ScanMode::BlockComment && stream.eat_space() {
            return None;
        }

        let in_type_args = self.arena.frame(state.lexical).kind == FrameKind::Angle;
        let token = self
            .scanner
            .next_token(stream, &mut state.scan, in_type_args);
        let style = if token.kind == TokenKind::Comment {
            token.style
        } else {
            state.scan.last_kind = match (token.kind, token.text) {
                (TokenKind::Operator, "++" | "--") => TokenKind::IncDec,
                (kind, _) => kind,
            };
            parser::parse(
                &mut self.arena,
                &self.config,
                state,
                stream,
                token.style,
                token.kind,
                token.text,
            )
        };

        Some(StyledSpan {
            start: stream.start(),
            end: stream.pos(),
            style,
        })
    }

    /// Scan a whole line and return its styled spans.
    pub fn highlight_line(&mut self, line: &str, state: &mut LineState) -> Vec<StyledSpan> {
        let mut stream = LineStream::new(line, self.config.tab_size);
        let mut spans = Vec::new();
        while !stream.eol() {
            if let Some(span) = self.token(&mut stream, state) {
                spans.push(span);
            }
        }
        trace!(len = line.len(), spans = spans.len(), depth = state.depth(), "line");
        spans
    }

    /// Indentation for a line whose text (after any leading whitespace) is
    /// `text_after`, given the state at the end of the previous line.
    pub fn indent(&self, state: &LineState, text_after: &str) -> Indent {
        indent::indent(&self.arena, &self.config, state, text_after)
    }

    /// Whether a `/` at the stream's position would start a regex.
    #[allow(
        clippy::unused_self,
        reason = "hosts query this through the mode like every other hook"
    )]
    pub fn expression_allowed(&self, stream: &LineStream<'_>, state: &LineState) -> bool {
        Scanner::expression_allowed(stream, &state.scan, 0)
    }

    /// Advance the parser past one expression the host rendered itself.
    pub fn skip_expression(&mut self, state: &mut LineState) {
        let mut stream = LineStream::new("", self.config.tab_size);
        parser::parse(
            &mut self.arena,
            &self.config,
            state,
            &mut stream,
            Some(Style::Atom),
            TokenKind::Atom,
            "true",
        );
    }

    /// Whether typing the last character of `line` should trigger
    /// re-indentation.
    pub fn electric_input(line: &str) -> bool {
        let text = line.trim_start();
        matches!(text, "{" | "}" | "default:")
            || text
                .strip_prefix("case ")
                .is_some_and(|label| label.ends_with(':'))
    }

    pub fn info(&self) -> ModeInfo {
        let json = self.config.dialect.json_mode();
        let code = |s: &'static str| if json { None } else { Some(s) };
        ModeInfo {
            block_comment_start: code("/*"),
            block_comment_end: code("*/"),
            block_comment_continue: code(" * "),
            line_comment: code("//"),
            fold: "brace",
            close_brackets: CLOSE_BRACKETS,
            helper_type: if json { "json" } else { "javascript" },
            json,
            jsonld: self.config.dialect.jsonld(),
        }
    }

    /// Zero-based index of the argument being written in the innermost
    /// open call, if the state is inside one.
    pub fn call_argument_index(&self, state: &LineState) -> Option<u32> {
        let mut cursor: Option<FrameId> = Some(state.lexical);
        while let Some(id) = cursor {
            let frame = self.arena.frame(id);
            match (frame.info, frame.kind) {
                (FrameInfo::Call, _) => return Some(frame.args),
                (_, FrameKind::Brace | FrameKind::Block) => return None,
                _ => cursor = frame.prev,
            }
        }
        None
    }

    /// Top-level names declared so far, in declaration order. Empty unless
    /// global tracking is enabled.
    pub fn global_vars(&self, state: &LineState) -> Vec<String> {
        let mut names: Vec<String> = scope::names(&self.arena, state.global_vars)
            .map(|name| self.arena.resolve(name).to_owned())
            .collect();
        names.reverse();
        names
    }

    /// Whether `name` is bound in a local scope at this point.
    pub fn in_scope(&self, state: &LineState, name: &str) -> bool {
        self.arena.lookup_name(name).is_some_and(|name| {
            scope::in_scope(&self.arena, state.local_vars, state.context, name)
        })
    }

    /// Arena growth so far. States keep every node they reference alive,
    /// so long-running hosts rebuild the mode when this gets large.
    pub fn arena_stats(&self) -> ArenaStats {
        self.arena.stats()
    }
}
