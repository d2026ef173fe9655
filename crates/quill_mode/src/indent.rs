//! Indentation oracle.
//!
//! Computes the column for a line from the state left by the previous one,
//! without running the parser. The lexical chain is unwound the way the
//! parser would unwind it if the line's first token were actually fed in.

use quill_lexer::keywords::is_operator_char;
use quill_lexer::{ScanMode, TokenKind};
use tracing::trace;

use crate::arena::{Arena, FrameId};
use crate::config::ModeConfig;
use crate::cont::Cont;
use crate::lexical::{FrameInfo, FrameKind, LexFrame};
use crate::state::LineState;

/// Answer of the indentation oracle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Indent {
    /// Indent the line to this column.
    Column(u32),
    /// No opinion; the host keeps its own indentation (inside block
    /// comments and template literals).
    Pass,
}

/// Does `text` start with `word` as a whole word?
fn starts_with_word(text: &str, word: &str) -> bool {
    text.strip_prefix(word)
        .is_some_and(|tail| !tail.starts_with(|c: char| c.is_ascii_alphanumeric() || c == '_'))
}

/// A line that continues the previous statement: the statement ended on an
/// operator or comma, or this line starts with one.
fn is_continued_statement(state: &LineState, first: Option<char>) -> bool {
    matches!(state.scan.last_kind, TokenKind::Operator | TokenKind::Comma)
        || first.is_some_and(|c| is_operator_char(c) || c == ',' || c == '.')
}

pub(crate) fn indent(
    arena: &Arena,
    config: &ModeConfig,
    state: &LineState,
    text_after: &str,
) -> Indent {
    match state.scan.mode {
        ScanMode::BlockComment | ScanMode::Quasi => return Indent::Pass,
        ScanMode::String(_) => return Indent::Column(0),
        ScanMode::Base => {}
    }

    let text = text_after.trim_start();
    let first = text.chars().next();
    let mut id = state.lexical;
    let prev_of = |id: FrameId| arena.frame(id).prev.unwrap_or(id);

    // Pending pops would run before the line's first token is consumed.
    // `else` keeps them: it attaches to the `if` still open.
    if !starts_with_word(text, "else") {
        for &cont in state.cc.iter().rev() {
            match cont {
                Cont::PopLex => id = prev_of(id),
                Cont::MaybeElse | Cont::PopContext => {}
                _ => break,
            }
        }
    }

    let operator_pending = state.cc.last().is_some_and(|c| c.is_maybe_operator())
        && !text.starts_with([',', '.', '=', '+', '-', '*', ':', '?', '[', '(']);
    loop {
        let frame = arena.frame(id);
        let unwinds = matches!(frame.kind, FrameKind::Stat | FrameKind::Form)
            && (first == Some('}') || operator_pending);
        match frame.prev {
            Some(prev) if unwinds => id = prev,
            _ => break,
        }
    }

    if config.statement_indent.is_some_and(|n| n > 0) {
        let frame = arena.frame(id);
        if let Some(prev) = frame.prev {
            if frame.kind == FrameKind::Paren && arena.frame(prev).kind == FrameKind::Stat {
                id = prev;
            }
        }
    }

    let frame = arena.frame(id);
    let column = column_for(config, state, frame, text, first);
    trace!(?id, kind = ?frame.kind, column, "indent");
    Indent::Column(u32::try_from(column.max(0)).unwrap_or(0))
}

fn column_for(
    config: &ModeConfig,
    state: &LineState,
    frame: &LexFrame,
    text: &str,
    first: Option<char>,
) -> i64 {
    let unit = i64::from(config.indent_unit);
    let indented = i64::from(frame.indented);
    let closing = first.is_some() && first == frame.kind.close_char();

    match frame.kind {
        FrameKind::Vardef => {
            let after_operator =
                matches!(state.scan.last_kind, TokenKind::Operator | TokenKind::Comma);
            let width = match frame.info {
                FrameInfo::Vardef(keyword) if after_operator => i64::from(keyword.width()) + 1,
                _ => 0,
            };
            indented + width
        }
        FrameKind::Form if first == Some('{') => indented,
        FrameKind::Form => indented + unit,
        FrameKind::Stat => {
            if is_continued_statement(state, first) {
                indented + i64::from(config.continuation_indent())
            } else {
                indented
            }
        }
        _ if frame.info == FrameInfo::Switch && !closing && config.double_indent_switch => {
            if starts_with_word(text, "case") || starts_with_word(text, "default") {
                indented + unit
            } else {
                indented + 2 * unit
            }
        }
        _ if frame.align == Some(true) => i64::from(frame.column) + i64::from(!closing),
        _ if closing => indented,
        _ => indented + unit,
    }
}
