//! Per-line parser state.

use quill_lexer::{ScanMode, ScanState, TokenKind};
use smallvec::SmallVec;

use crate::arena::{FrameId, ScopeId, VarId};
use crate::cont::Cont;

/// Continuation stack. Most lines keep it shallow.
pub type ContStack = SmallVec<[Cont; 16]>;

/// Everything the mode needs to resume at the start of a line.
///
/// The host snapshots this after each line (it is cheap to clone) and
/// feeds a snapshot back in to re-highlight from that point. Ids refer
/// into the owning [`JsMode`](crate::JsMode)'s arena and are only
/// meaningful with that mode.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LineState {
    pub(crate) scan: ScanState,
    /// Byte offset on the current line where arrow parameters start.
    pub(crate) fat_arrow_at: Option<usize>,
    pub(crate) cc: ContStack,
    pub(crate) lexical: FrameId,
    pub(crate) local_vars: Option<VarId>,
    pub(crate) context: Option<ScopeId>,
    pub(crate) global_vars: Option<VarId>,
    /// Indentation of the current line.
    pub(crate) indented: u32,
}

impl LineState {
    /// Sub-tokenizer the next line starts in.
    #[inline]
    pub fn scan_mode(&self) -> ScanMode {
        self.scan.mode
    }

    /// Kind of the last non-comment token.
    #[inline]
    pub fn last_kind(&self) -> TokenKind {
        self.scan.last_kind
    }

    /// Number of pending continuations.
    #[inline]
    pub fn depth(&self) -> usize {
        self.cc.len()
    }

    #[inline]
    pub fn lexical(&self) -> FrameId {
        self.lexical
    }

    #[inline]
    pub fn indented(&self) -> u32 {
        self.indented
    }
}
