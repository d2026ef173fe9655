//! Lexical context frames.
//!
//! Each open bracket or statement form pushes a [`LexFrame`] recording the
//! indentation in force and the column where it opened. The frames form a
//! chain through `prev`; the indentation oracle walks that chain.

use quill_lexer::TokenKind;

use crate::arena::FrameId;

/// What opened a lexical frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// The document root.
    Block,
    /// An ordinary statement.
    Stat,
    /// A compound statement head (`if`, `while`, `class`, ...).
    Form,
    /// A declaration list.
    Vardef,
    /// `(`
    Paren,
    /// `[`
    Bracket,
    /// `{`
    Brace,
    /// Type-argument `<`.
    Angle,
}

impl FrameKind {
    /// Character that closes this frame, for bracket frames.
    pub fn close_char(self) -> Option<char> {
        match self {
            FrameKind::Paren => Some(')'),
            FrameKind::Bracket => Some(']'),
            FrameKind::Brace => Some('}'),
            FrameKind::Angle => Some('>'),
            FrameKind::Block | FrameKind::Stat | FrameKind::Form | FrameKind::Vardef => None,
        }
    }
}

/// Declaration keyword of a `Vardef` frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum VarKeyword {
    Var,
    Let,
    Const,
}

impl VarKeyword {
    pub fn from_text(text: &str) -> Self {
        match text {
            "let" => VarKeyword::Let,
            "const" => VarKeyword::Const,
            _ => VarKeyword::Var,
        }
    }

    /// Length of the keyword; continuation lines of a declaration list
    /// align one column past it.
    pub fn width(self) -> u32 {
        match self {
            VarKeyword::Var | VarKeyword::Let => 3,
            VarKeyword::Const => 5,
        }
    }
}

/// Extra tag on a lexical frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum FrameInfo {
    #[default]
    None,
    Vardef(VarKeyword),
    Class,
    Interface,
    Else,
    Switch,
    /// Argument list of a call; `LexFrame::args` counts commas seen.
    Call,
}

/// One entry in the lexical context chain.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LexFrame {
    /// Base indentation of the construct. Signed: the root frame sits one
    /// unit left of the base indent.
    pub indented: i32,
    /// Column of the token that opened the frame.
    pub column: u32,
    pub kind: FrameKind,
    /// `Some(true)` when the first token after the opener shared its line;
    /// `Some(false)` once a line break was seen first; `None` until then.
    pub align: Option<bool>,
    pub prev: Option<FrameId>,
    pub info: FrameInfo,
    pub args: u32,
}

/// Bracket that ends a comma-separated list.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Closer {
    Paren,
    Bracket,
    Brace,
    Angle,
}

impl Closer {
    pub fn frame_kind(self) -> FrameKind {
        match self {
            Closer::Paren => FrameKind::Paren,
            Closer::Bracket => FrameKind::Bracket,
            Closer::Brace => FrameKind::Brace,
            Closer::Angle => FrameKind::Angle,
        }
    }

    /// Whether a token closes the list. The angle closer is an operator
    /// token, so it is matched by text.
    pub fn closes(self, kind: TokenKind, text: &str) -> bool {
        match self {
            Closer::Paren => kind == TokenKind::RParen,
            Closer::Bracket => kind == TokenKind::RBracket,
            Closer::Brace => kind == TokenKind::RBrace,
            Closer::Angle => text == ">",
        }
    }
}
