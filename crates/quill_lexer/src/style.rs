//! Token kinds and the display-style vocabulary.
//!
//! [`TokenKind`] is the grammatical category the parser dispatches on.
//! [`Style`] is what the renderer sees; its spelling is a contract with the
//! theme layer and must not change.

use std::fmt;

/// Display style attached to a lexeme.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Style {
    Keyword,
    Atom,
    Variable,
    /// A variable bound in an enclosing local scope.
    Variable2,
    Property,
    Number,
    String,
    /// Regular expressions and template fragments.
    String2,
    Comment,
    Operator,
    Meta,
    /// Binding occurrence of a name.
    Def,
    Type,
    /// A caller-supplied known global.
    Builtin,
    Qualifier,
    /// Input the scanner could not classify.
    Error,
    /// Quoted object key.
    StringProperty,
    /// Numeric object key.
    NumberProperty,
}

impl Style {
    /// Renderer spelling of the style.
    pub const fn as_str(self) -> &'static str {
        match self {
            Style::Keyword => "keyword",
            Style::Atom => "atom",
            Style::Variable => "variable",
            Style::Variable2 => "variable-2",
            Style::Property => "property",
            Style::Number => "number",
            Style::String => "string",
            Style::String2 => "string-2",
            Style::Comment => "comment",
            Style::Operator => "operator",
            Style::Meta => "meta",
            Style::Def => "def",
            Style::Type => "type",
            Style::Builtin => "builtin",
            Style::Qualifier => "qualifier",
            Style::Error => "error",
            Style::StringProperty => "string property",
            Style::NumberProperty => "number property",
        }
    }

    /// The `<style> property` compound used for literal object keys.
    ///
    /// Only `string` and `number` have a compound form; every other style
    /// collapses to plain `property`.
    pub const fn with_property(self) -> Style {
        match self {
            Style::String => Style::StringProperty,
            Style::Number => Style::NumberProperty,
            _ => Style::Property,
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grammatical category of a lexeme.
///
/// Keyword groups share a kind when the grammar treats them alike:
/// `KeywordA` heads take a parenthesized condition (`while`, `with`),
/// `KeywordB` heads take a statement directly (`else`, `do`, `try`,
/// `finally`), `KeywordC` prefixes take an expression (`delete`, `void`,
/// `throw`, `yield`, `extends`, `await`), and `KeywordD` takes an optional
/// expression up to the end of the statement (`return`, `break`,
/// `continue`).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    KeywordA,
    KeywordB,
    KeywordC,
    KeywordD,
    If,
    New,
    Debugger,
    /// `var`, `let`, `const`.
    Var,
    Function,
    Catch,
    For,
    Switch,
    Case,
    Default,
    This,
    Class,
    Export,
    Import,
    /// `async` followed by something it can modify.
    Async,

    Atom,
    Variable,
    Number,
    String,
    Regexp,
    /// Template literal fragment.
    Quasi,
    Comment,
    Operator,
    /// `=>`
    Arrow,
    /// `...`
    Spread,
    Meta,
    /// `"@context"` and friends in linked-data documents.
    JsonldKeyword,

    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Semi,
    Colon,
    /// `.` and `?.`
    Dot,

    /// Unclassifiable character.
    Error,
    /// `++`/`--`; only ever recorded as the previous token kind.
    IncDec,
    /// Start of file; only ever recorded as the previous token kind.
    Sof,
}

impl TokenKind {
    /// Kind of a single-character punctuation lexeme.
    pub fn punct(ch: char) -> Option<TokenKind> {
        Some(match ch {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '[' => TokenKind::LBracket,
            ']' => TokenKind::RBracket,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semi,
            ':' => TokenKind::Colon,
            '.' => TokenKind::Dot,
            _ => return None,
        })
    }

    /// Closing brackets: `)`, `]`, `}`.
    #[inline]
    pub fn is_closing(self) -> bool {
        matches!(
            self,
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace
        )
    }

    /// Literal kinds that form a complete operand on their own.
    #[inline]
    pub fn is_atomic(self) -> bool {
        matches!(
            self,
            TokenKind::Atom
                | TokenKind::Number
                | TokenKind::Variable
                | TokenKind::String
                | TokenKind::Regexp
                | TokenKind::This
                | TokenKind::Import
                | TokenKind::JsonldKeyword
        )
    }

    /// Whether a `/` following a token of this kind starts a regular
    /// expression rather than a division.
    #[inline]
    pub fn allows_expression_after(self) -> bool {
        matches!(
            self,
            TokenKind::Operator
                | TokenKind::Sof
                | TokenKind::KeywordB
                | TokenKind::KeywordC
                | TokenKind::KeywordD
                | TokenKind::Case
                | TokenKind::New
                | TokenKind::Export
                | TokenKind::Default
                | TokenKind::Spread
                | TokenKind::LBracket
                | TokenKind::LBrace
                | TokenKind::RBrace
                | TokenKind::LParen
                | TokenKind::Comma
                | TokenKind::Semi
                | TokenKind::Colon
                | TokenKind::Arrow
        )
    }
}

/// A scanned lexeme.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// `None` for punctuation, which the renderer leaves unstyled.
    pub style: Option<Style>,
    pub text: &'a str,
}

impl<'a> Token<'a> {
    #[inline]
    pub const fn new(kind: TokenKind, style: Option<Style>, text: &'a str) -> Self {
        Token { kind, style, text }
    }
}

#[cfg(test)]
mod tests;
