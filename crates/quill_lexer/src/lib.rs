//! Quill lexer: line-oriented scanning for the ECMAScript family.
//!
//! This crate turns one line of text at a time into classified lexemes.
//! It is standalone so that hosts needing only token styles can use it
//! without the parser.
//!
//! # Modules
//!
//! - [`stream`]: forward-only cursor over a line
//! - [`style`]: token kinds and the renderer's style vocabulary
//! - [`keywords`]: reserved-word and operator tables
//! - [`scanner`]: the sub-tokenizers and the regex/division decision

pub mod keywords;
pub mod scanner;
pub mod stream;
pub mod style;

pub use scanner::{ScanMode, ScanState, Scanner, WordChars};
pub use stream::{count_column, LineStream};
pub use style::{Style, Token, TokenKind};
