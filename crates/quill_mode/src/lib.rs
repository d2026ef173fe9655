//! Quill mode: incremental highlighting and indentation for the
//! ECMAScript family.
//!
//! The engine is fed one line at a time. For each line it takes the state
//! left by the previous line, returns a display style per lexeme, and
//! leaves a new state behind. It never builds a syntax tree and never looks
//! at other lines.
//!
//! # Pipeline
//!
//! ```text
//! line text ──► quill_lexer::Scanner ──► parser (continuation stack) ──► style
//!                                               │
//!                                               ▼
//!                                  LineState (lexical frames, scopes)
//!                                               │
//!                                               ▼
//!                                      indent oracle ──► column
//! ```
//!
//! Dialects (typed annotations, JSON, JSON-LD) are selected through
//! [`ModeConfig`], directly or by MIME type.

pub mod arena;
pub mod config;
pub mod cont;
mod fat_arrow;
mod indent;
pub mod lexical;
pub mod mime;
mod mode;
mod parser;
pub mod scope;
pub mod state;

pub use arena::ArenaStats;
pub use config::{ConfigError, Dialect, ModeConfig};
pub use indent::Indent;
pub use mode::{JsMode, ModeInfo, StyledSpan};
pub use state::LineState;

// States are cloned after every line; keep their building blocks small.
const _: () = assert!(std::mem::size_of::<cont::Cont>() <= 4);
const _: () = assert!(std::mem::size_of::<lexical::LexFrame>() <= 24);
