//! Hand-written scanner producing one classified lexeme per call.
//!
//! The scanner works line by line. Constructs that can span lines (block
//! comments, template literals, backslash-continued strings) record a
//! [`ScanMode`] in the [`ScanState`] so the next line resumes inside them.
//!
//! # Regex or division
//!
//! A `/` starts a regular expression only when the previous meaningful
//! token cannot end an expression (an operator, an opening bracket, a
//! keyword such as `return`, ...). The decision looks at
//! [`ScanState::last_kind`] alone; no parse is needed.
//!
//! # Failure policy
//!
//! Nothing is rejected. Characters the scanner cannot classify come back as
//! one-character [`TokenKind::Error`] tokens, so every call makes progress.

use crate::keywords::{is_operator_char, jsonld_keyword_len, lookup};
use crate::stream::LineStream;
use crate::style::{Style, Token, TokenKind};

/// Which sub-tokenizer the next lexeme starts in.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum ScanMode {
    #[default]
    Base,
    /// Inside a string opened with the given quote; only survives a line
    /// break when the line ended with a backslash.
    String(char),
    BlockComment,
    /// Inside a template literal, outside any `${...}`.
    Quasi,
}

/// Scanner state carried from token to token and from line to line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct ScanState {
    pub mode: ScanMode,
    /// Kind of the last non-comment token.
    pub last_kind: TokenKind,
}

impl Default for ScanState {
    fn default() -> Self {
        ScanState {
            mode: ScanMode::Base,
            last_kind: TokenKind::Sof,
        }
    }
}

/// Character class for identifier characters.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum WordChars {
    /// `[A-Za-z0-9_$]` plus everything from U+00A1 through U+FFFF.
    #[default]
    Unicode,
    /// `[A-Za-z0-9_$]` only.
    Ascii,
}

impl WordChars {
    #[inline]
    pub fn contains(self, c: char) -> bool {
        if c.is_ascii_alphanumeric() || c == '_' || c == '$' {
            return true;
        }
        match self {
            WordChars::Unicode => ('\u{a1}'..='\u{ffff}').contains(&c),
            WordChars::Ascii => false,
        }
    }
}

/// `\w` in the regular-expression sense: ASCII letters, digits, underscore.
#[inline]
fn is_ascii_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[inline]
fn is_digit_or_sep(c: char) -> bool {
    c.is_ascii_digit() || c == '_'
}

/// Per-dialect scanner configuration.
#[derive(Copy, Clone, Debug, Default)]
pub struct Scanner {
    word_chars: WordChars,
    jsonld: bool,
}

impl Scanner {
    pub fn new(word_chars: WordChars, jsonld: bool) -> Self {
        Scanner { word_chars, jsonld }
    }

    /// The identifier character class in use.
    #[inline]
    pub fn word_chars(&self) -> WordChars {
        self.word_chars
    }

    /// Scan one lexeme starting at the stream's current position.
    ///
    /// The caller marks the lexeme start (`begin_token`) and skips leading
    /// whitespace outside block comments. `in_type_args` reports that the
    /// innermost open bracket is a type-argument `<`, in which case `>` is
    /// never merged into `>>` or `>=`.
    pub fn next_token<'a>(
        &self,
        stream: &mut LineStream<'a>,
        state: &mut ScanState,
        in_type_args: bool,
    ) -> Token<'a> {
        match state.mode {
            ScanMode::Base => self.base(stream, state, in_type_args),
            ScanMode::String(quote) => self.string(stream, state, quote),
            ScanMode::BlockComment => block_comment(stream, state),
            ScanMode::Quasi => quasi(stream, state),
        }
    }

    /// Whether a `/` at the current position would start a regex.
    ///
    /// `back` is the number of bytes already consumed from the lexeme (1 when
    /// called right after reading the slash).
    pub fn expression_allowed(stream: &LineStream<'_>, state: &ScanState, back: usize) -> bool {
        (state.mode == ScanMode::Base && state.last_kind.allows_expression_after())
            || (state.last_kind == TokenKind::Quasi
                && stream.line()[..stream.pos().saturating_sub(back)]
                    .trim_end()
                    .ends_with('{'))
    }

    fn base<'a>(
        &self,
        stream: &mut LineStream<'a>,
        state: &mut ScanState,
        in_type_args: bool,
    ) -> Token<'a> {
        let Some(ch) = stream.next() else {
            return Token::new(TokenKind::Error, None, "");
        };

        if ch == '"' || ch == '\'' {
            state.mode = ScanMode::String(ch);
            return self.string(stream, state, ch);
        }
        if ch == '.' && eat_fraction_number(stream) {
            return number(stream);
        }
        if ch == '.' && stream.match_str("..", true) {
            return Token::new(TokenKind::Spread, Some(Style::Meta), stream.current());
        }
        if let Some(kind) = TokenKind::punct(ch) {
            return Token::new(kind, None, stream.current());
        }
        if ch == '=' && stream.eat('>') {
            return Token::new(TokenKind::Arrow, Some(Style::Operator), stream.current());
        }
        if ch == '0' && eat_radix_number(stream) {
            return number(stream);
        }
        if ch.is_ascii_digit() {
            eat_decimal_tail(stream);
            return number(stream);
        }
        if ch == '/' {
            return slash(stream, state);
        }
        if ch == '`' {
            state.mode = ScanMode::Quasi;
            return quasi(stream, state);
        }
        if ch == '#' && stream.peek() == Some('!') {
            stream.skip_to_end();
            return Token::new(TokenKind::Meta, Some(Style::Meta), stream.current());
        }
        if ch == '#' && stream.eat_while(|c| self.word_chars.contains(c)) {
            return Token::new(TokenKind::Variable, Some(Style::Property), stream.current());
        }
        if (ch == '<' && stream.match_str("!--", true))
            || (ch == '-'
                && stream.line()[..stream.start()].trim().is_empty()
                && stream.match_str("->", true))
        {
            stream.skip_to_end();
            return Token::new(TokenKind::Comment, Some(Style::Comment), stream.current());
        }
        if is_operator_char(ch) {
            return operator(stream, ch, in_type_args);
        }
        if self.word_chars.contains(ch) {
            return self.word(stream, state);
        }
        Token::new(TokenKind::Error, Some(Style::Error), stream.current())
    }

    fn word<'a>(&self, stream: &mut LineStream<'a>, state: &ScanState) -> Token<'a> {
        stream.eat_while(|c| self.word_chars.contains(c));
        let text = stream.current();
        // Keywords after `.` are property names.
        if state.last_kind != TokenKind::Dot {
            if let Some((kind, style)) = lookup(text) {
                return Token::new(kind, Some(style), text);
            }
            if text == "async" && async_modifies_next(stream.rest()) {
                return Token::new(TokenKind::Async, Some(Style::Keyword), text);
            }
        }
        Token::new(TokenKind::Variable, Some(Style::Variable), text)
    }

    fn string<'a>(
        &self,
        stream: &mut LineStream<'a>,
        state: &mut ScanState,
        quote: char,
    ) -> Token<'a> {
        if self.jsonld && stream.peek() == Some('@') {
            if let Some(len) = jsonld_keyword_len(stream.rest()) {
                let keyword = &stream.rest()[..len];
                stream.match_str(keyword, true);
                state.mode = ScanMode::Base;
                return Token::new(TokenKind::JsonldKeyword, Some(Style::Meta), stream.current());
            }
        }
        let mut escaped = false;
        while let Some(next) = stream.next() {
            if next == quote && !escaped {
                break;
            }
            escaped = !escaped && next == '\\';
        }
        if !escaped {
            state.mode = ScanMode::Base;
        }
        Token::new(TokenKind::String, Some(Style::String), stream.current())
    }
}

fn number<'a>(stream: &LineStream<'a>) -> Token<'a> {
    Token::new(TokenKind::Number, Some(Style::Number), stream.current())
}

/// `[eE][+-]?[\d_]+`, all or nothing.
fn eat_exponent(stream: &mut LineStream<'_>) -> bool {
    let saved = *stream;
    if stream.eat_if(|c| c == 'e' || c == 'E').is_none() {
        return false;
    }
    stream.eat_if(|c| c == '+' || c == '-');
    if stream.eat_while(is_digit_or_sep) {
        true
    } else {
        *stream = saved;
        false
    }
}

/// After a leading `.`: `\d[\d_]*` with optional exponent.
fn eat_fraction_number(stream: &mut LineStream<'_>) -> bool {
    if stream.eat_if(|c| c.is_ascii_digit()).is_none() {
        return false;
    }
    stream.eat_while(is_digit_or_sep);
    eat_exponent(stream);
    true
}

/// After a leading `0`: `x[\dA-Fa-f_]+`, `o[0-7_]+` or `b[01_]+`, then an
/// optional bigint `n`.
fn eat_radix_number(stream: &mut LineStream<'_>) -> bool {
    fn hex(c: char) -> bool {
        c.is_ascii_hexdigit() || c == '_'
    }
    fn octal(c: char) -> bool {
        matches!(c, '0'..='7' | '_')
    }
    fn binary(c: char) -> bool {
        matches!(c, '0' | '1' | '_')
    }

    let digit: fn(char) -> bool = match stream.peek() {
        Some('x') => hex,
        Some('o') => octal,
        Some('b') => binary,
        _ => return false,
    };
    let saved = *stream;
    stream.next();
    if !stream.eat_while(digit) {
        *stream = saved;
        return false;
    }
    stream.eat('n');
    true
}

/// After the first decimal digit: more digits, then a bigint `n` or an
/// optional fraction and exponent.
fn eat_decimal_tail(stream: &mut LineStream<'_>) {
    stream.eat_while(is_digit_or_sep);
    if stream.eat('n') {
        return;
    }
    if stream.eat('.') {
        stream.eat_while(is_digit_or_sep);
    }
    eat_exponent(stream);
}

fn slash<'a>(stream: &mut LineStream<'a>, state: &mut ScanState) -> Token<'a> {
    if stream.eat('*') {
        state.mode = ScanMode::BlockComment;
        return block_comment(stream, state);
    }
    if stream.eat('/') {
        stream.skip_to_end();
        return Token::new(TokenKind::Comment, Some(Style::Comment), stream.current());
    }
    if Scanner::expression_allowed(stream, state, 1) {
        eat_regexp_body(stream);
        eat_regexp_flags(stream);
        return Token::new(TokenKind::Regexp, Some(Style::String2), stream.current());
    }
    stream.eat('=');
    Token::new(TokenKind::Operator, Some(Style::Operator), stream.current())
}

/// Consume a regex body up to and including the closing `/`. A `/` inside a
/// character class or after a backslash does not close it.
fn eat_regexp_body(stream: &mut LineStream<'_>) {
    let mut escaped = false;
    let mut in_class = false;
    while let Some(next) = stream.next() {
        if !escaped {
            if next == '/' && !in_class {
                return;
            }
            if next == '[' {
                in_class = true;
            } else if in_class && next == ']' {
                in_class = false;
            }
        }
        escaped = !escaped && next == '\\';
    }
}

/// Consume a run of distinct flags from `gimyus`, but only when the run is
/// not immediately followed by another word character.
fn eat_regexp_flags(stream: &mut LineStream<'_>) {
    let rest = stream.rest();
    let run_len = rest
        .find(|c: char| !"gimyus".contains(c))
        .unwrap_or(rest.len());
    if run_len == 0 {
        return;
    }
    let run = &rest[..run_len];
    let distinct = run
        .char_indices()
        .all(|(i, c)| !run[i + c.len_utf8()..].contains(c));
    let bounded = !rest[run_len..].starts_with(is_ascii_word);
    if distinct && bounded {
        stream.match_str(run, true);
    }
}

fn operator<'a>(stream: &mut LineStream<'a>, ch: char, in_type_args: bool) -> Token<'a> {
    if !(ch == '>' && in_type_args) {
        if stream.eat('=') {
            if ch == '!' || ch == '=' {
                stream.eat('=');
            }
        } else if "<>*+-|&?".contains(ch) {
            stream.eat(ch);
            if ch == '>' {
                stream.eat(ch);
            }
        }
    }
    if ch == '?' && stream.eat('.') {
        return Token::new(TokenKind::Dot, None, stream.current());
    }
    Token::new(TokenKind::Operator, Some(Style::Operator), stream.current())
}

fn block_comment<'a>(stream: &mut LineStream<'a>, state: &mut ScanState) -> Token<'a> {
    let mut maybe_end = false;
    while let Some(ch) = stream.next() {
        if ch == '/' && maybe_end {
            state.mode = ScanMode::Base;
            break;
        }
        maybe_end = ch == '*';
    }
    Token::new(TokenKind::Comment, Some(Style::Comment), stream.current())
}

/// A template fragment: up to the closing backtick or an opening `${`.
fn quasi<'a>(stream: &mut LineStream<'a>, state: &mut ScanState) -> Token<'a> {
    let mut escaped = false;
    while let Some(next) = stream.next() {
        if !escaped && (next == '`' || (next == '$' && stream.eat('{'))) {
            state.mode = ScanMode::Base;
            break;
        }
        escaped = !escaped && next == '\\';
    }
    Token::new(TokenKind::Quasi, Some(Style::String2), stream.current())
}

/// `async` is a modifier when the next thing on the line, past whitespace
/// and block comments, is `[`, `(` or a word character.
fn async_modifies_next(mut rest: &str) -> bool {
    loop {
        rest = rest.trim_start();
        if let Some(comment) = rest.strip_prefix("/*") {
            match comment.find("*/") {
                Some(end) => rest = &comment[end + 2..],
                None => return false,
            }
        } else {
            return rest.starts_with(|c: char| c == '[' || c == '(' || is_ascii_word(c));
        }
    }
}

#[cfg(test)]
mod tests;
