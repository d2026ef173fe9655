//! Forward-only cursor over a single line of text.
//!
//! The editor hands the mode one line at a time. A [`LineStream`] tracks two
//! byte offsets into that line: `start`, where the lexeme currently being
//! scanned began, and `pos`, how far scanning has advanced. Everything the
//! scanner and the parser know about "the rest of the line" comes from here.
//!
//! Offsets are byte offsets into the line and always fall on UTF-8 character
//! boundaries. Columns are display columns: tabs expand to the next multiple
//! of the configured tab size, every other character counts as one.

/// Cursor over one line of source text.
#[derive(Clone, Copy, Debug)]
pub struct LineStream<'a> {
    line: &'a str,
    /// Start of the lexeme being scanned.
    start: usize,
    /// Current read position.
    pos: usize,
    tab_size: u32,
}

impl<'a> LineStream<'a> {
    /// Create a stream positioned at the start of `line`.
    ///
    /// `tab_size` of zero is treated as one so column arithmetic stays
    /// well-defined.
    pub fn new(line: &'a str, tab_size: u32) -> Self {
        Self {
            line,
            start: 0,
            pos: 0,
            tab_size: tab_size.max(1),
        }
    }

    /// The whole line this stream walks over.
    #[inline]
    pub fn line(&self) -> &'a str {
        self.line
    }

    /// Byte offset where the current lexeme began.
    #[inline]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Current byte offset.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Mark the current position as the start of the next lexeme.
    #[inline]
    pub fn begin_token(&mut self) {
        self.start = self.pos;
    }

    /// `true` at the very beginning of the line.
    #[inline]
    pub fn sol(&self) -> bool {
        self.pos == 0
    }

    /// `true` once the whole line has been consumed.
    #[inline]
    pub fn eol(&self) -> bool {
        self.pos >= self.line.len()
    }

    /// Next character without consuming it.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Consume and return the next character.
    #[inline]
    #[allow(
        clippy::should_implement_trait,
        reason = "mirrors the editor stream protocol; the stream is not an iterator"
    )]
    pub fn next(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += ch.len_utf8();
        Some(ch)
    }

    /// Consume the next character if it equals `ch`.
    #[inline]
    pub fn eat(&mut self, ch: char) -> bool {
        self.eat_if(|c| c == ch).is_some()
    }

    /// Consume the next character if it satisfies `pred`.
    #[inline]
    pub fn eat_if(&mut self, pred: impl Fn(char) -> bool) -> Option<char> {
        match self.peek() {
            Some(c) if pred(c) => {
                self.pos += c.len_utf8();
                Some(c)
            }
            _ => None,
        }
    }

    /// Consume characters while `pred` holds. Returns `true` if anything
    /// was consumed.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) -> bool {
        let begin = self.pos;
        while self.eat_if(&pred).is_some() {}
        self.pos > begin
    }

    /// Consume whitespace. Returns `true` if anything was consumed.
    pub fn eat_space(&mut self) -> bool {
        self.eat_while(char::is_whitespace)
    }

    /// Consume the rest of the line.
    #[inline]
    pub fn skip_to_end(&mut self) {
        self.pos = self.line.len();
    }

    /// Move back `n` bytes (never before the start of the line).
    pub fn back_up(&mut self, n: usize) {
        self.pos = self.pos.saturating_sub(n);
        debug_assert!(
            self.line.is_char_boundary(self.pos),
            "back_up landed inside a UTF-8 sequence"
        );
    }

    /// Text of the current lexeme (`start..pos`).
    #[inline]
    pub fn current(&self) -> &'a str {
        &self.line[self.start..self.pos]
    }

    /// Unconsumed remainder of the line.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.line[self.pos..]
    }

    /// `true` if the remainder starts with `prefix`; consumes it when
    /// `consume` is set and it matched.
    pub fn match_str(&mut self, prefix: &str, consume: bool) -> bool {
        if self.rest().starts_with(prefix) {
            if consume {
                self.pos += prefix.len();
            }
            true
        } else {
            false
        }
    }

    /// Byte offset of the first occurrence of `needle` at or after `from`.
    pub fn find_from(&self, needle: &str, from: usize) -> Option<usize> {
        let haystack = self.line.as_bytes().get(from..)?;
        memchr::memmem::find(haystack, needle.as_bytes()).map(|off| from + off)
    }

    /// Display column of the current lexeme's start.
    pub fn column(&self) -> u32 {
        count_column(&self.line[..self.start], self.tab_size)
    }

    /// Display width of the line's leading whitespace.
    pub fn indentation(&self) -> u32 {
        let end = self
            .line
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(self.line.len());
        count_column(&self.line[..end], self.tab_size)
    }

    /// Tab size used for column computations.
    #[inline]
    pub fn tab_size(&self) -> u32 {
        self.tab_size
    }
}

/// Display width of `text`, expanding tabs to multiples of `tab_size`.
pub fn count_column(text: &str, tab_size: u32) -> u32 {
    let tab_size = tab_size.max(1);
    text.chars().fold(0, |col, c| {
        if c == '\t' {
            col + tab_size - col % tab_size
        } else {
            col + 1
        }
    })
}

#[cfg(test)]
mod tests;
