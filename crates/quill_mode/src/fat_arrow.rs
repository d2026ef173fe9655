//! Arrow-function parameter detection.
//!
//! When a line (or an arrow body) contains `=>`, scan backwards from it to
//! find where the parameter list starts: either an opening parenthesis
//! balanced against the one just before the arrow, or the start of a bare
//! identifier. The parser then treats the token at that offset as arrow
//! parameters instead of an ordinary expression.

use quill_lexer::{LineStream, WordChars};

/// Locate the parameters of the first `=>` at or after the stream's
/// current lexeme start. Returns the byte offset the parameters start at.
pub(crate) fn find_fat_arrow(
    stream: &LineStream<'_>,
    word_chars: WordChars,
    typescript: bool,
) -> Option<usize> {
    let line = stream.line();
    let start = stream.start();
    let mut arrow = stream.find_from("=>", start)?;
    if typescript {
        if let Some(annotation) = return_annotation_start(&line[start..arrow]) {
            arrow = start + annotation;
        }
    }

    let chars: Vec<(usize, char)> = line[..arrow].char_indices().collect();
    let after = |i: usize| chars.get(i + 1).map_or(arrow, |&(off, _)| off);

    let mut depth = 0u32;
    let mut saw_params = false;
    let mut found = 0;
    let mut i = chars.len();
    while i > 0 {
        i -= 1;
        let (off, ch) = chars[i];
        match ch {
            '(' | '[' | '{' => {
                if depth == 0 {
                    found = after(i);
                    break;
                }
                depth -= 1;
                if depth == 0 {
                    saw_params |= ch == '(';
                    found = off;
                    break;
                }
            }
            ')' | ']' | '}' => depth += 1,
            c if word_chars.contains(c) => saw_params = true,
            '"' | '\'' | '/' | '`' => loop {
                // Skip back over the quoted span.
                if i == 0 {
                    return None;
                }
                if chars[i - 1].1 == ch && (i < 2 || chars[i - 2].1 != '\\') {
                    i -= 1;
                    break;
                }
                i -= 1;
            },
            _ if saw_params && depth == 0 => {
                found = after(i);
                break;
            }
            _ => {}
        }
    }

    (saw_params && depth == 0).then_some(found)
}

/// Byte offset of a trailing return-type annotation (`: T`, `: T<U>`,
/// `: T[]` or `: { ... }`) in the text between the lexeme and the arrow.
fn return_annotation_start(text: &str) -> Option<usize> {
    text.char_indices()
        .filter(|&(_, c)| c == ':')
        .map(|(i, _)| i)
        .find(|&i| is_annotation_tail(&text[i + 1..]))
}

fn is_annotation_tail(text: &str) -> bool {
    let text = text.trim_start();
    if let Some(body) = text.strip_prefix('{') {
        return body
            .find('}')
            .is_some_and(|close| body[close + 1..].trim().is_empty());
    }
    let word_len = text
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(text.len());
    if word_len == 0 {
        return false;
    }
    let rest = &text[word_len..];
    if rest.trim().is_empty() {
        return true;
    }
    if let Some(args) = rest.strip_prefix('<') {
        return args
            .find('>')
            .is_some_and(|close| args[close + 1..].trim().is_empty());
    }
    rest.strip_prefix("[]")
        .is_some_and(|tail| tail.trim().is_empty())
}

#[cfg(test)]
mod tests;
