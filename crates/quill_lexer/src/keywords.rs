//! Reserved-word and operator classification.
//!
//! Keyword lookup uses the word's length as a first-pass filter (reserved
//! words range from 2 to 10 characters) and then matches the specific words
//! of that length. Words outside the table are ordinary identifiers.

use crate::style::{Style, TokenKind};

/// Look up a reserved word.
///
/// Returns the grammatical kind and the style the scanner reports for it,
/// or `None` for an ordinary identifier.
pub fn lookup(word: &str) -> Option<(TokenKind, Style)> {
    use Style::{Atom as AtomStyle, Keyword};
    use TokenKind::{
        Atom, Case, Catch, Class, Debugger, Default, Export, For, Function, If, Import, KeywordA,
        KeywordB, KeywordC, KeywordD, New, Operator, Switch, This, Var,
    };

    let len = word.len();
    if !(2..=10).contains(&len) || !word.as_bytes()[0].is_ascii_alphabetic() {
        return None;
    }

    let kind = match len {
        2 => match word {
            "if" => If,
            "do" => KeywordB,
            "in" => return Some((Operator, Keyword)),
            _ => return None,
        },
        3 => match word {
            "for" => For,
            "new" => New,
            "try" => KeywordB,
            "var" | "let" => Var,
            "NaN" => return Some((Atom, AtomStyle)),
            _ => return None,
        },
        4 => match word {
            "else" => KeywordB,
            "with" => KeywordA,
            "void" => KeywordC,
            "case" => Case,
            "this" => This,
            "true" | "null" => return Some((Atom, AtomStyle)),
            _ => return None,
        },
        5 => match word {
            "while" => KeywordA,
            "break" => KeywordD,
            "throw" | "yield" | "await" => KeywordC,
            "const" => Var,
            "catch" => Catch,
            "class" => Class,
            "super" => Atom,
            "false" => return Some((Atom, AtomStyle)),
            _ => return None,
        },
        6 => match word {
            "return" => KeywordD,
            "delete" => KeywordC,
            "switch" => Switch,
            "export" => Export,
            "import" => Import,
            "typeof" => return Some((Operator, Keyword)),
            _ => return None,
        },
        7 => match word {
            "finally" => KeywordB,
            "default" => Default,
            "extends" => KeywordC,
            _ => return None,
        },
        8 => match word {
            "continue" => KeywordD,
            "debugger" => Debugger,
            "function" => Function,
            "Infinity" => return Some((Atom, AtomStyle)),
            _ => return None,
        },
        9 => match word {
            "undefined" => return Some((Atom, AtomStyle)),
            _ => return None,
        },
        10 => match word {
            "instanceof" => return Some((Operator, Keyword)),
            _ => return None,
        },
        _ => return None,
    };
    Some((kind, Keyword))
}

/// Characters that start an operator lexeme: `+-*&%=<>!?|~^@`.
#[inline]
pub fn is_operator_char(c: char) -> bool {
    matches!(
        c,
        '+' | '-' | '*' | '&' | '%' | '=' | '<' | '>' | '!' | '?' | '|' | '~' | '^' | '@'
    )
}

/// Linked-data keywords recognized as `"@name"` at the start of a string.
pub const JSONLD_KEYWORDS: &[&str] = &[
    "context",
    "id",
    "value",
    "language",
    "type",
    "container",
    "list",
    "set",
    "reverse",
    "index",
    "base",
    "vocab",
    "graph",
];

/// Length of a linked-data keyword at the start of `rest`, including the
/// leading `@` and the closing quote, or `None` if `rest` does not start
/// with one.
pub fn jsonld_keyword_len(rest: &str) -> Option<usize> {
    let body = rest.strip_prefix('@')?;
    JSONLD_KEYWORDS.iter().find_map(|kw| {
        body.strip_prefix(kw)
            .filter(|after| after.starts_with('"'))
            .map(|_| kw.len() + 2)
    })
}

#[cfg(test)]
mod tests;
