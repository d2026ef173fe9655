//! MIME type and mode-name registry.

use crate::config::Dialect;

/// Every MIME type the mode answers to, with the dialect it selects.
pub const MIME_TYPES: &[(&str, Dialect)] = &[
    ("text/javascript", Dialect::empty()),
    ("text/ecmascript", Dialect::empty()),
    ("application/javascript", Dialect::empty()),
    ("application/x-javascript", Dialect::empty()),
    ("application/ecmascript", Dialect::empty()),
    ("application/json", Dialect::JSON),
    ("application/x-json", Dialect::JSON),
    ("application/manifest+json", Dialect::JSON),
    ("application/ld+json", Dialect::JSONLD),
    ("text/typescript", Dialect::TYPESCRIPT),
    ("application/typescript", Dialect::TYPESCRIPT),
];

/// Mode names accepted in place of a MIME type.
pub const MODE_NAMES: &[(&str, Dialect)] = &[
    ("javascript", Dialect::empty()),
    ("json", Dialect::JSON),
    ("jsonld", Dialect::JSONLD),
    ("typescript", Dialect::TYPESCRIPT),
];

/// Dialect for a MIME type. Matching ignores ASCII case.
pub fn dialect_for_mime(mime_type: &str) -> Option<Dialect> {
    MIME_TYPES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(mime_type.trim()))
        .map(|&(_, dialect)| dialect)
}

pub fn dialect_for_name(name: &str) -> Option<Dialect> {
    MODE_NAMES
        .iter()
        .find(|(known, _)| *known == name)
        .map(|&(_, dialect)| dialect)
}

#[cfg(test)]
mod tests;
