//! Mode configuration.
//!
//! A [`ModeConfig`] is fixed when a [`JsMode`](crate::JsMode) is built and
//! never changes afterwards. Dialects are selected either directly through
//! [`Dialect`] flags or by MIME type / mode name (see [`crate::mime`]).

use bitflags::bitflags;
use quill_lexer::WordChars;
use rustc_hash::FxHashSet;

use crate::mime;

/// Default indentation unit in columns.
pub const DEFAULT_INDENT_UNIT: u32 = 4;

/// Default tab width in columns.
pub const DEFAULT_TAB_SIZE: u32 = 4;

bitflags! {
    /// Language dialect switches.
    ///
    /// `JSONLD` implies JSON parsing; check [`Dialect::json_mode`] rather
    /// than the `JSON` bit alone.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Dialect: u8 {
        /// Type annotations, interfaces, enums, generics.
        const TYPESCRIPT = 1 << 0;
        /// The document is a single expression.
        const JSON = 1 << 1;
        /// JSON plus linked-data `"@keyword"` keys.
        const JSONLD = 1 << 2;
    }
}

impl Dialect {
    #[inline]
    pub fn typescript(self) -> bool {
        self.contains(Dialect::TYPESCRIPT)
    }

    /// Expression-only parsing (JSON or JSON-LD).
    #[inline]
    pub fn json_mode(self) -> bool {
        self.intersects(Dialect::JSON | Dialect::JSONLD)
    }

    #[inline]
    pub fn jsonld(self) -> bool {
        self.contains(Dialect::JSONLD)
    }
}

/// Errors from building or validating a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown MIME type `{0}`")]
    UnknownMime(String),
    #[error("unknown mode name `{0}`")]
    UnknownName(String),
    #[error("indent unit must be at least one column")]
    ZeroIndentUnit,
}

/// Configuration for one editor mode instance.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModeConfig {
    /// Columns per indentation level.
    pub indent_unit: u32,
    /// Tab width used when measuring columns.
    pub tab_size: u32,
    /// Extra indentation for continued statements. `None` means one
    /// `indent_unit`.
    pub statement_indent: Option<u32>,
    pub dialect: Dialect,
    /// Indent `case` bodies one level deeper than the `case` labels.
    pub double_indent_switch: bool,
    /// Track declared names and style in-scope locals as `variable-2`.
    pub track_scope: bool,
    /// Record top-level declarations in the state's global list.
    pub track_globals: bool,
    /// Names pre-bound in a top-level local scope. When set, top-level
    /// declarations become locals too.
    pub local_vars: Option<Vec<String>>,
    /// Names the global list starts with, in declaration order. Only
    /// consulted when `track_globals` is on.
    pub global_vars: Vec<String>,
    /// Known globals, styled `builtin` when not shadowed by a local.
    pub builtins: FxHashSet<String>,
    pub word_chars: WordChars,
}

impl Default for ModeConfig {
    fn default() -> Self {
        Self {
            indent_unit: DEFAULT_INDENT_UNIT,
            tab_size: DEFAULT_TAB_SIZE,
            statement_indent: None,
            dialect: Dialect::empty(),
            double_indent_switch: true,
            track_scope: true,
            track_globals: false,
            local_vars: None,
            global_vars: Vec::new(),
            builtins: FxHashSet::default(),
            word_chars: WordChars::Unicode,
        }
    }
}

impl ModeConfig {
    /// Configuration for a registered MIME type.
    pub fn for_mime(mime_type: &str) -> Result<Self, ConfigError> {
        let dialect = mime::dialect_for_mime(mime_type)
            .ok_or_else(|| ConfigError::UnknownMime(mime_type.to_owned()))?;
        Ok(Self::default().with_dialect(dialect))
    }

    /// Configuration for a mode name (`javascript`, `json`, `jsonld`,
    /// `typescript`).
    pub fn for_name(name: &str) -> Result<Self, ConfigError> {
        let dialect = mime::dialect_for_name(name)
            .ok_or_else(|| ConfigError::UnknownName(name.to_owned()))?;
        Ok(Self::default().with_dialect(dialect))
    }

    #[must_use]
    pub fn with_indent_unit(mut self, indent_unit: u32) -> Self {
        self.indent_unit = indent_unit;
        self
    }

    #[must_use]
    pub fn with_tab_size(mut self, tab_size: u32) -> Self {
        self.tab_size = tab_size;
        self
    }

    #[must_use]
    pub fn with_statement_indent(mut self, statement_indent: u32) -> Self {
        self.statement_indent = Some(statement_indent);
        self
    }

    #[must_use]
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    #[must_use]
    pub fn with_double_indent_switch(mut self, enabled: bool) -> Self {
        self.double_indent_switch = enabled;
        self
    }

    #[must_use]
    pub fn with_track_scope(mut self, enabled: bool) -> Self {
        self.track_scope = enabled;
        self
    }

    #[must_use]
    pub fn with_track_globals(mut self, enabled: bool) -> Self {
        self.track_globals = enabled;
        self
    }

    #[must_use]
    pub fn with_local_vars<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.local_vars = Some(names.into_iter().map(Into::into).collect());
        self
    }

    #[must_use]
    pub fn with_global_vars<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.global_vars = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_builtins<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.builtins = names.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_word_chars(mut self, word_chars: WordChars) -> Self {
        self.word_chars = word_chars;
        self
    }

    /// Check invariants the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.indent_unit == 0 {
            return Err(ConfigError::ZeroIndentUnit);
        }
        Ok(())
    }

    /// Statement continuation indent, falling back to one unit. Zero counts
    /// as unset.
    #[inline]
    pub(crate) fn continuation_indent(&self) -> u32 {
        self.statement_indent
            .filter(|&n| n > 0)
            .unwrap_or(self.indent_unit)
    }
}
