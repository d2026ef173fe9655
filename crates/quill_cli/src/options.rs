//! Command-line flags and per-file configuration.

use std::path::{Path, PathBuf};

use quill_mode::ModeConfig;

use crate::CliError;

/// Parsed flags and input files for one command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub files: Vec<PathBuf>,
    /// MIME type or mode name; guessed from each file's extension if unset.
    pub mime: Option<String>,
    pub indent_unit: Option<u32>,
    pub tab_size: Option<u32>,
    pub statement_indent: Option<u32>,
    pub no_double_indent_switch: bool,
}

impl Options {
    /// Parse everything after the command name.
    pub fn parse(args: &[String]) -> Result<Self, CliError> {
        let mut options = Options::default();
        for arg in args {
            if let Some(mime) = arg.strip_prefix("--mime=") {
                options.mime = Some(mime.to_owned());
            } else if let Some(n) = arg.strip_prefix("--indent-unit=") {
                options.indent_unit = Some(number("--indent-unit", n)?);
            } else if let Some(n) = arg.strip_prefix("--tab-size=") {
                options.tab_size = Some(number("--tab-size", n)?);
            } else if let Some(n) = arg.strip_prefix("--statement-indent=") {
                options.statement_indent = Some(number("--statement-indent", n)?);
            } else if arg == "--no-double-indent-switch" {
                options.no_double_indent_switch = true;
            } else if arg.starts_with('-') {
                return Err(CliError::UnknownFlag(arg.clone()));
            } else {
                options.files.push(PathBuf::from(arg));
            }
        }
        if options.files.is_empty() {
            return Err(CliError::NoInput);
        }
        Ok(options)
    }

    /// Mode configuration for `path`, with the flags applied.
    pub fn config_for(&self, path: &Path) -> Result<ModeConfig, CliError> {
        let mut config = match &self.mime {
            Some(mime) => ModeConfig::for_mime(mime).or_else(|err| {
                ModeConfig::for_name(mime).map_err(|_| CliError::Config(err))
            })?,
            None => ModeConfig::for_name(mode_for_extension(path))?,
        };
        if let Some(unit) = self.indent_unit {
            config = config.with_indent_unit(unit);
        }
        if let Some(tab_size) = self.tab_size {
            config = config.with_tab_size(tab_size);
        }
        if let Some(n) = self.statement_indent {
            config = config.with_statement_indent(n);
        }
        if self.no_double_indent_switch {
            config = config.with_double_indent_switch(false);
        }
        config.validate()?;
        Ok(config)
    }
}

fn number(flag: &'static str, value: &str) -> Result<u32, CliError> {
    value.parse().map_err(|_| CliError::BadValue {
        flag,
        value: value.to_owned(),
    })
}

/// Mode name for a file extension. Unknown extensions are treated as
/// JavaScript.
fn mode_for_extension(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    match ext.as_str() {
        "json" | "webmanifest" => "json",
        "jsonld" => "jsonld",
        "ts" | "mts" | "cts" => "typescript",
        _ => "javascript",
    }
}

#[cfg(test)]
mod tests;
