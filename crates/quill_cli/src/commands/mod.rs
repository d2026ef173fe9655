//! The `highlight`, `indent`, `check-indent` and `mimes` commands.
//!
//! Each command has a pure `*_source` function that works on one document
//! in memory and a `run_*` driver that reads files in parallel and prints
//! the results in argument order.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use quill_lexer::{LineStream, ScanMode, Style};
use quill_mode::mime::{MIME_TYPES, MODE_NAMES};
use quill_mode::{Indent, JsMode, LineState, ModeConfig};
use rayon::prelude::*;
use tracing::debug;

use crate::{CliError, Options};

/// Read a source file.
pub fn read_file(path: &Path) -> Result<String, CliError> {
    std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Run `render` over every input file in parallel. Results come back in
/// argument order.
fn for_each_file<T, F>(options: &Options, render: F) -> Result<Vec<(PathBuf, T)>, CliError>
where
    T: Send,
    F: Fn(ModeConfig, &str) -> T + Sync,
{
    options
        .files
        .par_iter()
        .map(|path| {
            let config = options.config_for(path)?;
            let source = read_file(path)?;
            debug!(path = %path.display(), bytes = source.len(), "processing");
            Ok((path.clone(), render(config, &source)))
        })
        .collect()
}

/// Print per-file output, with a header when there is more than one file.
fn print_outputs(outputs: &[(PathBuf, String)]) {
    let headers = outputs.len() > 1;
    for (path, output) in outputs {
        if headers {
            println!("==> {} <==", path.display());
        }
        print!("{output}");
    }
}

// ─── highlight ──────────────────────────────────────────────────

/// One `line:col style text` row per lexeme. Positions are 1-based; the
/// column counts bytes. Unstyled punctuation prints as `-`.
pub fn highlight_source(config: ModeConfig, source: &str) -> String {
    let mut mode = JsMode::new(config);
    let mut state = mode.start_state(0);
    let mut out = String::new();
    for (number, line) in source.lines().enumerate() {
        for span in mode.highlight_line(line, &mut state) {
            let style = span.style.map_or("-", Style::as_str);
            let _ = writeln!(
                out,
                "{}:{} {style} {}",
                number + 1,
                span.start + 1,
                &line[span.start..span.end]
            );
        }
    }
    out
}

pub fn run_highlight(options: &Options) -> Result<(), CliError> {
    let outputs = for_each_file(options, highlight_source)?;
    print_outputs(&outputs);
    Ok(())
}

// ─── indent ─────────────────────────────────────────────────────

/// Suggested column for a line, or `None` when its leading whitespace
/// belongs to a comment, template or string and must stay as written.
fn suggested_column(mode: &JsMode, state: &LineState, text: &str) -> Option<u32> {
    if state.scan_mode() != ScanMode::Base {
        return None;
    }
    match mode.indent(state, text) {
        Indent::Column(column) => Some(column),
        Indent::Pass => None,
    }
}

/// Re-indent a document with spaces. Blank lines come out empty.
pub fn indent_source(config: ModeConfig, source: &str) -> String {
    let mut mode = JsMode::new(config);
    let mut state = mode.start_state(0);
    let mut out = String::with_capacity(source.len());
    for line in source.lines() {
        let text = line.trim_start();
        let fixed = match suggested_column(&mode, &state, text) {
            Some(_) if text.is_empty() => String::new(),
            Some(column) => format!("{:width$}{text}", "", width = column as usize),
            None => line.to_owned(),
        };
        mode.highlight_line(&fixed, &mut state);
        out.push_str(&fixed);
        out.push('\n');
    }
    if !source.ends_with('\n') {
        out.pop();
    }
    out
}

pub fn run_indent(options: &Options) -> Result<(), CliError> {
    let outputs = for_each_file(options, indent_source)?;
    print_outputs(&outputs);
    Ok(())
}

// ─── check-indent ───────────────────────────────────────────────

/// A line whose indentation differs from the suggestion.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Mismatch {
    /// 1-based line number.
    pub line: usize,
    pub expected: u32,
    pub found: u32,
}

/// Compare every non-blank line against the suggested indentation.
pub fn check_source(config: ModeConfig, source: &str) -> Vec<Mismatch> {
    let tab_size = config.tab_size;
    let mut mode = JsMode::new(config);
    let mut state = mode.start_state(0);
    let mut mismatches = Vec::new();
    for (number, line) in source.lines().enumerate() {
        let text = line.trim_start();
        if !text.is_empty() {
            if let Some(expected) = suggested_column(&mode, &state, text) {
                let found = LineStream::new(line, tab_size).indentation();
                if found != expected {
                    mismatches.push(Mismatch {
                        line: number + 1,
                        expected,
                        found,
                    });
                }
            }
        }
        mode.highlight_line(line, &mut state);
    }
    mismatches
}

/// Report mismatches for every file. Returns how many were found.
pub fn run_check_indent(options: &Options) -> Result<usize, CliError> {
    let outputs = for_each_file(options, check_source)?;
    let mut total = 0;
    for (path, mismatches) in &outputs {
        for m in mismatches {
            println!(
                "{}:{}: expected indentation {}, found {}",
                path.display(),
                m.line,
                m.expected,
                m.found
            );
        }
        total += mismatches.len();
    }
    Ok(total)
}

// ─── mimes ──────────────────────────────────────────────────────

/// The MIME registry, one `type<TAB>mode` row each.
pub fn list_mimes() -> String {
    let mut out = String::new();
    for &(mime, dialect) in MIME_TYPES {
        let mode = MODE_NAMES
            .iter()
            .find(|&&(_, known)| known == dialect)
            .map_or("javascript", |&(name, _)| name);
        let _ = writeln!(out, "{mime}\t{mode}");
    }
    out
}

#[cfg(test)]
mod tests;
