#![allow(clippy::unwrap_used)]

use std::path::Path;

use pretty_assertions::assert_eq;
use quill_mode::{ConfigError, Dialect};

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|&s| s.to_owned()).collect()
}

#[test]
fn flags_and_files() {
    let options = Options::parse(&args(&[
        "--indent-unit=2",
        "a.js",
        "--tab-size=8",
        "--statement-indent=6",
        "--no-double-indent-switch",
        "--mime=text/typescript",
        "b.js",
    ]))
    .unwrap();
    assert_eq!(
        options,
        Options {
            files: vec![PathBuf::from("a.js"), PathBuf::from("b.js")],
            mime: Some("text/typescript".to_owned()),
            indent_unit: Some(2),
            tab_size: Some(8),
            statement_indent: Some(6),
            no_double_indent_switch: true,
        }
    );
}

#[test]
fn rejected_arguments() {
    assert!(matches!(Options::parse(&[]), Err(CliError::NoInput)));
    assert!(matches!(
        Options::parse(&args(&["--verbose", "a.js"])),
        Err(CliError::UnknownFlag(flag)) if flag == "--verbose"
    ));
    assert!(matches!(
        Options::parse(&args(&["--indent-unit=two", "a.js"])),
        Err(CliError::BadValue { flag: "--indent-unit", value }) if value == "two"
    ));
}

#[test]
fn dialect_follows_the_extension() {
    let options = Options::parse(&args(&["x"])).unwrap();
    let dialect = |name: &str| options.config_for(Path::new(name)).unwrap().dialect;
    assert_eq!(dialect("app.js"), Dialect::empty());
    assert_eq!(dialect("app.mjs"), Dialect::empty());
    assert_eq!(dialect("app.ts"), Dialect::TYPESCRIPT);
    assert_eq!(dialect("package.JSON"), Dialect::JSON);
    assert_eq!(dialect("data.jsonld"), Dialect::JSONLD);
    assert_eq!(dialect("Makefile"), Dialect::empty());
}

#[test]
fn mime_flag_accepts_types_and_names() {
    let config = |mime: &str| {
        let options = Options::parse(&args(&[&format!("--mime={mime}"), "a.js"])).unwrap();
        options.config_for(Path::new("a.js"))
    };
    assert_eq!(config("application/ld+json").unwrap().dialect, Dialect::JSONLD);
    assert_eq!(config("typescript").unwrap().dialect, Dialect::TYPESCRIPT);
    assert!(matches!(
        config("text/nope"),
        Err(CliError::Config(ConfigError::UnknownMime(mime))) if mime == "text/nope"
    ));
}

#[test]
fn flags_reach_the_config() {
    let options = Options::parse(&args(&[
        "--indent-unit=2",
        "--statement-indent=6",
        "--no-double-indent-switch",
        "a.js",
    ]))
    .unwrap();
    let config = options.config_for(Path::new("a.js")).unwrap();
    assert_eq!(config.indent_unit, 2);
    assert_eq!(config.statement_indent, Some(6));
    assert!(!config.double_indent_switch);
}

#[test]
fn zero_indent_unit_is_rejected() {
    let options = Options::parse(&args(&["--indent-unit=0", "a.js"])).unwrap();
    assert!(matches!(
        options.config_for(Path::new("a.js")),
        Err(CliError::Config(ConfigError::ZeroIndentUnit))
    ));
}
