use std::path::PathBuf;

use quill_mode::ConfigError;

/// Everything that can stop a command before it produces output.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("cannot read `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid value `{value}` for `{flag}`")]
    BadValue { flag: &'static str, value: String },
    #[error("unknown flag `{0}`")]
    UnknownFlag(String),
    #[error("no input files")]
    NoInput,
    #[error(transparent)]
    Config(#[from] ConfigError),
}
