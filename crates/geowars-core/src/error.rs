//! Error types for loading and validating game configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while reading the config file. All of them are fatal at
/// startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("config is missing the required `{0}` line")]
    MissingSection(&'static str),

    #[error("line {line}: `{section}` expects {expected} fields, found {found}")]
    FieldCount {
        section: &'static str,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: `{section}` field {field} has invalid value `{value}`")]
    InvalidValue {
        section: &'static str,
        field: &'static str,
        line: usize,
        value: String,
    },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;
