#![forbid(unsafe_code)]

use std::path::PathBuf;

use thiserror::Error;

/// Creation-time validation failures, returned from `TaskStore::add` so the
/// presentation layer decides how to display them. A rejected creation
/// leaves no partial state behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("task description is required")]
    EmptyDescription,

    #[error("{field} date is required")]
    MissingDate { field: &'static str },

    #[error("invalid {field} date '{value}' (expected YYYY-MM-DD)")]
    InvalidDate { field: &'static str, value: String },

    #[error("start date {start} is after end date {end}")]
    InvertedRange { start: String, end: String },
}

#[derive(Debug, Error)]
pub enum TasktuiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("config error: {0}")]
    Config(String),

    #[error("invalid config key '{0}'")]
    InvalidConfigKey(String),

    #[error("invalid config value for '{key}': {msg}")]
    InvalidConfigValue { key: String, msg: String },

    #[error("operation cancelled")]
    Cancelled,

    #[error("io error at {path}: {source}")]
    IoPath {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}")]
    Other(String),
}
