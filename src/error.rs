//! Error types for the fallible edges: config, theme files, scaffolding,
//! and the terminal.
//!
//! The styling and animation core never fails; nothing in it returns
//! this type.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for strawberry-tui operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown component: {0} (expected one of: {1})")]
    UnknownComponent(String, String),

    #[error("Refusing to overwrite {0} (use --force)")]
    AlreadyExists(PathBuf),
}
