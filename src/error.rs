use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Config document in {path} is not a JSON object")]
    NotAnObject { path: PathBuf },

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[source] serde_json::Error),

    #[error("Failed to write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Key not found: {0}")]
    KeyNotFound(String),

    #[error("Cannot set '{key}': '{segment}' holds a value that is not an object")]
    NotAnObjectAt { key: String, segment: String },
}
