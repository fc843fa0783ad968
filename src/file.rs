//! Loading the backing JSON file.
//!
//! A missing file is not an error at this level: [`read_document`] reports it
//! as `Ok(None)` so the store can tell "nothing persisted yet" apart from a
//! file that exists but cannot be used. Everything else (permissions, a
//! directory at the path, malformed JSON, a top-level value that is not an
//! object) comes back as a [`StoreError`].

use std::path::Path;

use serde_json::Value;

use crate::error::StoreError;
use crate::types::Document;

/// Read and parse the document at `path`.
pub fn read_document(path: &Path) -> Result<Option<Document>, StoreError> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(StoreError::IoError {
                path: path.to_path_buf(),
                source: e,
            });
        }
    };

    parse_document(&content, path).map(Some)
}

/// Parse document text. `path` is only used for error reporting.
pub fn parse_document(content: &str, path: &Path) -> Result<Document, StoreError> {
    let value: Value = serde_json::from_str(content).map_err(|e| StoreError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(StoreError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}
