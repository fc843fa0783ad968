//! Config persistence: set values by dotted key and write the document back.
//!
//! Setting a key walks the document, creating empty objects for missing
//! intermediate segments. The document is mutated in place before anything
//! is written, and a failed write does not undo it. Writing serializes the
//! whole document with 2-space indentation and overwrites the target file.
//! Parent directories are not created.

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::StoreError;
use crate::types::Document;

/// Set `key` to `value` inside `doc`, creating intermediate objects as needed.
///
/// Fails with [`StoreError::NotAnObjectAt`] if an existing intermediate
/// segment holds a non-object value; the document is unchanged in that case.
pub fn set_in_document(doc: &mut Document, key: &str, value: Value) -> Result<(), StoreError> {
    let (path, leaf) = match key.rsplit_once('.') {
        Some((p, l)) => (Some(p), l),
        None => (None, key),
    };

    let mut current = doc;
    if let Some(path) = path {
        for segment in path.split('.') {
            let entry = current
                .entry(segment)
                .or_insert_with(|| Value::Object(Map::new()));
            current = match entry {
                Value::Object(map) => map,
                _ => {
                    return Err(StoreError::NotAnObjectAt {
                        key: key.into(),
                        segment: segment.into(),
                    });
                }
            };
        }
    }

    current.insert(leaf.to_string(), value);
    Ok(())
}

/// Serialize `doc` as pretty JSON (2-space indent).
pub fn render_document(doc: &Document) -> Result<String, StoreError> {
    serde_json::to_string_pretty(doc).map_err(StoreError::SerializeError)
}

/// Overwrite the file at `path` with the serialized document.
pub fn write_document(path: &Path, doc: &Document) -> Result<(), StoreError> {
    let content = render_document(doc)?;

    std::fs::write(path, content).map_err(|e| StoreError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Parse a raw string value into a JSON value with type heuristics.
///
/// `true`/`false` (any case) become booleans, then integers, then floats
/// (only when the text contains a `.`), then JSON object or array literals.
/// Anything else is kept as a string.
pub fn parse_raw_value(s: &str) -> Value {
    if s.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if let Ok(i) = s.parse::<i64>() {
        return Value::from(i);
    }
    if s.contains('.')
        && let Ok(f) = s.parse::<f64>()
        && f.is_finite()
    {
        return Value::from(f);
    }
    let trimmed = s.trim_start();
    if (trimmed.starts_with('{') || trimmed.starts_with('['))
        && let Ok(v) = serde_json::from_str::<Value>(s)
    {
        return v;
    }
    Value::String(s.to_string())
}
