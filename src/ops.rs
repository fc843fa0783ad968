//! Config operations: dotted-key lookup, listing, and result types.
//!
//! Provides the logic behind `config get` and `config list`, and the
//! `ConfigResult` enum that callers use to display results.

use std::fmt;

use serde_json::Value;

use crate::error::StoreError;
use crate::types::Document;

/// Result of a config operation. Returned to the caller for display.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigResult {
    /// A key's current value.
    KeyValue { key: String, value: String },
    /// Confirmation that a value was persisted.
    ValueSet { key: String, value: String },
    /// All configuration key-value pairs, flattened.
    Listing { entries: Vec<(String, String)> },
}

impl fmt::Display for ConfigResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigResult::KeyValue { key, value } => write!(f, "{key} = {value}"),
            ConfigResult::ValueSet { key, value } => write!(f, "Set {key} = {value}"),
            ConfigResult::Listing { entries } => {
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                Ok(())
            }
        }
    }
}

/// Navigate a document by dotted key path (e.g. `"database.host"`).
///
/// Returns `None` as soon as a segment is missing or the value reached so
/// far is not an object.
pub fn document_get<'a>(doc: &'a Document, dotted_key: &str) -> Option<&'a Value> {
    let (path, leaf) = match dotted_key.rsplit_once('.') {
        Some((p, l)) => (Some(p), l),
        None => (None, dotted_key),
    };

    let map = match path {
        Some(path) => {
            let mut current = doc;
            for segment in path.split('.') {
                current = current.get(segment)?.as_object()?;
            }
            current
        }
        None => doc,
    };

    map.get(leaf)
}

/// Look up a key for `config get`.
pub fn get_value(doc: &Document, key: &str) -> Result<ConfigResult, StoreError> {
    let value = document_get(doc, key).ok_or_else(|| StoreError::KeyNotFound(key.into()))?;

    Ok(ConfigResult::KeyValue {
        key: key.into(),
        value: format_value(value),
    })
}

/// List all values as flattened dotted key-value pairs.
pub fn list_values(doc: &Document) -> ConfigResult {
    let entries = crate::flatten::flatten(doc)
        .into_iter()
        .map(|(key, value)| (key, format_value(&value)))
        .collect();

    ConfigResult::Listing { entries }
}

/// Format a JSON value for display. Strings print bare, everything else as
/// compact JSON.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
