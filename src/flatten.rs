//! Flatten a document into dotted key-value pairs.

use serde_json::Value;

use crate::types::Document;

/// Flatten `doc` into `(dotted_key, leaf)` pairs in document order.
///
/// Non-empty objects are recursed into, building dotted key paths:
/// `{"database": {"host": "localhost"}}` → `[("database.host", "localhost")]`.
/// Scalars, arrays, null, and empty objects are emitted as leaves.
pub fn flatten(doc: &Document) -> Vec<(String, Value)> {
    let mut out = Vec::new();
    flatten_into(doc, "", &mut out);
    out
}

fn flatten_into(map: &Document, prefix: &str, out: &mut Vec<(String, Value)>) {
    for (key, value) in map {
        let path = dotted(prefix, key);
        match value {
            Value::Object(inner) if !inner.is_empty() => flatten_into(inner, &path, out),
            leaf => out.push((path, leaf.clone())),
        }
    }
}

fn dotted(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults::default_document;
    use crate::fixtures::test::nested_document;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            _ => panic!("fixture must be an object"),
        }
    }

    #[test]
    fn flat_document() {
        let pairs = flatten(&doc(json!({"host": "0.0.0.0", "port": 3000})));
        assert_eq!(
            pairs,
            vec![
                ("host".into(), json!("0.0.0.0")),
                ("port".into(), json!(3000)),
            ]
        );
    }

    #[test]
    fn nested_object() {
        let pairs = flatten(&nested_document());
        assert_eq!(pairs, vec![("a.b".into(), json!(1))]);
    }

    #[test]
    fn deeply_nested() {
        let pairs = flatten(&doc(json!({"a": {"b": {"c": {"val": 42}}}})));
        assert_eq!(pairs, vec![("a.b.c.val".into(), json!(42))]);
    }

    #[test]
    fn arrays_and_null_are_leaves() {
        let pairs = flatten(&doc(json!({"tags": ["x", "y"], "unset": null})));
        assert_eq!(
            pairs,
            vec![
                ("tags".into(), json!(["x", "y"])),
                ("unset".into(), Value::Null),
            ]
        );
    }

    #[test]
    fn empty_object_is_a_leaf() {
        let pairs = flatten(&doc(json!({"extra": {}})));
        assert_eq!(pairs, vec![("extra".into(), json!({}))]);
    }

    #[test]
    fn empty_document() {
        assert!(flatten(&Document::new()).is_empty());
    }

    #[test]
    fn default_document_in_order() {
        let keys: Vec<String> = flatten(&default_document())
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys.len(), 13);
        assert_eq!(keys[0], "app_name");
        assert_eq!(keys[5], "features.enable_caching");
        assert_eq!(keys[12], "database.name");
    }
}
