//! The structured output document a compiled parser produces.
//!
//! Modeled directly as a `serde_json::Value` tree rather than a hand-rolled
//! JSON type: the output is always "a JSON document", so leaning on
//! `serde_json` for document modeling is the idiomatic choice here.

use serde_json::{Map, Value};

/// A parsed document, or the "no contribution" marker (`Value::Null`) a
/// discard field or bare literal produces.
#[derive(Debug, Clone, PartialEq)]
pub struct Document(Value);

impl Document {
    pub fn empty() -> Self {
        Document(Value::Null)
    }

    pub fn from_value(value: Value) -> Self {
        Document(value)
    }

    /// A document with exactly one leaf, written at the dotted JSON path
    /// `path` (e.g. `"client.ip"` becomes `{"client": {"ip": value}}`).
    pub fn singleton(path: &str, value: Value) -> Self {
        let mut root = Map::new();
        set_dotted_path(&mut root, path, value);
        Document(Value::Object(root))
    }

    pub fn is_object(&self) -> bool {
        self.0.is_object()
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Non-recursive merge: when both sides are objects,
    /// `other`'s top-level keys replace `self`'s on conflict (no deep
    /// merge); when only one side is an object, the non-object side is
    /// dropped; when neither is an object, the result is the empty
    /// document. Order of composition never matters for fields with
    /// distinct top-level names — only the conflict policy does.
    pub fn merge(self, other: Document) -> Document {
        match (self.0, other.0) {
            (Value::Object(mut a), Value::Object(b)) => {
                for (k, v) in b {
                    a.insert(k, v);
                }
                Document(Value::Object(a))
            }
            (a @ Value::Object(_), _) => Document(a),
            (_, b @ Value::Object(_)) => Document(b),
            _ => Document::empty(),
        }
    }
}

fn set_dotted_path(root: &mut Map<String, Value>, path: &str, value: Value) {
    let mut segments = path.split('.').peekable();
    let mut current = root;
    loop {
        let segment = segments.next().expect("dotted path must have at least one segment");
        if segments.peek().is_none() {
            current.insert(segment.to_string(), value);
            return;
        }
        let entry = current.entry(segment.to_string()).or_insert_with(|| Value::Object(Map::new()));
        if !entry.is_object() {
            *entry = Value::Object(Map::new());
        }
        current = entry.as_object_mut().expect("just ensured object");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn singleton_builds_nested_path() {
        let doc = Document::singleton("client.ip", json!("10.0.0.1"));
        assert_eq!(doc.into_value(), json!({"client": {"ip": "10.0.0.1"}}));
    }

    #[test]
    fn singleton_flat_path() {
        let doc = Document::singleton("count", json!(42));
        assert_eq!(doc.into_value(), json!({"count": 42}));
    }

    #[test]
    fn merge_is_order_independent_for_distinct_keys() {
        let a = Document::singleton("client.ip", json!("10.0.0.1"));
        let b = Document::singleton("user.name", json!("alice"));
        let merged_ab = a.clone().merge(b.clone());
        let merged_ba = b.merge(a);
        assert_eq!(merged_ab.into_value(), merged_ba.into_value());
    }

    #[test]
    fn merge_collision_replaces_top_level_key_without_deep_merge() {
        let a = Document::singleton("http.request.method", json!("GET"));
        let b = Document::singleton("http.response.status_code", json!(200));
        let merged = a.merge(b);
        // Non-recursive: "http" is entirely replaced by the second operand.
        assert_eq!(merged.into_value(), json!({"http": {"response": {"status_code": 200}}}));
    }

    #[test]
    fn merge_drops_non_object_sides() {
        let object = Document::singleton("count", json!(1));
        let merged = Document::empty().merge(object.clone());
        assert_eq!(merged.into_value(), object.into_value());
    }

    #[test]
    fn merge_of_two_non_objects_is_empty() {
        let merged = Document::empty().merge(Document::empty());
        assert!(merged.into_value().is_null());
    }
}
